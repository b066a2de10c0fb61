//! Background sweep of expired access codes.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::broker::OtpAccessBroker;
use super::config::OtpSweeperConfig;

/// Periodically removes expired codes from the broker
pub struct OtpSweeper {
    broker: Arc<OtpAccessBroker>,
    config: OtpSweeperConfig,
}

impl OtpSweeper {
    pub fn new(broker: Arc<OtpAccessBroker>, config: OtpSweeperConfig) -> Self {
        Self { broker, config }
    }

    /// Run a single sweep, returning the number of codes removed
    pub async fn run_sweep(&self) -> usize {
        let removed = self.broker.sweep_expired().await;
        if removed > 0 {
            info!(event = "otp_sweep", removed, "Removed expired access codes");
        } else {
            debug!(event = "otp_sweep", removed, "No expired access codes");
        }
        removed
    }

    /// Start the sweeper as a background task
    ///
    /// Returns `None` when sweeping is disabled; expired codes are then only
    /// removed lazily.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Access code sweeper is disabled");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        Some(tokio::spawn(async move {
            info!(
                "Access code sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;
                self.run_sweep().await;
            }
        }))
    }
}
