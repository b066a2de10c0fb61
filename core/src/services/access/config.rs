//! Configuration for the access code broker and its sweeper

use chrono::Duration;
use mp_shared::config::otp::MAX_CODE_TTL_SECONDS;
use mp_shared::OtpConfig;

use crate::domain::entities::otp_entry::DEFAULT_CODE_TTL_SECONDS;

/// Configuration for the access code broker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpBrokerConfig {
    /// Lifetime of an issued code
    pub code_ttl: Duration,
    /// Upper bound on pending codes (`None` = unbounded)
    pub max_entries: Option<usize>,
    /// Mismatches after which a code is burned (`None` = unlimited retries)
    pub max_failed_attempts: Option<u32>,
}

impl Default for OtpBrokerConfig {
    fn default() -> Self {
        Self {
            code_ttl: Duration::seconds(DEFAULT_CODE_TTL_SECONDS),
            max_entries: None,
            max_failed_attempts: None,
        }
    }
}

impl From<&OtpConfig> for OtpBrokerConfig {
    fn from(config: &OtpConfig) -> Self {
        // Deserialized configs skip the env-var range check
        let ttl_seconds = if (1..=MAX_CODE_TTL_SECONDS).contains(&config.code_ttl_seconds) {
            config.code_ttl_seconds
        } else {
            DEFAULT_CODE_TTL_SECONDS
        };
        Self {
            code_ttl: Duration::seconds(ttl_seconds),
            max_entries: config.max_entries.filter(|max| *max > 0),
            max_failed_attempts: config.max_failed_attempts.filter(|max| *max > 0),
        }
    }
}

/// Configuration for the background sweep of expired codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSweeperConfig {
    /// How often to sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether the background task runs at all
    pub enabled: bool,
}

impl Default for OtpSweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            enabled: true,
        }
    }
}

impl From<&OtpConfig> for OtpSweeperConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            interval_seconds: config.sweep_interval_seconds.max(1),
            enabled: config.sweep_enabled,
        }
    }
}
