//! In-memory broker for one-time access codes.
//!
//! Holds at most one pending code per identity. Expired codes are dropped
//! lazily when their identity is next verified, by [`OtpAccessBroker::sweep_expired`],
//! or when room is needed under a `max_entries` bound.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mp_shared::validation::validators;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::domain::entities::otp_entry::OtpEntry;
use crate::domain::value_objects::SixDigitCode;
use crate::errors::{DomainResult, ValidationError};

use super::config::OtpBrokerConfig;

/// Issues and verifies six digit access codes keyed by identity
pub struct OtpAccessBroker {
    entries: Mutex<HashMap<String, OtpEntry>>,
    config: OtpBrokerConfig,
    clock: Arc<dyn Clock>,
}

impl OtpAccessBroker {
    pub fn new(config: OtpBrokerConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
            clock,
        }
    }

    pub fn with_system_clock(config: OtpBrokerConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    pub fn config(&self) -> &OtpBrokerConfig {
        &self.config
    }

    /// Current time as seen by the broker
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Issue a fresh code for `identity`, replacing any pending one
    ///
    /// # Returns
    /// * `Ok(SixDigitCode)` - The new code
    /// * `Err(DomainError)` - `identity` is empty
    pub async fn issue(&self, identity: &str) -> DomainResult<SixDigitCode> {
        Ok(self.issue_entry(identity).await?.code)
    }

    /// Like [`issue`](Self::issue) but returns the whole entry, expiry included
    pub async fn issue_entry(&self, identity: &str) -> DomainResult<OtpEntry> {
        if !validators::not_empty(identity) {
            return Err(ValidationError::RequiredField {
                field: "identity".to_string(),
            }
            .into());
        }

        let entry = OtpEntry::issue(identity, self.clock.now(), self.config.code_ttl);
        self.store(entry.clone()).await;
        Ok(entry)
    }

    /// Insert `entry`, overwriting whatever its identity held before
    pub(crate) async fn store(&self, entry: OtpEntry) {
        let now = self.clock.now();
        let mut entries = self.entries.lock().await;

        if let Some(max) = self.config.max_entries {
            if !entries.contains_key(&entry.identity) && entries.len() >= max {
                make_room(&mut entries, now, max);
            }
        }

        let expires_at = entry.expires_at;
        let identity = entry.identity.clone();
        let replaced = entries.insert(identity.clone(), entry).is_some();

        info!(
            event = "otp_issued",
            identity = %identity,
            replaced,
            expires_at = %expires_at,
            "Access code issued"
        );
    }

    /// Check `code` against the pending code of `identity`.
    ///
    /// A match consumes the code. An expired code is removed. A mismatch
    /// leaves the code in place unless the failed-attempt limit is reached.
    pub async fn verify(&self, identity: &str, code: &str) -> bool {
        let now = self.clock.now();
        let mut entries = self.entries.lock().await;

        let Some(entry) = entries.get_mut(identity) else {
            debug!(event = "otp_verify_failed", identity = %identity, reason = "no_entry");
            return false;
        };

        if entry.is_expired_at(now) {
            entries.remove(identity);
            debug!(event = "otp_verify_failed", identity = %identity, reason = "expired");
            return false;
        }

        if entry.matches(code) {
            entries.remove(identity);
            info!(event = "otp_verified", identity = %identity, "Access code accepted");
            return true;
        }

        entry.failed_attempts = entry.failed_attempts.saturating_add(1);
        let attempts = entry.failed_attempts;
        debug!(
            event = "otp_verify_failed",
            identity = %identity,
            reason = "mismatch",
            attempts
        );

        if let Some(max) = self.config.max_failed_attempts {
            if attempts >= max {
                entries.remove(identity);
                warn!(
                    event = "otp_locked_out",
                    identity = %identity,
                    attempts,
                    "Access code discarded after repeated mismatches"
                );
            }
        }

        false
    }

    /// Withdraw the pending code of `identity`. Returns whether one existed.
    pub async fn revoke(&self, identity: &str) -> bool {
        let removed = self.entries.lock().await.remove(identity).is_some();
        if removed {
            info!(event = "otp_revoked", identity = %identity, "Access code revoked");
        }
        removed
    }

    /// Drop every expired entry, returning how many were removed
    pub async fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.lock().await;
        remove_expired(&mut entries, now)
    }

    /// Number of entries held, expired ones included
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

fn remove_expired(entries: &mut HashMap<String, OtpEntry>, now: DateTime<Utc>) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| entry.is_live_at(now));
    before - entries.len()
}

/// Free at least one slot below `max`: expired entries go first, then the
/// entries closest to expiry.
fn make_room(entries: &mut HashMap<String, OtpEntry>, now: DateTime<Utc>, max: usize) {
    let swept = remove_expired(entries, now);
    let mut evicted = 0usize;

    while entries.len() >= max {
        let oldest = entries
            .values()
            .min_by_key(|entry| entry.expires_at)
            .map(|entry| entry.identity.clone());
        match oldest {
            Some(identity) => {
                entries.remove(&identity);
                evicted += 1;
            }
            None => break,
        }
    }

    if swept > 0 || evicted > 0 {
        warn!(
            event = "otp_capacity_reached",
            max_entries = max,
            swept,
            evicted,
            "Access code table at capacity"
        );
    }
}
