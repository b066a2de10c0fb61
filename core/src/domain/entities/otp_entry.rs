//! Pending one-time access code held by the broker.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;

use crate::domain::value_objects::SixDigitCode;

/// Default lifetime of an access code (5 minutes)
pub const DEFAULT_CODE_TTL_SECONDS: i64 = 300;

/// A live or expired access code for one identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEntry {
    /// Identity (patient username) the code is scoped to
    pub identity: String,

    /// The issued code
    pub code: SixDigitCode,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// Last instant at which the code is still accepted
    pub expires_at: DateTime<Utc>,

    /// Mismatched verifications seen so far
    pub failed_attempts: u32,
}

impl OtpEntry {
    /// Issues a fresh random code for `identity` valid for `ttl` from `now`
    pub fn issue(identity: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self::with_code(identity, SixDigitCode::generate(), now, ttl)
    }

    /// Builds an entry around a known code
    pub fn with_code(
        identity: impl Into<String>,
        code: SixDigitCode,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            identity: identity.into(),
            code,
            issued_at: now,
            expires_at: now
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            failed_attempts: 0,
        }
    }

    /// A code is live up to and including its expiry instant
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now <= self.expires_at
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_live_at(now)
    }

    /// Exact string comparison in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        let stored = self.code.as_str();
        stored.len() == candidate.len() && constant_time_eq(stored.as_bytes(), candidate.as_bytes())
    }

    /// Time left before expiry, or zero once expired
    pub fn time_until_expiration(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
