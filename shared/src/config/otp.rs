//! One-time access code configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Longest accepted code lifetime (one day)
pub const MAX_CODE_TTL_SECONDS: i64 = 86_400;

/// Configuration for the one-time access code broker and its sweeper
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a freshly issued code stays valid (1..=[`MAX_CODE_TTL_SECONDS`])
    #[serde(default = "default_code_ttl_seconds")]
    pub code_ttl_seconds: i64,

    /// Upper bound on pending codes held at once (`None` = unbounded)
    #[serde(default)]
    pub max_entries: Option<usize>,

    /// Mismatches tolerated before a code is burned (`None` = unlimited)
    #[serde(default)]
    pub max_failed_attempts: Option<u32>,

    /// Run the background sweep of expired codes
    #[serde(default = "default_sweep_enabled")]
    pub sweep_enabled: bool,

    /// Seconds between two sweeps
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl_seconds(),
            max_entries: None,
            max_failed_attempts: None,
            sweep_enabled: default_sweep_enabled(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl OtpConfig {
    /// Create from environment variables, falling back to the defaults
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default())
    }

    /// Override `base` with the `OTP_*` environment variables
    pub fn from_env_or(base: Self) -> Self {
        Self::from_lookup(base, |key| env::var(key).ok())
    }

    /// Override `base` with values produced by `lookup`.
    ///
    /// Unparseable values keep the base value. An empty string or `none`
    /// clears the optional limits.
    pub fn from_lookup<F>(base: Self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let code_ttl_seconds = lookup("OTP_CODE_TTL_SECONDS")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|ttl| (1..=MAX_CODE_TTL_SECONDS).contains(ttl))
            .unwrap_or(base.code_ttl_seconds);
        let max_entries = match lookup("OTP_MAX_ENTRIES") {
            Some(v) => parse_limit(&v).unwrap_or(base.max_entries),
            None => base.max_entries,
        };
        let max_failed_attempts = match lookup("OTP_MAX_FAILED_ATTEMPTS") {
            Some(v) => parse_limit(&v).unwrap_or(base.max_failed_attempts),
            None => base.max_failed_attempts,
        };
        let sweep_enabled = lookup("OTP_SWEEP_ENABLED")
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(base.sweep_enabled);
        let sweep_interval_seconds = lookup("OTP_SWEEP_INTERVAL_SECONDS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(base.sweep_interval_seconds);

        Self {
            code_ttl_seconds,
            max_entries,
            max_failed_attempts,
            sweep_enabled,
            sweep_interval_seconds,
        }
    }
}

/// `Some(None)` clears the limit, `Some(Some(n))` sets it, `None` is unparseable.
fn parse_limit<T: std::str::FromStr + PartialEq + Default>(value: &str) -> Option<Option<T>> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    match value.parse::<T>() {
        Ok(n) if n != T::default() => Some(Some(n)),
        _ => None,
    }
}

fn default_code_ttl_seconds() -> i64 {
    300 // 5 minutes
}

fn default_sweep_enabled() -> bool {
    true
}

fn default_sweep_interval_seconds() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_otp_config_default() {
        let config = OtpConfig::default();
        assert_eq!(config.code_ttl_seconds, 300);
        assert_eq!(config.max_entries, None);
        assert_eq!(config.max_failed_attempts, None);
        assert!(config.sweep_enabled);
        assert_eq!(config.sweep_interval_seconds, 60);
    }

    #[test]
    fn test_otp_config_overrides() {
        let config = OtpConfig::from_lookup(
            OtpConfig::default(),
            lookup_from(&[
                ("OTP_CODE_TTL_SECONDS", "120"),
                ("OTP_MAX_ENTRIES", "500"),
                ("OTP_MAX_FAILED_ATTEMPTS", "5"),
                ("OTP_SWEEP_ENABLED", "false"),
                ("OTP_SWEEP_INTERVAL_SECONDS", "30"),
            ]),
        );
        assert_eq!(config.code_ttl_seconds, 120);
        assert_eq!(config.max_entries, Some(500));
        assert_eq!(config.max_failed_attempts, Some(5));
        assert!(!config.sweep_enabled);
        assert_eq!(config.sweep_interval_seconds, 30);
    }

    #[test]
    fn test_otp_config_invalid_values_keep_base() {
        let base = OtpConfig {
            max_entries: Some(10),
            ..OtpConfig::default()
        };
        let config = OtpConfig::from_lookup(
            base,
            lookup_from(&[
                ("OTP_CODE_TTL_SECONDS", "-5"),
                ("OTP_MAX_ENTRIES", "lots"),
                ("OTP_SWEEP_INTERVAL_SECONDS", "0"),
            ]),
        );
        assert_eq!(config.code_ttl_seconds, 300);
        assert_eq!(config.max_entries, Some(10));
        assert_eq!(config.sweep_interval_seconds, 60);
    }

    #[test]
    fn test_otp_config_out_of_range_ttl_keeps_base() {
        for ttl in ["9223372036854775807", "10000000000000", "86401"] {
            let config = OtpConfig::from_lookup(
                OtpConfig::default(),
                lookup_from(&[("OTP_CODE_TTL_SECONDS", ttl)]),
            );
            assert_eq!(config.code_ttl_seconds, 300, "ttl {ttl}");
        }

        let config = OtpConfig::from_lookup(
            OtpConfig::default(),
            lookup_from(&[("OTP_CODE_TTL_SECONDS", "86400")]),
        );
        assert_eq!(config.code_ttl_seconds, MAX_CODE_TTL_SECONDS);
    }

    #[test]
    fn test_otp_config_none_clears_limit() {
        let base = OtpConfig {
            max_entries: Some(10),
            max_failed_attempts: Some(3),
            ..OtpConfig::default()
        };
        let config = OtpConfig::from_lookup(
            base,
            lookup_from(&[("OTP_MAX_ENTRIES", "none"), ("OTP_MAX_FAILED_ATTEMPTS", "")]),
        );
        assert_eq!(config.max_entries, None);
        assert_eq!(config.max_failed_attempts, None);
    }
}
