//! Types returned by the access sharing service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SixDigitCode;

/// A freshly issued access code, ready to show as text or QR code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessGrant {
    /// Canonical username the code is bound to
    pub username: String,
    /// Code the patient hands to hospital staff
    pub code: SixDigitCode,
    /// Last instant the code is accepted
    pub expires_at: DateTime<Utc>,
    /// Seconds left until `expires_at`
    pub expires_in_seconds: i64,
    /// Payload encoded in the QR code shown to staff
    pub qr_payload: String,
}
