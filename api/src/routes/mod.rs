//! Route handlers
//!
//! - `access` - Sharing, redeeming and revoking one-time access codes
//! - `patients` - Patient profile lookup
//! - `records` - Medical history, uploads and the access log
//! - `documents` - Document categorization
//! - `health` - Liveness check

pub mod access;
pub mod documents;
pub mod health;
pub mod patients;
pub mod records;
