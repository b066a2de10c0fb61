//! # MedPortal Core
//!
//! Core business logic and domain layer for the MedPortal backend.
//! This crate contains domain entities, the one-time access code broker,
//! business services, repository interfaces and error types.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
