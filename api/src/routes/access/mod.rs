//! One-time access code route handlers
//!
//! - `share` - Patient issues a code for hospital staff
//! - `verify` - Staff redeem the code and receive the patient profile
//! - `revoke` - Patient withdraws a pending code

pub mod revoke;
pub mod share;
pub mod verify;

pub use revoke::revoke;
pub use share::share;
pub use verify::verify;
