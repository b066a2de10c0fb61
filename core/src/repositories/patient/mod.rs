//! Patient directory module.

mod r#trait;
pub use r#trait::PatientDirectory;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::{demo_patient, MockPatientDirectory};
