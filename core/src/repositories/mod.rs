//! Collaborator traits the services depend on.

pub mod access_log;
pub mod patient;
pub mod record;

pub use access_log::AccessLogRepository;
pub use patient::PatientDirectory;
pub use record::RecordStore;

#[cfg(test)]
pub use access_log::MockAccessLogRepository;
#[cfg(test)]
pub use patient::{demo_patient, MockPatientDirectory};
#[cfg(test)]
pub use record::MockRecordStore;
