//! Domain entities representing core business objects.

pub mod access_log;
pub mod medical_record;
pub mod otp_entry;
pub mod patient;

// Re-export commonly used types
pub use access_log::{AccessAction, AccessLog, Accessor, AccessorType};
pub use medical_record::{DocumentType, MedicalRecord, NewRecord, Uploader};
pub use otp_entry::{OtpEntry, DEFAULT_CODE_TTL_SECONDS};
pub use patient::PatientProfile;
