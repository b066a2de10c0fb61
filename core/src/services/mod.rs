//! Business services containing domain logic and use cases.

pub mod access;
pub mod audit;
pub mod categorization;
pub mod records;
pub mod sharing;

// Re-export commonly used types
pub use access::{OtpAccessBroker, OtpBrokerConfig, OtpSweeper, OtpSweeperConfig};
pub use audit::AccessAuditService;
pub use categorization::DocumentCategorizer;
pub use records::{RecordService, MAX_ACCESS_LOG_LIMIT};
pub use sharing::{AccessGrant, AccessSharingService};
