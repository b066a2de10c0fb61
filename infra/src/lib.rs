//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits defined in `mp_core`:
//!
//! - **Memory**: in-memory patient directory, record store and access log,
//!   optionally seeded with demo data
//! - **Categorization**: keyword and pattern based document categorizer

pub mod categorization;
pub mod memory;

pub use categorization::KeywordCategorizer;
pub use memory::{
    InMemoryAccessLogRepository, InMemoryPatientDirectory, InMemoryRecordStore, InMemoryStores,
    JANE_SMITH_ID, JOHN_DOE_ID,
};
