//! Medical record service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{RecordService, MAX_ACCESS_LOG_LIMIT};
