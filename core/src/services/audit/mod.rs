//! Audit service module for recording accesses to patients' records.

mod service;

pub use service::AccessAuditService;

#[cfg(test)]
mod tests;
