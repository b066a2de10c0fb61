//! Access log repository module.

mod r#trait;
pub use r#trait::AccessLogRepository;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockAccessLogRepository;
