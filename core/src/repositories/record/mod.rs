//! Medical record store module.

mod r#trait;
pub use r#trait::RecordStore;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockRecordStore;
