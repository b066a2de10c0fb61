//! Access sharing between patients and hospital staff

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::AccessSharingService;
pub use types::AccessGrant;
