//! Medical record route handlers

pub mod access_log;
pub mod history;
pub mod upload;

pub use access_log::access_log;
pub use history::history;
pub use upload::upload;
