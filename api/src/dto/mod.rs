pub mod access;
pub mod documents;
pub mod records;

pub use access::*;
pub use documents::*;
pub use records::*;
