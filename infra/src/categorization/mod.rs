//! Document categorizers.

mod keyword;


pub use keyword::KeywordCategorizer;
