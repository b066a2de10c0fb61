//! Document categorization seam.
//!
//! Implementations extract a category, the issuing doctor, the issue date
//! and the facility from a document's text. Extraction is best effort and
//! never fails; unknown fields are `None`.

use async_trait::async_trait;

use crate::domain::value_objects::DocumentCategorization;

/// Extracts metadata from the text of a medical document
#[async_trait]
pub trait DocumentCategorizer: Send + Sync {
    /// Categorize `document_text`. Empty input yields an all-unknown result.
    async fn categorize(&self, document_text: &str) -> DocumentCategorization;
}
