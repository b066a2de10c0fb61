use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategorizeDocumentRequest {
    /// Plain text of the document; empty text yields an all-unknown result
    #[validate(length(max = 100000))]
    pub document_text: String,
}
