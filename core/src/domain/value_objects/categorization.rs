//! Result of extracting metadata from a medical document.

use serde::{Deserialize, Serialize};

/// Best-effort metadata extracted from a document's text.
///
/// Every field is advisory. `None` means "unknown", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCategorization {
    /// Kind of document (e.g. "Lab Report", "Prescription")
    pub category: Option<String>,

    /// Doctor named on the document
    pub issuing_doctor: Option<String>,

    /// Issue date as written on the document
    pub issue_date: Option<String>,

    /// Hospital or clinic that issued the document
    pub facility_name: Option<String>,
}

impl DocumentCategorization {
    /// Build from raw extractor output, treating blank strings as unknown
    pub fn from_raw(
        category: impl Into<String>,
        issuing_doctor: impl Into<String>,
        issue_date: impl Into<String>,
        facility_name: impl Into<String>,
    ) -> Self {
        Self {
            category: non_blank(category.into()),
            issuing_doctor: non_blank(issuing_doctor.into()),
            issue_date: non_blank(issue_date.into()),
            facility_name: non_blank(facility_name.into()),
        }
    }

    /// Nothing could be extracted
    pub fn unknown() -> Self {
        Self::default()
    }

    /// True when no field was extracted
    pub fn is_unknown(&self) -> bool {
        self.category.is_none()
            && self.issuing_doctor.is_none()
            && self.issue_date.is_none()
            && self.facility_name.is_none()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
