//! Keyword and pattern based document categorizer.
//!
//! The category is the document type whose keywords occur most often.
//! Doctor, issue date and facility are taken from the first match of their
//! patterns. Anything not found is left unknown.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use mp_core::domain::entities::medical_record::DocumentType;
use mp_core::domain::value_objects::DocumentCategorization;
use mp_core::services::DocumentCategorizer;

/// Keywords per document type. Earlier rows win ties.
const CATEGORY_KEYWORDS: &[(DocumentType, &str)] = &[
    (
        DocumentType::LabReport,
        r"lab report|laboratory|test results?|blood test|hemoglobin|glucose|cholesterol|specimen|reference range|cbc",
    ),
    (
        DocumentType::Prescription,
        r"prescription|rx|dosage|tablets?|capsules?|refills?|dispense|take \d+",
    ),
    (
        DocumentType::Scan,
        r"scan|x-ray|xray|mri|ct|ultrasound|radiology|radiograph",
    ),
    (
        DocumentType::Vaccination,
        r"vaccinations?|vaccine|immuni[sz]ation|booster",
    ),
    (
        DocumentType::Invoice,
        r"invoice|amount due|total due|billing|balance|receipt",
    ),
    (
        DocumentType::Note,
        r"clinical note|progress note|consultation|follow-up|notes?",
    ),
];

static CATEGORY_PATTERNS: Lazy<Vec<(DocumentType, Regex)>> = Lazy::new(|| {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(doc_type, words)| {
            let pattern = format!(r"(?i)\b(?:{})\b", words);
            let regex = Regex::new(&pattern).expect("category keyword regex is valid");
            (*doc_type, regex)
        })
        .collect()
});

static DOCTOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Dr\.?|Doctor)[ \t]+([A-Z][A-Za-z'-]+(?:[ \t]+[A-Z][A-Za-z'-]+)?)")
        .expect("doctor regex is valid")
});

static ISO_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").expect("ISO date regex is valid"));

static NUMERIC_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,2}[/.]\d{1,2}[/.]\d{2,4}\b").expect("numeric date regex is valid")
});

static WRITTEN_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?[ \t]+\d{1,2},?[ \t]+\d{4}\b",
    )
    .expect("written date regex is valid")
});

static FACILITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z'&-]*[ \t]+){1,4}(?:Hospital|Clinic|Medical Center|Medical Centre|Medical|Health Center|Health Centre|Health|Infirmary|Imaging|Laboratories|Labs)\b",
    )
    .expect("facility regex is valid")
});

/// Words that start a sentence rather than a facility name
const FACILITY_NOISE: &[&str] = &["At", "From", "Visited", "The", "Issued", "By"];

/// Categorizer working purely on keywords and regular expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCategorizer;

impl KeywordCategorizer {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous form of [`DocumentCategorizer::categorize`]
    pub fn extract(&self, document_text: &str) -> DocumentCategorization {
        if document_text.trim().is_empty() {
            return DocumentCategorization::unknown();
        }

        DocumentCategorization::from_raw(
            detect_category(document_text).map(|t| t.label()).unwrap_or_default(),
            detect_doctor(document_text).unwrap_or_default(),
            detect_issue_date(document_text).unwrap_or_default(),
            detect_facility(document_text).unwrap_or_default(),
        )
    }
}

#[async_trait]
impl DocumentCategorizer for KeywordCategorizer {
    async fn categorize(&self, document_text: &str) -> DocumentCategorization {
        let result = self.extract(document_text);
        debug!(
            category = result.category.as_deref().unwrap_or("unknown"),
            has_doctor = result.issuing_doctor.is_some(),
            has_date = result.issue_date.is_some(),
            has_facility = result.facility_name.is_some(),
            "Document categorized"
        );
        result
    }
}

fn detect_category(text: &str) -> Option<DocumentType> {
    let mut best: Option<(DocumentType, usize)> = None;
    for (doc_type, regex) in CATEGORY_PATTERNS.iter() {
        let hits = regex.find_iter(text).count();
        if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
            best = Some((*doc_type, hits));
        }
    }
    best.map(|(doc_type, _)| doc_type)
}

fn detect_doctor(text: &str) -> Option<String> {
    DOCTOR_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|name| format!("Dr. {}", name.as_str()))
}

fn detect_issue_date(text: &str) -> Option<String> {
    [&*ISO_DATE_REGEX, &*NUMERIC_DATE_REGEX, &*WRITTEN_DATE_REGEX]
        .iter()
        .filter_map(|regex| regex.find(text))
        .min_by_key(|m| m.start())
        .map(|m| m.as_str().to_string())
}

fn detect_facility(text: &str) -> Option<String> {
    let found = FACILITY_REGEX.find(text)?;
    let mut words: Vec<&str> = found.as_str().split_whitespace().collect();
    while words.len() > 2 && FACILITY_NOISE.contains(&words[0]) {
        words.remove(0);
    }
    Some(words.join(" "))
}
