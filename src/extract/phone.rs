use crate::extract::report::ExtractionReport;
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

static PHONE: OnceLock<Regex> = OnceLock::new();

/// Optional country code, optional parentheses around the area code, and
/// `-`, `.` or whitespace separators around a 3-3-4 grouping of ASCII digits.
pub fn phone_pattern() -> &'static Regex {
    PHONE.get_or_init(|| {
        Regex::new(r"(?:\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
            .unwrap()
    })
}

/// Keep only digits and `+`
pub fn canonical_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect()
}

pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn extract(text: &str) -> ExtractionReport {
        let report = ExtractionReport::from_matches(
            phone_pattern().find_iter(text).map(|m| m.as_str()),
            canonical_phone,
        );
        info!(
            target: "extract",
            "Found {} unique phone number(s) in {} match(es)",
            report.unique_count(),
            report.total_count()
        );
        report
    }
}
