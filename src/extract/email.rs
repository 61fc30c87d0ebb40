use crate::extract::report::ExtractionReport;
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;

static EMAIL: OnceLock<Regex> = OnceLock::new();

/// ASCII-only: word boundaries and letters ignore accented characters, so
/// `éa@x.com` yields `a@x.com`.
pub fn email_pattern() -> &'static Regex {
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i-u)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b").unwrap()
    })
}

pub struct EmailExtractor;

impl EmailExtractor {
    /// Every email-shaped substring, lower-cased and counted.
    ///
    /// No matches yields an empty report; callers show "no emails found".
    pub fn extract(text: &str) -> ExtractionReport {
        let report = ExtractionReport::from_matches(
            email_pattern().find_iter(text).map(|m| m.as_str()),
            str::to_lowercase,
        );
        info!(
            target: "extract",
            "Found {} unique email(s) in {} match(es)",
            report.unique_count(),
            report.total_count()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::report::ExtractedItem;

    #[test]
    fn test_case_folded_and_counted() {
        let report = EmailExtractor::extract("a@B.com\nA@b.com\nx@y.com");
        assert_eq!(
            report.items,
            vec![
                ExtractedItem { value: "a@b.com".into(), count: 2 },
                ExtractedItem { value: "x@y.com".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_embedded_in_prose_and_csv() {
        let text = "Contact: Jane <jane.doe+news@Example.co.uk>, \"bob_s@mail.example.org\",bad@nodomain, x@y.c";
        let report = EmailExtractor::extract(text);
        assert_eq!(
            report.output_text(),
            "bob_s@mail.example.org\njane.doe+news@example.co.uk"
        );
    }

    #[test]
    fn test_accented_prefix_is_a_boundary() {
        let report = EmailExtractor::extract("éa@x.com and Ωbob@Mail.org");
        assert_eq!(report.output_text(), "a@x.com\nbob@mail.org");
    }

    #[test]
    fn test_no_matches() {
        assert!(EmailExtractor::extract("nothing to see here").is_empty());
    }

    #[test]
    fn test_counts_sum_to_raw_matches() {
        let text = "one@a.io two@a.io ONE@A.IO three@b.net one@a.io";
        let raw = email_pattern().find_iter(text).count();
        let report = EmailExtractor::extract(text);
        assert_eq!(report.total_count(), raw);
        for item in &report.items {
            assert_eq!(item.value, item.value.to_lowercase());
        }
        let mut values: Vec<_> = report.items.iter().map(|i| &i.value).collect();
        values.dedup();
        assert_eq!(values.len(), report.unique_count());
    }
}
