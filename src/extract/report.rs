use serde::Serialize;
use std::collections::BTreeMap;

/// A canonical match and how many times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedItem {
    pub value: String,
    pub count: usize,
}

/// Unique matches sorted ascending by their canonical value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub items: Vec<ExtractedItem>,
}

impl ExtractionReport {
    /// Canonicalize every raw match and fold them into counts
    pub fn from_matches<'a, I, F>(matches: I, canonicalize: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(&str) -> String,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for raw in matches {
            *counts.entry(canonicalize(raw)).or_insert(0) += 1;
        }
        Self {
            items: counts
                .into_iter()
                .map(|(value, count)| ExtractedItem { value, count })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unique_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_count(&self) -> usize {
        self.items.iter().map(|item| item.count).sum()
    }

    /// The unique values, one per line
    pub fn output_text(&self) -> String {
        self.items
            .iter()
            .map(|item| item.value.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let report = ExtractionReport::from_matches(["B", "a", "b"], str::to_lowercase);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "items": [
                    { "value": "a", "count": 1 },
                    { "value": "b", "count": 2 }
                ]
            })
        );
    }

    #[test]
    fn test_counts_and_order() {
        let report = ExtractionReport::from_matches(["b", "A", "a", "c", "b"], |s| s.to_lowercase());
        assert_eq!(
            report.items,
            vec![
                ExtractedItem { value: "a".into(), count: 2 },
                ExtractedItem { value: "b".into(), count: 2 },
                ExtractedItem { value: "c".into(), count: 1 },
            ]
        );
        assert_eq!(report.unique_count(), 3);
        assert_eq!(report.total_count(), 5);
        assert_eq!(report.output_text(), "a\nb\nc");
    }

    #[test]
    fn test_empty() {
        let report = ExtractionReport::from_matches(std::iter::empty(), str::to_string);
        assert!(report.is_empty());
        assert_eq!(report.total_count(), 0);
        assert_eq!(report.output_text(), "");
    }
}
