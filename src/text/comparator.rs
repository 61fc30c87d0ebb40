use crate::text::splitter::Splitter;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub unique_a: Vec<String>,
    pub unique_b: Vec<String>,
    pub in_both: Vec<String>,
}

pub struct ListComparator;

impl ListComparator {
    /// Compare two newline-delimited lists. Items keep their trimmed spelling
    /// and their list order; `in_both` follows list A.
    pub fn compare(list_a: &str, list_b: &str, case_sensitive: bool) -> Comparison {
        let lines_a = Splitter::lines(list_a);
        let lines_b = Splitter::lines(list_b);

        let key = |item: &String| -> String {
            if case_sensitive {
                item.clone()
            } else {
                item.to_lowercase()
            }
        };

        let set_a: HashSet<String> = lines_a.iter().map(key).collect();
        let set_b: HashSet<String> = lines_b.iter().map(key).collect();

        let (in_both, unique_a): (Vec<String>, Vec<String>) = lines_a
            .into_iter()
            .partition(|item| set_b.contains(&key(item)));
        let unique_b = lines_b
            .into_iter()
            .filter(|item| !set_a.contains(&key(item)))
            .collect();

        Comparison {
            unique_a,
            unique_b,
            in_both,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_by_default() {
        let result = ListComparator::compare("Apple\nbanana\ncherry", "apple\nDate\n", false);
        assert_eq!(result.unique_a, vec!["banana", "cherry"]);
        assert_eq!(result.unique_b, vec!["Date"]);
        assert_eq!(result.in_both, vec!["Apple"]);
    }

    #[test]
    fn test_case_sensitive() {
        let result = ListComparator::compare("Apple\nbanana", "apple\nbanana", true);
        assert_eq!(result.unique_a, vec!["Apple"]);
        assert_eq!(result.unique_b, vec!["apple"]);
        assert_eq!(result.in_both, vec!["banana"]);
    }

    #[test]
    fn test_duplicates_in_a_are_kept() {
        let result = ListComparator::compare("x\nx\ny", "x", true);
        assert_eq!(result.in_both, vec!["x", "x"]);
        assert_eq!(result.unique_a, vec!["y"]);
        assert!(result.unique_b.is_empty());
    }
}
