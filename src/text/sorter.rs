use crate::error::{Result, ToolError};
use crate::text::splitter::Splitter;
use rand::Rng;
use regex::Regex;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

static LEADING_FLOAT: OnceLock<Regex> = OnceLock::new();

fn leading_float_pattern() -> &'static Regex {
    LEADING_FLOAT.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
    })
}

/// The five list transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Ascending,
    Descending,
    Numeric,
    Reverse,
    Shuffle,
}

impl FromStr for SortMode {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "az" => Ok(SortMode::Ascending),
            "za" => Ok(SortMode::Descending),
            "num" => Ok(SortMode::Numeric),
            "rev" => Ok(SortMode::Reverse),
            "shuf" => Ok(SortMode::Shuffle),
            other => Err(ToolError::validation(format!(
                "unknown sort mode '{other}' (expected az, za, num, rev or shuf)"
            ))),
        }
    }
}

/// Parse the longest numeric prefix of a line, after leading whitespace.
///
/// `"12px"` is 12, `"  -3.5e2 items"` is -350, `"abc"` has no value.
pub fn leading_float(line: &str) -> Option<f64> {
    let trimmed = line.trim_start();
    let prefix = leading_float_pattern().find(trimmed)?.as_str();
    let value = match prefix.trim_start_matches(['+', '-']) {
        "Infinity" => f64::INFINITY,
        _ => prefix.trim_start_matches('+').parse::<f64>().ok()?,
    };
    if prefix.starts_with('-') && value == f64::INFINITY {
        return Some(f64::NEG_INFINITY);
    }
    Some(value)
}

/// Numeric ordering with a lexicographic fallback.
///
/// Two numeric lines compare by value (ties broken lexicographically), two
/// non-numeric lines compare lexicographically, and numeric lines come
/// before non-numeric ones so the order stays total.
///
/// A mixed pair never compares by text: `"#tag"` and `"(a)"` sort after
/// `"10"` even though `#` and `(` come before digits lexicographically.
fn numeric_order(a: &(Option<f64>, &str), b: &(Option<f64>, &str)) -> Ordering {
    match (a.0, b.0) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.1.cmp(b.1)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.1.cmp(b.1),
    }
}

pub struct ListSorter;

impl ListSorter {
    /// Sort the non-blank lines of `text` and return them newline-joined
    pub fn sort_text<R: Rng + ?Sized>(text: &str, mode: SortMode, rng: &mut R) -> String {
        let lines = Splitter::non_blank_lines(text);
        Self::sort_lines(&lines, mode, rng).join("\n")
    }

    pub fn sort_lines<R: Rng + ?Sized>(lines: &[&str], mode: SortMode, rng: &mut R) -> Vec<String> {
        debug!(target: "sorter", "Sorting {} lines with {:?}", lines.len(), mode);
        let mut sorted: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        match mode {
            SortMode::Ascending => sorted.sort(),
            SortMode::Descending => sorted.sort_by(|a, b| b.cmp(a)),
            SortMode::Numeric => {
                let mut keyed: Vec<(Option<f64>, &str)> =
                    lines.iter().map(|l| (leading_float(l), *l)).collect();
                keyed.sort_by(numeric_order);
                sorted = keyed.into_iter().map(|(_, l)| l.to_string()).collect();
            }
            SortMode::Reverse => sorted.reverse(),
            SortMode::Shuffle => fisher_yates(&mut sorted, rng),
        }
        sorted
    }
}

/// Unbiased in-place shuffle
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("az".parse::<SortMode>().unwrap(), SortMode::Ascending);
        assert_eq!("shuf".parse::<SortMode>().unwrap(), SortMode::Shuffle);
        assert!("sideways".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("12px"), Some(12.0));
        assert_eq!(leading_float("  -3.5e2 items"), Some(-350.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("7."), Some(7.0));
        assert_eq!(leading_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(leading_float("abc"), None);
        assert_eq!(leading_float("-"), None);
    }

    #[test]
    fn test_alphabetical_sorts() {
        let text = "pear\n\napple\n  \nfig";
        assert_eq!(
            ListSorter::sort_text(text, SortMode::Ascending, &mut rng()),
            "apple\nfig\npear"
        );
        assert_eq!(
            ListSorter::sort_text(text, SortMode::Descending, &mut rng()),
            "pear\nfig\napple"
        );
    }

    #[test]
    fn test_numeric_sort_with_text_lines() {
        let text = "10 apples\n9\nbanana\n-1\n2.5\napple";
        assert_eq!(
            ListSorter::sort_text(text, SortMode::Numeric, &mut rng()),
            "-1\n2.5\n9\n10 apples\napple\nbanana"
        );
    }

    #[test]
    fn test_numeric_sort_puts_symbols_after_numbers() {
        let text = "(a)\n10\n#tag\n2";
        assert_eq!(
            ListSorter::sort_text(text, SortMode::Numeric, &mut rng()),
            "2\n10\n#tag\n(a)"
        );
        assert_eq!(leading_float("\u{661}\u{662}"), None);
    }

    #[test]
    fn test_reverse_is_involution() {
        let lines = ["c", "a", "b", "a"];
        let once = ListSorter::sort_lines(&lines, SortMode::Reverse, &mut rng());
        let once_refs: Vec<&str> = once.iter().map(String::as_str).collect();
        let twice = ListSorter::sort_lines(&once_refs, SortMode::Reverse, &mut rng());
        assert_eq!(twice, lines);
    }

    #[test]
    fn test_az_and_za_are_exact_reverses() {
        let lines = ["delta", "Alpha", "charlie", "bravo", "alpha", "delta"];
        let mut az = ListSorter::sort_lines(&lines, SortMode::Ascending, &mut rng());
        let za = ListSorter::sort_lines(&lines, SortMode::Descending, &mut rng());
        az.reverse();
        assert_eq!(az, za);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let lines: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut shuffled = ListSorter::sort_lines(&refs, SortMode::Shuffle, &mut rng());
        assert_eq!(shuffled.len(), lines.len());
        shuffled.sort_by_key(|s| s.parse::<u32>().unwrap());
        assert_eq!(shuffled, lines);
    }

    #[test]
    fn test_shuffle_is_deterministic_for_a_seed() {
        let lines = ["a", "b", "c", "d", "e"];
        let first = ListSorter::sort_lines(&lines, SortMode::Shuffle, &mut rng());
        let second = ListSorter::sort_lines(&lines, SortMode::Shuffle, &mut rng());
        assert_eq!(first, second);
    }
}
