use crate::error::{Result, ToolError};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::OnceLock;

static WORD_START: OnceLock<Regex> = OnceLock::new();
static SENTENCE_START: OnceLock<Regex> = OnceLock::new();

// Word characters and boundaries are ASCII only: an accented letter
// starts a new word.
fn word_start() -> &'static Regex {
    WORD_START.get_or_init(|| Regex::new(r"(?-u:\b\w)").unwrap())
}

// Only the very start of the text (no multi-line flag) and the first word
// character after each period.
fn sentence_start() -> &'static Regex {
    SENTENCE_START.get_or_init(|| Regex::new(r"^(?-u:\w)|\.\s*(?-u:\w)").unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
    Sentence,
}

impl FromStr for CaseStyle {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "upper" => Ok(CaseStyle::Upper),
            "lower" => Ok(CaseStyle::Lower),
            "title" => Ok(CaseStyle::Title),
            "sentence" => Ok(CaseStyle::Sentence),
            other => Err(ToolError::validation(format!("unknown case style '{other}'"))),
        }
    }
}

pub struct CaseConverter;

impl CaseConverter {
    pub fn convert(text: &str, style: CaseStyle) -> String {
        match style {
            CaseStyle::Upper => text.to_uppercase(),
            CaseStyle::Lower => text.to_lowercase(),
            CaseStyle::Title => Self::upper_matches(word_start(), &text.to_lowercase()),
            CaseStyle::Sentence => Self::upper_matches(sentence_start(), &text.to_lowercase()),
        }
    }

    fn upper_matches(pattern: &Regex, text: &str) -> String {
        pattern
            .replace_all(text, |caps: &Captures| caps[0].to_uppercase())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(CaseConverter::convert("MiXeD case", CaseStyle::Upper), "MIXED CASE");
        assert_eq!(CaseConverter::convert("MiXeD case", CaseStyle::Lower), "mixed case");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(
            CaseConverter::convert("the QUICK brown-fox", CaseStyle::Title),
            "The Quick Brown-Fox"
        );
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            CaseConverter::convert("HELLO THERE. how are you?  fine.thanks", CaseStyle::Sentence),
            "Hello there. How are you?  fine.Thanks"
        );
    }

    #[test]
    fn test_title_case_with_accents() {
        assert_eq!(
            CaseConverter::convert("ÉCOLE café", CaseStyle::Title),
            "éCole Café"
        );
    }

    #[test]
    fn test_sentence_case_does_not_restart_on_new_lines() {
        assert_eq!(
            CaseConverter::convert("first line\nsecond line", CaseStyle::Sentence),
            "First line\nsecond line"
        );
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("Title".parse::<CaseStyle>().unwrap(), CaseStyle::Title);
        assert!("snake".parse::<CaseStyle>().is_err());
    }
}
