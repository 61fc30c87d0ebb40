use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static WORD: OnceLock<Regex> = OnceLock::new();
static SENTENCE: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_SPLIT: OnceLock<Regex> = OnceLock::new();

/// ASCII words: accented letters split a word.
fn word() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"(?-u:\b\w+\b)").unwrap())
}

fn sentence() -> &'static Regex {
    SENTENCE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]+(\s|$)").unwrap())
}

fn paragraph_split() -> &'static Regex {
    PARAGRAPH_SPLIT.get_or_init(|| Regex::new(r"\n+").unwrap())
}

/// Word, character, sentence and paragraph counts for a block of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextCounts {
    pub words: usize,
    pub chars: usize,
    pub chars_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

impl TextCounts {
    pub fn of(text: &str) -> Self {
        Self {
            words: word().find_iter(text).count(),
            chars: text.chars().count(),
            chars_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            sentences: sentence().find_iter(text).count(),
            paragraphs: paragraph_split()
                .split(text)
                .filter(|p| !p.trim().is_empty())
                .count(),
        }
    }

    /// Label/value pairs in display order
    pub fn rows(&self) -> [(&'static str, usize); 5] {
        [
            ("Words", self.words),
            ("Characters", self.chars),
            ("Characters (no spaces)", self.chars_no_spaces),
            ("Sentences", self.sentences),
            ("Paragraphs", self.paragraphs),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(TextCounts::of(""), TextCounts::default());
    }

    #[test]
    fn test_counts() {
        let text = "Hello world. This is a test!\n\nSecond paragraph here";
        let counts = TextCounts::of(text);
        assert_eq!(counts.words, 9);
        assert_eq!(counts.chars, text.chars().count());
        assert_eq!(counts.chars_no_spaces, 42);
        assert_eq!(counts.sentences, 2);
        assert_eq!(counts.paragraphs, 2);
    }

    #[test]
    fn test_sentence_needs_terminator() {
        assert_eq!(TextCounts::of("no terminator here").sentences, 0);
        assert_eq!(TextCounts::of("Wait... what?!").sentences, 2);
    }

    #[test]
    fn test_accented_letters_split_words() {
        assert_eq!(TextCounts::of("café crème").words, 3);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let counts = TextCounts::of("héllo wörld");
        assert_eq!(counts.chars, 11);
        assert_eq!(counts.chars_no_spaces, 10);
    }
}
