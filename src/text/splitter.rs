use regex::Regex;
use std::sync::OnceLock;

static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK.get_or_init(|| Regex::new(r"\r?\n[ \t]*\r?\n").unwrap())
}

/// Splits raw text into trimmed, non-empty semantic units
pub struct Splitter;

impl Splitter {
    /// One unit per line. Blank lines are dropped.
    pub fn lines(text: &str) -> Vec<String> {
        text.split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Raw lines that are not blank, untrimmed.
    ///
    /// The sorter works on these so that indentation survives a sort.
    pub fn non_blank_lines(text: &str) -> Vec<&str> {
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty())
            .collect()
    }

    /// One unit per blank-line-delimited block. Line breaks inside a block
    /// are preserved.
    pub fn paragraphs(text: &str) -> Vec<String> {
        paragraph_break()
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Treat each entry (a manual text box or a whole file) as one paragraph.
    pub fn entries<'a, I>(entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        entries
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_drops_blank_and_trims() {
        let lines = Splitter::lines("  first \n\n   \nsecond\r\nthird");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let text = "one\nstill one\n\n  \ntwo\r\n\r\nthree\n\n";
        let paragraphs = Splitter::paragraphs(text);
        assert_eq!(paragraphs, vec!["one\nstill one", "two", "three"]);
    }

    #[test]
    fn test_entries_keep_inner_breaks() {
        let paragraphs = Splitter::entries(["  a\nb  ", "", "   ", "c"]);
        assert_eq!(paragraphs, vec!["a\nb", "c"]);
    }

    #[test]
    fn test_non_blank_lines_keep_indentation() {
        let lines = Splitter::non_blank_lines("  b\r\n\na\n");
        assert_eq!(lines, vec!["  b", "a"]);
    }
}
