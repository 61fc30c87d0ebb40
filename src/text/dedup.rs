use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduplicated {
    pub lines: Vec<String>,
    pub removed: usize,
}

impl Deduplicated {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub struct DuplicateRemover;

impl DuplicateRemover {
    /// Keep the first occurrence of every line, in input order.
    ///
    /// Lines are keyed by their trimmed text (lower-cased unless
    /// `case_sensitive`); all blank lines share one key, so only the first
    /// blank line survives. Retained lines keep their original spelling.
    pub fn remove(text: &str, case_sensitive: bool) -> Deduplicated {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique = Vec::with_capacity(lines.len());

        for line in &lines {
            let trimmed = line.trim();
            let key = if case_sensitive {
                trimmed.to_string()
            } else {
                trimmed.to_lowercase()
            };
            if seen.insert(key) {
                unique.push(line.to_string());
            }
        }

        Deduplicated {
            removed: lines.len() - unique.len(),
            lines: unique,
        }
    }
}
