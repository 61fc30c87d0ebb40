use crate::error::{Result, ToolError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_LARGE_THRESHOLD: usize = 2500;

/// Tool outputs that can be downloaded, each with its default filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    ReplaceOutput,
    UniqueEmails,
    UniquePhones,
    Queries,
    Times,
    LargeTimeList,
    RepeatedLines,
    LargeRepeatedList,
    SortedList,
    CaseConverted,
    UniqueList,
}

impl OutputKind {
    pub fn default_filename(&self) -> &'static str {
        match self {
            OutputKind::ReplaceOutput => "niazi-tools-replace-output.txt",
            OutputKind::UniqueEmails => "niazi-tools-unique-emails.txt",
            OutputKind::UniquePhones => "niazi-tools-unique-phones.txt",
            OutputKind::Queries => "niazi-tools-queries.txt",
            OutputKind::Times => "niazi-tools-times.txt",
            OutputKind::LargeTimeList => "niazi-tools-large-time-list.txt",
            OutputKind::RepeatedLines => "niazi-tools-repeated-lines.txt",
            OutputKind::LargeRepeatedList => "niazi-tools-large-repeated-list.txt",
            OutputKind::SortedList => "niazi-tools-sorted-list.txt",
            OutputKind::CaseConverted => "niazi-tools-case-converted.txt",
            OutputKind::UniqueList => "niazi-tools-unique-list.txt",
        }
    }

    /// The file a generation above the large threshold goes to, if this
    /// kind of output has one
    pub fn large_variant(&self) -> Option<OutputKind> {
        match self {
            OutputKind::Times => Some(OutputKind::LargeTimeList),
            OutputKind::RepeatedLines => Some(OutputKind::LargeRepeatedList),
            _ => None,
        }
    }
}

/// Generations above `threshold` items go straight to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeOutputPolicy {
    pub threshold: usize,
}

impl Default for LargeOutputPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LARGE_THRESHOLD,
        }
    }
}

impl LargeOutputPolicy {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn is_large(&self, count: usize) -> bool {
        count > self.threshold
    }

    /// The output kind to use for `count` items of `kind`
    pub fn route(&self, kind: OutputKind, count: usize) -> OutputKind {
        match kind.large_variant() {
            Some(large) if self.is_large(count) => large,
            _ => kind,
        }
    }
}

pub struct Download;

impl Download {
    /// Trim a user filename and make sure it ends in `.txt`
    pub fn normalize_filename(name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ToolError::validation("Filename cannot be empty."));
        }
        if name.ends_with(".txt") {
            Ok(name.to_string())
        } else {
            Ok(format!("{}.txt", name))
        }
    }

    /// Write `content` as UTF-8 text into `dir`. Without a user filename the
    /// kind's default is used.
    pub fn write(
        dir: &Path,
        kind: OutputKind,
        filename: Option<&str>,
        content: &str,
    ) -> Result<PathBuf> {
        let filename = match filename {
            Some(name) => Self::normalize_filename(name)?,
            None => kind.default_filename().to_string(),
        };
        fs::create_dir_all(dir)?;
        let path = dir.join(filename);
        fs::write(&path, content)?;
        info!(target: "export", "Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}
