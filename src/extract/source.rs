use crate::error::{Result, ToolError};
use crate::extract::tabular::Sheet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Which extractor the loaded text is meant for. Decides how sheets are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractTarget {
    Email,
    Phone,
}

/// Text gathered from a batch of input files
#[derive(Debug, Clone, Default)]
pub struct LoadedInput {
    pub text: String,
    pub loaded: usize,
    pub skipped: Vec<PathBuf>,
    /// Sheets that had no column usable by the phone extractor
    pub missing_column: Vec<String>,
}

impl LoadedInput {
    /// Append the loaded text to existing input, newline-separated
    pub fn append_to(&self, existing: &str) -> String {
        match (existing.is_empty(), self.text.is_empty()) {
            (true, _) => self.text.clone(),
            (false, true) => existing.to_string(),
            (false, false) => format!("{}\n{}", existing, self.text),
        }
    }
}

/// Reads extractor input files.
///
/// `.txt` and `.csv` files are plain text. With `by_column`, `.csv` and
/// `.tsv` files are decoded as sheets and only the target's columns are kept.
/// Workbooks are always read sheet by sheet. Anything else is skipped. A read or decode failure aborts the whole batch
/// so no partial input is applied.
pub struct InputLoader {
    target: ExtractTarget,
    by_column: bool,
}

impl InputLoader {
    pub fn new(target: ExtractTarget, by_column: bool) -> Self {
        Self { target, by_column }
    }

    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> Result<LoadedInput> {
        let mut loaded = LoadedInput::default();
        let mut parts = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let part = match (extension.as_str(), self.by_column) {
                ("csv", true) => self.read_sheet(path, &name, b',', &mut loaded)?,
                ("tsv", true) => self.read_sheet(path, &name, b'\t', &mut loaded)?,
                ("xlsx" | "xlsm" | "xls" | "ods", _) => {
                    self.read_workbook(path, &mut loaded)?
                }
                ("txt", _) | ("csv", false) => Some(fs::read_to_string(path)?),
                _ => {
                    warn!(target: "extract", "Unsupported file type skipped: {}", path.display());
                    loaded.skipped.push(path.to_path_buf());
                    None
                }
            };

            if let Some(text) = part {
                loaded.loaded += 1;
                parts.push(text);
            }
        }

        loaded.text = parts.join("\n");
        info!(
            target: "extract",
            "Loaded {} of {} file(s), {} skipped",
            loaded.loaded,
            paths.len(),
            loaded.skipped.len()
        );
        Ok(loaded)
    }

    fn read_sheet(
        &self,
        path: &Path,
        name: &str,
        delimiter: u8,
        loaded: &mut LoadedInput,
    ) -> Result<Option<String>> {
        let bytes = fs::read(path)?;
        let sheet = Sheet::decode(name, &bytes, delimiter)?;
        self.sheet_text(&sheet, loaded)
    }

    fn read_workbook(&self, path: &Path, loaded: &mut LoadedInput) -> Result<Option<String>> {
        let mut parts = Vec::new();
        for sheet in Sheet::decode_workbook(path)? {
            if let Some(text) = self.sheet_text(&sheet, loaded)? {
                parts.push(text);
            }
        }
        Ok((!parts.is_empty()).then(|| parts.join("\n")))
    }

    fn sheet_text(&self, sheet: &Sheet, loaded: &mut LoadedInput) -> Result<Option<String>> {
        if sheet.headers.is_empty() {
            return Ok(None);
        }
        let text = match self.target {
            ExtractTarget::Email => sheet.email_text()?,
            ExtractTarget::Phone => match sheet.phone_text() {
                Ok(text) => text,
                Err(ToolError::NoPhoneColumn(name)) => {
                    loaded.missing_column.push(name);
                    return Ok(None);
                }
                Err(e) => return Err(e),
            },
        };
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_text_files_joined_and_unsupported_skipped() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.txt", "one@a.io");
        let b = write(&dir, "b.CSV", "name,email\nx,two@b.io");
        let c = write(&dir, "c.pdf", "ignored");

        let loaded = InputLoader::new(ExtractTarget::Email, false)
            .load(&[a, b, c.clone()])
            .unwrap();
        assert_eq!(loaded.text, "one@a.io\nname,email\nx,two@b.io");
        assert_eq!(loaded.loaded, 2);
        assert_eq!(loaded.skipped, vec![c]);
    }

    #[test]
    fn test_phone_sheet_without_column_contributes_nothing() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.csv", "Name,Phone\nAnn,555-111-2222\n");
        let bad = write(&dir, "bad.tsv", "Name\tNumber\nBob\t5553334444\n");

        let loaded = InputLoader::new(ExtractTarget::Phone, true)
            .load(&[good, bad])
            .unwrap();
        assert_eq!(loaded.text, "555-111-2222");
        assert_eq!(loaded.loaded, 1);
        assert_eq!(loaded.missing_column, vec!["bad.tsv".to_string()]);
    }

    #[test]
    fn test_missing_file_aborts_batch() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.txt", "a@b.io");
        let missing = dir.path().join("missing.txt");
        let result = InputLoader::new(ExtractTarget::Email, false).load(&[good, missing]);
        assert!(matches!(result, Err(ToolError::Io(_))));
    }

    #[test]
    fn test_undecodable_workbook_aborts_batch() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.txt", "a@b.io");
        let fake = write(&dir, "fake.xlsx", "name,email\nx,two@b.io");
        let result = InputLoader::new(ExtractTarget::Email, false).load(&[good, fake]);
        assert!(matches!(result, Err(ToolError::Workbook { name, .. }) if name == "fake.xlsx"));
    }

    #[test]
    fn test_append_to_existing_input() {
        let loaded = LoadedInput {
            text: "new".into(),
            ..Default::default()
        };
        assert_eq!(loaded.append_to(""), "new");
        assert_eq!(loaded.append_to("old"), "old\nnew");
    }
}
