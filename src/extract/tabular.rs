use crate::error::{Result, ToolError};
use calamine::{open_workbook_auto, Reader};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

static EMAIL_HEADER: OnceLock<Regex> = OnceLock::new();

fn email_header() -> &'static Regex {
    EMAIL_HEADER.get_or_init(|| Regex::new(r"(?i)\be-?mail\b").unwrap())
}

/// A decoded spreadsheet: one header row plus data rows of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Decode delimited bytes. The first non-blank record is the header;
    /// blank rows are skipped and ragged rows are allowed.
    pub fn decode(name: &str, bytes: &[u8], delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| ToolError::Tabular {
                name: name.to_string(),
                source,
            })?;
            records.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self::from_records(name, records))
    }

    /// Every worksheet of an `.xlsx`, `.xlsm`, `.xls` or `.ods` workbook, in
    /// workbook order. Sheets are named `<file> [<worksheet>]`.
    pub fn decode_workbook(path: &Path) -> Result<Vec<Self>> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let workbook_error = |source| ToolError::Workbook {
            name: file_name.clone(),
            source,
        };

        let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
        let mut sheets = Vec::new();
        for worksheet in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&worksheet)
                .map_err(workbook_error)?;
            let records = range
                .rows()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect();
            sheets.push(Self::from_records(
                &format!("{} [{}]", file_name, worksheet),
                records,
            ));
        }
        debug!(target: "tabular", "Read {} worksheet(s) from {}", sheets.len(), file_name);
        Ok(sheets)
    }

    /// The first non-blank record is the header. Blank records are dropped.
    fn from_records(name: &str, records: Vec<Vec<String>>) -> Self {
        let mut records = records
            .into_iter()
            .filter(|cells| !cells.iter().all(|c| c.trim().is_empty()));
        let headers = records.next().unwrap_or_default();
        let sheet = Self {
            name: name.to_string(),
            headers,
            rows: records.collect(),
        };
        debug!(target: "tabular", "Decoded {} with {} column(s) and {} row(s)", name, sheet.headers.len(), sheet.rows.len());
        sheet
    }

    /// Indexes of the columns whose header satisfies `predicate`
    pub fn columns_where<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, header)| predicate(&header.to_lowercase()))
            .map(|(index, _)| index)
            .collect()
    }

    /// The selected cells of each data row, space-joined, one row per line
    pub fn column_text(&self, columns: &[usize]) -> String {
        self.rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|&i| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Header and rows rendered back to comma-separated text
    pub fn to_csv_text(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        for record in std::iter::once(&self.headers).chain(self.rows.iter()) {
            writer
                .write_record(record)
                .map_err(|source| ToolError::Tabular {
                    name: self.name.clone(),
                    source,
                })?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ToolError::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Text for the email extractor: the email columns when any header looks
    /// like `email`/`e-mail`, otherwise the whole sheet.
    pub fn email_text(&self) -> Result<String> {
        let columns = self.columns_where(|h| email_header().is_match(h));
        if columns.is_empty() {
            debug!(target: "tabular", "No email column in {}, scanning whole sheet", self.name);
            return self.to_csv_text();
        }
        Ok(self.column_text(&columns))
    }

    /// Text for the phone extractor: only columns whose header contains
    /// `phone`. A sheet without one contributes nothing and reports
    /// [`ToolError::NoPhoneColumn`].
    pub fn phone_text(&self) -> Result<String> {
        let columns = self.columns_where(|h| h.contains("phone"));
        if columns.is_empty() {
            warn!(target: "tabular", "No 'phone' column in {}", self.name);
            return Err(ToolError::NoPhoneColumn(self.name.clone()));
        }
        Ok(self.column_text(&columns))
    }
}
