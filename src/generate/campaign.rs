use crate::error::{Result, ToolError};
use crate::generate::time_list::{generate_time_list, ClockTime};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Default cap on the number of emails in one campaign
pub const DEFAULT_EMAIL_CAP: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignField {
    Email,
    Subject,
    Paragraph,
    Time,
}

impl CampaignField {
    pub const ALL: [CampaignField; 4] = [
        CampaignField::Email,
        CampaignField::Subject,
        CampaignField::Paragraph,
        CampaignField::Time,
    ];
}

impl fmt::Display for CampaignField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CampaignField::Email => "email",
            CampaignField::Subject => "subject",
            CampaignField::Paragraph => "paragraph",
            CampaignField::Time => "time",
        };
        f.write_str(name)
    }
}

impl FromStr for CampaignField {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        CampaignField::ALL
            .into_iter()
            .find(|field| field.to_string() == s.to_ascii_lowercase())
            .ok_or_else(|| ToolError::validation(format!("unknown campaign field '{s}'")))
    }
}

/// One generated campaign row. Fields become `None` once removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignLineItem {
    pub id: String,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub paragraph: Option<String>,
    pub time: Option<String>,
    pub copied_fields: BTreeSet<CampaignField>,
}

impl CampaignLineItem {
    pub fn field(&self, field: CampaignField) -> Option<&str> {
        match field {
            CampaignField::Email => self.email.as_deref(),
            CampaignField::Subject => self.subject.as_deref(),
            CampaignField::Paragraph => self.paragraph.as_deref(),
            CampaignField::Time => self.time.as_deref(),
        }
    }

    fn field_mut(&mut self, field: CampaignField) -> &mut Option<String> {
        match field {
            CampaignField::Email => &mut self.email,
            CampaignField::Subject => &mut self.subject,
            CampaignField::Paragraph => &mut self.paragraph,
            CampaignField::Time => &mut self.time,
        }
    }

    pub fn is_empty(&self) -> bool {
        CampaignField::ALL.iter().all(|f| self.field(*f).is_none())
    }

    /// Tab-separated row; removed fields render as empty cells
    pub fn to_tsv(&self) -> String {
        CampaignField::ALL
            .iter()
            .map(|f| self.field(*f).unwrap_or("").replace(['\t', '\n'], " "))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// Everything needed to generate a campaign
#[derive(Debug, Clone)]
pub struct CampaignRequest {
    pub emails: Vec<String>,
    pub subjects: Vec<String>,
    pub paragraphs: Vec<String>,
    pub start: ClockTime,
    pub interval: u32,
}

impl CampaignRequest {
    /// Emails one per line. Trimmed and blank lines dropped; duplicates and
    /// case are left alone.
    pub fn parse_emails(text: &str) -> Vec<String> {
        text.split('\n')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Pool entries trimmed with blanks dropped
    pub fn clean_pool<S: AsRef<str>>(pool: &[S]) -> Vec<String> {
        pool.iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Whether generation will drop emails beyond `cap`; callers confirm first
    pub fn exceeds_cap(&self, cap: usize) -> bool {
        self.emails.len() > cap
    }

    fn validate(&self) -> Result<()> {
        if self.emails.is_empty() {
            return Err(ToolError::validation("Please provide at least one email address."));
        }
        if self.subjects.is_empty() {
            return Err(ToolError::validation("Please provide at least one subject."));
        }
        if self.paragraphs.is_empty() {
            return Err(ToolError::validation("Please provide at least one paragraph."));
        }
        if self.subjects.len() != self.paragraphs.len() {
            return Err(ToolError::validation(
                "The number of subjects must be equal to the number of paragraphs.",
            ));
        }
        if self.interval == 0 {
            return Err(ToolError::validation("Interval must be at least 1 minute."));
        }
        Ok(())
    }

    /// One row per email (up to `cap`), rotating through the subject and
    /// paragraph pools. Fails without output on any validation error.
    pub fn build(&self, cap: usize) -> Result<Vec<CampaignLineItem>> {
        self.validate()?;

        let emails = &self.emails[..self.emails.len().min(cap)];
        if emails.len() < self.emails.len() {
            debug!(target: "campaign", "Dropping {} email(s) over the cap of {}", self.emails.len() - emails.len(), cap);
        }

        let times = generate_time_list(emails.len(), self.start, self.interval);
        let stamp = Utc::now().timestamp_millis();

        let rows: Vec<CampaignLineItem> = emails
            .iter()
            .zip(times)
            .enumerate()
            .map(|(i, (email, time))| CampaignLineItem {
                id: format!("{}-{}", stamp, i),
                email: Some(email.clone()),
                subject: Some(self.subjects[i % self.subjects.len()].clone()),
                paragraph: Some(self.paragraphs[i % self.paragraphs.len()].clone()),
                time: Some(time),
                copied_fields: BTreeSet::new(),
            })
            .collect();

        info!(target: "campaign", "Generated {} campaign lines", rows.len());
        Ok(rows)
    }
}

/// What happens to a field when it is copied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignCopyAction {
    #[default]
    Mark,
    RemoveField,
}

/// Generated rows and the per-field copy bookkeeping
#[derive(Debug, Clone, Default)]
pub struct CampaignSheet {
    rows: Vec<CampaignLineItem>,
    action: CampaignCopyAction,
}

impl CampaignSheet {
    pub fn new(rows: Vec<CampaignLineItem>, action: CampaignCopyAction) -> Self {
        Self { rows, action }
    }

    pub fn rows(&self) -> &[CampaignLineItem] {
        &self.rows
    }

    pub fn set_action(&mut self, action: CampaignCopyAction) {
        self.action = action;
    }

    /// Record a copy of `field` on row `id`. Returns the copied text.
    ///
    /// With [`CampaignCopyAction::RemoveField`] the field is cleared and the
    /// row dropped once all of its fields are gone.
    pub fn copy_field(&mut self, id: &str, field: CampaignField) -> Option<String> {
        let index = self.rows.iter().position(|r| r.id == id)?;
        let row = &mut self.rows[index];
        let value = row.field(field)?.to_string();

        match self.action {
            CampaignCopyAction::Mark => {
                row.copied_fields.insert(field);
            }
            CampaignCopyAction::RemoveField => {
                *row.field_mut(field) = None;
                if row.is_empty() {
                    self.rows.remove(index);
                }
            }
        }
        Some(value)
    }

    /// Replace all four fields of a row and clear its copy marks
    pub fn edit(&mut self, id: &str, email: &str, subject: &str, paragraph: &str, time: &str) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.email = Some(email.to_string());
                row.subject = Some(subject.to_string());
                row.paragraph = Some(paragraph.to_string());
                row.time = Some(time.to_string());
                row.copied_fields.clear();
                true
            }
            None => false,
        }
    }

    pub fn to_tsv(&self) -> String {
        self.rows
            .iter()
            .map(CampaignLineItem::to_tsv)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
