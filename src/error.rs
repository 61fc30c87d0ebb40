use thiserror::Error;

/// Errors surfaced by the text tools.
///
/// Every variant is local to the failing operation: callers report it and keep
/// their previous state.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Missing or inconsistent user input
    #[error("{0}")]
    Validation(String),

    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid time `{0}`, expected HH:MM")]
    InvalidTime(String),

    #[error("no column header containing 'phone' was found in {0}")]
    NoPhoneColumn(String),

    #[error("could not fetch the location list for {region}: {reason}")]
    Fetch { region: String, reason: String },

    #[error("failed to decode {name}: {source}")]
    Tabular {
        name: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read workbook {name}: {source}")]
    Workbook {
        name: String,
        #[source]
        source: calamine::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("assistant failed: {0}")]
    Assistant(String),
}

impl ToolError {
    pub fn validation(message: impl Into<String>) -> Self {
        ToolError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
