use crate::error::{Result, ToolError};

pub struct LineRepeater;

impl LineRepeater {
    /// The trimmed line repeated `count` times, one per line
    pub fn repeat(line: &str, count: usize) -> Result<String> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ToolError::validation(
                "Please enter the line you want to repeat.",
            ));
        }
        Ok(vec![line; count].join("\n"))
    }
}
