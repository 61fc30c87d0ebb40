use crate::export::{LargeOutputPolicy, DEFAULT_LARGE_THRESHOLD};
use crate::generate::{LocationUrls, DEFAULT_EMAIL_CAP};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    pub locations: LocationUrls,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Generations with more items than this are written to a file
    pub large_threshold: usize,

    /// Maximum number of emails used by the campaign builder
    pub campaign_email_cap: usize,

    /// Default start time for the time list, 24-hour HH:MM
    pub time_start: String,

    /// Default interval for the time list, in minutes
    pub time_interval: u32,

    /// Default number of time entries
    pub time_count: usize,

    /// Default first send time for campaign rows
    pub campaign_start: String,

    /// Default gap between campaign rows, in minutes
    pub campaign_interval: u32,

    /// Default repeat count for the line repeater
    pub repeat_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for downloads and large generations.
    /// Defaults to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            large_threshold: DEFAULT_LARGE_THRESHOLD,
            campaign_email_cap: DEFAULT_EMAIL_CAP,
            time_start: "09:00".to_string(),
            time_interval: 30,
            time_count: 10,
            campaign_start: "09:00".to_string(),
            campaign_interval: 5,
            repeat_count: 10,
        }
    }
}

impl OutputConfig {
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("text-tools").join("config.toml"))
    }

    pub fn large_output_policy(&self) -> LargeOutputPolicy {
        LargeOutputPolicy::new(self.generation.large_threshold)
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        let urls = LocationUrls::default();
        format!(
            r#"# Text Tools Configuration File
# Location: ~/.config/text-tools/config.toml (Linux)
#           ~/Library/Application Support/text-tools/config.toml (macOS)
#           %APPDATA%\text-tools\config.toml (Windows)

[generation]
# Time lists and repeated lines longer than this are written to a file
# instead of printed
large_threshold = {threshold}

# Only the first N emails are used by the campaign builder
campaign_email_cap = {cap}

# Defaults for the time list generator (24-hour start, minutes, entries)
time_start = "09:00"
time_interval = 30
time_count = 10

# Defaults for campaign send times
campaign_start = "09:00"
campaign_interval = 5

# Default count for the line repeater
repeat_count = 10

[locations]
# Plain text city lists, one location per line
usa = "{usa}"
canada = "{canada}"
australia = "{australia}"

[output]
# Directory for downloads (leave commented to use the current directory)
# dir = "/path/to/downloads"
"#,
            threshold = DEFAULT_LARGE_THRESHOLD,
            cap = DEFAULT_EMAIL_CAP,
            usa = urls.usa,
            canada = urls.canada,
            australia = urls.australia,
        )
    }
}
