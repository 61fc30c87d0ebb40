use crate::storage::kv_store::KeyValueStore;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NICKNAME_KEY: &str = "nickname";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => bail!("unknown theme '{other}' (expected dark or light)"),
        }
    }
}

/// Nickname and theme, backed by a key-value store
pub struct Preferences<'a, S: KeyValueStore> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore> Preferences<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub fn nickname(&self) -> Option<String> {
        self.store.get(NICKNAME_KEY).filter(|n| !n.trim().is_empty())
    }

    /// Blank nicknames are rejected
    pub fn set_nickname(&mut self, nickname: &str) -> Result<String> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            bail!("Nickname cannot be empty");
        }
        self.store.set(NICKNAME_KEY, nickname)?;
        Ok(nickname.to_string())
    }

    /// The stored theme; anything unreadable means the default
    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, &theme.to_string())
    }
}
