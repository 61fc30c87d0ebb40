use crate::error::{Result, ToolError};
use crate::storage::KeyValueStore;
use crate::text::Splitter;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

pub const LINES_KEY: &str = "lines";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub text: String,
    pub copied: bool,
}

/// What happens to an item once it has been copied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyAction {
    #[default]
    Mark,
    Remove,
}

impl fmt::Display for CopyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyAction::Mark => f.write_str("mark"),
            CopyAction::Remove => f.write_str("remove"),
        }
    }
}

impl FromStr for CopyAction {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mark" => Ok(CopyAction::Mark),
            "remove" => Ok(CopyAction::Remove),
            other => Err(ToolError::validation(format!(
                "unknown copy action '{other}' (expected mark or remove)"
            ))),
        }
    }
}

/// An ordered list of copyable text items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineList {
    items: Vec<LineItem>,
}

impl LineList {
    fn from_units(units: Vec<String>) -> Self {
        let stamp = Utc::now().timestamp_millis();
        let items = units
            .into_iter()
            .enumerate()
            .map(|(i, text)| LineItem {
                id: format!("{}-{}", stamp, i),
                text,
                copied: false,
            })
            .collect();
        Self { items }
    }

    /// One item per non-blank line, trimmed
    pub fn from_text(text: &str) -> Self {
        let list = Self::from_units(Splitter::lines(text));
        info!(target: "lines", "Converted input into {} line(s)", list.len());
        list
    }

    /// One item per non-blank entry. Each entry is a manual paragraph or a
    /// whole file.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let paragraphs = Splitter::entries(entries);
        if paragraphs.is_empty() {
            return Err(ToolError::validation(
                "Add at least one paragraph or upload a file.",
            ));
        }
        let list = Self::from_units(paragraphs);
        info!(target: "lines", "Converted {} paragraph(s)", list.len());
        Ok(list)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Copy item `id`, applying `action`. Returns the copied text.
    pub fn copy(&mut self, id: &str, action: CopyAction) -> Option<String> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let text = self.items[index].text.clone();
        match action {
            CopyAction::Mark => self.items[index].copied = true,
            CopyAction::Remove => {
                self.items.remove(index);
            }
        }
        debug!(target: "lines", "Copied {} ({})", id, action);
        Some(text)
    }

    /// Replace the text of item `id` and clear its copied mark
    pub fn update(&mut self, id: &str, text: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text.to_string();
                item.copied = false;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Load the persisted list. A value that no longer parses is removed
    /// from the store and an empty list is returned.
    pub fn load<S: KeyValueStore + ?Sized>(store: &mut S) -> anyhow::Result<Self> {
        let Some(raw) = store.get(LINES_KEY) else {
            return Ok(Self::default());
        };
        match serde_json::from_str::<Vec<LineItem>>(&raw) {
            Ok(items) => Ok(Self { items }),
            Err(e) => {
                warn!(target: "lines", "Discarding stored lines: {}", e);
                store.remove(LINES_KEY)?;
                Ok(Self::default())
            }
        }
    }

    /// Persist the list; an empty list removes the key
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> anyhow::Result<()> {
        if self.items.is_empty() {
            return store.remove(LINES_KEY);
        }
        let raw = serde_json::to_string(&self.items)?;
        store.set(LINES_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_from_text_trims_and_drops_blanks() {
        let list = LineList::from_text("  one \n\n two\r\n   \nthree");
        let texts: Vec<&str> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(list.items().iter().all(|i| !i.copied));
    }

    #[test]
    fn test_ids_are_unique() {
        let list = LineList::from_text("a\nb\nc");
        let mut ids: Vec<&str> = list.items().iter().map(|i| i.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_from_entries() {
        let list = LineList::from_entries(["first para\nline two", "  ", " second "]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0].text, "first para\nline two");
        assert_eq!(list.items()[1].text, "second");

        let err = LineList::from_entries(["", "  "]).unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }

    #[test]
    fn test_copy_mark_and_remove() {
        let mut list = LineList::from_text("a\nb");
        let first = list.items()[0].id.clone();
        let second = list.items()[1].id.clone();

        assert_eq!(list.copy(&first, CopyAction::Mark).as_deref(), Some("a"));
        assert!(list.get(&first).unwrap().copied);

        assert_eq!(list.copy(&second, CopyAction::Remove).as_deref(), Some("b"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.copy("missing", CopyAction::Mark), None);
    }

    #[test]
    fn test_update_resets_copied() {
        let mut list = LineList::from_text("a");
        let id = list.items()[0].id.clone();
        list.copy(&id, CopyAction::Mark);
        assert!(list.update(&id, "edited"));
        let item = list.get(&id).unwrap();
        assert_eq!(item.text, "edited");
        assert!(!item.copied);
        assert!(!list.update("missing", "x"));
    }

    #[test]
    fn test_delete_and_clear() {
        let mut list = LineList::from_text("a\nb\nc");
        let id = list.items()[1].id.clone();
        assert!(list.delete(&id));
        assert!(!list.delete(&id));
        assert_eq!(list.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_persistence() {
        let mut store = MemoryStore::default();
        let mut list = LineList::from_text("a\nb");
        let id = list.items()[0].id.clone();
        list.copy(&id, CopyAction::Mark);
        list.save(&mut store).unwrap();

        let loaded = LineList::load(&mut store).unwrap();
        assert_eq!(loaded, list);

        LineList::default().save(&mut store).unwrap();
        assert_eq!(store.get(LINES_KEY), None);
    }

    #[test]
    fn test_corrupt_value_is_removed() {
        let mut store = MemoryStore::default();
        store.set(LINES_KEY, "{not a list").unwrap();
        let loaded = LineList::load(&mut store).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(store.get(LINES_KEY), None);
    }

    #[test]
    fn test_copy_action_parse() {
        assert_eq!("Remove".parse::<CopyAction>().unwrap(), CopyAction::Remove);
        assert!("drop".parse::<CopyAction>().is_err());
    }
}
