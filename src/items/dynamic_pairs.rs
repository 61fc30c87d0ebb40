use crate::text::Splitter;
use tracing::debug;

pub const MAX_SLOTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicPair {
    pub id: u64,
    pub value: String,
}

/// A bounded, ordered list of user-entered strings.
///
/// Always holds at least one slot, which may be blank.
#[derive(Debug, Clone)]
pub struct DynamicPairList {
    slots: Vec<DynamicPair>,
    next_id: u64,
}

impl Default for DynamicPairList {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicPairList {
    pub fn new() -> Self {
        Self {
            slots: vec![DynamicPair { id: 0, value: String::new() }],
            next_id: 1,
        }
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self { slots: Vec::new(), next_id: 0 };
        list.replace_with(values.into_iter().map(Into::into).collect());
        list
    }

    pub fn slots(&self) -> &[DynamicPair] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_SLOTS
    }

    fn push(&mut self, value: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push(DynamicPair { id, value });
        id
    }

    /// Append a blank slot. Does nothing once the list is full.
    pub fn add(&mut self) -> Option<u64> {
        if self.is_full() {
            debug!(target: "pairs", "Slot limit of {} reached", MAX_SLOTS);
            return None;
        }
        Some(self.push(String::new()))
    }

    /// Remove slot `id`. The last remaining slot is blanked instead.
    pub fn remove(&mut self, id: u64) {
        self.slots.retain(|slot| slot.id != id);
        if self.slots.is_empty() {
            self.push(String::new());
        }
    }

    pub fn set(&mut self, id: u64, value: impl Into<String>) -> bool {
        match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => {
                slot.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Trimmed, non-blank values in slot order
    pub fn values(&self) -> Vec<String> {
        Splitter::entries(self.slots.iter().map(|slot| slot.value.as_str()))
    }

    fn replace_with(&mut self, values: Vec<String>) {
        self.slots.clear();
        for value in values.into_iter().take(MAX_SLOTS) {
            self.push(value);
        }
        if self.slots.is_empty() {
            self.push(String::new());
        }
    }

    /// Merge uploaded files where each file contributes one entry per line
    pub fn merge_lines<'a, I>(&mut self, files: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let uploaded: Vec<String> = files.into_iter().flat_map(Splitter::lines).collect();
        self.merge(uploaded);
    }

    /// Merge uploaded files where each file is one entry
    pub fn merge_whole<'a, I>(&mut self, files: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let uploaded = Splitter::entries(files);
        self.merge(uploaded);
    }

    fn merge(&mut self, uploaded: Vec<String>) {
        let mut merged = self.values();
        let before = merged.len();
        merged.extend(uploaded);
        if merged.len() > MAX_SLOTS {
            debug!(
                target: "pairs",
                "Truncating {} merged entries to {}",
                merged.len(),
                MAX_SLOTS
            );
        }
        self.replace_with(merged);
        debug!(target: "pairs", "Merged uploads after {} existing entries", before);
    }
}
