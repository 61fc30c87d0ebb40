use crate::error::{Result, ToolError};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Maximum number of rules a session holds
pub const MAX_RULES: usize = 10;

/// One literal substitution applied globally across the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindReplacePair {
    pub id: u64,
    pub find: String,
    pub replace: String,
}

impl FindReplacePair {
    pub fn new(id: u64, find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            id,
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Rules whose find text is blank are skipped
    pub fn is_active(&self) -> bool {
        !self.find.trim().is_empty()
    }

    /// Compile the find text as a case-sensitive literal pattern
    pub fn compile(&self) -> Result<Regex> {
        let escaped = regex::escape(&self.find);
        Regex::new(&escaped).map_err(|source| ToolError::Pattern {
            pattern: self.find.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub text: String,
    pub count: usize,
}

/// Apply every active rule in order. Each rule sees the output of the
/// previous one; the count is the sum of matches across all rules.
pub fn apply_rules(input: &str, rules: &[FindReplacePair]) -> Result<Replacement> {
    let mut current = input.to_string();
    let mut total = 0;

    for rule in rules.iter().filter(|r| r.is_active()) {
        let pattern = rule.compile()?;
        let matches = pattern.find_iter(&current).count();
        if matches > 0 {
            current = pattern
                .replace_all(&current, NoExpand(&rule.replace))
                .into_owned();
        }
        debug!(target: "find_replace", "Rule {:?} -> {:?}: {} match(es)", rule.find, rule.replace, matches);
        total += matches;
    }

    Ok(Replacement {
        text: current,
        count: total,
    })
}

/// The state of one find/replace workspace: input, rules, output and the
/// undo history of previous outputs.
#[derive(Debug, Clone)]
pub struct FindReplaceSession {
    input: String,
    output: String,
    rules: Vec<FindReplacePair>,
    history: Vec<String>,
    replacements: Option<usize>,
    next_id: u64,
}

impl Default for FindReplaceSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FindReplaceSession {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            rules: vec![FindReplacePair::new(0, "", "")],
            history: Vec::new(),
            replacements: None,
            next_id: 1,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn rules(&self) -> &[FindReplacePair] {
        &self.rules
    }

    /// Replacement count of the last apply, cleared by edits and undo
    pub fn replacements(&self) -> Option<usize> {
        self.replacements
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether any rule would do something; callers disable apply otherwise
    pub fn has_active_rules(&self) -> bool {
        self.rules.iter().any(FindReplacePair::is_active)
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Add an empty rule. Returns its id, or `None` when the session is full.
    pub fn add_rule(&mut self) -> Option<u64> {
        if self.rules.len() >= MAX_RULES {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.rules.push(FindReplacePair::new(id, "", ""));
        Some(id)
    }

    pub fn remove_rule(&mut self, id: u64) {
        self.rules.retain(|r| r.id != id);
    }

    /// Edit a rule. Any edit invalidates the current output and count.
    pub fn set_rule(&mut self, id: u64, find: impl Into<String>, replace: impl Into<String>) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) {
            rule.find = find.into();
            rule.replace = replace.into();
            self.output.clear();
            self.replacements = None;
        }
    }

    /// Replace all rules at once, capped at [`MAX_RULES`]
    pub fn set_rules<I, F, R>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (F, R)>,
        F: Into<String>,
        R: Into<String>,
    {
        self.rules.clear();
        for (find, replace) in pairs.into_iter().take(MAX_RULES) {
            let id = self.next_id;
            self.next_id += 1;
            self.rules.push(FindReplacePair::new(id, find, replace));
        }
        if self.rules.is_empty() {
            self.rules.push(FindReplacePair::new(self.next_id, "", ""));
            self.next_id += 1;
        }
        self.output.clear();
        self.replacements = None;
    }

    /// Run all rules over the input. The previous output goes onto the undo
    /// stack first. Empty input is a no-op.
    pub fn apply(&mut self) -> Result<Option<usize>> {
        if self.input.is_empty() {
            return Ok(None);
        }

        let replacement = apply_rules(&self.input, &self.rules)?;
        self.history.push(std::mem::take(&mut self.output));
        self.output = replacement.text;
        self.replacements = Some(replacement.count);

        info!(target: "find_replace", "{} replacement(s) made", replacement.count);
        Ok(self.replacements)
    }

    /// Restore the previous output. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.output = previous;
                self.replacements = None;
                true
            }
            None => false,
        }
    }

    /// Move the output into the input for another round of rules
    pub fn move_output_to_input(&mut self) -> Result<()> {
        if self.output.is_empty() {
            return Err(ToolError::validation(
                "There is nothing to move to the input field.",
            ));
        }
        self.input = std::mem::take(&mut self.output);
        self.replacements = None;
        self.history.clear();
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
