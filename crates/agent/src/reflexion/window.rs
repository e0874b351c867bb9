//! The rolling window of critiques.

use serde::{Deserialize, Serialize};

/// Chronologically ordered critiques, oldest first.
///
/// Serializes as a plain JSON array of strings so an episode can persist it
/// between retries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReflectionWindow {
    entries: Vec<String>,
}

impl ReflectionWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a window from existing critiques, oldest first.
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Append a critique as the most recent entry.
    pub fn push(&mut self, reflection: impl Into<String>) {
        self.entries.push(reflection.into());
    }

    /// Keep only the last `max` entries.
    pub fn keep_last(&mut self, max: usize) {
        let excess = self.entries.len().saturating_sub(max);
        if excess > 0 {
            self.entries.drain(..excess);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl From<Vec<String>> for ReflectionWindow {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}

impl<'a> IntoIterator for &'a ReflectionWindow {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
