//! Entry model: one chip of the double list.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of an entry. Allocated by [`super::ListStore`] and never reused
/// within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    pub name: CompactString,
    /// Staging flag: marks intent to move, cleared by the move itself.
    pub clicked: bool,
    /// Membership flag: which derived view the entry belongs to.
    pub selected: bool,
}

impl Entry {
    pub(crate) fn new(id: EntryId, name: impl Into<CompactString>) -> Self {
        Self {
            id,
            name: name.into(),
            clicked: false,
            selected: false,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn with_clicked(&self, clicked: bool) -> Self {
        Self {
            clicked,
            ..self.clone()
        }
    }

    pub fn with_selected(&self, selected: bool) -> Self {
        Self {
            selected,
            ..self.clone()
        }
    }
}

/// Startup description of an entry, as found in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    #[serde(default)]
    pub clicked: bool,
    #[serde(default)]
    pub selected: bool,
}

impl SeedEntry {
    pub fn new(name: &str, clicked: bool, selected: bool) -> Self {
        Self {
            name: name.to_string(),
            clicked,
            selected,
        }
    }
}

pub fn default_seed() -> Vec<SeedEntry> {
    vec![
        SeedEntry::new("Carrots", false, false),
        SeedEntry::new("Potatoes", false, false),
        SeedEntry::new("Beans", false, true),
        SeedEntry::new("Bacon", false, false),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/entry.rs"]
mod tests;
