//! Derived views over the list store.
//!
//! A view never owns entries: it is a predicate over the canonical sequence. Reads are full
//! scans in canonical order, so an entry moved into a view shows up at its canonical position.

use super::entry::{Entry, EntryId};
use rustc_hash::{FxHashMap, FxHashSet};
use super::list::ListStore;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewKind {
    #[default]
    Unselected,
    Selected,
}

impl ViewKind {
    pub const ALL: [ViewKind; 2] = [ViewKind::Unselected, ViewKind::Selected];

    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            ViewKind::Unselected => !entry.selected,
            ViewKind::Selected => entry.selected,
        }
    }

    pub fn other(self) -> Self {
        match self {
            ViewKind::Unselected => ViewKind::Selected,
            ViewKind::Selected => ViewKind::Unselected,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Unselected => "Unselected",
            ViewKind::Selected => "Selected",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewKind::Unselected => 0,
            ViewKind::Selected => 1,
        }
    }
}

pub fn filter(entries: &[Arc<Entry>], kind: ViewKind) -> Vec<Arc<Entry>> {
    entries
        .iter()
        .filter(|e| kind.matches(e))
        .cloned()
        .collect()
}

/// Lens move: every `clicked` entry of view `from` flips `selected` and drops `clicked`.
///
/// Entries that do not move are returned as the same allocation, so applying this through a
/// single [`ListStore::update`] is a no-op when nothing in `from` is staged.
pub fn move_clicked(entries: &[Arc<Entry>], from: ViewKind) -> Vec<Arc<Entry>> {
    entries
        .iter()
        .map(|entry| {
            if entry.clicked && from.matches(entry) {
                let mut moved = Entry::clone(entry);
                moved.clicked = false;
                moved.selected = !entry.selected;
                Arc::new(moved)
            } else {
                Arc::clone(entry)
            }
        })
        .collect()
}

/// Sets `clicked` to `f(clicked)` for every entry in view `kind`.
pub fn map_clicked<F>(entries: &[Arc<Entry>], kind: ViewKind, f: F) -> Vec<Arc<Entry>>
where
    F: Fn(bool) -> bool,
{
    entries
        .iter()
        .map(|entry| {
            if !kind.matches(entry) {
                return Arc::clone(entry);
            }
            let clicked = f(entry.clicked);
            if clicked == entry.clicked {
                Arc::clone(entry)
            } else {
                Arc::new(entry.with_clicked(clicked))
            }
        })
        .collect()
}

pub fn count_clicked(entries: &[Arc<Entry>], kind: ViewKind) -> usize {
    entries
        .iter()
        .filter(|e| e.clicked && kind.matches(e))
        .count()
}

/// Checks two view snapshots against the canonical sequence: each snapshot holds only
/// current allocations that belong to it, no entry appears twice, and together they cover
/// every entry.
pub fn is_partition(
    entries: &[Arc<Entry>],
    unselected: &[Arc<Entry>],
    selected: &[Arc<Entry>],
) -> bool {
    let canonical: FxHashMap<EntryId, &Arc<Entry>> =
        entries.iter().map(|e| (e.id(), e)).collect();
    let mut seen = FxHashSet::default();

    let members = unselected
        .iter()
        .map(|e| (ViewKind::Unselected, e))
        .chain(selected.iter().map(|e| (ViewKind::Selected, e)));
    for (kind, entry) in members {
        let current = match canonical.get(&entry.id()) {
            Some(current) => *current,
            None => return false,
        };
        if !Arc::ptr_eq(current, entry) || !kind.matches(entry) || !seen.insert(entry.id()) {
            return false;
        }
    }
    seen.len() == entries.len()
}

/// Snapshot of one view, tagged with the store revision it was computed from.
#[derive(Debug, Clone)]
pub struct ViewCache {
    kind: ViewKind,
    revision: Option<u64>,
    entries: Vec<Arc<Entry>>,
}

impl ViewCache {
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            revision: None,
            entries: Vec::new(),
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn revision(&self) -> Option<u64> {
        self.revision
    }

    /// Recomputes from `store` if the store moved on since the last refresh.
    /// Returns whether a recompute happened.
    pub fn refresh(&mut self, store: &ListStore) -> bool {
        if self.revision == Some(store.revision()) {
            return false;
        }
        self.entries = filter(store.entries(), self.kind);
        self.revision = Some(store.revision());
        true
    }

    pub fn entries(&self) -> &[Arc<Entry>] {
        &self.entries
    }

    pub fn is_stale(&self, store: &ListStore) -> bool {
        self.revision != Some(store.revision())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/view.rs"]
mod tests;
