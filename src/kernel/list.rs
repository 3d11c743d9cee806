//! The list store: canonical ordered collection of entries.
//!
//! All mutations go through [`ListStore::update`], which replaces the whole sequence at once
//! and notifies subscribers before returning. Entries are shared as `Arc<Entry>`; a mutation
//! copies only the entries it touches, everything else keeps its allocation.

use super::entry::{default_seed, Entry, EntryId, SeedEntry};
use compact_str::CompactString;
use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::sync::Arc;

new_key_type! { pub struct SubscriptionId; }

/// What a subscriber sees after an effective mutation.
#[derive(Debug, Clone, Copy)]
pub struct Change<'a> {
    pub revision: u64,
    pub entries: &'a [Arc<Entry>],
}

pub type Listener = Box<dyn FnMut(&Change<'_>)>;

pub struct ListStore {
    entries: Vec<Arc<Entry>>,
    revision: u64,
    next_id: u64,
    listeners: SlotMap<SubscriptionId, Listener>,
}

impl ListStore {
    pub fn new(seed: &[SeedEntry]) -> Self {
        let mut store = Self {
            entries: Vec::with_capacity(seed.len()),
            revision: 0,
            next_id: 1,
            listeners: SlotMap::with_key(),
        };
        for item in seed {
            let mut entry = store.alloc(item.name.as_str());
            entry.clicked = item.clicked;
            entry.selected = item.selected;
            store.entries.push(Arc::new(entry));
        }
        store
    }

    pub fn with_default_seed() -> Self {
        Self::new(&default_seed())
    }

    fn alloc(&mut self, name: impl Into<CompactString>) -> Entry {
        let id = EntryId::from_raw(self.next_id);
        self.next_id += 1;
        Entry::new(id, name)
    }

    /// Allocates a fresh entry (no flags) without inserting it.
    pub fn new_entry(&mut self, name: impl Into<CompactString>) -> Arc<Entry> {
        Arc::new(self.alloc(name))
    }

    pub fn entries(&self) -> &[Arc<Entry>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Arc<Entry>> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the sequence with `f(current)`.
    ///
    /// Returns `false` (and leaves the revision alone) when the result holds exactly the same
    /// entry allocations in the same order.
    pub fn update<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&[Arc<Entry>]) -> Vec<Arc<Entry>>,
    {
        let next = f(&self.entries);
        if same_entries(&self.entries, &next) {
            return false;
        }
        debug_assert!(ids_unique(&next), "transform produced duplicate entry ids");

        self.entries = next;
        self.revision += 1;

        let change = Change {
            revision: self.revision,
            entries: &self.entries,
        };
        for listener in self.listeners.values_mut() {
            listener(&change);
        }
        true
    }

    /// Patches a single entry. The entry is copied only if `f` actually changes it.
    pub fn update_entry<F>(&mut self, id: EntryId, f: F) -> bool
    where
        F: FnOnce(&mut Entry),
    {
        let mut f = Some(f);
        self.update(|entries| {
            entries
                .iter()
                .map(|entry| {
                    if entry.id() != id {
                        return Arc::clone(entry);
                    }
                    let Some(f) = f.take() else {
                        return Arc::clone(entry);
                    };
                    let mut next = Entry::clone(entry);
                    f(&mut next);
                    if next == **entry {
                        Arc::clone(entry)
                    } else {
                        Arc::new(next)
                    }
                })
                .collect()
        })
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Change<'_>) + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

impl fmt::Debug for ListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore")
            .field("entries", &self.entries)
            .field("revision", &self.revision)
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn same_entries(a: &[Arc<Entry>], b: &[Arc<Entry>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}

fn ids_unique(entries: &[Arc<Entry>]) -> bool {
    let mut seen = FxHashSet::default();
    entries.iter().all(|e| seen.insert(e.id()))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/list.rs"]
mod tests;
