use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::entry::Entry;
use super::list::{Change, ListStore, SubscriptionId};
use super::view::{self, ViewKind};
use super::Action;

pub const DEFAULT_NEW_ITEM_NAME: &str = "New Item";

/// How the presentation shell maps a tile click onto an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardMode {
    /// Clicks stage entries; Add/Remove move staged entries between views.
    #[default]
    Staged,
    /// Clicks delete entries; the only other action is Insert.
    Identity,
}

impl BoardMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "staged" | "flags" => Some(BoardMode::Staged),
            "identity" | "id" => Some(BoardMode::Identity),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub state_changed: bool,
    pub revision: u64,
}

#[derive(Debug)]
pub struct Store {
    list: ListStore,
    new_item_name: CompactString,
}

impl Store {
    pub fn new(list: ListStore) -> Self {
        Self {
            list,
            new_item_name: CompactString::from(DEFAULT_NEW_ITEM_NAME),
        }
    }

    pub fn with_new_item_name(mut self, name: impl Into<CompactString>) -> Self {
        self.new_item_name = name.into();
        self
    }

    pub fn list(&self) -> &ListStore {
        &self.list
    }

    pub fn new_item_name(&self) -> &str {
        &self.new_item_name
    }

    pub fn view(&self, kind: ViewKind) -> Vec<Arc<Entry>> {
        view::filter(self.list.entries(), kind)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Change<'_>) + 'static,
    {
        self.list.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.list.unsubscribe(id)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let name = action.name();
        let state_changed = match action {
            Action::Add => self
                .list
                .update(|entries| view::move_clicked(entries, ViewKind::Unselected)),
            Action::Remove => self
                .list
                .update(|entries| view::move_clicked(entries, ViewKind::Selected)),
            Action::ToggleClicked(id) => self.list.update_entry(id, |e| e.clicked = !e.clicked),
            Action::SetClicked { id, clicked } => {
                self.list.update_entry(id, |e| e.clicked = clicked)
            }
            Action::SetSelected { id, selected } => {
                self.list.update_entry(id, |e| e.selected = selected)
            }
            Action::SelectAll(kind) => self
                .list
                .update(|entries| view::map_clicked(entries, kind, |_| true)),
            Action::ToggleSelectAll(kind) => self
                .list
                .update(|entries| view::map_clicked(entries, kind, |clicked| !clicked)),
            Action::ClearStaging(kind) => self
                .list
                .update(|entries| view::map_clicked(entries, kind, |_| false)),
            Action::Insert => {
                let entry = self.list.new_entry(self.new_item_name.clone());
                self.list.update(move |entries| {
                    let mut next = Vec::with_capacity(entries.len() + 1);
                    next.extend(entries.iter().cloned());
                    next.push(entry);
                    next
                })
            }
            Action::Delete(id) => self.list.update(|entries| {
                entries
                    .iter()
                    .filter(|e| e.id() != id)
                    .cloned()
                    .collect()
            }),
        };

        let revision = self.list.revision();
        tracing::debug!(action = name, state_changed, revision, "dispatch");

        DispatchResult {
            state_changed,
            revision,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ListStore::with_default_seed())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
