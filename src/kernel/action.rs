use super::entry::EntryId;
use super::view::ViewKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move every staged entry from Unselected into Selected.
    Add,
    /// Move every staged entry from Selected into Unselected.
    Remove,
    ToggleClicked(EntryId),
    SetClicked {
        id: EntryId,
        clicked: bool,
    },
    SetSelected {
        id: EntryId,
        selected: bool,
    },
    /// Force `clicked` on across one view.
    SelectAll(ViewKind),
    /// Flip `clicked` across one view.
    ToggleSelectAll(ViewKind),
    ClearStaging(ViewKind),
    /// Append a fresh entry with the configured default name.
    Insert,
    Delete(EntryId),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::ToggleClicked(_) => "toggle_clicked",
            Action::SetClicked { .. } => "set_clicked",
            Action::SetSelected { .. } => "set_selected",
            Action::SelectAll(_) => "select_all",
            Action::ToggleSelectAll(_) => "toggle_select_all",
            Action::ClearStaging(_) => "clear_staging",
            Action::Insert => "insert",
            Action::Delete(_) => "delete",
        }
    }
}
