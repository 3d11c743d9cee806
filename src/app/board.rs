//! The chip board: two derived views side by side plus the action buttons.

use super::layout::{BoardLayout, Button};
use super::theme::BoardTheme;
use super::{input, render};
use crate::kernel::{
    view, Action, BoardMode, Entry, EntryId, Store, SubscriptionId, ViewCache, ViewKind,
};
use crate::tui::{EventResult, InputEvent, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    pub mode: BoardMode,
    /// Tiles per row inside a column.
    pub columns: u16,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            mode: BoardMode::Staged,
            columns: crate::services::settings::DEFAULT_COLUMNS,
        }
    }
}

pub struct ChipBoard {
    store: Store,
    options: BoardOptions,
    pub(super) theme: BoardTheme,
    views: [ViewCache; 2],
    changed: Rc<Cell<bool>>,
    subscription: SubscriptionId,
    pub(super) focus: ViewKind,
    pub(super) cursor: [usize; 2],
    /// Index of the first drawn entry per view; moves by whole rows to follow the cursor.
    pub(super) scroll: [usize; 2],
    pub(super) last_layout: Option<BoardLayout>,
    /// Entry ids in the order they were last drawn, per view; tile hits resolve through this.
    pub(super) rendered: [Vec<EntryId>; 2],
    pub(super) status: String,
}

impl ChipBoard {
    pub fn new(mut store: Store, options: BoardOptions, theme: BoardTheme) -> Self {
        let changed = Rc::new(Cell::new(true));
        let flag = Rc::clone(&changed);
        let subscription = store.subscribe(move |change| {
            tracing::trace!(
                revision = change.revision,
                len = change.entries.len(),
                "store changed"
            );
            flag.set(true);
        });

        let mut board = Self {
            store,
            options: BoardOptions {
                columns: options.columns.max(1),
                ..options
            },
            theme,
            views: [
                ViewCache::new(ViewKind::Unselected),
                ViewCache::new(ViewKind::Selected),
            ],
            changed,
            subscription,
            focus: ViewKind::Unselected,
            cursor: [0, 0],
            scroll: [0, 0],
            last_layout: None,
            rendered: [Vec::new(), Vec::new()],
            status: String::new(),
        };
        board.refresh_views();
        board
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn mode(&self) -> BoardMode {
        self.options.mode
    }

    pub fn columns(&self) -> u16 {
        self.options.columns
    }

    pub fn focus(&self) -> ViewKind {
        self.focus
    }

    pub fn cursor(&self, kind: ViewKind) -> usize {
        self.cursor[kind.index()]
    }

    pub fn scroll(&self, kind: ViewKind) -> usize {
        self.scroll[kind.index()]
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn last_layout(&self) -> Option<&BoardLayout> {
        self.last_layout.as_ref()
    }

    /// Current snapshot of one view.
    pub fn view(&self, kind: ViewKind) -> &[Arc<Entry>] {
        self.views[kind.index()].entries()
    }

    pub fn staged_count(&self, kind: ViewKind) -> usize {
        view::count_clicked(self.view(kind), kind)
    }

    /// Brings the view snapshots up to date after store notifications.
    pub(super) fn refresh_views(&mut self) {
        if !self.changed.replace(false) {
            return;
        }
        for cache in &mut self.views {
            cache.refresh(self.store.list());
        }
        for kind in ViewKind::ALL {
            let len = self.view(kind).len();
            let cursor = &mut self.cursor[kind.index()];
            *cursor = (*cursor).min(len.saturating_sub(1));
        }
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let label = action.name();
        let result = self.store.dispatch(action);
        self.refresh_views();
        self.status = if result.state_changed {
            format!("{label}: ok (rev {})", result.revision)
        } else {
            format!("{label}: nothing to do")
        };
        result.state_changed
    }

    /// What a click on the `tile`-th drawn tile of `kind` means in the current mode.
    pub fn tile_action(&self, kind: ViewKind, tile: usize) -> Option<Action> {
        let id = match self.last_layout {
            Some(_) => *self.rendered[kind.index()].get(tile)?,
            None => self.view(kind).get(tile)?.id(),
        };
        Some(self.entry_action(id))
    }

    /// What activating the entry under the cursor of `kind` means in the current mode.
    pub fn cursor_action(&self, kind: ViewKind) -> Option<Action> {
        let id = self.view(kind).get(self.cursor(kind))?.id();
        Some(self.entry_action(id))
    }

    fn entry_action(&self, id: EntryId) -> Action {
        match self.options.mode {
            BoardMode::Staged => Action::ToggleClicked(id),
            BoardMode::Identity => Action::Delete(id),
        }
    }

    pub fn button_action(&self, button: Button) -> Action {
        match button {
            Button::Add => Action::Add,
            Button::Remove => Action::Remove,
            Button::SelectAll => Action::SelectAll(self.focus),
            Button::ToggleAll => Action::ToggleSelectAll(self.focus),
            Button::NewItem => Action::Insert,
        }
    }

    pub fn click_tile(&mut self, kind: ViewKind, tile: usize) -> bool {
        let Some(action) = self.tile_action(kind, tile) else {
            return false;
        };
        let offset = match self.last_layout {
            Some(_) => self.scroll[kind.index()],
            None => 0,
        };
        self.focus = kind;
        self.cursor[kind.index()] = offset + tile;
        self.dispatch(action)
    }

    /// Activates the entry under the cursor of the focused view.
    pub fn activate_cursor(&mut self) -> bool {
        match self.cursor_action(self.focus) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    pub fn press_button(&mut self, button: Button) -> bool {
        let action = self.button_action(button);
        self.dispatch(action)
    }

    /// Detaches the board from its store and hands the store back.
    pub fn into_store(self) -> Store {
        let Self {
            mut store,
            subscription,
            ..
        } = self;
        store.unsubscribe(subscription);
        store
    }
}

impl View for ChipBoard {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/board.rs"]
mod tests;
