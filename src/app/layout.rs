//! Board geometry and hit testing.
//!
//! ```text
//! Double List
//! ┌ Unselected ───────────┐ ┌ Selected ─────────────┐
//! │ ┌───────┐ ┌────────┐  │ │ ┌─────┐               │
//! │ │Carrots│ │Potatoes│  │ │ │Beans│               │
//! │ └───────┘ └────────┘  │ │ └─────┘               │
//! └───────────────────────┘ └───────────────────────┘
//!  Add   Select All   Toggle All              Remove
//! status
//! ```

use crate::kernel::{BoardMode, ViewKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub const TITLE_HEIGHT: u16 = 1;
pub const BUTTON_ROW_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;
pub const TILE_HEIGHT: u16 = 3;
const COLUMN_GAP: u16 = 1;
const BUTTON_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    SelectAll,
    ToggleAll,
    Remove,
    NewItem,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Add => " Add ",
            Button::SelectAll => " Select All ",
            Button::ToggleAll => " Toggle All ",
            Button::Remove => " Remove ",
            Button::NewItem => " New Item ",
        }
    }

    /// Buttons drawn on the left and right side of the button row.
    pub fn for_mode(mode: BoardMode) -> (&'static [Button], &'static [Button]) {
        const STAGED_LEFT: &[Button] = &[Button::Add, Button::SelectAll, Button::ToggleAll];
        const STAGED_RIGHT: &[Button] = &[Button::Remove];
        const IDENTITY_LEFT: &[Button] = &[Button::NewItem];
        const NONE: &[Button] = &[];

        match mode {
            BoardMode::Staged => (STAGED_LEFT, STAGED_RIGHT),
            BoardMode::Identity => (IDENTITY_LEFT, NONE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub kind: ViewKind,
    pub area: Rect,
    pub inner: Rect,
    /// One rect per visible tile, in view order. Tiles that do not fit are left out.
    pub tiles: Vec<Rect>,
    /// How many tiles fit at once, whatever the entry count.
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub area: Rect,
    pub title: Rect,
    pub columns: [ColumnLayout; 2],
    pub buttons: Vec<(Button, Rect)>,
    pub status: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tile { view: ViewKind, index: usize },
    Button(Button),
}

impl BoardLayout {
    pub fn column(&self, kind: ViewKind) -> &ColumnLayout {
        &self.columns[kind.index()]
    }

    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        for column in &self.columns {
            if !contains(column.inner, x, y) {
                continue;
            }
            return column
                .tiles
                .iter()
                .position(|r| contains(*r, x, y))
                .map(|index| Hit::Tile {
                    view: column.kind,
                    index,
                });
        }
        self.buttons
            .iter()
            .find(|(_, r)| contains(*r, x, y))
            .map(|(b, _)| Hit::Button(*b))
    }
}

pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && y >= rect.y
        && x < rect.x.saturating_add(rect.width)
        && y < rect.y.saturating_add(rect.height)
}

pub fn compute_layout(
    area: Rect,
    counts: [usize; 2],
    per_row: u16,
    mode: BoardMode,
) -> BoardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(BUTTON_ROW_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let left = halves[0];
    let right = Rect {
        x: halves[1].x.saturating_add(COLUMN_GAP).min(halves[1].right()),
        width: halves[1].width.saturating_sub(COLUMN_GAP),
        ..halves[1]
    };

    let columns = [
        column_layout(ViewKind::Unselected, left, counts[0], per_row),
        column_layout(ViewKind::Selected, right, counts[1], per_row),
    ];

    BoardLayout {
        area,
        title: rows[0],
        columns,
        buttons: button_layout(rows[2], mode),
        status: rows[3],
    }
}

fn column_layout(kind: ViewKind, area: Rect, count: usize, per_row: u16) -> ColumnLayout {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    let per_row = per_row.max(1);
    let tile_width = inner.width / per_row;
    let max_rows = inner.height / TILE_HEIGHT;
    let capacity = if tile_width >= 3 {
        usize::from(max_rows) * usize::from(per_row)
    } else {
        0
    };
    let mut tiles = Vec::with_capacity(count.min(capacity));
    if capacity > 0 {
        for index in 0..count {
            let Ok(index) = u16::try_from(index) else {
                break;
            };
            let row = index / per_row;
            if row >= max_rows {
                break;
            }
            let col = index % per_row;
            tiles.push(Rect {
                x: inner.x + col * tile_width,
                y: inner.y + row * TILE_HEIGHT,
                width: tile_width,
                height: TILE_HEIGHT,
            });
        }
    }

    ColumnLayout {
        kind,
        area,
        inner,
        tiles,
        capacity,
    }
}

/// First entry to draw so that `cursor` stays on screen, scrolling by whole rows.
///
/// Keeps `current` when the cursor is already visible and never scrolls past the last row.
pub fn scroll_offset(
    current: usize,
    cursor: usize,
    capacity: usize,
    per_row: u16,
    count: usize,
) -> usize {
    let per_row = usize::from(per_row.max(1));
    if capacity == 0 || count <= capacity {
        return 0;
    }

    let cursor_row = cursor.min(count - 1) / per_row;
    let visible_rows = (capacity / per_row).max(1);
    let mut first_row = current / per_row;
    if cursor_row < first_row {
        first_row = cursor_row;
    } else if cursor_row >= first_row + visible_rows {
        first_row = cursor_row + 1 - visible_rows;
    }

    let total_rows = count.div_ceil(per_row);
    first_row.min(total_rows.saturating_sub(visible_rows)) * per_row
}

fn button_layout(row: Rect, mode: BoardMode) -> Vec<(Button, Rect)> {
    let (left, right) = Button::for_mode(mode);
    let mut out = Vec::with_capacity(left.len() + right.len());
    let end = row.right();

    let mut x = row.x.saturating_add(1);
    for button in left {
        let width = label_width(*button);
        if x.saturating_add(width) > end {
            break;
        }
        out.push((*button, Rect::new(x, row.y, width, row.height)));
        x = x.saturating_add(width).saturating_add(BUTTON_GAP);
    }

    let mut right_x = end.saturating_sub(1);
    for button in right.iter().rev() {
        let width = label_width(*button);
        let start = right_x.saturating_sub(width);
        if start < x {
            break;
        }
        out.push((*button, Rect::new(start, row.y, width, row.height)));
        right_x = start.saturating_sub(BUTTON_GAP);
    }

    out
}

fn label_width(button: Button) -> u16 {
    u16::try_from(button.label().width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/app/layout.rs"]
mod tests;
