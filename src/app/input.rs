use super::board::ChipBoard;
use super::layout::Hit;
use crate::kernel::{Action, BoardMode, ViewKind};
use crate::tui::{EventResult, InputEvent, Key};
use crossterm::event::{KeyCode, KeyModifiers};

pub(super) fn handle_input(board: &mut ChipBoard, event: &InputEvent) -> EventResult {
    board.refresh_views();

    if let Some((x, y)) = event.left_click() {
        return handle_click(board, x, y);
    }

    match event {
        InputEvent::Key(key) => match Key::from_event(key) {
            Some(key) => handle_key(board, key),
            None => EventResult::Ignored,
        },
        InputEvent::Resize(..) => EventResult::Consumed,
        _ => EventResult::Ignored,
    }
}

fn handle_click(board: &mut ChipBoard, x: u16, y: u16) -> EventResult {
    let hit = board.last_layout.as_ref().and_then(|layout| layout.hit(x, y));
    match hit {
        Some(Hit::Tile { view, index }) => {
            board.click_tile(view, index);
            EventResult::Consumed
        }
        Some(Hit::Button(button)) => {
            board.press_button(button);
            EventResult::Consumed
        }
        None => {
            let focus = board.last_layout.as_ref().and_then(|layout| {
                ViewKind::ALL
                    .into_iter()
                    .find(|kind| super::layout::contains(layout.column(*kind).area, x, y))
            });
            match focus {
                Some(kind) if kind != board.focus => {
                    board.focus = kind;
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            }
        }
    }
}

fn handle_key(board: &mut ChipBoard, key: Key) -> EventResult {
    if key == Key::ctrl(KeyCode::Char('c')) {
        return EventResult::Quit;
    }
    if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
        return EventResult::Ignored;
    }

    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Tab | KeyCode::BackTab => {
            board.focus = board.focus.other();
            return EventResult::Consumed;
        }
        KeyCode::Left => return move_cursor(board, -1),
        KeyCode::Right => return move_cursor(board, 1),
        KeyCode::Up => return move_cursor(board, -(board.columns() as isize)),
        KeyCode::Down => return move_cursor(board, board.columns() as isize),
        KeyCode::Home => return set_cursor(board, 0),
        KeyCode::End => return set_cursor(board, usize::MAX),
        KeyCode::Char(' ') | KeyCode::Enter => {
            if board.cursor_action(board.focus).is_none() {
                return EventResult::Ignored;
            }
            board.activate_cursor();
            return EventResult::Consumed;
        }
        _ => {}
    }

    let action = match (board.mode(), key.code) {
        (BoardMode::Staged, KeyCode::Char('a')) => Action::Add,
        (BoardMode::Staged, KeyCode::Char('r')) => Action::Remove,
        (BoardMode::Staged, KeyCode::Char('s')) => Action::SelectAll(board.focus),
        (BoardMode::Staged, KeyCode::Char('t')) => Action::ToggleSelectAll(board.focus),
        (BoardMode::Staged, KeyCode::Esc) => Action::ClearStaging(board.focus),
        (BoardMode::Identity, KeyCode::Char('n')) => Action::Insert,
        (BoardMode::Identity, KeyCode::Delete | KeyCode::Backspace) => {
            match board.cursor_action(board.focus) {
                Some(action) => action,
                None => return EventResult::Ignored,
            }
        }
        _ => return EventResult::Ignored,
    };

    // The status line reports no-ops too, so the screen changes either way.
    board.dispatch(action);
    EventResult::Consumed
}

fn move_cursor(board: &mut ChipBoard, delta: isize) -> EventResult {
    let focus = board.focus;
    let current = board.cursor(focus);
    let target = current.saturating_add_signed(delta);
    if delta < 0 && current < delta.unsigned_abs() {
        return EventResult::Ignored;
    }
    set_cursor(board, target)
}

fn set_cursor(board: &mut ChipBoard, index: usize) -> EventResult {
    let focus = board.focus;
    let len = board.view(focus).len();
    if len == 0 {
        return EventResult::Ignored;
    }
    let index = index.min(len - 1);
    let slot = &mut board.cursor[focus.index()];
    if *slot == index {
        return EventResult::Ignored;
    }
    *slot = index;
    EventResult::Consumed
}

#[cfg(test)]
#[path = "../../tests/unit/app/input.rs"]
mod tests;
