use super::board::ChipBoard;
use super::layout::{compute_layout, scroll_offset, BoardLayout, Button, ColumnLayout};
use crate::kernel::{BoardMode, Entry, EntryId, ViewKind};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::sync::Arc;
use unicode_width::UnicodeWidthChar;

const TITLE: &str = "Double List";

pub(super) fn render(board: &mut ChipBoard, frame: &mut Frame, area: Rect) {
    board.refresh_views();

    let counts = [
        board.view(ViewKind::Unselected).len(),
        board.view(ViewKind::Selected).len(),
    ];
    let sizing = compute_layout(area, counts, board.columns(), board.mode());
    for kind in ViewKind::ALL {
        let i = kind.index();
        board.scroll[i] = scroll_offset(
            board.scroll[i],
            board.cursor(kind),
            sizing.column(kind).capacity,
            board.columns(),
            counts[i],
        );
    }
    let remaining = [
        counts[0] - board.scroll[0],
        counts[1] - board.scroll[1],
    ];
    let layout = compute_layout(area, remaining, board.columns(), board.mode());

    render_title(board, frame, layout.title);
    for column in &layout.columns {
        render_column(board, frame, column);
    }
    render_buttons(board, frame, &layout);
    render_status(board, frame, layout.status);

    for kind in ViewKind::ALL {
        let visible = layout.column(kind).tiles.len();
        let ids: Vec<EntryId> = board
            .view(kind)
            .iter()
            .skip(board.scroll(kind))
            .take(visible)
            .map(|e| e.id())
            .collect();
        board.rendered[kind.index()] = ids;
    }
    board.last_layout = Some(layout);
}

fn render_title(board: &ChipBoard, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default()
            .fg(board.theme.title_fg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

fn render_column(board: &ChipBoard, frame: &mut Frame, column: &ColumnLayout) {
    let kind = column.kind;
    let entries = board.view(kind);
    let focused = board.focus() == kind;
    let theme = &board.theme;

    let border = if focused {
        theme.focus_border
    } else {
        theme.border
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ({}) ", kind.title(), entries.len()));
    let offset = board.scroll(kind);
    if offset > 0 {
        block = block.title(Line::from(format!(" {offset} above ")).alignment(Alignment::Right));
    }
    let hidden = entries.len().saturating_sub(offset + column.tiles.len());
    if hidden > 0 {
        block = block.title_bottom(
            Line::from(format!(" +{hidden} more ")).alignment(Alignment::Right),
        );
    }
    frame.render_widget(block, column.area);

    let cursor = board.cursor(kind);
    let drawn = entries.iter().enumerate().skip(offset).zip(&column.tiles);
    for ((index, entry), rect) in drawn {
        let under_cursor = focused && index == cursor;
        render_tile(board, frame, entry, *rect, under_cursor);
    }
}

fn render_tile(board: &ChipBoard, frame: &mut Frame, entry: &Arc<Entry>, area: Rect, cursor: bool) {
    let theme = &board.theme;
    let body = if entry.clicked {
        Style::default().fg(theme.clicked_fg).bg(theme.clicked_bg)
    } else {
        Style::default().fg(theme.tile_fg).bg(theme.tile_bg)
    };
    let edge = if cursor {
        Style::default()
            .fg(theme.cursor_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        body
    };

    let name = truncate_to_width(&entry.name, usize::from(area.width.saturating_sub(2)));
    let tile = Paragraph::new(name)
        .style(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(edge));
    frame.render_widget(tile, area);
}

fn render_buttons(board: &ChipBoard, frame: &mut Frame, layout: &BoardLayout) {
    let theme = &board.theme;
    for (button, rect) in &layout.buttons {
        let mut style = Style::default().fg(theme.button_fg).bg(theme.button_bg);
        if !button_enabled(board, *button) {
            style = style.add_modifier(Modifier::DIM);
        }
        frame.render_widget(Paragraph::new(button.label()).style(style), *rect);
    }
}

/// A button is drawn dimmed when pressing it would not change anything.
fn button_enabled(board: &ChipBoard, button: Button) -> bool {
    let focus = board.focus();
    match button {
        Button::Add => board.staged_count(ViewKind::Unselected) > 0,
        Button::Remove => board.staged_count(ViewKind::Selected) > 0,
        Button::SelectAll => board.view(focus).iter().any(|e| !e.clicked),
        Button::ToggleAll => !board.view(focus).is_empty(),
        Button::NewItem => true,
    }
}

fn render_status(board: &ChipBoard, frame: &mut Frame, area: Rect) {
    let hint = match board.mode() {
        BoardMode::Staged => {
            "click/space: stage  a: add  r: remove  s: select all  t: toggle all  tab: focus  q: quit"
        }
        BoardMode::Identity => "click/del: delete  n: new item  tab: focus  q: quit",
    };
    let summary = format!(
        "{} unselected ({} staged) | {} selected ({} staged)",
        board.view(ViewKind::Unselected).len(),
        board.staged_count(ViewKind::Unselected),
        board.view(ViewKind::Selected).len(),
        board.staged_count(ViewKind::Selected),
    );
    let mut spans = vec![Span::raw(summary)];
    if !board.status().is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            board.status().to_string(),
            Style::default().fg(board.theme.title_fg),
        ));
    }
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(hint, Style::default().add_modifier(Modifier::DIM)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub(crate) fn truncate_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
