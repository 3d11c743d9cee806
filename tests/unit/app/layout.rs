use super::*;

fn area(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height)
}

#[test]
fn board_splits_into_title_columns_buttons_status() {
    let layout = compute_layout(area(100, 20), [3, 1], 3, BoardMode::Staged);
    assert_eq!(layout.title, Rect::new(0, 0, 100, 1));
    assert_eq!(layout.status, Rect::new(0, 19, 100, 1));
    assert_eq!(layout.column(ViewKind::Unselected).area, Rect::new(0, 1, 50, 17));
    assert_eq!(layout.column(ViewKind::Selected).area, Rect::new(51, 1, 49, 17));
    assert_eq!(layout.column(ViewKind::Unselected).tiles.len(), 3);
    assert_eq!(layout.column(ViewKind::Selected).tiles.len(), 1);
}

#[test]
fn tiles_wrap_after_per_row() {
    let layout = compute_layout(area(100, 20), [4, 0], 3, BoardMode::Staged);
    let tiles = &layout.column(ViewKind::Unselected).tiles;
    assert_eq!(tiles[0], Rect::new(1, 2, 16, TILE_HEIGHT));
    assert_eq!(tiles[2], Rect::new(33, 2, 16, TILE_HEIGHT));
    assert_eq!(tiles[3], Rect::new(1, 5, 16, TILE_HEIGHT));
}

#[test]
fn tiles_that_do_not_fit_are_left_out() {
    let layout = compute_layout(area(60, 8), [3, 0], 1, BoardMode::Staged);
    assert_eq!(layout.column(ViewKind::Unselected).tiles.len(), 1);

    let narrow = compute_layout(area(10, 20), [3, 0], 5, BoardMode::Staged);
    assert!(narrow.column(ViewKind::Unselected).tiles.is_empty());
}

#[test]
fn buttons_depend_on_mode() {
    let staged = compute_layout(area(100, 20), [0, 0], 3, BoardMode::Staged);
    let labels: Vec<Button> = staged.buttons.iter().map(|(b, _)| *b).collect();
    assert_eq!(
        labels,
        [Button::Add, Button::SelectAll, Button::ToggleAll, Button::Remove]
    );
    let (_, remove) = staged.buttons[3];
    assert_eq!(remove.right(), 99);

    let identity = compute_layout(area(100, 20), [0, 0], 3, BoardMode::Identity);
    let labels: Vec<Button> = identity.buttons.iter().map(|(b, _)| *b).collect();
    assert_eq!(labels, [Button::NewItem]);
}

#[test]
fn hit_resolves_tiles_and_buttons() {
    let layout = compute_layout(area(100, 20), [4, 1], 3, BoardMode::Staged);
    assert_eq!(
        layout.hit(2, 6),
        Some(Hit::Tile {
            view: ViewKind::Unselected,
            index: 3,
        })
    );
    assert_eq!(
        layout.hit(2, 3),
        Some(Hit::Tile {
            view: ViewKind::Unselected,
            index: 0,
        })
    );
    assert_eq!(
        layout.hit(53, 3),
        Some(Hit::Tile {
            view: ViewKind::Selected,
            index: 0,
        })
    );
    // Inside a column but between tiles.
    assert_eq!(layout.hit(45, 12), None);

    let (_, add) = layout.buttons[0];
    assert_eq!(layout.hit(add.x, add.y), Some(Hit::Button(Button::Add)));
    assert_eq!(layout.hit(0, 0), None);
}

#[test]
fn contains_is_half_open() {
    let rect = Rect::new(2, 2, 3, 3);
    assert!(contains(rect, 2, 2));
    assert!(contains(rect, 4, 4));
    assert!(!contains(rect, 5, 4));
    assert!(!contains(rect, 1, 2));
}

#[test]
fn capacity_counts_tiles_that_fit() {
    let layout = compute_layout(area(60, 10), [12, 0], 2, BoardMode::Identity);
    let column = layout.column(ViewKind::Unselected);
    assert_eq!(column.capacity, 2);
    assert_eq!(column.tiles.len(), 2);

    let narrow = compute_layout(area(10, 20), [3, 0], 5, BoardMode::Staged);
    assert_eq!(narrow.column(ViewKind::Unselected).capacity, 0);
}

#[test]
fn scroll_follows_the_cursor_by_rows() {
    // Everything fits: never scroll.
    assert_eq!(scroll_offset(4, 3, 6, 3, 5), 0);
    // Cursor below the window: its row becomes the last visible one.
    assert_eq!(scroll_offset(0, 7, 6, 3, 12), 3);
    // Cursor inside the window: keep the current offset.
    assert_eq!(scroll_offset(3, 5, 6, 3, 12), 3);
    // Cursor above the window: its row becomes the first visible one.
    assert_eq!(scroll_offset(6, 2, 6, 3, 12), 0);
    // Never scroll past the last row, even after entries were removed.
    assert_eq!(scroll_offset(9, 4, 6, 3, 8), 3);
    assert_eq!(scroll_offset(0, 11, 2, 2, 12), 10);
    assert_eq!(scroll_offset(0, 5, 0, 2, 12), 0);
}
