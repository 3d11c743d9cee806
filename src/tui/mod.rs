//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the core builds without terminal crates.

pub mod event;
pub mod terminal_guard;
pub mod view;

pub use event::{InputEvent, Key};
pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};
pub use view::{EventResult, View};
