//! Presentation shell: the chip board and everything it draws.

mod board;
mod input;
pub mod layout;
mod render;
pub mod theme;

pub use board::{BoardOptions, ChipBoard};
pub use layout::{BoardLayout, Button, Hit};
pub use theme::BoardTheme;
