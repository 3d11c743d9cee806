//! chiplist - a double list of chips backed by one canonical store.
//!
//! Module layout:
//! - kernel: list store, derived views, actions (no terminal dependencies)
//! - services: settings file and platform paths
//! - tui: terminal guard, input events, the `View` trait
//! - app: the chip board shell (layout, rendering, input)

pub mod kernel;
pub mod services;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
