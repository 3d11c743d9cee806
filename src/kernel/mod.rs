//! Headless core: list store, derived views and action handlers.

pub mod action;
pub mod entry;
pub mod list;
pub mod store;
pub mod view;

pub use action::Action;
pub use entry::{default_seed, Entry, EntryId, SeedEntry};
pub use list::{Change, ListStore, SubscriptionId};
pub use store::{BoardMode, DispatchResult, Store, DEFAULT_NEW_ITEM_NAME};
pub use view::{ViewCache, ViewKind};
