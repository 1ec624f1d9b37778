//! Shortcut registry (UI-agnostic).

mod dispatch;
mod ops;
mod state;

pub use state::ShortcutManager;
pub(crate) use state::Slot;
