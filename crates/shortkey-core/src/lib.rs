//! shortkey-core - UI-agnostic shortcut registry + key event dispatch.

pub mod error;
pub mod handler;
pub mod manager;
pub mod shortcut;

pub use error::{Result, ShortcutError};
pub use handler::{KeyPress, KeyboardEvent, PreventDefault, handle_key_event, pressed_modifiers};
pub use manager::ShortcutManager;
pub use shortcut::{Action, Shortcut, ShortcutGroup};

pub use shortkey_engine::engine::{KeyCombo, Modifiers, Platform, ShortcutId, ShortcutKey};
