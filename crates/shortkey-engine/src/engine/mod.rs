//! Shortcut matching primitives.
//!
//! - [`Modifiers`] - Modifier flag set and Ctrl/Meta normalization
//! - [`Platform`] - macOS vs everything else
//! - [`modifiers_match`] - Declared vs held modifier check
//! - [`KeyCombo`], [`ShortcutKey`] - Key combos and their effective identity
//! - [`ShortcutId`] - Opaque registry identifiers

mod combo;
mod id;
mod matcher;
mod modifiers;
mod platform;

pub use combo::{KeyCombo, ShortcutKey, char_key_code, display_key};
pub use id::ShortcutId;
pub use matcher::modifiers_match;
pub use modifiers::Modifiers;
pub use platform::Platform;
