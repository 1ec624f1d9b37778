//! shortkey_engine - Modifier normalization, matching and key combos.

pub mod engine;

pub use engine::{KeyCombo, Modifiers, Platform, ShortcutId, ShortcutKey, modifiers_match};
