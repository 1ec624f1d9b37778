//! Error types for the shortcut registry.

use shortkey_engine::engine::{ShortcutId, ShortcutKey};
use thiserror::Error;

/// Reasons a registry mutation was not applied.
///
/// None of these leave the registry in a different state than before the
/// call; callers that only want the add-or-ignore behavior can drop them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    #[error("shortcut '{name}' ({key}) is already registered as '{existing_name}'")]
    Duplicate {
        key: ShortcutKey,
        name: String,
        existing: ShortcutId,
        existing_name: String,
    },

    #[error("no shortcut with id {0}")]
    UnknownShortcut(ShortcutId),
}

pub type Result<T> = std::result::Result<T, ShortcutError>;
