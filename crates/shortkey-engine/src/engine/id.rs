use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a registered shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortcutId(Uuid);

impl ShortcutId {
    /// Mint a fresh random identifier.
    pub fn new() -> Self {
        ShortcutId(Uuid::new_v4())
    }
}

impl Default for ShortcutId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
