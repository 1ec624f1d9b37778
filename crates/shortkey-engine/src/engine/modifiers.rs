use bitflags::bitflags;
use std::fmt;

use super::Platform;

bitflags! {
    /// Set of modifier keys held alongside a key press.
    ///
    /// The set is unordered; two sets with the same flags are the same set no
    /// matter how they were written down. An empty set means "no modifiers
    /// declared".
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

/// Display order, also used when formatting key combos.
const ORDERED: [(Modifiers, &str); 4] = [
    (Modifiers::CTRL, "Ctrl"),
    (Modifiers::ALT, "Alt"),
    (Modifiers::SHIFT, "Shift"),
    (Modifiers::META, "Meta"),
];

impl Modifiers {
    /// Canonicalize Ctrl/Meta to the platform's primary modifier.
    ///
    /// On macOS Ctrl becomes Meta, elsewhere Meta becomes Ctrl. Shift and Alt
    /// pass through.
    pub fn normalize(self, platform: Platform) -> Self {
        let mut normalized = self - (Modifiers::CTRL | Modifiers::META);
        if self.intersects(Modifiers::CTRL | Modifiers::META) {
            normalized |= platform.primary_modifier();
        }
        normalized
    }

    /// Parse a single modifier name (`"Ctrl"`, `"cmd"`, `"Option"`...).
    pub fn from_alias(name: &str) -> Option<Modifiers> {
        match name.trim().to_ascii_lowercase().as_str() {
            "shift" | "s" => Some(Modifiers::SHIFT),
            "ctrl" | "control" | "c" => Some(Modifiers::CTRL),
            "alt" | "option" | "opt" | "a" => Some(Modifiers::ALT),
            "meta" | "cmd" | "command" | "super" | "m" => Some(Modifiers::META),
            _ => None,
        }
    }

    /// Canonical names of the contained modifiers in display order.
    pub fn names(self) -> Vec<&'static str> {
        ORDERED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ctrl_to_meta_on_mac() {
        assert_eq!(Modifiers::CTRL.normalize(Platform::MacOs), Modifiers::META);
        assert_eq!(Modifiers::META.normalize(Platform::MacOs), Modifiers::META);
    }

    #[test]
    fn normalize_meta_to_ctrl_elsewhere() {
        assert_eq!(Modifiers::META.normalize(Platform::Other), Modifiers::CTRL);
        assert_eq!(Modifiers::CTRL.normalize(Platform::Other), Modifiers::CTRL);
    }

    #[test]
    fn normalize_keeps_shift_and_alt() {
        let mods = Modifiers::SHIFT | Modifiers::ALT | Modifiers::CTRL;
        assert_eq!(
            mods.normalize(Platform::MacOs),
            Modifiers::SHIFT | Modifiers::ALT | Modifiers::META
        );
        assert_eq!(
            (Modifiers::SHIFT | Modifiers::ALT).normalize(Platform::MacOs),
            Modifiers::SHIFT | Modifiers::ALT
        );
    }

    #[test]
    fn normalize_collapses_ctrl_and_meta() {
        let both = Modifiers::CTRL | Modifiers::META;
        assert_eq!(both.normalize(Platform::Other), Modifiers::CTRL);
        assert_eq!(both.normalize(Platform::MacOs), Modifiers::META);
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert!(Modifiers::empty().normalize(Platform::MacOs).is_empty());
    }

    #[test]
    fn from_alias_accepts_common_names() {
        assert_eq!(Modifiers::from_alias("Control"), Some(Modifiers::CTRL));
        assert_eq!(Modifiers::from_alias("cmd"), Some(Modifiers::META));
        assert_eq!(Modifiers::from_alias(" Option "), Some(Modifiers::ALT));
        assert_eq!(Modifiers::from_alias("hyper"), None);
    }

    #[test]
    fn from_alias_coexists_with_flag_names() {
        // bitflags' own parser only knows the flag identifiers.
        assert_eq!(Modifiers::from_name("CTRL"), Some(Modifiers::CTRL));
        assert_eq!(Modifiers::from_name("cmd"), None);
        assert_eq!(Modifiers::from_alias("ctrl"), Some(Modifiers::CTRL));
    }

    #[test]
    fn display_uses_fixed_order() {
        let mods = Modifiers::META | Modifiers::SHIFT | Modifiers::CTRL;
        assert_eq!(mods.to_string(), "Ctrl+Shift+Meta");
        assert_eq!(Modifiers::empty().to_string(), "");
    }
}
