use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::{Modifiers, Platform};

/// A physical key plus the modifiers a shortcut was written with.
///
/// `key_code` is a physical key identifier in the DOM `KeyboardEvent.code`
/// vocabulary (`KeyA`, `Digit1`, `ArrowUp`, `F5`...). Modifiers are kept as
/// authored; see [`ShortcutKey`] for the platform-normalized form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key_code: String,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key_code: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key_code: key_code.into(),
            modifiers,
        }
    }

    /// Effective identity of this combo on `platform`.
    pub fn key(&self, platform: Platform) -> ShortcutKey {
        ShortcutKey::new(&self.key_code, self.modifiers, platform)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_combo(f, self.modifiers, &self.key_code)
    }
}

impl FromStr for KeyCombo {
    type Err = String;

    /// Parse `"Ctrl+Shift+A"`, `"Meta+F5"`, `"Alt++"`, `"Enter"`...
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err("empty key".to_string());
        }
        if parse_single_char(trimmed).is_some() {
            return Ok(KeyCombo::new(parse_key_code(trimmed)?, Modifiers::empty()));
        }

        let (modifiers, key_part) = if !trimmed.contains('+') {
            (Modifiers::empty(), trimmed)
        } else if let Some(mod_str) = trimmed.strip_suffix("++") {
            if mod_str.is_empty() {
                return Err("missing modifier before '+'".to_string());
            }
            // The `+` key is only accepted as `<mods>++`.
            if mod_str.ends_with('+') {
                return Err("empty key".to_string());
            }
            (parse_modifiers(mod_str)?, "+")
        } else if trimmed.ends_with('+') {
            return Err("empty key".to_string());
        } else {
            let mut split = trimmed.rsplitn(2, '+');
            let key_part = split.next().ok_or_else(|| "empty key".to_string())?;
            let mod_str = split.next().unwrap_or_default();
            (parse_modifiers(mod_str)?, key_part)
        };

        Ok(KeyCombo::new(parse_key_code(key_part)?, modifiers))
    }
}

/// Effective identity of a shortcut: key code plus normalized modifiers.
///
/// Two shortcuts with equal keys cannot both be registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortcutKey {
    key_code: String,
    modifiers: Modifiers,
}

impl ShortcutKey {
    pub fn new(key_code: &str, modifiers: Modifiers, platform: Platform) -> Self {
        Self {
            key_code: key_code.to_string(),
            modifiers: modifiers.normalize(platform),
        }
    }

    pub fn key_code(&self) -> &str {
        &self.key_code
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl fmt::Display for ShortcutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_combo(f, self.modifiers, &self.key_code)
    }
}

fn fmt_combo(f: &mut fmt::Formatter<'_>, modifiers: Modifiers, key_code: &str) -> fmt::Result {
    if modifiers.is_empty() {
        f.write_str(display_key(key_code))
    } else {
        write!(f, "{}+{}", modifiers, display_key(key_code))
    }
}

/// Short label for a physical key code: `KeyA` -> `A`, `Digit1` -> `1`,
/// `ArrowUp` -> `Up`. Anything else is shown as is.
pub fn display_key(key_code: &str) -> &str {
    for prefix in ["Key", "Digit"] {
        if let Some(rest) = key_code.strip_prefix(prefix)
            && rest.len() == 1
        {
            return rest;
        }
    }
    key_code.strip_prefix("Arrow").unwrap_or(key_code)
}

fn parse_modifiers(input: &str) -> Result<Modifiers, String> {
    let mut modifiers = Modifiers::empty();
    for part in input.split('+') {
        let raw = part.trim();
        if raw.is_empty() {
            return Err("empty modifier segment".to_string());
        }
        let flag =
            Modifiers::from_alias(raw).ok_or_else(|| format!("unknown modifier '{}'", raw))?;
        if modifiers.contains(flag) {
            return Err(format!("duplicate modifier '{}'", raw));
        }
        modifiers.insert(flag);
    }
    Ok(modifiers)
}

fn parse_key_code(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("empty key".to_string());
    }
    if let Some(ch) = parse_single_char(trimmed) {
        return char_key_code(ch).ok_or_else(|| format!("unknown key '{}'", input));
    }
    if physical_code_re().is_match(trimmed) {
        return Ok(trimmed.to_string());
    }
    let norm = trimmed.to_ascii_lowercase();
    if let Some(n) = norm.strip_prefix('f')
        && let Ok(n) = n.parse::<u8>()
        && (1..=24).contains(&n)
    {
        return Ok(format!("F{}", n));
    }
    let code = match norm.as_str() {
        "enter" | "return" => "Enter",
        "esc" | "escape" => "Escape",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "insert" | "ins" => "Insert",
        "tab" => "Tab",
        "home" => "Home",
        "end" => "End",
        "pageup" => "PageUp",
        "pagedown" => "PageDown",
        "left" => "ArrowLeft",
        "right" => "ArrowRight",
        "up" => "ArrowUp",
        "down" => "ArrowDown",
        "space" | "spc" => "Space",
        "plus" | "equal" => "Equal",
        "dash" | "minus" => "Minus",
        "comma" => "Comma",
        "period" | "dot" => "Period",
        "slash" => "Slash",
        "backslash" => "Backslash",
        "semicolon" => "Semicolon",
        "quote" | "apostrophe" => "Quote",
        "backtick" | "grave" => "Backquote",
        "lbracket" | "leftbracket" => "BracketLeft",
        "rbracket" | "rightbracket" => "BracketRight",
        _ => return Err(format!("unknown key '{}'", input)),
    };
    Ok(code.to_string())
}

/// Physical code for a key written as a single character (US layout).
pub fn char_key_code(ch: char) -> Option<String> {
    if ch.is_ascii_alphabetic() {
        return Some(format!("Key{}", ch.to_ascii_uppercase()));
    }
    if ch.is_ascii_digit() {
        return Some(format!("Digit{}", ch));
    }
    let code = match ch {
        ' ' => "Space",
        '-' | '_' => "Minus",
        '=' | '+' => "Equal",
        ',' | '<' => "Comma",
        '.' | '>' => "Period",
        '/' | '?' => "Slash",
        '\\' | '|' => "Backslash",
        ';' | ':' => "Semicolon",
        '\'' | '"' => "Quote",
        '`' | '~' => "Backquote",
        '[' | '{' => "BracketLeft",
        ']' | '}' => "BracketRight",
        _ => return None,
    };
    Some(code.to_string())
}

fn parse_single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    let ch = chars.next()?;
    if chars.next().is_none() {
        Some(ch)
    } else {
        None
    }
}

fn physical_code_re() -> &'static Regex {
    static CODE_RE: OnceLock<Regex> = OnceLock::new();
    CODE_RE.get_or_init(|| {
        Regex::new(
            r"^(Key[A-Z]|Digit[0-9]|Numpad([0-9]|Add|Subtract|Multiply|Divide|Decimal|Enter|Equal)|F([1-9]|1[0-9]|2[0-4])|Arrow(Up|Down|Left|Right)|(Shift|Control|Alt|Meta)(Left|Right)|(Media|Audio|Browser)[A-Za-z]+|Intl(Backslash|Ro|Yen)|ContextMenu|CapsLock|NumLock|ScrollLock|PrintScreen|Pause)$",
        )
        .expect("physical key code regex must compile")
    })
}
