//! Shortcut and group definitions.

use shortkey_engine::engine::{KeyCombo, Modifiers, Platform, ShortcutId, ShortcutKey};
use std::fmt;

/// Callback run when a shortcut fires.
pub type Action = Box<dyn FnMut()>;

/// A binding from a physical key + modifier combination to an action.
///
/// Each shortcut gets its [`ShortcutId`] when it is created, so callers can
/// keep a handle to it across registration.
pub struct Shortcut {
    id: ShortcutId,
    name: String,
    combo: KeyCombo,
    description: Option<String>,
    context: Option<String>,
    prevent_default: bool,
    action: Action,
}

impl Shortcut {
    pub fn new(
        name: impl Into<String>,
        key_code: impl Into<String>,
        modifiers: Modifiers,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self::from_combo(name, KeyCombo::new(key_code, modifiers), action)
    }

    pub fn from_combo(name: impl Into<String>, combo: KeyCombo, action: impl FnMut() + 'static) -> Self {
        Self {
            id: ShortcutId::new(),
            name: name.into(),
            combo,
            description: None,
            context: None,
            prevent_default: false,
            action: Box::new(action),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Suppress the event's default behavior when this shortcut fires.
    pub fn with_prevent_default(mut self, prevent_default: bool) -> Self {
        self.prevent_default = prevent_default;
        self
    }

    pub fn id(&self) -> ShortcutId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_code(&self) -> &str {
        &self.combo.key_code
    }

    /// Modifiers as authored, before platform normalization.
    pub fn modifiers(&self) -> Modifiers {
        self.combo.modifiers
    }

    pub fn combo(&self) -> &KeyCombo {
        &self.combo
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn prevent_default(&self) -> bool {
        self.prevent_default
    }

    /// Effective identity on `platform`.
    pub fn key(&self, platform: Platform) -> ShortcutKey {
        self.combo.key(platform)
    }

    pub(crate) fn run(&mut self) {
        (self.action)()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_combo(&mut self, combo: KeyCombo) {
        self.combo = combo;
    }

    pub(crate) fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub(crate) fn set_context(&mut self, context: Option<String>) {
        self.context = context;
    }

    pub(crate) fn set_prevent_default(&mut self, prevent_default: bool) {
        self.prevent_default = prevent_default;
    }

    pub(crate) fn set_action(&mut self, action: Action) {
        self.action = action;
    }
}

impl fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcut")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("combo", &self.combo)
            .field("description", &self.description)
            .field("context", &self.context)
            .field("prevent_default", &self.prevent_default)
            .finish_non_exhaustive()
    }
}

/// A named, purely organizational collection of shortcuts.
#[derive(Debug)]
pub struct ShortcutGroup {
    name: String,
    shortcuts: Vec<Shortcut>,
}

impl ShortcutGroup {
    pub fn new(name: impl Into<String>, shortcuts: Vec<Shortcut>) -> Self {
        Self {
            name: name.into(),
            shortcuts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Shortcut>) {
        (self.name, self.shortcuts)
    }

    pub(crate) fn shortcuts_mut(&mut self) -> &mut Vec<Shortcut> {
        &mut self.shortcuts
    }
}
