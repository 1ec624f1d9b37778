//! Shortcut configuration: the built-in sample set plus `shortcuts.toml`.

mod defaults;
mod parse;

pub use parse::load_config;

use shortkey_core::{Shortcut, ShortcutManager};
use shortkey_engine::engine::{KeyCombo, Platform};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Lines produced by triggered shortcuts, drained by the host.
pub type MessageQueue = Rc<RefCell<Vec<String>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutConfig {
    /// Overrides the detected platform when set.
    pub platform: Option<Platform>,
    pub include_defaults: bool,
    pub shortcuts: Vec<ShortcutSpec>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            platform: None,
            include_defaults: true,
            shortcuts: Vec::new(),
        }
    }
}

/// One shortcut as written in configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutSpec {
    pub name: String,
    pub combo: KeyCombo,
    pub description: Option<String>,
    pub context: Option<String>,
    pub prevent_default: bool,
    pub group: Option<String>,
}

impl ShortcutSpec {
    /// Build a shortcut whose action reports itself to `messages`.
    fn to_shortcut(&self, messages: &MessageQueue) -> Shortcut {
        let messages = Rc::clone(messages);
        let name = self.name.clone();
        let description = self.description.clone().unwrap_or_default();
        let trigger = self.combo.to_string();
        let action = move || {
            info!(%name, %trigger, "shortcut triggered");
            messages.borrow_mut().push(format!(
                "{}  Description: {}  Triggered: {}",
                name, description, trigger
            ));
        };

        let mut shortcut = Shortcut::from_combo(self.name.clone(), self.combo.clone(), action)
            .with_prevent_default(self.prevent_default);
        if let Some(description) = &self.description {
            shortcut = shortcut.with_description(description.clone());
        }
        if let Some(context) = &self.context {
            shortcut = shortcut.with_context(context.clone());
        }
        shortcut
    }
}

/// Register the configured shortcuts, built-in ones first.
///
/// Shortcuts that collide with an earlier registration are skipped and
/// reported as warnings.
pub fn build_manager(
    config: &ShortcutConfig,
    platform: Platform,
    messages: &MessageQueue,
) -> (ShortcutManager, Vec<String>) {
    let mut manager = ShortcutManager::new(platform);
    let mut warnings: Vec<String> = Vec::new();

    let builtin = if config.include_defaults {
        defaults::default_specs()
    } else {
        Vec::new()
    };
    for spec in builtin.iter().chain(&config.shortcuts) {
        let shortcut = spec.to_shortcut(messages);
        let added = match spec.group.as_deref() {
            Some(group) => manager.add_shortcut_to_group(group, shortcut),
            None => manager.add_independent_shortcut(shortcut),
        };
        if let Err(err) = added {
            warnings.push(err.to_string());
        }
    }
    (manager, warnings)
}
