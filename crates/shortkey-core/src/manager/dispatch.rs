use shortkey_engine::engine::{Modifiers, Platform, ShortcutId, modifiers_match};
use tracing::{debug, trace};

use super::ShortcutManager;
use crate::handler::PreventDefault;
use crate::shortcut::Shortcut;

impl ShortcutManager {
    /// First shortcut that would fire for this key code and held modifiers.
    ///
    /// Independent shortcuts are scanned first, then each group in
    /// registration order, each in insertion order.
    pub fn resolve(&self, key_code: &str, observed: Modifiers) -> Option<&Shortcut> {
        self.iter()
            .map(|(_, shortcut)| shortcut)
            .find(|shortcut| fires_on(shortcut, key_code, observed, self.platform))
    }

    /// Run the first matching shortcut, at most one per call.
    ///
    /// When the matched shortcut asks for it, the event's default behavior is
    /// suppressed before the action runs. Returns the id of the shortcut that
    /// ran; no match is not an error.
    pub fn execute_shortcut<E>(
        &mut self,
        key_code: &str,
        observed: Modifiers,
        event: &mut E,
    ) -> Option<ShortcutId>
    where
        E: PreventDefault + ?Sized,
    {
        let platform = self.platform;
        let shortcut = self
            .independent
            .iter_mut()
            .chain(
                self.groups
                    .iter_mut()
                    .flat_map(|group| group.shortcuts_mut().iter_mut()),
            )
            .find(|shortcut| fires_on(shortcut, key_code, observed, platform));
        let Some(shortcut) = shortcut else {
            trace!(key_code, %observed, "no shortcut matched");
            return None;
        };

        if shortcut.prevent_default() {
            event.prevent_default();
        }
        debug!(name = %shortcut.name(), key_code, %observed, "running shortcut");
        shortcut.run();
        Some(shortcut.id())
    }
}

fn fires_on(shortcut: &Shortcut, key_code: &str, observed: Modifiers, platform: Platform) -> bool {
    shortcut.key_code() == key_code && modifiers_match(shortcut.modifiers(), observed, platform)
}
