//! Key event adapter: raw key presses in, registry dispatch out.

use shortkey_engine::engine::{Modifiers, Platform, ShortcutId};

use crate::manager::ShortcutManager;

/// Something whose default handling can be suppressed.
pub trait PreventDefault {
    fn prevent_default(&mut self);
}

/// Dispatch without an underlying event; nothing to suppress.
impl PreventDefault for () {
    fn prevent_default(&mut self) {}
}

/// A raw key press as delivered by the host (browser, terminal, window
/// system).
pub trait KeyboardEvent: PreventDefault {
    /// Physical key identifier, e.g. `KeyA`.
    fn code(&self) -> &str;
    fn shift_key(&self) -> bool;
    fn ctrl_key(&self) -> bool;
    fn alt_key(&self) -> bool;
    fn meta_key(&self) -> bool;
}

/// Modifiers held during `event`, in platform form.
///
/// Only the platform's primary modifier is reported: Meta on macOS, Ctrl
/// elsewhere. The other one is ignored.
pub fn pressed_modifiers<E: KeyboardEvent + ?Sized>(event: &E, platform: Platform) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if event.shift_key() {
        modifiers |= Modifiers::SHIFT;
    }
    let primary_held = match platform {
        Platform::MacOs => event.meta_key(),
        Platform::Other => event.ctrl_key(),
    };
    if primary_held {
        modifiers |= platform.primary_modifier();
    }
    if event.alt_key() {
        modifiers |= Modifiers::ALT;
    }
    modifiers
}

/// Translate `event` and hand it to the registry.
///
/// Whether the event's default is suppressed is up to the matched shortcut.
pub fn handle_key_event<E: KeyboardEvent + ?Sized>(
    manager: &mut ShortcutManager,
    event: &mut E,
) -> Option<ShortcutId> {
    let modifiers = pressed_modifiers(event, manager.platform());
    let code = event.code().to_string();
    manager.execute_shortcut(&code, modifiers, event)
}

/// Plain key press record, for hosts without their own event type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub code: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    default_prevented: bool,
}

impl KeyPress {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn shift(mut self, held: bool) -> Self {
        self.shift = held;
        self
    }

    pub fn ctrl(mut self, held: bool) -> Self {
        self.ctrl = held;
        self
    }

    pub fn alt(mut self, held: bool) -> Self {
        self.alt = held;
        self
    }

    pub fn meta(mut self, held: bool) -> Self {
        self.meta = held;
        self
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl PreventDefault for KeyPress {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

impl KeyboardEvent for KeyPress {
    fn code(&self) -> &str {
        &self.code
    }

    fn shift_key(&self) -> bool {
        self.shift
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl
    }

    fn alt_key(&self) -> bool {
        self.alt
    }

    fn meta_key(&self) -> bool {
        self.meta
    }
}
