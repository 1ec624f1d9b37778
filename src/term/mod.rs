//! Terminal host: raw-mode key loop feeding the shortcut registry.

mod input;

use input::TermKey;

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use shortkey_core::{ShortcutManager, handle_key_event};
use std::io::{self, Write};
use tracing::{debug, warn};

use crate::config::MessageQueue;

/// Read key presses until Esc, dispatching each one to `manager`.
pub fn run(manager: &mut ShortcutManager, messages: &MessageQueue) -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "{} shortcuts registered ({}). Press a shortcut; Esc quits.",
        manager.len(),
        manager.platform()
    )?;

    let _guard = TerminalGuard::enter(&mut stdout)?;
    event_loop(manager, messages, &mut stdout)
}

/// Raw mode (plus keyboard enhancement when available) for as long as it lives.
///
/// Restores the terminal on drop, so setup failures and loop errors alike
/// leave it usable.
struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    fn enter(stdout: &mut impl Write) -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut guard = TerminalGuard { enhanced: false };
        // Needed for the terminal to report Super/Meta; not every terminal can.
        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )
            .context("failed to enable keyboard enhancement")?;
            guard.enhanced = true;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(%err, "failed to disable raw mode");
        }
    }
}

fn event_loop(
    manager: &mut ShortcutManager,
    messages: &MessageQueue,
    stdout: &mut impl Write,
) -> Result<()> {
    loop {
        let Event::Key(key) = event::read().context("failed to read terminal event")? else {
            continue;
        };
        // Only process key press events (Windows reports Press + Release)
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(mut term_key) = TermKey::from_event(&key) else {
            continue;
        };

        if handle_key_event(manager, &mut term_key).is_none() {
            debug!(?key, "unbound key");
        }
        for line in messages.borrow_mut().drain(..) {
            write!(stdout, "{}\r\n", line)?;
        }
        stdout.flush()?;

        if key.code == KeyCode::Esc && !term_key.consumed() {
            return Ok(());
        }
    }
}
