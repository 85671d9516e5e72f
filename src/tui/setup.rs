//! Terminal event configuration.
//!
//! Enables bracketed paste (multi-line paste arrives as one event) and the
//! keyboard enhancement protocol (Shift+Enter is distinguishable from Enter).

use std::io::stdout;

use ratatui::crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use tracing::{debug, warn};

/// Guard to ensure terminal event modes are disabled on drop, including
/// when the application panics.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
    keyboard_enhancement_enabled: bool,
}

impl TerminalEventGuard {
    /// Enables the event modes; failures are logged and skipped.
    #[must_use]
    pub fn new() -> Self {
        let mut guard = Self {
            bracketed_paste_enabled: false,
            keyboard_enhancement_enabled: false,
        };

        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => {
                debug!("bracketed paste enabled");
                guard.bracketed_paste_enabled = true;
            }
            Err(e) => {
                warn!(error = %e, "could not enable bracketed paste; multi-line paste may arrive as keys");
            }
        }

        match execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        ) {
            Ok(()) => {
                debug!("keyboard enhancement enabled");
                guard.keyboard_enhancement_enabled = true;
            }
            Err(e) => {
                // Not fatal; Shift+Enter falls back to Ctrl+J.
                debug!(error = %e, "keyboard enhancement unavailable");
            }
        }

        guard
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.keyboard_enhancement_enabled {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
