//! Clipboard access.

use anyhow::{Context, Result};

/// Destination for copied output.
pub trait ClipboardWriter: Send {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or rejects the text.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`.
///
/// The handle is opened per copy so a missing display server only affects
/// the copy action.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to write to clipboard")?;
        Ok(())
    }
}
