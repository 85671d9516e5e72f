//! Layout calculation helpers for the TUI.
//!
//! Single source of truth for the screen split, so scroll math in the event
//! handlers and drawing in `App::render` agree on dimensions.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::Mode;

/// Layout of the main screen.
///
/// ```text
/// header   title + description (2 lines)
/// tabs     mode selector (1 line)
/// form     text input, or the poem form
/// status   phase and hints (1 line)
/// result   scrollable result panel (grows)
/// footer   key hints (1 line)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AppLayout {
    /// Title and description.
    pub header: Rect,
    /// Mode tabs.
    pub tabs: Rect,
    /// Input form.
    pub form: Rect,
    /// Status line.
    pub status: Rect,
    /// Result panel.
    pub result: Rect,
    /// Footer with key hints.
    pub footer: Rect,
    /// Visible height of the result panel (excluding borders).
    pub result_visible_height: usize,
    /// Content width of the result panel (excluding borders and scrollbar).
    pub result_content_width: usize,
}

/// Height of the text input box (6 lines of text plus borders).
const TEXT_FORM_HEIGHT: u16 = 8;

/// Height of the poem form: name box (3) and three choice rows.
const POEM_FORM_HEIGHT: u16 = 6;

/// Rows of the poem form.
const POEM_FORM_CONSTRAINTS: [Constraint; 4] = [
    Constraint::Length(3), // Name (bordered single line)
    Constraint::Length(1), // Gender
    Constraint::Length(1), // Language
    Constraint::Length(1), // Emojis
];

/// Areas of the poem form.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoemFormLayout {
    /// Name input box.
    pub name: Rect,
    /// Gender choice row.
    pub gender: Rect,
    /// Language choice row.
    pub language: Rect,
    /// Emoji checkbox row.
    pub emojis: Rect,
}

const fn form_height(mode: Mode) -> u16 {
    if mode.is_text_mode() {
        TEXT_FORM_HEIGHT
    } else {
        POEM_FORM_HEIGHT
    }
}

/// Calculates the screen layout for `mode`.
#[must_use]
pub fn calculate_app_layout(area: Rect, mode: Mode) -> AppLayout {
    let chunks = Layout::vertical([
        Constraint::Length(2),                 // Header
        Constraint::Length(1),                 // Tabs
        Constraint::Length(form_height(mode)), // Form
        Constraint::Length(1),                 // Status
        Constraint::Min(3),                    // Result (grows)
        Constraint::Length(1),                 // Footer
    ])
    .split(area);

    let result = chunks[4];

    AppLayout {
        header: chunks[0],
        tabs: chunks[1],
        form: chunks[2],
        status: chunks[3],
        result,
        footer: chunks[5],
        // Borders top and bottom
        result_visible_height: result.height.saturating_sub(2) as usize,
        // Borders left and right, plus the scrollbar column
        result_content_width: result.width.saturating_sub(3) as usize,
    }
}

/// Splits the poem form area into its rows.
#[must_use]
pub fn split_poem_form(form: Rect) -> PoemFormLayout {
    let rows = Layout::vertical(POEM_FORM_CONSTRAINTS).split(form);
    PoemFormLayout {
        name: rows[0],
        gender: rows[1],
        language: rows[2],
        emojis: rows[3],
    }
}
