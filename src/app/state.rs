//! Application state structures.
//!
//! - **`InputState`**: editable fields (free text and poem name) and poem focus
//! - **`ScrollState`**: result panel scrolling
//! - **`LayoutState`**: dynamic layout dimensions

use tui_textarea::TextArea;

use crate::core::Mode;

/// Focusable field of the poem form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoemField {
    /// Person name text field.
    #[default]
    Name,
    /// Gender choice.
    Gender,
    /// Language register choice.
    Language,
    /// Emoji checkbox.
    Emojis,
}

impl PoemField {
    /// Returns the next field (wrapping).
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Name => Self::Gender,
            Self::Gender => Self::Language,
            Self::Language => Self::Emojis,
            Self::Emojis => Self::Name,
        }
    }

    /// Returns the previous field (wrapping).
    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Emojis,
            Self::Gender => Self::Name,
            Self::Language => Self::Gender,
            Self::Emojis => Self::Language,
        }
    }

    /// Field label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "اسم الشخص",
            Self::Gender => "الجنس",
            Self::Language => "لغة القصيدة",
            Self::Emojis => "إضافة إيموجي",
        }
    }
}

/// Creates an empty text area showing `placeholder`.
fn textarea_with_placeholder(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(placeholder);
    textarea
}

/// Editable inputs.
///
/// Uses `tui-textarea` for cursor management, character insertion and
/// deletion, and navigation.
pub struct InputState {
    /// Free text of the three text modes.
    pub text: TextArea<'static>,
    /// Person name of the poem form. Kept on a single line.
    pub name: TextArea<'static>,
    /// Focused poem field.
    pub poem_focus: PoemField,
}

impl InputState {
    /// Creates empty inputs with the placeholder of `mode`.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            text: textarea_with_placeholder(mode.placeholder()),
            name: textarea_with_placeholder(Mode::Poem.placeholder()),
            poem_focus: PoemField::default(),
        }
    }

    /// Clears both fields and resets focus.
    pub fn reset(&mut self, mode: Mode) {
        *self = Self::new(mode);
    }

    /// Free text joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.lines().join("\n")
    }

    /// Person name.
    #[must_use]
    pub fn name(&self) -> String {
        self.name.lines().join(" ")
    }
}

/// Cached layout, calculated once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    /// The layout of the last frame.
    pub app: crate::app::AppLayout,
}

impl LayoutState {
    /// Visible height of the result panel (excluding borders).
    #[must_use]
    pub const fn result_visible_height(&self) -> usize {
        self.app.result_visible_height
    }

    /// Content width of the result panel (excluding borders and scrollbar).
    #[must_use]
    pub const fn result_content_width(&self) -> usize {
        self.app.result_content_width
    }
}

/// Scroll position of a panel.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Offset in visual lines from the top.
    pub offset: usize,
}

impl ScrollState {
    /// Scrolls back to the top.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scrolls up by one line.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scrolls down by one line, stopping at the last page.
    pub fn scroll_down(&mut self, content_len: usize, visible_height: usize) {
        let max_scroll = content_len.saturating_sub(visible_height);
        self.offset = (self.offset + 1).min(max_scroll);
    }

    /// Scrolls up by a page.
    pub fn page_up(&mut self, page_size: usize) {
        self.offset = self.offset.saturating_sub(page_size);
    }

    /// Scrolls down by a page, stopping at the last page.
    pub fn page_down(&mut self, content_len: usize, visible_height: usize, page_size: usize) {
        let max_scroll = content_len.saturating_sub(visible_height);
        self.offset = (self.offset + page_size).min(max_scroll);
    }

    /// Scrolls to the bottom.
    pub fn scroll_to_bottom(&mut self, content_len: usize, visible_height: usize) {
        self.offset = content_len.saturating_sub(visible_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod poem_field {
        use super::*;

        #[test]
        fn next_and_prev_are_inverse() {
            for field in [
                PoemField::Name,
                PoemField::Gender,
                PoemField::Language,
                PoemField::Emojis,
            ] {
                assert_eq!(field.next().prev(), field);
            }
        }

        #[test]
        fn next_wraps_to_name() {
            assert_eq!(PoemField::Emojis.next(), PoemField::Name);
        }
    }

    mod scroll_state {
        use super::*;

        #[test]
        fn scroll_down_stops_at_last_page() {
            let mut scroll = ScrollState::default();
            for _ in 0..20 {
                scroll.scroll_down(10, 4);
            }
            assert_eq!(scroll.offset, 6);
        }

        #[test]
        fn page_moves_clamp_both_ways() {
            let mut scroll = ScrollState::default();
            scroll.page_down(30, 10, 8);
            assert_eq!(scroll.offset, 8);
            scroll.page_down(30, 10, 8);
            scroll.page_down(30, 10, 8);
            assert_eq!(scroll.offset, 20);
            scroll.page_up(50);
            assert_eq!(scroll.offset, 0);
        }

        #[test]
        fn content_shorter_than_view_never_scrolls() {
            let mut scroll = ScrollState::default();
            scroll.scroll_down(3, 10);
            scroll.scroll_to_bottom(3, 10);
            assert_eq!(scroll.offset, 0);
        }
    }

    mod input_state {
        use super::*;

        #[test]
        fn text_joins_lines_and_name_flattens() {
            let mut inputs = InputState::new(Mode::Spellcheck);
            inputs.text = TextArea::new(vec!["سطر".to_string(), "ثان".to_string()]);
            inputs.name = TextArea::new(vec!["أحمد".to_string(), "علي".to_string()]);
            assert_eq!(inputs.text(), "سطر\nثان");
            assert_eq!(inputs.name(), "أحمد علي");
        }

        #[test]
        fn reset_clears_fields_and_focus() {
            let mut inputs = InputState::new(Mode::Poem);
            inputs.text.insert_str("نص");
            inputs.name.insert_str("سارة");
            inputs.poem_focus = PoemField::Emojis;
            inputs.reset(Mode::Roqaa);
            assert_eq!(inputs.text(), "");
            assert_eq!(inputs.name(), "");
            assert_eq!(inputs.poem_focus, PoemField::Name);
        }
    }
}
