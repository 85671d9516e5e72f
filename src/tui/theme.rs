//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};

use crate::core::Mode;

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Success color (green); also used for inserted words.
    pub success: Color,
    /// Warning color (yellow).
    pub warning: Color,
    /// Error color (red); also used for removed words.
    pub error: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Accent per mode, indexed by [`Mode::index`].
    pub mode_accents: [Color; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
            mode_accents: [
                Color::Cyan,
                Color::LightRed,
                Color::Yellow,
                Color::Magenta,
            ],
        }
    }
}

impl Theme {
    /// Accent color of `mode`.
    #[must_use]
    pub fn accent(&self, mode: Mode) -> Color {
        self.mode_accents[mode.index()]
    }

    /// Style for the header/title of `mode`.
    #[must_use]
    pub fn header_style(&self, mode: Mode) -> Style {
        Style::default()
            .fg(self.accent(mode))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for success messages.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for warning messages.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for error messages.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for words inserted by the correction.
    #[must_use]
    pub fn added_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for words removed by the correction.
    #[must_use]
    pub fn removed_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the border of the focused field.
    #[must_use]
    pub fn focused_border_style(&self, mode: Mode) -> Style {
        Style::default().fg(self.accent(mode))
    }

    /// Style for highlighted/selected items.
    #[must_use]
    pub fn highlight_style(&self, mode: Mode) -> Style {
        Style::default()
            .fg(self.accent(mode))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected tab.
    #[must_use]
    pub fn selected_tab_style(&self, mode: Mode) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent(mode))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the scrollbar thumb.
    #[must_use]
    pub fn scrollbar_thumb_style(&self, mode: Mode) -> Style {
        Style::default().fg(self.accent(mode))
    }

    /// Style for the scrollbar track.
    #[must_use]
    pub fn scrollbar_track_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for placeholder text (visible on both light and dark backgrounds).
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod default_theme {
        use super::*;

        #[test]
        fn every_mode_has_a_distinct_accent() {
            let theme = Theme::default();
            for (i, a) in Mode::all().iter().enumerate() {
                for b in &Mode::all()[i + 1..] {
                    assert_ne!(theme.accent(*a), theme.accent(*b));
                }
            }
        }

        #[test]
        fn spellcheck_accent_is_cyan() {
            assert_eq!(Theme::default().accent(Mode::Spellcheck), Color::Cyan);
        }
    }

    mod style_methods {
        use super::*;

        #[test]
        fn header_style_uses_mode_accent_and_bold() {
            let theme = Theme::default();
            let style = theme.header_style(Mode::Poem);

            assert_eq!(style.fg, Some(theme.accent(Mode::Poem)));
            assert!(style.add_modifier.contains(Modifier::BOLD));
        }

        #[test]
        fn added_style_is_green() {
            let theme = Theme::default();
            assert_eq!(theme.added_style().fg, Some(theme.success));
        }

        #[test]
        fn removed_style_is_red_and_struck_through() {
            let theme = Theme::default();
            let style = theme.removed_style();

            assert_eq!(style.fg, Some(theme.error));
            assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
        }

        #[test]
        fn selected_tab_uses_accent_background() {
            let theme = Theme::default();
            let style = theme.selected_tab_style(Mode::Emoji);

            assert_eq!(style.bg, Some(theme.accent(Mode::Emoji)));
        }
    }

    mod custom_theme {
        use super::*;

        #[test]
        fn styles_use_custom_colors() {
            let theme = Theme {
                success: Color::LightGreen,
                error: Color::LightRed,
                mode_accents: [Color::Blue; 4],
                ..Theme::default()
            };

            assert_eq!(theme.header_style(Mode::Roqaa).fg, Some(Color::Blue));
            assert_eq!(theme.added_style().fg, Some(Color::LightGreen));
            assert_eq!(theme.removed_style().fg, Some(Color::LightRed));
        }
    }
}
