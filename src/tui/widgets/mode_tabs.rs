//! Mode selector bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use crate::core::Mode;
use crate::tui::Theme;

/// Tab bar listing every mode with its function key.
pub struct ModeTabs<'a> {
    selected: Mode,
    theme: &'a Theme,
}

impl<'a> ModeTabs<'a> {
    /// Creates the tab bar with `selected` highlighted.
    #[must_use]
    pub const fn new(selected: Mode, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }
}

/// Label of the tab for `mode`, e.g. `F1 تدقيق إملائي`.
#[must_use]
pub fn tab_label(mode: Mode) -> String {
    format!("F{} {}", mode.index() + 1, mode.label())
}

impl Widget for ModeTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Mode::all()
            .iter()
            .map(|mode| {
                let style = if *mode == self.selected {
                    self.theme.selected_tab_style(*mode)
                } else {
                    self.theme.muted_style()
                };
                Line::from(Span::styled(format!(" {} ", tab_label(*mode)), style))
            })
            .collect();

        Tabs::new(titles)
            .select(self.selected.index())
            .highlight_style(self.theme.selected_tab_style(self.selected))
            .divider(Span::styled("│", self.theme.border_style()))
            .padding("", "")
            .render(area, buf);
    }
}
