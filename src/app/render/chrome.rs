//! Header, tabs, status line, and footer.

use chrono::{Datelike, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::core::SessionPhase;
use crate::tui::widgets::ModeTabs;

/// Warning shown in the status line when no API key is configured.
pub const MISSING_KEY_WARNING: &str = "لم يتم تكوين مفتاح API";

/// Application name in the footer.
const APP_NAME: &str = "قلم";

impl App {
    /// Renders the mode title and its description.
    pub(super) fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = vec![
            Line::from(Span::styled(
                format!(" {} ", self.mode.title()),
                self.theme.header_style(self.mode),
            )),
            Line::from(Span::styled(
                self.mode.description(),
                self.theme.muted_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(header).alignment(Alignment::Right), area);
    }

    /// Renders the mode tabs.
    pub(super) fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(ModeTabs::new(self.mode, &self.theme), area);
    }

    /// Renders the status line: phase, model, and configuration warnings.
    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        let phase = self.active_lifecycle().phase();
        let phase_style = match phase {
            SessionPhase::Idle => self.theme.muted_style(),
            SessionPhase::Ready => self.theme.normal_style(),
            SessionPhase::Loading => self.theme.highlight_style(self.mode),
            SessionPhase::Success => self.theme.success_style(),
            SessionPhase::Failed => self.theme.error_style(),
        };

        let mut spans = vec![
            Span::styled(" ● ", phase_style),
            Span::styled(phase.description(), phase_style),
            Span::styled(" │ ", self.theme.border_style()),
            Span::styled(self.builder.model(), self.theme.muted_style()),
        ];
        if self.api_key_missing {
            spans.push(Span::styled(" │ ", self.theme.border_style()));
            spans.push(Span::styled(MISSING_KEY_WARNING, self.theme.warning_style()));
        }
        if phase == SessionPhase::Loading {
            spans.push(Span::styled(" │ ", self.theme.border_style()));
            spans.push(Span::styled(
                self.mode.loading_message(),
                self.theme.highlight_style(self.mode),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Renders key hints and the copyright line.
    pub(super) fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut hints = vec![
            Span::styled(" [Enter] ", self.theme.highlight_style(self.mode)),
            Span::styled(self.mode.submit_label(), self.theme.muted_style()),
        ];
        if self.mode.is_text_mode() {
            hints.push(Span::styled("  [Shift+Enter] ", self.theme.highlight_style(self.mode)));
            hints.push(Span::styled("سطر جديد", self.theme.muted_style()));
        } else {
            hints.push(Span::styled("  [Tab] ", self.theme.highlight_style(self.mode)));
            hints.push(Span::styled("الحقل التالي", self.theme.muted_style()));
        }
        if self.copyable_output().is_some() {
            hints.push(Span::styled("  [Ctrl+Y] ", self.theme.highlight_style(self.mode)));
            hints.push(Span::styled(self.mode.copy_label(), self.theme.muted_style()));
        }
        hints.push(Span::styled("  [F1-F4] ", self.theme.highlight_style(self.mode)));
        hints.push(Span::styled("الأوضاع", self.theme.muted_style()));
        hints.push(Span::styled("  [Ctrl+C] ", self.theme.highlight_style(self.mode)));
        hints.push(Span::styled("خروج", self.theme.muted_style()));

        let copyright = copyright_line(Local::now().year());
        #[allow(clippy::cast_possible_truncation)] // Footer text fits in terminal width
        let copyright_width = copyright.width() as u16;
        let [hints_area, copyright_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(copyright_width)])
                .areas(area);

        frame.render_widget(Paragraph::new(Line::from(hints)), hints_area);
        frame.render_widget(
            Paragraph::new(Span::styled(copyright, self.theme.muted_style()))
                .alignment(Alignment::Right),
            copyright_area,
        );
    }
}

/// Copyright notice for `year`.
fn copyright_line(year: i32) -> String {
    format!("© {year} {APP_NAME} ")
}
