//! Result panel content and rendering.
//!
//! Priority when choosing what to show for the active session:
//! loading, then error, then output, then the idle hint. Output of an earlier
//! request stays visible while the user edits the input.

use ratatui::{Frame, layout::Rect};

use crate::app::App;
use crate::core::{Mode, diff_words};
use crate::tui::widgets::{ResultLine, ResultWidget, SpanKind};

/// Title of a spellcheck result that needed no corrections.
pub const UNCHANGED_TITLE: &str = "النص الأصلي صحيح";

/// Notice of a spellcheck result that needed no corrections.
pub const UNCHANGED_MESSAGE: &str = "لم يتم العثور على أخطاء إملائية أو نحوية في النص الذي أدخلته.";

/// Badge shown after a successful copy.
pub const COPIED_BADGE: &str = "تم النسخ!";

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Panel title.
    pub title: String,
    /// Tone of the title.
    pub tone: SpanKind,
    /// Panel content.
    pub lines: Vec<ResultLine>,
}

impl ResultView {
    fn new(title: impl Into<String>, tone: SpanKind, lines: Vec<ResultLine>) -> Self {
        Self {
            title: title.into(),
            tone,
            lines,
        }
    }
}

impl App {
    /// Builds the result panel content for the active session.
    #[must_use]
    pub fn result_view(&self) -> ResultView {
        let mode = self.mode;
        let lifecycle = self.active_lifecycle();

        if lifecycle.is_loading() {
            return ResultView::new(
                mode.label(),
                SpanKind::Normal,
                vec![ResultLine::plain(SpanKind::Running, mode.loading_message())],
            );
        }

        if let Some(error) = lifecycle.error() {
            return ResultView::new(
                mode.error_title(),
                SpanKind::Error,
                ResultLine::from_text(SpanKind::Error, &error.message),
            );
        }

        let output = lifecycle.output();
        if output.is_empty() {
            return ResultView::new(
                mode.success_title(),
                SpanKind::Normal,
                vec![ResultLine::plain(SpanKind::Muted, mode.idle_hint())],
            );
        }

        match mode {
            Mode::Spellcheck if self.text_session.is_unchanged_result() => ResultView::new(
                UNCHANGED_TITLE,
                SpanKind::Success,
                vec![ResultLine::plain(SpanKind::Success, UNCHANGED_MESSAGE)],
            ),
            Mode::Spellcheck => {
                let segments = diff_words(self.text_session.submitted_input(), output);
                ResultView::new(
                    mode.success_title(),
                    SpanKind::Normal,
                    ResultLine::from_diff(&segments),
                )
            }
            Mode::Poem => {
                let mut lines = Vec::new();
                if let Some(context) = self.poem_session.context_line() {
                    lines.push(ResultLine::plain(SpanKind::Muted, context));
                    lines.push(ResultLine::blank());
                }
                lines.extend(ResultLine::from_text(SpanKind::Normal, output));
                let title = self
                    .poem_session
                    .result_title()
                    .unwrap_or_else(|| mode.success_title().to_string());
                ResultView::new(title, SpanKind::Normal, lines)
            }
            Mode::Roqaa | Mode::Emoji => ResultView::new(
                mode.success_title(),
                SpanKind::Normal,
                ResultLine::from_text(SpanKind::Normal, output),
            ),
        }
    }

    /// Renders the result panel.
    pub(super) fn render_result(&self, frame: &mut Frame, area: Rect) {
        let view = self.result_view();
        let title_style = match view.tone {
            SpanKind::Error => self.theme.error_style(),
            SpanKind::Success => self.theme.success_style(),
            _ => self.theme.header_style(self.mode),
        };
        let badge = self.copied_badge_visible().then_some(COPIED_BADGE);

        let widget = ResultWidget::new(
            &view.lines,
            self.result_scroll.offset,
            &view.title,
            self.mode,
            &self.theme,
        )
        .title_style(title_style)
        .badge(badge);
        frame.render_widget(widget, area);
    }
}
