//! Result panel widget.
//!
//! Shows the outcome of the active mode: a loading line, an error, the model
//! output or a word diff, or the idle hint. Content is pre-wrapped to the
//! panel width with unicode-aware widths so scroll offsets computed by the app
//! match what is drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};
use unicode_width::UnicodeWidthChar;

use crate::core::{DiffKind, DiffSegment, Mode};
use crate::tui::Theme;

/// How a span of result text is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanKind {
    /// Model output.
    #[default]
    Normal,
    /// Hints and context lines.
    Muted,
    /// Word inserted by the correction.
    Added,
    /// Word removed by the correction.
    Removed,
    /// Positive notice.
    Success,
    /// Failure text.
    Error,
    /// Progress text.
    Running,
}

/// A run of text with one [`SpanKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSpan {
    /// Text without line breaks.
    pub text: String,
    /// Styling kind.
    pub kind: SpanKind,
}

/// One logical line of the result panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultLine {
    /// Spans in reading order.
    pub spans: Vec<ResultSpan>,
}

impl ResultLine {
    /// Creates a line with a single span.
    #[must_use]
    pub fn plain(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            spans: vec![ResultSpan {
                text: text.into(),
                kind,
            }],
        }
    }

    /// Creates an empty line.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Splits `text` at line breaks into lines of `kind`.
    #[must_use]
    pub fn from_text(kind: SpanKind, text: &str) -> Vec<Self> {
        text.split('\n')
            .map(|line| Self::plain(kind, line.trim_end_matches('\r')))
            .collect()
    }

    /// Lays out diff segments, starting a new line at every line break.
    #[must_use]
    pub fn from_diff(segments: &[DiffSegment]) -> Vec<Self> {
        let mut lines = vec![Self::blank()];
        for segment in segments {
            let kind = match segment.kind {
                DiffKind::Unchanged => SpanKind::Normal,
                DiffKind::Added => SpanKind::Added,
                DiffKind::Removed => SpanKind::Removed,
            };
            for (i, piece) in segment.text.split('\n').enumerate() {
                if i > 0 {
                    lines.push(Self::blank());
                }
                if piece.is_empty() {
                    continue;
                }
                if let Some(line) = lines.last_mut() {
                    line.spans.push(ResultSpan {
                        text: piece.to_string(),
                        kind,
                    });
                }
            }
        }
        lines
    }

    /// Concatenated text of all spans.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A wrapped visual row.
#[derive(Debug, Default)]
struct VisualLine {
    spans: Vec<(String, SpanKind)>,
}

impl VisualLine {
    fn push(&mut self, ch: char, kind: SpanKind) {
        match self.spans.last_mut() {
            Some((text, last)) if *last == kind => text.push(ch),
            _ => self.spans.push((ch.to_string(), kind)),
        }
    }
}

/// Wraps one logical line to `width` columns.
fn wrap_line(line: &ResultLine, width: usize) -> Vec<VisualLine> {
    if width == 0 {
        return vec![VisualLine::default()];
    }

    let mut rows = vec![VisualLine::default()];
    let mut current_width = 0;

    for span in &line.spans {
        for ch in span.text.chars() {
            let char_width = ch.width().unwrap_or(0);
            if current_width + char_width > width && current_width > 0 {
                rows.push(VisualLine::default());
                current_width = 0;
            }
            if let Some(row) = rows.last_mut() {
                row.push(ch, span.kind);
            }
            current_width += char_width;
        }
    }

    rows
}

/// Number of visual rows `lines` occupy at `content_width`.
#[must_use]
pub fn calculate_visual_line_count(lines: &[ResultLine], content_width: usize) -> usize {
    if content_width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| wrap_line(line, content_width).len())
        .sum()
}

/// Scrollable result panel.
pub struct ResultWidget<'a> {
    lines: &'a [ResultLine],
    scroll_offset: usize,
    title: &'a str,
    title_style: Option<Style>,
    badge: Option<&'a str>,
    mode: Mode,
    theme: &'a Theme,
}

impl<'a> ResultWidget<'a> {
    /// Creates a result widget for `mode`.
    #[must_use]
    pub const fn new(
        lines: &'a [ResultLine],
        scroll_offset: usize,
        title: &'a str,
        mode: Mode,
        theme: &'a Theme,
    ) -> Self {
        Self {
            lines,
            scroll_offset,
            title,
            title_style: None,
            badge: None,
            mode,
            theme,
        }
    }

    /// Overrides the title style.
    #[must_use]
    pub const fn title_style(mut self, style: Style) -> Self {
        self.title_style = Some(style);
        self
    }

    /// Shows `badge` in the bottom border.
    #[must_use]
    pub const fn badge(mut self, badge: Option<&'a str>) -> Self {
        self.badge = badge;
        self
    }

    fn style_for(&self, kind: SpanKind) -> Style {
        match kind {
            SpanKind::Normal => self.theme.normal_style(),
            SpanKind::Muted => self.theme.muted_style(),
            SpanKind::Added => self.theme.added_style(),
            SpanKind::Removed => self.theme.removed_style(),
            SpanKind::Success => self.theme.success_style(),
            SpanKind::Error => self.theme.error_style(),
            SpanKind::Running => self.theme.highlight_style(self.mode),
        }
    }
}

impl Widget for ResultWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = Block::default().borders(Borders::ALL).inner(area);
        let visible_height = inner_area.height as usize;
        // Last column is reserved for the scrollbar.
        let content_width = inner_area.width.saturating_sub(1) as usize;

        let visual_lines: Vec<VisualLine> = self
            .lines
            .iter()
            .flat_map(|line| wrap_line(line, content_width))
            .collect();
        let total_visual_lines = visual_lines.len();
        let scroll_offset = self
            .scroll_offset
            .min(total_visual_lines.saturating_sub(visible_height));

        let visible_lines: Vec<Line> = visual_lines
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height)
            .map(|row| {
                Line::from(
                    row.spans
                        .into_iter()
                        .map(|(text, kind)| Span::styled(text, self.style_for(kind)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let scroll_info = if total_visual_lines > visible_height {
            format!(
                " ({}-{}/{})",
                scroll_offset + 1,
                (scroll_offset + visible_height).min(total_visual_lines),
                total_visual_lines
            )
        } else {
            String::new()
        };
        let title_style = self
            .title_style
            .unwrap_or_else(|| self.theme.header_style(self.mode));

        let mut block = Block::default()
            .title(Line::from(Span::styled(
                format!(" {}{scroll_info} ", self.title),
                title_style,
            )))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        if let Some(badge) = self.badge {
            block = block.title_bottom(
                Line::from(Span::styled(format!(" {badge} "), self.theme.success_style()))
                    .alignment(Alignment::Right),
            );
        }
        block.render(area, buf);

        let content_area = Rect {
            width: inner_area.width.saturating_sub(1),
            ..inner_area
        };
        Paragraph::new(visible_lines)
            .alignment(Alignment::Right)
            .render(content_area, buf);

        if total_visual_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .track_style(self.theme.scrollbar_track_style())
                .thumb_style(self.theme.scrollbar_thumb_style(self.mode));

            let mut scrollbar_state = ScrollbarState::new(total_visual_lines)
                .position(scroll_offset)
                .viewport_content_length(visible_height);

            scrollbar.render(inner_area, buf, &mut scrollbar_state);
        }
    }
}
