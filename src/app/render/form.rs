//! Input form rendering: the free-text box or the poem form.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tui_textarea::TextArea;

use crate::app::{App, PoemField, split_poem_form};
use crate::core::{Gender, PoemLanguage};

/// Marker in front of the focused poem row.
const FOCUS_MARKER: &str = "◀ ";

impl App {
    /// Renders the form of the active mode.
    pub(super) fn render_form(&self, frame: &mut Frame, area: Rect) {
        if self.mode.is_text_mode() {
            self.render_text_form(frame, area);
        } else {
            self.render_poem_form(frame, area);
        }
    }

    /// Renders the free-text input box.
    fn render_text_form(&self, frame: &mut Frame, area: Rect) {
        let loading = self.is_loading();
        let title = if loading {
            " النص (قيد المعالجة) "
        } else {
            " النص "
        };

        let block = Block::bordered()
            .title(title)
            .title_style(self.theme.header_style(self.mode))
            .title_bottom(Line::from(vec![
                Span::styled(" Enter ", self.theme.highlight_style(self.mode)),
                Span::styled(self.mode.submit_label(), self.theme.muted_style()),
                Span::raw(" "),
            ]))
            .border_style(if loading {
                self.theme.border_style()
            } else {
                self.theme.focused_border_style(self.mode)
            });

        let textarea = self.styled_textarea(&self.inputs.text, block, !loading);
        frame.render_widget(&textarea, area);
    }

    /// Renders the poem form: name box and three choice rows.
    fn render_poem_form(&self, frame: &mut Frame, area: Rect) {
        let rows = split_poem_form(area);
        let focus = self.inputs.poem_focus;
        let editable = !self.is_loading();

        let name_focused = focus == PoemField::Name && editable;
        let block = Block::bordered()
            .title(format!(" {} ", PoemField::Name.label()))
            .title_style(self.theme.header_style(self.mode))
            .border_style(if name_focused {
                self.theme.focused_border_style(self.mode)
            } else {
                self.theme.border_style()
            });
        let name = self.styled_textarea(&self.inputs.name, block, name_focused);
        frame.render_widget(&name, rows.name);

        let session = &self.poem_session;
        let gender = [Gender::Male, Gender::Female]
            .into_iter()
            .map(|g| (g.label(), session.gender() == Some(g)))
            .collect::<Vec<_>>();
        let language = [PoemLanguage::Standard, PoemLanguage::Vernacular]
            .into_iter()
            .map(|l| (l.label(), session.language() == l))
            .collect::<Vec<_>>();

        self.render_choice_row(frame, rows.gender, PoemField::Gender, &gender);
        self.render_choice_row(frame, rows.language, PoemField::Language, &language);

        let checkbox = if session.include_emojis() { "[x]" } else { "[ ]" };
        let row = self.poem_row(
            PoemField::Emojis,
            vec![Span::styled(
                format!("{checkbox} {}", PoemField::Emojis.label()),
                self.theme.normal_style(),
            )],
        );
        frame.render_widget(row, rows.emojis);
    }

    /// Renders a row of radio options for `field`.
    fn render_choice_row(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: PoemField,
        options: &[(&str, bool)],
    ) {
        let mut spans = vec![Span::styled(
            format!("{}: ", field.label()),
            self.theme.muted_style(),
        )];
        for (label, selected) in options {
            let (marker, style) = if *selected {
                ("(•) ", self.theme.highlight_style(self.mode))
            } else {
                ("( ) ", self.theme.normal_style())
            };
            spans.push(Span::styled(format!("{marker}{label}  "), style));
        }
        frame.render_widget(self.poem_row(field, spans), area);
    }

    /// Wraps `spans` into a right-aligned row, marking it when focused.
    fn poem_row<'a>(&self, field: PoemField, mut spans: Vec<Span<'a>>) -> Paragraph<'a> {
        if self.inputs.poem_focus == field && !self.is_loading() {
            spans.push(Span::styled(
                FOCUS_MARKER,
                self.theme.highlight_style(self.mode),
            ));
        } else {
            spans.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right)
    }

    /// Clones `textarea` with the theme applied and `block` as its frame.
    ///
    /// The cursor is hidden when the field cannot be edited.
    fn styled_textarea(
        &self,
        textarea: &TextArea<'static>,
        block: Block<'static>,
        show_cursor: bool,
    ) -> TextArea<'static> {
        let mut textarea = textarea.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(Style::default()); // No highlight on cursor line
        textarea.set_placeholder_style(self.theme.placeholder_style());
        if !show_cursor {
            textarea.set_cursor_style(Style::default());
        }
        textarea
    }
}
