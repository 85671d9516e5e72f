//! Event handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::app::state::PoemField;
use crate::core::{Gender, Mode};
use crate::tui::widgets::calculate_visual_line_count;

/// Scroll page size for navigation.
const SCROLL_PAGE_SIZE: usize = 10;

/// Normalizes pasted text: unifies line endings and drops control characters
/// other than newlines.
fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect()
}

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// Text modes insert at the cursor. The poem name takes the paste with
    /// line breaks turned into spaces. Ignored while loading.
    pub fn handle_paste(&mut self, text: &str) {
        if self.is_loading() || text.is_empty() {
            return;
        }

        let normalized = normalize_paste(text);
        if self.mode.is_text_mode() {
            self.inputs.text.insert_str(&normalized);
            self.sync_text_input();
        } else if self.inputs.poem_focus == PoemField::Name {
            self.inputs.name.insert_str(normalized.replace('\n', " "));
            self.sync_name_input();
        }
    }

    /// Handles a key event.
    ///
    /// Key event priorities:
    /// 1. Quit (Ctrl+C, Ctrl+Q)
    /// 2. Mode selection (F1-F4, Ctrl+T)
    /// 3. Copy (Ctrl+Y) and submit (Ctrl+D)
    /// 4. Result scrolling (PageUp/PageDown, Ctrl+arrows)
    /// 5. Form input for the active mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Priority 1: Quit
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => {
                self.quit();
                return;
            }
            _ => {}
        }

        // Priority 2: Mode selection
        match key.code {
            KeyCode::F(n @ 1..=4) => {
                if let Some(mode) = Mode::from_index(usize::from(n - 1)) {
                    self.switch_mode(mode);
                }
                return;
            }
            KeyCode::Char('t') if ctrl => {
                self.cycle_mode();
                return;
            }
            _ => {}
        }

        // Priority 3: Copy and submit
        match key.code {
            KeyCode::Char('y') if ctrl => {
                self.copy_output();
                return;
            }
            KeyCode::Char('d') if ctrl => {
                self.submit();
                return;
            }
            _ => {}
        }

        // Priority 4: Result scrolling
        if self.handle_scroll_key(key) {
            return;
        }

        // Priority 5: Form input
        if self.mode.is_text_mode() {
            self.handle_text_key(key);
        } else {
            self.handle_poem_key(key);
        }
    }

    /// Scroll keys for the result panel. Returns true when consumed.
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::PageUp => self.result_scroll.page_up(SCROLL_PAGE_SIZE),
            KeyCode::PageDown => {
                let (len, height) = self.result_dimensions();
                self.result_scroll.page_down(len, height, SCROLL_PAGE_SIZE);
            }
            KeyCode::Up if ctrl => self.result_scroll.scroll_up(),
            KeyCode::Down if ctrl => {
                let (len, height) = self.result_dimensions();
                self.result_scroll.scroll_down(len, height);
            }
            KeyCode::Home if ctrl => self.result_scroll.reset(),
            KeyCode::End if ctrl => {
                let (len, height) = self.result_dimensions();
                self.result_scroll.scroll_to_bottom(len, height);
            }
            _ => return false,
        }
        true
    }

    /// Visual line count and visible height of the result panel.
    fn result_dimensions(&self) -> (usize, usize) {
        let view = self.result_view();
        (
            calculate_visual_line_count(&view.lines, self.layout.result_content_width()),
            self.layout.result_visible_height(),
        )
    }

    /// Handles keys for the free-text input.
    ///
    /// - `Enter` - submit
    /// - `Shift+Enter` / `Alt+Enter` / `Ctrl+J` - newline
    /// - other keys - delegated to `tui-textarea`
    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter
                if key.modifiers.contains(KeyModifiers::SHIFT)
                    || key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.insert_text_newline();
            }
            // Ctrl+J is LF; works on terminals that do not report Shift+Enter.
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_text_newline();
            }
            KeyCode::Enter => self.submit(),
            _ => {
                if self.is_loading() {
                    return;
                }
                if self.inputs.text.input(key) {
                    self.sync_text_input();
                }
            }
        }
    }

    fn insert_text_newline(&mut self) {
        if self.is_loading() {
            return;
        }
        self.inputs.text.insert_newline();
        self.sync_text_input();
    }

    /// Handles keys for the poem form.
    ///
    /// - `Tab` / `Shift+Tab` - move focus
    /// - `Enter` - submit
    /// - `Space` / `←` / `→` - change the focused choice
    /// - other keys - edit the name when it has focus
    fn handle_poem_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.inputs.poem_focus = self.inputs.poem_focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.inputs.poem_focus = self.inputs.poem_focus.prev();
                return;
            }
            KeyCode::Enter => {
                self.submit();
                return;
            }
            _ => {}
        }

        if self.is_loading() {
            return;
        }

        match self.inputs.poem_focus {
            PoemField::Name => {
                // Keep the name on one line.
                let inserts_newline = matches!(key.code, KeyCode::Char('j' | 'm'))
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if !inserts_newline && self.inputs.name.input(key) {
                    self.sync_name_input();
                }
            }
            field => {
                if matches!(
                    key.code,
                    KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
                ) {
                    self.toggle_poem_choice(field);
                }
            }
        }
    }

    /// Changes the value of a poem choice field.
    pub(crate) fn toggle_poem_choice(&mut self, field: PoemField) {
        let session = &mut self.poem_session;
        match field {
            PoemField::Name => {}
            PoemField::Gender => {
                let gender = session.gender().map_or(Gender::Male, Gender::toggle);
                session.set_gender(gender);
            }
            PoemField::Language => session.set_language(session.language().toggle()),
            PoemField::Emojis => session.set_include_emojis(!session.include_emojis()),
        }
    }

    /// Copies the text area into the text session.
    fn sync_text_input(&mut self) {
        let text = self.inputs.text();
        self.text_session.set_input(text);
    }

    /// Copies the name field into the poem session.
    fn sync_name_input(&mut self) {
        let name = self.inputs.name();
        self.poem_session.set_name(name);
    }
}
