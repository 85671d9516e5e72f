//! Rendering methods for the App.
//!
//! The screen is one stacked layout (see [`AppLayout`](crate::app::AppLayout)):
//! - **Chrome**: header, mode tabs, status line, and footer
//! - **Form**: the text input, or the poem form
//! - **Result**: the scrollable result panel, built from a [`ResultView`]

mod chrome;
mod form;
mod result;

use ratatui::Frame;

use super::App;

pub use chrome::MISSING_KEY_WARNING;
pub use result::{COPIED_BADGE, ResultView, UNCHANGED_MESSAGE, UNCHANGED_TITLE};

impl App {
    /// Renders the application UI.
    ///
    /// Uses the cached layout from `self.layout.app`, calculated once per
    /// frame in `update_layout()`.
    pub fn render(&self, frame: &mut Frame) {
        let layout = self.layout.app;

        self.render_header(frame, layout.header);
        self.render_tabs(frame, layout.tabs);
        self.render_form(frame, layout.form);
        self.render_status(frame, layout.status);
        self.render_result(frame, layout.result);
        self.render_footer(frame, layout.footer);
    }
}
