//! Main application state and logic.
//!
//! The App owns one session per kind (text and poem), the editable inputs,
//! and the channel that request tasks report back on. Submodules:
//! - `events` - key and paste handling
//! - `render` - drawing
//! - `state` - input, scroll, and layout state
//! - `clipboard` - copy target
//!
//! ## Requests
//!
//! Each submit takes a fresh number from an app-wide counter and spawns one
//! task. Results come back as [`SessionEvent`]s drained in `process_events`.
//! A result is applied only if its ticket is still the one in flight for the
//! active mode; anything else was abandoned by a mode switch and is dropped.

pub mod clipboard;
pub mod events;
mod layout;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use layout::{AppLayout, PoemFormLayout, calculate_app_layout, split_poem_form};
pub use render::{
    COPIED_BADGE, MISSING_KEY_WARNING, ResultView, UNCHANGED_MESSAGE, UNCHANGED_TITLE,
};

use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{
    Lifecycle, Mode, PoemSession, PromptBuilder, SessionEvent, SubmitRejected, TextGenerator,
    TextSession, spawn_request,
};
use crate::tui::Theme;

pub use self::state::{InputState, LayoutState, PoemField, ScrollState};

/// Channel buffer size for session events.
const EVENT_CHANNEL_SIZE: usize = 64;

/// How long the "copied" badge stays visible.
pub const COPIED_BADGE_DURATION: Duration = Duration::from_secs(2);

/// Main application state.
pub struct App {
    // =========================================================================
    // Shared State
    // =========================================================================
    /// Active mode.
    pub(crate) mode: Mode,
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Whether no API key was configured.
    pub(crate) api_key_missing: bool,
    /// Should quit flag.
    should_quit: bool,

    // =========================================================================
    // Sessions
    // =========================================================================
    /// Session of the three text modes.
    pub(crate) text_session: TextSession,
    /// Session of the poem mode.
    pub(crate) poem_session: PoemSession,
    /// Editable inputs.
    pub(crate) inputs: InputState,

    // =========================================================================
    // Requests
    // =========================================================================
    /// Remote text generator.
    generator: Arc<dyn TextGenerator>,
    /// Prompt builder bound to the configured model.
    builder: PromptBuilder,
    /// Last issued request number.
    request_counter: u64,

    // =========================================================================
    // Event Channels
    // =========================================================================
    /// Receiver for settled requests.
    event_rx: mpsc::Receiver<SessionEvent>,
    /// Sender cloned into request tasks.
    event_tx: mpsc::Sender<SessionEvent>,
    /// Shutdown signal for in-flight requests.
    shutdown_tx: watch::Sender<bool>,

    // =========================================================================
    // Clipboard
    // =========================================================================
    clipboard: Box<dyn ClipboardWriter>,
    /// When the last successful copy happened.
    pub(crate) copied_at: Option<Instant>,

    // =========================================================================
    // View State
    // =========================================================================
    /// Result panel scroll position.
    pub(crate) result_scroll: ScrollState,
    /// Dynamic layout dimensions.
    pub(crate) layout: LayoutState,
}

impl App {
    /// Creates the application.
    ///
    /// The generator and clipboard are injected so tests can substitute them.
    #[must_use]
    pub fn new(
        config: &Config,
        generator: Arc<dyn TextGenerator>,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        let (shutdown_tx, _shutdown_rx) = watch::channel(false);
        let mode = config.initial_mode;

        if config.client.api_key.is_none() {
            warn!("no API key configured; requests will fail");
        }

        Self {
            mode,
            theme: Theme::default(),
            api_key_missing: config.client.api_key.is_none(),
            should_quit: false,
            text_session: TextSession::default(),
            poem_session: PoemSession::default(),
            inputs: InputState::new(mode),
            generator,
            builder: PromptBuilder::new(config.client.model.clone()),
            request_counter: 0,
            event_rx,
            event_tx,
            shutdown_tx,
            clipboard,
            copied_at: None,
            result_scroll: ScrollState::default(),
            layout: LayoutState::default(),
        }
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Active mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Lifecycle of the active mode's session.
    #[must_use]
    pub const fn active_lifecycle(&self) -> &Lifecycle {
        if self.mode.is_text_mode() {
            &self.text_session.lifecycle
        } else {
            &self.poem_session.lifecycle
        }
    }

    /// True while the active session waits for the model.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.active_lifecycle().is_loading()
    }

    /// True while the "copied" badge should be shown.
    #[must_use]
    pub fn copied_badge_visible(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_BADGE_DURATION)
    }

    /// Signals in-flight requests to stop.
    ///
    /// Uses `send_modify` so the value is stored even with no receivers.
    pub fn trigger_shutdown(&self) {
        self.shutdown_tx.send_modify(|v| *v = true);
    }

    /// Requests exit, abandoning in-flight requests.
    pub(crate) fn quit(&mut self) {
        self.trigger_shutdown();
        self.should_quit = true;
    }

    /// Calculates and caches the layout for this frame.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        self.layout.app = calculate_app_layout(terminal_area, self.mode);
    }

    // =========================================================================
    // Mode Switching
    // =========================================================================

    /// Switches to `mode`, resetting both sessions and the inputs.
    ///
    /// Selecting the active mode again also resets. A request still in flight
    /// keeps running; its result is dropped on arrival.
    pub fn switch_mode(&mut self, mode: Mode) {
        debug!(from = ?self.mode, to = ?mode, "switching mode");
        self.mode = mode;
        self.text_session = TextSession::default();
        self.poem_session = PoemSession::default();
        self.inputs.reset(mode);
        self.result_scroll.reset();
        self.copied_at = None;
    }

    /// Switches to the next mode.
    pub fn cycle_mode(&mut self) {
        self.switch_mode(self.mode.next());
    }

    // =========================================================================
    // Submitting
    // =========================================================================

    /// Submits the active form.
    ///
    /// Validation failures are shown in the session; a submit while loading
    /// is ignored.
    pub fn submit(&mut self) {
        let generation = self.request_counter + 1;
        let submitted = if self.mode.is_text_mode() {
            self.text_session.submit(self.mode, generation)
        } else {
            self.poem_session.submit(generation)
        };

        match submitted {
            Ok((ticket, input)) => {
                self.request_counter = generation;
                self.result_scroll.reset();
                self.copied_at = None;
                info!(mode = ?ticket.mode, generation, "submitting request");
                spawn_request(
                    Arc::clone(&self.generator),
                    self.builder.clone(),
                    input,
                    ticket,
                    self.event_tx.clone(),
                    self.shutdown_tx.subscribe(),
                );
            }
            Err(SubmitRejected::AlreadyLoading) => {
                debug!("submit ignored while loading");
            }
            Err(SubmitRejected::Invalid(error)) => {
                self.result_scroll.reset();
                debug!(message = %error.message, "submit rejected by validation");
            }
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Applies pending settled requests.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Applies one settled request to the session it belongs to.
    pub(crate) fn apply_event(&mut self, event: SessionEvent) {
        let SessionEvent::Settled { ticket, result } = event;
        let succeeded = result.is_ok();

        let applied = if ticket.mode != self.mode {
            false
        } else if ticket.mode.is_text_mode() {
            self.text_session.lifecycle.settle(ticket, result)
        } else {
            self.poem_session.lifecycle.settle(ticket, result)
        };

        if applied {
            info!(
                mode = ?ticket.mode,
                generation = ticket.generation,
                succeeded,
                "request settled"
            );
            self.result_scroll.reset();
        } else {
            debug!(mode = ?ticket.mode, generation = ticket.generation, "dropping stale result");
        }
    }

    /// Periodic housekeeping.
    pub fn tick(&mut self) {
        if self.copied_at.is_some() && !self.copied_badge_visible() {
            self.copied_at = None;
        }
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    /// Text the copy action would place on the clipboard.
    #[must_use]
    pub fn copyable_output(&self) -> Option<&str> {
        let lifecycle = self.active_lifecycle();
        let output = lifecycle.output();
        (!lifecycle.is_loading() && lifecycle.error().is_none() && !output.is_empty())
            .then_some(output)
    }

    /// Copies the current output. Failures are logged, not shown.
    pub fn copy_output(&mut self) {
        let Some(text) = self.copyable_output().map(ToString::to_string) else {
            return;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                self.copied_at = Some(Instant::now());
                debug!(chars = text.chars().count(), "copied output");
            }
            Err(e) => warn!(error = %e, "copy failed"),
        }
    }
}
