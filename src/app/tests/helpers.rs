//! Shared test utilities for the app module.
//!
//! - `FakeGenerator` - scripted [`TextGenerator`] that counts calls
//! - `RecordingClipboard` - [`ClipboardWriter`] that keeps what was copied
//! - `test_app` - `App` wired to both fakes
//! - `settle_next` - awaits the next settled request and applies it
//! - `render_app` / `screen_text` - `TestBackend` rendering
//! - Key event helpers (`char_key`, `enter_key`, `ctrl_key`, `key`)

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::TestBackend};

use crate::app::{App, ClipboardWriter};
use crate::config::Config;
use crate::core::{ClientConfig, GenerateError, ModelRequest, Mode, TextGenerator};

/// How long `settle_next` waits for a request task.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Generator answering every request with the same result.
pub struct FakeGenerator {
    result: Result<String, GenerateError>,
    delay: Option<Duration>,
    call_count: AtomicU32,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    /// Answers with `text`.
    pub fn answering(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            delay: None,
            call_count: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails with `error`.
    pub fn failing(error: GenerateError) -> Self {
        Self {
            result: Err(error),
            ..Self::answering("")
        }
    }

    /// Waits `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests received.
    pub fn calls(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Prompts received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, request: &ModelRequest) -> Result<String, GenerateError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Clipboard that records copied text, or fails every copy.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    /// Copied texts, in order.
    pub copied: Arc<Mutex<Vec<String>>>,
    /// Whether every copy fails.
    pub fail: bool,
}

impl ClipboardWriter for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Configuration with a test key and `mode` selected.
pub fn test_config(mode: Mode) -> Config {
    Config {
        client: ClientConfig {
            api_key: Some("test-key".to_string()),
            ..ClientConfig::default()
        },
        initial_mode: mode,
        log_file: PathBuf::from("qalam-test.log"),
    }
}

/// Creates an `App` in `mode` backed by `generator` and `clipboard`.
pub fn app_with(
    mode: Mode,
    generator: Arc<FakeGenerator>,
    clipboard: RecordingClipboard,
) -> App {
    App::new(&test_config(mode), generator, Box::new(clipboard))
}

/// Creates an `App` in `mode` whose generator answers with `answer`.
pub fn test_app(mode: Mode, answer: &str) -> (App, Arc<FakeGenerator>) {
    let generator = Arc::new(FakeGenerator::answering(answer));
    let app = app_with(mode, Arc::clone(&generator), RecordingClipboard::default());
    (app, generator)
}

/// Awaits the next settled request and applies it.
///
/// # Panics
///
/// Panics if nothing settles within two seconds.
pub async fn settle_next(app: &mut App) {
    let event = tokio::time::timeout(SETTLE_TIMEOUT, app.event_rx.recv())
        .await
        .expect("request did not settle in time")
        .expect("event channel closed");
    app.apply_event(event);
}

/// Creates a [`KeyEvent`] for a key with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for the Enter key with specified modifiers.
pub fn enter_key(modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, modifiers)
}

/// Creates a [`KeyEvent`] for Ctrl + `c`.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Types `text` one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Renders the app to a `TestBackend` terminal.
///
/// Calls `update_layout()` before rendering, as the main loop does.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Result<Terminal<TestBackend>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    app.update_layout(Rect::new(0, 0, width, height));
    terminal.draw(|f| app.render(f))?;
    Ok(terminal)
}

/// All rows of the rendered screen joined with newlines.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
