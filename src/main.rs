//! `Qalam` - Arabic writing assistant for the terminal
//!
//! Entry point for the application.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use qalam::app::{App, SystemClipboard};
use qalam::cli::Args;
use qalam::config::Config;
use qalam::core::{GeminiClient, TextGenerator};
use qalam::logging::init_file_logging;
use qalam::tui::TerminalEventGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(args);

    // The terminal belongs to the UI, so logs go to a file.
    if let Err(e) = init_file_logging(&config.log_file) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    info!(
        mode = ?config.initial_mode,
        model = %config.client.model,
        "starting qalam"
    );

    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::new(&config.client));

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    // Run the application
    let result = run_app(&mut terminal, &config, generator);

    // Restore the terminal
    ratatui::restore();

    info!("exiting");
    result
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    config: &Config,
    generator: Arc<dyn TextGenerator>,
) -> Result<()> {
    // Enable terminal event modes (bracketed paste, keyboard enhancement).
    // Must come after `ratatui::init`, which can reset terminal flags.
    let _event_guard = TerminalEventGuard::new();

    let mut app = App::new(config, generator, Box::new(SystemClipboard));

    loop {
        // Layout calculation happens inside the draw closure so it uses the
        // exact area being rendered.
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                // Bracketed paste (multi-line paste)
                Event::Paste(text) => {
                    debug!(
                        chars = text.chars().count(),
                        lines = text.lines().count(),
                        "paste event"
                    );
                    app.handle_paste(&text);
                }
                _ => {}
            }
        }

        // Apply settled requests
        app.process_events();

        // Expire the copy badge
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
