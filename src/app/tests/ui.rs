//! Full-screen rendering tests.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::KeyModifiers;

use super::helpers::*;
use crate::app::*;
use crate::config::Config;
use crate::core::{ClientConfig, Mode};
use crate::tui::widgets::tab_label;

#[test]
fn screen_shows_header_tabs_and_idle_hint() -> Result<()> {
    let (mut app, _generator) = test_app(Mode::Spellcheck, "unused");

    let terminal = render_app(&mut app, 120, 30)?;
    let screen = screen_text(&terminal);

    assert!(screen.contains(Mode::Spellcheck.title()));
    for mode in Mode::all() {
        assert!(screen.contains(&tab_label(*mode)), "missing tab {mode:?}");
    }
    assert!(screen.contains(Mode::Spellcheck.idle_hint()));
    assert!(screen.contains("© "));
    Ok(())
}

#[test]
fn poem_screen_shows_form_rows() -> Result<()> {
    let (mut app, _generator) = test_app(Mode::Poem, "unused");
    app.toggle_poem_choice(PoemField::Gender);

    let terminal = render_app(&mut app, 120, 30)?;
    let screen = screen_text(&terminal);

    assert!(screen.contains(PoemField::Name.label()));
    assert!(screen.contains("(•) ذكر"));
    assert!(screen.contains("( ) أنثى"));
    assert!(screen.contains("(•) الفصحى"));
    assert!(screen.contains("[ ] إضافة إيموجي"));
    Ok(())
}

#[test]
fn missing_api_key_is_flagged_in_status_line() -> Result<()> {
    let config = Config {
        client: ClientConfig::default(),
        ..test_config(Mode::Roqaa)
    };
    let mut app = App::new(
        &config,
        Arc::new(FakeGenerator::answering("unused")),
        Box::new(RecordingClipboard::default()),
    );

    let terminal = render_app(&mut app, 120, 30)?;

    assert!(screen_text(&terminal).contains(MISSING_KEY_WARNING));
    Ok(())
}

#[test]
fn configured_key_has_no_warning() -> Result<()> {
    let (mut app, _generator) = test_app(Mode::Roqaa, "unused");

    let terminal = render_app(&mut app, 120, 30)?;

    assert!(!screen_text(&terminal).contains(MISSING_KEY_WARNING));
    Ok(())
}

#[test]
fn validation_error_is_rendered() -> Result<()> {
    let (mut app, _generator) = test_app(Mode::Emoji, "unused");
    app.handle_key(enter_key(KeyModifiers::NONE));

    let terminal = render_app(&mut app, 120, 30)?;
    let screen = screen_text(&terminal);

    assert!(screen.contains(Mode::Emoji.error_title()));
    assert!(screen.contains(Mode::Emoji.empty_input_message()));
    Ok(())
}

#[tokio::test]
async fn unchanged_spellcheck_renders_notice_and_badge() -> Result<()> {
    let (mut app, _generator) = test_app(Mode::Spellcheck, "مرحبا بكم");
    app.handle_paste("مرحبا بكم");
    app.submit();
    settle_next(&mut app).await;
    app.copied_at = Some(Instant::now());

    let terminal = render_app(&mut app, 120, 30)?;
    let screen = screen_text(&terminal);

    assert!(screen.contains(UNCHANGED_TITLE));
    assert!(screen.contains(UNCHANGED_MESSAGE));
    assert!(screen.contains(COPIED_BADGE));
    assert!(screen.contains(Mode::Spellcheck.copy_label()));
    Ok(())
}

#[test]
fn narrow_terminal_renders_every_mode() -> Result<()> {
    for mode in Mode::all() {
        let (mut app, _generator) = test_app(*mode, "unused");
        let terminal = render_app(&mut app, 60, 20)?;
        assert!(screen_text(&terminal).contains(&tab_label(Mode::Spellcheck)));
    }
    Ok(())
}
