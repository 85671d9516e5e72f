//! Text input, poem form, and paste tests.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::helpers::*;
use crate::app::*;
use crate::core::{Gender, Mode, PoemLanguage, SessionPhase};

// =============================================================================
// Text Modes
// =============================================================================

#[test]
fn typing_updates_the_text_session() {
    let (mut app, _generator) = test_app(Mode::Spellcheck, "unused");

    type_text(&mut app, "مرحبا");

    assert_eq!(app.inputs.text(), "مرحبا");
    assert_eq!(app.text_session.input(), "مرحبا");
    assert_eq!(app.active_lifecycle().phase(), SessionPhase::Ready);
}

#[test]
fn deleting_all_text_returns_to_idle() {
    let (mut app, _generator) = test_app(Mode::Spellcheck, "unused");
    type_text(&mut app, "اب");

    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Backspace));

    assert_eq!(app.text_session.input(), "");
    assert_eq!(app.active_lifecycle().phase(), SessionPhase::Idle);
}

#[test]
fn shift_and_alt_enter_insert_newlines() {
    let (mut app, generator) = test_app(Mode::Emoji, "unused");
    type_text(&mut app, "ا");
    app.handle_key(enter_key(KeyModifiers::SHIFT));
    type_text(&mut app, "ب");
    app.handle_key(enter_key(KeyModifiers::ALT));
    type_text(&mut app, "ج");

    assert_eq!(app.text_session.input(), "ا\nب\nج");
    assert_eq!(app.active_lifecycle().phase(), SessionPhase::Ready);
    assert_eq!(generator.calls(), 0);
}

#[test]
fn ctrl_j_inserts_newline() {
    let (mut app, _generator) = test_app(Mode::Roqaa, "unused");
    type_text(&mut app, "ا");
    app.handle_key(ctrl_key('j'));
    type_text(&mut app, "ب");

    assert_eq!(app.inputs.text(), "ا\nب");
}

// =============================================================================
// Paste
// =============================================================================

#[test]
fn paste_inserts_normalized_text() {
    let (mut app, _generator) = test_app(Mode::Spellcheck, "unused");

    app.handle_paste("سطر أول\r\nسطر ثان\rثالث");

    assert_eq!(app.text_session.input(), "سطر أول\nسطر ثان\nثالث");
    assert_eq!(app.active_lifecycle().phase(), SessionPhase::Ready);
}

#[test]
fn paste_at_cursor_keeps_surrounding_text() {
    let (mut app, _generator) = test_app(Mode::Spellcheck, "unused");
    type_text(&mut app, "اب");
    app.handle_key(key(KeyCode::Left));

    app.handle_paste("ج");

    assert_eq!(app.text_session.input(), "اجب");
}

#[test]
fn paste_into_poem_name_is_single_line() {
    let (mut app, _generator) = test_app(Mode::Poem, "unused");

    app.handle_paste("سارة\nأحمد");

    assert_eq!(app.inputs.name(), "سارة أحمد");
    assert_eq!(app.poem_session.name(), "سارة أحمد");
}

#[test]
fn paste_on_poem_choice_is_ignored() {
    let (mut app, _generator) = test_app(Mode::Poem, "unused");
    app.handle_key(key(KeyCode::Tab));

    app.handle_paste("سارة");

    assert_eq!(app.poem_session.name(), "");
}

#[test]
fn empty_paste_is_ignored() {
    let (mut app, _generator) = test_app(Mode::Spellcheck, "unused");

    app.handle_paste("");

    assert_eq!(app.active_lifecycle().phase(), SessionPhase::Idle);
}

// =============================================================================
// Poem Form
// =============================================================================

#[test]
fn tab_cycles_poem_focus() {
    let (mut app, _generator) = test_app(Mode::Poem, "unused");
    assert_eq!(app.inputs.poem_focus, PoemField::Name);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.inputs.poem_focus, PoemField::Gender);
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.inputs.poem_focus, PoemField::Emojis);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.inputs.poem_focus, PoemField::Name);

    app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    assert_eq!(app.inputs.poem_focus, PoemField::Emojis);
}

#[test]
fn choices_toggle_with_space_and_arrows() {
    let (mut app, _generator) = test_app(Mode::Poem, "unused");

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.poem_session.gender(), Some(Gender::Male));
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.poem_session.gender(), Some(Gender::Female));

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.poem_session.language(), PoemLanguage::Standard);
    app.handle_key(char_key(' '));
    assert_eq!(app.poem_session.language(), PoemLanguage::Vernacular);

    app.handle_key(key(KeyCode::Tab));
    assert!(!app.poem_session.include_emojis());
    app.handle_key(char_key(' '));
    assert!(app.poem_session.include_emojis());
}

#[test]
fn letters_on_a_choice_field_do_nothing() {
    let (mut app, _generator) = test_app(Mode::Poem, "unused");
    app.handle_key(key(KeyCode::Tab));

    type_text(&mut app, "abc");

    assert_eq!(app.poem_session.gender(), None);
    assert_eq!(app.poem_session.name(), "");
}

#[test]
fn name_field_stays_on_one_line() {
    let (mut app, _generator) = test_app(Mode::Poem, "unused");
    type_text(&mut app, "سارة");

    app.handle_key(ctrl_key('j'));
    app.handle_key(ctrl_key('m'));
    type_text(&mut app, " علي");

    assert_eq!(app.inputs.name.lines().len(), 1);
    assert_eq!(app.poem_session.name(), "سارة علي");
}

#[test]
fn poem_becomes_ready_with_name_and_gender() {
    let (mut app, _generator) = test_app(Mode::Poem, "unused");
    type_text(&mut app, "سارة");
    assert_eq!(app.active_lifecycle().phase(), SessionPhase::Idle);

    app.toggle_poem_choice(PoemField::Gender);

    assert_eq!(app.active_lifecycle().phase(), SessionPhase::Ready);
}

// =============================================================================
// Result Scrolling
// =============================================================================

#[test]
fn scroll_keys_move_within_long_output() {
    let (mut app, _generator) = test_app(Mode::Roqaa, "unused");
    render_app(&mut app, 80, 30).unwrap();
    let long_output = (0..60).map(|i| format!("سطر {i}")).collect::<Vec<_>>();
    app.text_session.lifecycle = settled_lifecycle(&long_output.join("\n"));

    app.handle_key(key(KeyCode::PageDown));
    assert_eq!(app.result_scroll.offset, 10);
    app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL));
    assert_eq!(app.result_scroll.offset, 11);
    app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL));
    app.handle_key(key(KeyCode::PageUp));
    assert_eq!(app.result_scroll.offset, 0);

    // 60 lines in a 15 line viewport
    app.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::CONTROL));
    assert_eq!(app.result_scroll.offset, 45);
    app.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::CONTROL));
    assert_eq!(app.result_scroll.offset, 0);
}

#[test]
fn scroll_keys_do_not_move_short_content() {
    let (mut app, _generator) = test_app(Mode::Roqaa, "unused");
    render_app(&mut app, 80, 30).unwrap();

    app.handle_key(key(KeyCode::PageDown));

    assert_eq!(app.result_scroll.offset, 0);
}

/// A lifecycle that finished with `output`.
fn settled_lifecycle(output: &str) -> crate::core::Lifecycle {
    let ticket = crate::core::RequestTicket {
        mode: Mode::Roqaa,
        generation: 1,
    };
    let mut lifecycle = crate::core::Lifecycle::default();
    lifecycle.begin(ticket).unwrap();
    assert!(lifecycle.settle(ticket, Ok(output.to_string())));
    lifecycle
}
