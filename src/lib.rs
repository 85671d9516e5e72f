//! `Qalam` - Arabic writing assistant for the terminal
//!
//! Spellchecks Arabic text, restyles it for the Roqaa script, suggests emoji,
//! and writes short poems for a named person, using a hosted Gemini model.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod tui;
