//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `helpers` - Shared test utilities (fake generator, clipboard, key events)
//! - `sessions` - Submitting, validation, loading guard, and mode switching
//! - `input` - Text input, poem form keys, and paste handling
//! - `results` - Result panel content and copying
//! - `ui` - Full-screen rendering

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod input;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod ui;
