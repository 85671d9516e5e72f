//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::core::{DEFAULT_BASE_URL, DEFAULT_MODEL, Mode};

/// Qalam - Arabic writing assistant in the terminal
///
/// Spellchecks Arabic text, restyles it for the Roqaa script, suggests emoji,
/// and writes short poems for a named person, using a hosted Gemini model.
#[derive(Parser, Debug)]
#[command(name = "qalam", version, about, long_about = None)]
pub struct Args {
    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API host
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Mode selected at startup
    #[arg(long, value_enum, default_value_t = StartMode::Spellcheck)]
    pub mode: StartMode,

    /// Log file (defaults to qalam.log in the system temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Mode names accepted by `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartMode {
    Spellcheck,
    Roqaa,
    Emoji,
    Poem,
}

impl From<StartMode> for Mode {
    fn from(mode: StartMode) -> Self {
        match mode {
            StartMode::Spellcheck => Self::Spellcheck,
            StartMode::Roqaa => Self::Roqaa,
            StartMode::Emoji => Self::Emoji,
            StartMode::Poem => Self::Poem,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["qalam"]).unwrap();
        assert_eq!(args.model, DEFAULT_MODEL);
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
        assert_eq!(args.mode, StartMode::Spellcheck);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn mode_flag_maps_to_mode() {
        let args = Args::try_parse_from(["qalam", "--mode", "poem"]).unwrap();
        assert_eq!(Mode::from(args.mode), Mode::Poem);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["qalam", "--mode", "haiku"]).is_err());
    }
}
