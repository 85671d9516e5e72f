//! Runtime configuration resolved from CLI arguments and the environment.

use std::path::PathBuf;

use crate::cli::Args;
use crate::core::{ClientConfig, Mode};

/// Fallback environment variable for the API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default log file name, placed in the system temp directory.
pub const DEFAULT_LOG_FILE: &str = "qalam.log";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Model client settings.
    pub client: ClientConfig,
    /// Mode selected at startup.
    pub initial_mode: Mode,
    /// Where log output goes.
    pub log_file: PathBuf,
}

impl Config {
    /// Resolves the configuration from parsed arguments.
    ///
    /// A missing key is not an error here: the UI starts and every request
    /// reports the configuration failure instead.
    #[must_use]
    pub fn from_args(args: Args) -> Self {
        let api_key = resolve_api_key(
            args.api_key.as_deref(),
            std::env::var(GEMINI_API_KEY_ENV).ok().as_deref(),
        );
        Self {
            client: ClientConfig {
                api_key,
                model: args.model,
                base_url: args.base_url,
            },
            initial_mode: args.mode.into(),
            log_file: args
                .log_file
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE)),
        }
    }
}

/// Picks the first non-blank key, trimmed.
#[must_use]
pub fn resolve_api_key(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    [primary, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(ToString::to_string)
}
