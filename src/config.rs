use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

/// Seen-listings history, relative to the working directory.
pub const DATA_FILE: &str = "data/rentals.json";
/// Empty flag file picked up by the commit/push automation.
pub const MARKER_FILE: &str = "push_me";

#[derive(Debug, Clone)]
pub struct TelegramAuth {
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub clean: bool,
    pub data_file: PathBuf,
    pub marker_file: PathBuf,
    pub telegram: Option<TelegramAuth>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            api_url: cli.api_url,
            clean: cli.clean,
            data_file: PathBuf::from(DATA_FILE),
            marker_file: PathBuf::from(MARKER_FILE),
            telegram: telegram_from_env(),
        }
    }
}

/// Both variables must be present and non-empty for real delivery;
/// otherwise the notifier falls back to printing the message.
fn telegram_from_env() -> Option<TelegramAuth> {
    let token = env::var("API_TOKEN").ok().filter(|v| !v.is_empty())?;
    let chat_id = env::var("CHAT_ID").ok().filter(|v| !v.is_empty())?;
    Some(TelegramAuth { token, chat_id })
}
