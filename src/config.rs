//! Environment-sourced configuration, loaded once at startup.
//!
//! The poll loop and its collaborators never read the environment themselves;
//! they receive this struct (or pieces of it) at construction time.

use std::env;
use std::time::Duration;

use crate::error::VigilError;

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

#[derive(Clone, Debug)]
pub struct Config {
    /// Token for the review API's `Authorization: OAuth <token>` header.
    pub api_token: String,
    /// Telegram bot token used to authenticate `sendMessage` calls.
    pub bot_token: String,
    /// Destination chat for every outbound notification.
    pub chat_id: String,
    /// Review API endpoint. Overridable so tests never hit the real service.
    pub endpoint: String,
    /// Pause between poll cycles, applied whether the prior cycle succeeded,
    /// found nothing new, or failed.
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, VigilError> {
        let api_token = required("REVIEW_API_TOKEN")?;
        let bot_token = required("TELEGRAM_BOT_TOKEN")?;
        let chat_id = required("TELEGRAM_CHAT_ID")?;

        let endpoint = env::var("VIGIL_ENDPOINT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let poll_interval = env::var("VIGIL_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));

        Ok(Config {
            api_token,
            bot_token,
            chat_id,
            endpoint,
            poll_interval,
        })
    }
}

/// Fetch a required variable. Empty or whitespace-only values count as unset
/// so a blank line in a unit file cannot sneak past the startup check.
fn required(name: &'static str) -> Result<String, VigilError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(VigilError::MissingConfig(name))
}
