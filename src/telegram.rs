//! Telegram Bot API client: the production [`Messenger`].
//!
//! Delivery is best-effort. A rejected send surfaces as a `Delivery` error;
//! the poll loop logs it and moves on without trying a second channel.

use reqwest::blocking::Client;
use serde::Serialize;

use crate::api::blocking_client;
use crate::config::Config;
use crate::error::VigilError;
use crate::monitor::Messenger;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

pub struct TelegramBot {
    client: Client,
    send_url: String,
}

impl TelegramBot {
    pub fn new(config: &Config) -> Result<Self, VigilError> {
        Ok(TelegramBot {
            client: blocking_client("vigil")?,
            send_url: format!("{TELEGRAM_API_BASE}/bot{}/sendMessage", config.bot_token),
        })
    }
}

impl Messenger for TelegramBot {
    fn send(&self, chat_id: &str, text: &str) -> Result<(), VigilError> {
        let response = self
            .client
            .post(&self.send_url)
            .json(&SendMessage { chat_id, text })
            .send()
            .map_err(|e| VigilError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(VigilError::Delivery(format!(
                "telegram returned HTTP {}: {}",
                status.as_u16(),
                detail.trim()
            )));
        }
        Ok(())
    }
}
