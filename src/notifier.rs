use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;
use tracing::info;

use crate::config::TelegramAuth;
use crate::crawler::models::Listing;

/// Builds the notification body: a count header, then one
/// `details` + `url` block per listing, blocks separated by a blank
/// line.
pub fn format_message(new_items: &[Listing]) -> String {
    let mut blocks = Vec::with_capacity(new_items.len() + 1);
    blocks.push(format!("Found {} new listing(s):", new_items.len()));
    for item in new_items {
        blocks.push(format!("{}\n{}", item.details, item.url));
    }
    blocks.join("\n\n")
}

pub struct Notifier {
    auth: Option<TelegramAuth>,
    client: Client,
}

impl Notifier {
    /// Credentials are injected by the orchestrator; `None` switches
    /// delivery to a local print.
    pub fn new(auth: Option<TelegramAuth>) -> Self {
        Self {
            auth,
            client: Client::new(),
        }
    }

    /// Sends one message to the configured chat. Delivery failures are
    /// returned to the caller, who treats them as non-fatal; missing
    /// credentials are not a failure at all.
    pub async fn send(&self, message: &str) -> Result<()> {
        let Some(auth) = &self.auth else {
            info!("Telegram credentials not found, skipping notification");
            println!("Message would have been:\n{message}");
            return Ok(());
        };

        let url = format!("https://api.telegram.org/bot{}/sendMessage", auth.token);
        let payload = json!({
            "chat_id": auth.chat_id,
            "text": message,
        });

        self.client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("telegram request failed")?
            .error_for_status()
            .context("telegram rejected the message")?;

        Ok(())
    }
}
