use std::fs;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::crawler::{fetcher, parser};
use crate::diff;
use crate::notifier::{self, Notifier};
use crate::storage::SeenStore;

/// One poll of the feed: fetch, extract, diff against the saved
/// history, notify about anything new, persist the enlarged history.
pub struct WatchService {
    cfg: Config,
    store: SeenStore,
    notifier: Notifier,
}

impl WatchService {
    pub fn new(cfg: Config) -> Self {
        let store = SeenStore::new(&cfg.data_file);
        let notifier = Notifier::new(cfg.telegram.clone());
        Self {
            cfg,
            store,
            notifier,
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let api_url = self.cfg.api_url.trim();
        if api_url.is_empty() || !api_url.starts_with("http") {
            error!("API URL is required and must start with http");
            return Ok(());
        }

        if self.cfg.clean {
            self.store.clear()?;
            info!("Seen-listings history cleared");
        }

        info!(url = api_url, "Starting feed poll");

        let client = fetcher::build_client();
        let feed = match fetcher::fetch_feed(&client, api_url).await {
            Ok(feed) => feed,
            Err(e) => {
                error!(error = %e, "Failed to retrieve feed data");
                return Ok(());
            }
        };

        let current = parser::extract_listings(feed);
        let saved = self.store.load();

        let (new_items, updated_ids) = diff::diff_listings(&current, &saved);

        if new_items.is_empty() {
            info!("No new listings found");
            return Ok(());
        }

        info!(count = new_items.len(), "Found new listings");

        let message = notifier::format_message(&new_items);
        if let Err(e) = self.notifier.send(&message).await {
            // Dedup state is still persisted below so a flaky delivery
            // does not cause a re-notification next run.
            warn!(error = %e, "Failed to send Telegram notification");
        }

        self.store.save(&updated_ids)?;
        self.touch_marker()?;

        Ok(())
    }

    // Zero-length flag file; its existence tells the commit/push
    // automation that the history file changed.
    fn touch_marker(&self) -> anyhow::Result<()> {
        fs::write(&self.cfg.marker_file, "")?;
        Ok(())
    }
}
