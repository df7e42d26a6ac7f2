use std::time::Duration;

use anyhow::{bail, Context};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};
use reqwest::Client;
use serde_json::Value;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// The feed gateway rejects obvious bots, so the client presents itself
// as a regular browser session coming from the site itself.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub fn build_client() -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("he-IL,he;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    headers.insert(REFERER, HeaderValue::from_static("https://www.yad2.co.il/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.yad2.co.il"));

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to build http client")
}

/// Single GET against the search API, no retry. Any failure shape
/// (network, non-2xx, empty body, non-JSON body) comes back as an error
/// for the caller to log and abort on.
pub async fn fetch_feed(client: &Client, url: &str) -> anyhow::Result<Value> {
    let res = client
        .get(url)
        .send()
        .await
        .context("feed request failed")?;

    let status = res.status();
    let body = res
        .text()
        .await
        .context("failed to read feed response body")?;

    if !status.is_success() {
        bail!("feed request returned status {status}");
    }

    if body.trim().is_empty() {
        bail!("empty response from feed (status {status})");
    }

    serde_json::from_str(&body).map_err(|e| {
        let snippet: String = body.chars().take(200).collect();
        anyhow::anyhow!("error decoding feed JSON (status {status}): {e}; body starts with {snippet:?}")
    })
}
