use serde_json::Value;
use tracing::warn;

use crate::crawler::models::{FeedResponse, LabeledText, Listing, Marker};

const ITEM_URL_BASE: &str = "https://www.yad2.co.il/item/";

/// Walks the parsed feed payload and builds one `Listing` per marker
/// that carries a token. A payload that does not match the expected
/// shape yields an empty list. Input order is preserved and duplicate
/// tokens are kept; the seen-set union later collapses them.
pub fn extract_listings(feed: Value) -> Vec<Listing> {
    let response: FeedResponse = match serde_json::from_value(feed) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Feed payload did not match the expected shape");
            return Vec::new();
        }
    };

    let markers = match response.data {
        Some(data) => data.markers,
        None => return Vec::new(),
    };

    markers.iter().filter_map(listing_from_marker).collect()
}

fn listing_from_marker(marker: &Marker) -> Option<Listing> {
    let token = marker.token.as_deref().filter(|t| !t.is_empty())?;

    let address = marker.address.as_ref();
    let street = labeled_text(address.and_then(|a| a.street.as_ref()), "Unknown Street");
    let city = labeled_text(address.and_then(|a| a.city.as_ref()), "Unknown City");
    let price = value_text(marker.price.as_ref(), "N/A");
    let rooms = value_text(
        marker
            .additional_details
            .as_ref()
            .and_then(|d| d.rooms_count.as_ref()),
        "N/A",
    );

    Some(Listing {
        id: token.to_string(),
        url: format!("{ITEM_URL_BASE}{token}"),
        details: format!("{street}, {city} - {rooms} rooms - {price} NIS"),
    })
}

fn labeled_text(field: Option<&LabeledText>, default: &str) -> String {
    field
        .and_then(|f| f.text.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| default.to_string())
}

// Numbers are rendered as written in the JSON, strings taken verbatim
// even when empty; the default only covers an absent or null field.
fn value_text(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}
