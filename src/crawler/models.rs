use serde::Deserialize;
use serde_json::Value;

/// One classified rental ad, rebuilt from the feed on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// The provider's opaque listing token.
    pub id: String,
    pub url: String,
    /// Human-readable summary: street, city, room count, price.
    pub details: String,
}

/// Expected feed payload shape. Every field is optional with a default
/// so a partial payload still deserializes; unknown fields are ignored.
///
/// `{ data: { markers: [ { token, address: { street: { text },
/// city: { text } }, price, additionalDetails: { roomsCount } } ] } }`
#[derive(Debug, Default, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub data: Option<FeedData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedData {
    #[serde(default)]
    pub markers: Vec<Marker>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Marker {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    /// Either a JSON number or a string in the wild.
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default, rename = "additionalDetails")]
    pub additional_details: Option<AdditionalDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<LabeledText>,
    #[serde(default)]
    pub city: Option<LabeledText>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LabeledText {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdditionalDetails {
    #[serde(default, rename = "roomsCount")]
    pub rooms_count: Option<Value>,
}
