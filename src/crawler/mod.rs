//! Feed access: HTTP fetch plus extraction of listings from the
//! returned JSON payload.

pub mod fetcher;
pub mod models;
pub mod parser;
