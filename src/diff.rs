use std::collections::HashSet;

use crate::crawler::models::Listing;

/// Splits this run's listings against the saved history.
///
/// Returns the listings whose id has never been seen (feed order kept,
/// duplicates within one response both reported) plus the updated id
/// list to persist: the saved ids followed by every current id not
/// already present. The result is always a superset of `saved`.
pub fn diff_listings(current: &[Listing], saved: &[String]) -> (Vec<Listing>, Vec<String>) {
    let saved_set: HashSet<&str> = saved.iter().map(String::as_str).collect();

    let new_items: Vec<Listing> = current
        .iter()
        .filter(|item| !saved_set.contains(item.id.as_str()))
        .cloned()
        .collect();

    let mut updated: Vec<String> = saved.to_vec();
    let mut known: HashSet<String> = saved.iter().cloned().collect();
    for item in current {
        if known.insert(item.id.clone()) {
            updated.push(item.id.clone());
        }
    }

    (new_items, updated)
}
