//! Contents inventory parsing.
//!
//! The contents workflow asks the model for bare `Item|Qty` lines with no
//! header, one per recognized item. The same tolerance rules as the scope
//! extractor apply: lines that do not look like data are dropped silently.

use log::debug;
use serde::{Deserialize, Serialize};

/// A single personal-property item recognized in room photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item description, e.g. `Flat screen TV`.
    pub item: String,
    /// Free-text count, e.g. `2`.
    pub quantity: String,
}

/// Parses `Item|Qty` lines into inventory records, in order of appearance.
///
/// Lines without a pipe, or with an empty item field, are discarded. Never
/// fails; an unusable response yields an empty list.
pub fn parse_inventory(raw: &str) -> Vec<InventoryItem> {
    let items: Vec<InventoryItem> = raw.lines().filter_map(parse_line).collect();
    debug!("extracted {} inventory items", items.len());
    items
}

fn parse_line(line: &str) -> Option<InventoryItem> {
    let (item, rest) = line.trim().split_once('|')?;
    let item = item.trim();
    if item.is_empty() {
        return None;
    }

    // Only the first field after the item counts as the quantity.
    let quantity = rest.split('|').next().unwrap_or("").trim();

    Some(InventoryItem {
        item: item.to_string(),
        quantity: quantity.to_string(),
    })
}
