use crate::item::ItemId;
use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display name returned for identifiers the catalog does not know.
pub const UNKNOWN_ITEM_NAME: &str = "bad id";

/// A priced, named entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub item_id: ItemId,
    pub price: Price,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(item_id: ItemId, price: Price, name: impl Into<String>) -> Self {
        Self {
            item_id,
            price,
            name: name.into(),
        }
    }
}

/// Read-only price and display-name lookup over a fixed set of items.
///
/// Lookups are total: an unknown identifier yields a zero price from
/// [`cost`](Catalog::cost) and [`UNKNOWN_ITEM_NAME`] from
/// [`name`](Catalog::name), never an error.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<ItemId, CatalogEntry>,
}

impl Default for Catalog {
    /// The built-in two-item table.
    fn default() -> Self {
        Self::with_entries(vec![
            CatalogEntry::new(ItemId(1), Price(10), "apple"),
            CatalogEntry::new(ItemId(2), Price(12), "banana"),
        ])
    }
}

impl Catalog {
    /// Builds a catalog over the given entries.
    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.item_id, entry))
                .collect(),
        }
    }

    /// Gets the configured price for `item_id`, or a zero price if unknown.
    #[inline]
    pub fn cost(&self, item_id: ItemId) -> Price {
        self.entries
            .get(&item_id)
            .map(|entry| entry.price)
            .unwrap_or_default()
    }

    /// Gets the configured display name for `item_id`, or the sentinel name
    /// if unknown.
    #[inline]
    pub fn name(&self, item_id: ItemId) -> &str {
        self.entries
            .get(&item_id)
            .map(|entry| entry.name.as_str())
            .unwrap_or(UNKNOWN_ITEM_NAME)
    }

    /// Gets the full entry for `item_id`, if the catalog knows it.
    #[inline]
    pub fn get(&self, item_id: ItemId) -> Option<&CatalogEntry> {
        self.entries.get(&item_id)
    }

    /// Number of entries in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
