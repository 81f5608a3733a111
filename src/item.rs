// item.rs

use crate::quantity::Qty;
use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog item.
///
/// Assigned outside this crate; the cart treats it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ItemId(pub i64);

impl ItemId {
    #[inline]
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A single cart entry: one item identifier and the units held of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    item_id: ItemId,
    qty: Qty,
}

impl LineItem {
    /// Creates a line item holding the first unit of `item_id`.
    #[inline]
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            qty: Qty(1),
        }
    }

    /// Gets the identifier this line item tracks.
    #[inline]
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// Gets the number of units currently held.
    #[inline]
    pub fn qty(&self) -> Qty {
        self.qty
    }

    /// Adds one unit to this line item.
    #[inline]
    pub fn increment(&mut self) {
        self.qty += Qty(1);
    }
}
