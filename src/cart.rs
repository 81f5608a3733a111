// cart.rs

use crate::item::{ItemId, LineItem};
use crate::quantity::Qty;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{trace, warn};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    #[error("failed to find item {} in shopping cart", .item_id.value())]
    NotFound { item_id: ItemId },
}

/// The line items of one shopping session, keyed by item identifier.
///
/// A cart is an owned value: whoever holds it has exclusive access, so no
/// locking exists anywhere in this type. At most one line item exists per
/// distinct identifier.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: HashMap<ItemId, LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Creates an empty cart sized for roughly `capacity` distinct items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
        }
    }

    /// Adds one unit of `item_id` to the cart.
    ///
    /// The first add of an identifier inserts a fresh line item with a
    /// quantity of one; every later add increments that entry in place.
    pub fn add(&mut self, item_id: ItemId) {
        match self.items.get_mut(&item_id) {
            Some(item) => {
                item.increment();
                trace!(
                    item_id = item_id.value(),
                    qty = item.qty().value(),
                    "incremented line item"
                );
            }
            None => {
                self.items.insert(item_id, LineItem::new(item_id));
                trace!(item_id = item_id.value(), "inserted line item");
            }
        }
    }

    /// Removes the line item for `item_id`, returning the quantity it held.
    ///
    /// A remove for an identifier with no entry reports
    /// [`CartError::NotFound`] and leaves every other entry untouched.
    pub fn remove(&mut self, item_id: ItemId) -> Result<Qty, CartError> {
        match self.items.remove(&item_id) {
            Some(item) => {
                trace!(
                    item_id = item_id.value(),
                    qty = item.qty().value(),
                    "removed line item"
                );
                Ok(item.qty())
            }
            None => {
                warn!(item_id = item_id.value(), "failed to find item in shopping cart");
                Err(CartError::NotFound { item_id })
            }
        }
    }

    /// Gets the quantity held for `item_id`, if any.
    #[inline]
    pub fn qty(&self, item_id: ItemId) -> Option<Qty> {
        self.items.get(&item_id).map(|item| item.qty())
    }

    #[inline]
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.items.contains_key(&item_id)
    }

    /// Number of distinct line items in the cart.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the line items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }

    /// Drops every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_add_accumulates_qty() {
        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add(ItemId(3));
        }
        assert_eq!(cart.qty(ItemId(3)), Some(Qty(4)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_distinct_ids_get_independent_entries() {
        let mut cart = Cart::new();
        cart.add(ItemId(1));
        cart.add(ItemId(2));
        assert_eq!(cart.qty(ItemId(1)), Some(Qty(1)));
        assert_eq!(cart.qty(ItemId(2)), Some(Qty(1)));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_returns_qty_and_drops_entry() {
        let mut cart = Cart::new();
        cart.add(ItemId(9));
        cart.add(ItemId(9));
        cart.add(ItemId(9));

        let removed = cart.remove(ItemId(9));
        assert_eq!(removed, Ok(Qty(3)));
        assert!(!cart.contains(ItemId(9)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_id_leaves_cart_intact() {
        let mut cart = Cart::new();
        cart.add(ItemId(1));
        cart.add(ItemId(2));
        cart.add(ItemId(2));

        let result = cart.remove(ItemId(42));
        assert!(matches!(result, Err(CartError::NotFound { item_id: ItemId(42) })));

        // Every other entry survives the miss.
        assert_eq!(cart.qty(ItemId(1)), Some(Qty(1)));
        assert_eq!(cart.qty(ItemId(2)), Some(Qty(2)));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_double_remove_reports_not_found() {
        let mut cart = Cart::new();
        cart.add(ItemId(5));

        assert_eq!(cart.remove(ItemId(5)), Ok(Qty(1)));
        assert!(matches!(
            cart.remove(ItemId(5)),
            Err(CartError::NotFound { item_id: ItemId(5) })
        ));
    }

    #[test]
    fn test_remove_on_empty_cart_reports_not_found() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.remove(ItemId(1)),
            Err(CartError::NotFound { .. })
        ));
    }

    #[test]
    fn test_clear_empties_the_cart() {
        let mut cart = Cart::with_capacity(8);
        cart.add(ItemId(1));
        cart.add(ItemId(2));
        cart.clear();
        assert!(cart.is_empty());
        assert!(matches!(
            cart.remove(ItemId(1)),
            Err(CartError::NotFound { .. })
        ));
    }

    #[test]
    fn test_not_found_error_names_the_item() {
        let err = CartError::NotFound { item_id: ItemId(42) };
        assert_eq!(err.to_string(), "failed to find item 42 in shopping cart");
    }
}
