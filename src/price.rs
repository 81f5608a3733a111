// price.rs

use crate::quantity::Qty;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// A non-negative amount in the smallest currency unit.
#[derive(Debug, Default, Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Serialize, Deserialize)]
pub struct Price(pub u32);

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, other: Price) {
        self.0 += other.0;
    }
}

impl Mul<Qty> for Price {
    type Output = Price;

    /// Extends a unit price over a line item's quantity.
    fn mul(self, qty: Qty) -> Price {
        Price(self.0 * qty.value())
    }
}

impl Price {
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
