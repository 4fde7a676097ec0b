//! Price value object.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A non-negative amount in whole currency units (no minor units).
///
/// Serialized as a bare JSON number.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_a_bare_number_on_the_wire() {
        let json = serde_json::to_string(&Price::new(7999)).unwrap();
        assert_eq!(json, "7999");

        let parsed: Price = serde_json::from_str("15000").unwrap();
        assert_eq!(parsed.amount(), 15000);
    }

    #[test]
    fn negative_and_fractional_amounts_are_rejected() {
        assert!(serde_json::from_str::<Price>("-1").is_err());
        assert!(serde_json::from_str::<Price>("12.5").is_err());
    }

    #[test]
    fn prices_order_by_amount() {
        assert!(Price::new(3999) < Price::new(4700));
        assert_eq!(Price::from(10).max(Price::from(7)), Price::new(10));
    }
}
