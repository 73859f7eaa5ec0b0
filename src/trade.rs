//! Trade: one execution between a buy and a sell.

use std::fmt;

use crate::types::{OrderId, Price, Quantity};

/// Immutable execution record. The price is always the resting order's price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Trade {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    pub fn new(buy_order_id: OrderId, sell_order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            price,
            quantity,
        }
    }
}

/// Output record form: `buyId,sellId,price,tradedQty`.
impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.buy_order_id.0, self.sell_order_id.0, self.price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_comma_joined() {
        let trade = Trade::new(OrderId(100322), OrderId(100345), 5103, 7500);
        assert_eq!(trade.to_string(), "100322,100345,5103,7500");
    }

    #[test]
    fn equality_is_structural() {
        let a = Trade::new(OrderId(1), OrderId(2), 100, 10);
        assert_eq!(a, Trade::new(OrderId(1), OrderId(2), 100, 10));
        assert_ne!(a, Trade::new(OrderId(1), OrderId(2), 100, 11));
        assert_ne!(a, Trade::new(OrderId(2), OrderId(1), 100, 10));
    }

    #[test]
    fn negative_price_formats_with_sign() {
        let trade = Trade::new(OrderId(1), OrderId(2), -5, 3);
        assert_eq!(trade.to_string(), "1,2,-5,3");
    }
}
