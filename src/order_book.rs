//! Single-instrument order book: bids and offers, price-time priority.
//!
//! Each side is one `Vec` kept in priority order: bids highest price first, offers
//! lowest price first, and arrival order within a price. Matching lives in
//! [`crate::matching`]; the book only knows how to place, expose and drop orders.

use crate::order::Order;
use crate::types::{OrderId, Price, Quantity, Side};

/// Single-instrument order book.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: Vec<Order>,
    offers: Vec<Order>,
}

/// Minimal representation of a resting order for snapshots.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RestingOrder {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub original_qty: Quantity,
    pub remaining_qty: Quantity,
    pub revealed_qty: Quantity,
    pub peak_size: Option<Quantity>,
}

impl From<&Order> for RestingOrder {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id(),
            side: order.side(),
            price: order.price(),
            original_qty: order.original_qty(),
            remaining_qty: order.remaining_qty(),
            revealed_qty: order.revealed_qty(),
            peak_size: order.peak_size(),
        }
    }
}

/// Both sides of the book in priority order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<RestingOrder>,
    pub offers: Vec<RestingOrder>,
}

/// Index at which a new offer at `price` goes: before the first strictly higher
/// price, so it queues behind every offer already at its price.
pub fn insert_offer_price_index(offers: &[Order], price: Price) -> usize {
    offers
        .iter()
        .position(|o| price < o.price())
        .unwrap_or(offers.len())
}

/// Index at which a new bid at `price` goes: before the first strictly lower
/// price, so it queues behind every bid already at its price.
pub fn insert_bid_price_index(bids: &[Order], price: Price) -> usize {
    bids.iter()
        .position(|o| price > o.price())
        .unwrap_or(bids.len())
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rest an order on its own side. Does not run matching; caller uses the matching module.
    /// Returns the index the order was placed at.
    pub fn add_order(&mut self, order: Order) -> usize {
        match order.side() {
            Side::Buy => {
                let index = insert_bid_price_index(&self.bids, order.price());
                self.bids.insert(index, order);
                index
            }
            Side::Sell => {
                let index = insert_offer_price_index(&self.offers, order.price());
                self.offers.insert(index, order);
                index
            }
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut Vec<Order> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.offers,
        }
    }

    /// Drop every filled order from one side, keeping the others in place.
    /// Returns how many were removed.
    pub(crate) fn remove_filled(&mut self, side: Side) -> usize {
        let orders = self.side_mut(side);
        let before = orders.len();
        orders.retain(|o| !o.is_filled());
        before - orders.len()
    }

    pub fn bids_by_price_time(&self) -> &[Order] {
        &self.bids
    }

    pub fn offers_by_price_time(&self) -> &[Order] {
        &self.offers
    }

    /// Best bid (None if empty).
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.first()
    }

    /// Best offer (None if empty).
    pub fn best_offer(&self) -> Option<&Order> {
        self.offers.first()
    }

    pub fn bid_depth(&self) -> usize {
        self.bids.len()
    }

    pub fn offer_depth(&self) -> usize {
        self.offers.len()
    }

    /// Clears both sides.
    pub fn reset(&mut self) {
        self.bids.clear();
        self.offers.clear();
    }

    /// Export resting orders in priority order.
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.iter().map(RestingOrder::from).collect(),
            offers: self.offers.iter().map(RestingOrder::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(id: i32, side: Side, price: Price, qty: Quantity) -> Order {
        Order::limit(side, OrderId(id), price, qty)
    }

    fn ids(orders: &[Order]) -> Vec<i32> {
        orders.iter().map(|o| o.id().0).collect()
    }

    #[test]
    fn insert_offer_price_index_keeps_time_priority() {
        let offers = vec![
            limit(1, Side::Sell, 3, 10),
            limit(2, Side::Sell, 4, 10),
            limit(3, Side::Sell, 4, 5),
            limit(4, Side::Sell, 6, 10),
        ];
        assert_eq!(insert_offer_price_index(&offers, 2), 0);
        assert_eq!(insert_offer_price_index(&offers, 3), 1);
        assert_eq!(insert_offer_price_index(&offers, 4), 3);
        assert_eq!(insert_offer_price_index(&offers, 5), 3);
        assert_eq!(insert_offer_price_index(&offers, 8), 4);
    }

    #[test]
    fn insert_bid_price_index_keeps_time_priority() {
        let bids = vec![
            limit(1, Side::Buy, 11, 10),
            limit(2, Side::Buy, 9, 10),
            limit(3, Side::Buy, 9, 5),
            limit(4, Side::Buy, 7, 10),
        ];
        assert_eq!(insert_bid_price_index(&bids, 12), 0);
        assert_eq!(insert_bid_price_index(&bids, 10), 1);
        assert_eq!(insert_bid_price_index(&bids, 9), 3);
        assert_eq!(insert_bid_price_index(&bids, 8), 3);
        assert_eq!(insert_bid_price_index(&bids, 7), 4);
        assert_eq!(insert_bid_price_index(&bids, 5), 4);
    }

    #[test]
    fn insert_index_on_empty_side_is_zero() {
        assert_eq!(insert_bid_price_index(&[], 100), 0);
        assert_eq!(insert_offer_price_index(&[], 100), 0);
    }

    #[test]
    fn add_order_sorts_each_side() {
        let mut book = OrderBook::new();
        book.add_order(limit(1, Side::Buy, 100, 10));
        book.add_order(limit(2, Side::Buy, 101, 10));
        book.add_order(limit(3, Side::Buy, 100, 10));
        book.add_order(limit(4, Side::Sell, 105, 10));
        book.add_order(limit(5, Side::Sell, 103, 10));
        book.add_order(limit(6, Side::Sell, 105, 10));
        assert_eq!(ids(book.bids_by_price_time()), vec![2, 1, 3]);
        assert_eq!(ids(book.offers_by_price_time()), vec![5, 4, 6]);
        assert_eq!(book.best_bid().map(|o| o.id()), Some(OrderId(2)));
        assert_eq!(book.best_offer().map(|o| o.id()), Some(OrderId(5)));
        assert_eq!(book.bid_depth(), 3);
        assert_eq!(book.offer_depth(), 3);
    }

    #[test]
    fn empty_book_has_no_best() {
        let book = OrderBook::new();
        assert!(book.best_bid().is_none());
        assert!(book.best_offer().is_none());
        assert_eq!(book.bid_depth(), 0);
        assert_eq!(book.offer_depth(), 0);
    }

    #[test]
    fn reset_clears_both_sides() {
        let mut book = OrderBook::new();
        book.add_order(limit(1, Side::Buy, 100, 10));
        book.add_order(limit(2, Side::Sell, 101, 10));
        book.reset();
        assert_eq!(book.bid_depth(), 0);
        assert_eq!(book.offer_depth(), 0);
    }

    #[test]
    fn remove_filled_drops_only_filled_orders() {
        let mut book = OrderBook::new();
        book.add_order(limit(1, Side::Sell, 100, 10));
        book.add_order(limit(2, Side::Sell, 101, 10));
        book.add_order(limit(3, Side::Sell, 102, 10));
        let trade = crate::trade::Trade::new(OrderId(9), OrderId(2), 101, 10);
        book.side_mut(Side::Sell)[1].apply_trade(&trade);
        assert_eq!(book.remove_filled(Side::Sell), 1);
        assert_eq!(ids(book.offers_by_price_time()), vec![1, 3]);
    }

    #[test]
    fn snapshot_reports_revealed_quantity() {
        let mut book = OrderBook::new();
        book.add_order(Order::iceberg(Side::Buy, OrderId(1), 100, 1000, 100));
        book.add_order(limit(2, Side::Sell, 101, 7));
        let snapshot = book.snapshot();
        assert_eq!(snapshot.bids.len(), 1);
        assert_eq!(snapshot.bids[0].revealed_qty, 100);
        assert_eq!(snapshot.bids[0].remaining_qty, 1000);
        assert_eq!(snapshot.bids[0].peak_size, Some(100));
        assert_eq!(snapshot.offers[0].order_id, OrderId(2));
        assert_eq!(snapshot.offers[0].peak_size, None);
    }
}
