//! Single-entry matching engine facade.
//!
//! Holds the order book so the process loop and the REST layer can submit orders
//! without driving [`OrderBook`] and [`match_order`] directly. `submit` takes
//! `&mut self`, so callers that share an engine serialize submissions themselves
//! (see [`crate::api`], which keeps it behind one mutex).

use log::info;

use crate::matching::match_order;
use crate::order::Order;
use crate::order_book::{BookSnapshot, OrderBook};
use crate::trade::Trade;

/// Single-instrument matching engine.
#[derive(Debug, Default)]
pub struct Engine {
    book: OrderBook,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits an order: runs matching and returns the trades, earliest first.
    pub fn submit(&mut self, order: Order) -> Vec<Trade> {
        info!(
            "order submitted order_id={} side={:?} price={} quantity={} peak={:?}",
            order.id().0,
            order.side(),
            order.price(),
            order.original_qty(),
            order.peak_size()
        );
        let trades = match_order(&mut self.book, order);
        for trade in &trades {
            info!(
                "trade buy_order={} sell_order={} price={} quantity={}",
                trade.buy_order_id.0, trade.sell_order_id.0, trade.price, trade.quantity
            );
        }
        trades
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn bids_by_price_time(&self) -> &[Order] {
        self.book.bids_by_price_time()
    }

    pub fn offers_by_price_time(&self) -> &[Order] {
        self.book.offers_by_price_time()
    }

    pub fn best_bid(&self) -> Option<&Order> {
        self.book.best_bid()
    }

    pub fn best_offer(&self) -> Option<&Order> {
        self.book.best_offer()
    }

    pub fn bid_depth(&self) -> usize {
        self.book.bid_depth()
    }

    pub fn offer_depth(&self) -> usize {
        self.book.offer_depth()
    }

    /// Clears both sides of the book.
    pub fn reset(&mut self) {
        info!(
            "book reset bids={} offers={}",
            self.book.bid_depth(),
            self.book.offer_depth()
        );
        self.book.reset();
    }

    pub fn snapshot(&self) -> BookSnapshot {
        self.book.snapshot()
    }
}
