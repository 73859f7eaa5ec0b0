//! Price-time priority matching with iceberg support.
//!
//! [`match_order`] runs one order against the book: scans the contra side top
//! down, trades at the resting order's price, and rests any remainder.
//!
//! Iceberg peaks are refreshed in place and keep their queue position. When a
//! scan reaches a worse price after touching an iceberg with hidden size left,
//! the scan is started over from the top so a freshly revealed peak is served
//! before anything priced behind it.

use log::debug;

use crate::order::Order;
use crate::order_book::OrderBook;
use crate::trade::Trade;
use crate::types::{OrderId, Price, Side};

/// How a single top-down scan ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    /// Incoming order exhausted or no more crossing orders.
    Complete,
    /// Hit a worse price while an iceberg upstream still had size; scan again.
    PriceRegression,
}

/// Run matching for one order against the book.
///
/// Returns the trades in the order they were generated. Filled resting orders
/// are removed; any unfilled remainder of `order` rests on its own side.
pub fn match_order(book: &mut OrderBook, mut order: Order) -> Vec<Trade> {
    let mut trades = Vec::new();
    let contra_side = order.side().opposite();

    let mut passes = 1;
    while scan(book.side_mut(contra_side), &mut order, &mut trades) == Pass::PriceRegression {
        passes += 1;
        debug!(
            "price regression order_id={} trades_so_far={} restarting scan pass={}",
            order.id().0,
            trades.len(),
            passes
        );
    }

    order.refresh_peak(&trades);

    book.remove_filled(contra_side);
    if order.remaining_qty() > 0 {
        book.add_order(order);
    }
    trades
}

/// Whether a resting order's price is acceptable to the incoming order.
fn crosses(incoming: &Order, resting: &Order) -> bool {
    match incoming.side() {
        Side::Buy => resting.price() <= incoming.price(),
        Side::Sell => resting.price() >= incoming.price(),
    }
}

/// Whether `resting` sits at a worse price than the last order matched in this
/// pass, from the point of view of its own side.
fn price_worse(resting: &Order, last_matched: Option<Price>) -> bool {
    let Some(last) = last_matched else {
        return false;
    };
    match resting.side() {
        Side::Buy => resting.price() < last,
        Side::Sell => resting.price() > last,
    }
}

/// One top-down pass over the contra side.
fn scan(resting_orders: &mut [Order], incoming: &mut Order, trades: &mut Vec<Trade>) -> Pass {
    // Icebergs met in this pass that still had size.
    let mut icebergs: Vec<OrderId> = Vec::new();
    let mut last_matched: Option<Price> = None;

    for resting in resting_orders.iter_mut() {
        if incoming.revealed_qty() <= 0 || !crosses(incoming, resting) {
            break;
        }
        if resting.is_iceberg() && resting.remaining_qty() > 0 {
            icebergs.push(resting.id());
        }
        if !icebergs.is_empty() && price_worse(resting, last_matched) {
            return Pass::PriceRegression;
        }
        // Already filled earlier in this call, or an iceberg showing nothing.
        if resting.revealed_qty() <= 0 {
            continue;
        }

        let trade = execute_trade(incoming, resting);
        trades.push(trade);
        last_matched = Some(resting.price());
    }
    Pass::Complete
}

fn execute_trade(incoming: &mut Order, resting: &mut Order) -> Trade {
    let quantity = incoming.revealed_qty().min(resting.revealed_qty());
    let (buy_order_id, sell_order_id) = if incoming.is_buy() {
        (incoming.id(), resting.id())
    } else {
        (resting.id(), incoming.id())
    };
    let trade = Trade::new(buy_order_id, sell_order_id, resting.price(), quantity);
    incoming.apply_trade(&trade);
    resting.apply_trade(&trade);
    trade
}
