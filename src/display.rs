//! Fixed-width text rendering of the book and trades.
//!
//! ```text
//! +-----------------------------------------------------------------+
//! | BUY                            | SELL                           |
//! | Id       | Volume      | Price | Price | Volume      | Id       |
//! +----------+-------------+-------+-------+-------------+----------+
//! |1234567890|1,234,567,890| 32,503| 32,504|1,234,567,890|1234567891|
//! |      1138|        7,500| 31,502| 32,505|        7,777|      6808|
//! |          |             |       | 32,507|        3,000|     42100|
//! +-----------------------------------------------------------------+
//! ```
//!
//! Volume is the revealed quantity, so icebergs show only their peak.

use std::fmt::Write;

use crate::order::Order;
use crate::order_book::OrderBook;
use crate::trade::Trade;

const TABLE_WIDTH: usize = 67;
/// Positions of `+` in the divider under the column names.
const COLUMN_CORNERS: [usize; 7] = [0, 11, 25, 33, 41, 55, TABLE_WIDTH - 1];

/// Renders the whole book table. No trailing newline.
pub fn render_book(book: &OrderBook) -> String {
    let mut out = render_header();
    let bids = book.bids_by_price_time();
    let offers = book.offers_by_price_time();
    let depth = bids.len().max(offers.len());
    for i in 0..depth {
        out.push_str(&render_order_row(bids.get(i), offers.get(i)));
    }
    out.push_str(&dashed_line(TABLE_WIDTH));
    out
}

/// One `Trade` record per line.
pub fn render_trades(trades: &[Trade]) -> String {
    trades.iter().fold(String::new(), |mut out, trade| {
        let _ = writeln!(out, "{}", trade);
        out
    })
}

fn render_header() -> String {
    let mut out = String::new();
    out.push_str(&dashed_line(TABLE_WIDTH));
    out.push('\n');
    out.push_str(&render_row(&[("BUY", 33), ("SELL", 33)]));
    out.push_str(&render_row(&[
        ("Id", 11),
        ("Volume", 14),
        ("Price", 8),
        ("Price", 8),
        ("Volume", 14),
        ("Id", 11),
    ]));
    out.push_str(&column_dashed_line(TABLE_WIDTH));
    out.push('\n');
    out
}

/// Row of left-aligned column titles; each width includes the leading blank and
/// the closing `|`.
fn render_row(columns: &[(&str, usize)]) -> String {
    let mut out = String::from("|");
    for (name, width) in columns {
        let _ = write!(out, " {:<pad$}|", name, pad = width - 2);
    }
    out.push('\n');
    out
}

fn render_order_row(bid: Option<&Order>, offer: Option<&Order>) -> String {
    let mut out = String::from("|");
    match bid {
        Some(o) => {
            let _ = write!(
                out,
                "{:>10}|{:>13}|{:>7}|",
                o.id().0,
                group_thousands(i64::from(o.revealed_qty())),
                group_thousands(i64::from(o.price()))
            );
        }
        None => {
            let _ = write!(out, "{:>10}|{:>13}|{:>7}|", "", "", "");
        }
    }
    match offer {
        Some(o) => {
            let _ = writeln!(
                out,
                "{:>7}|{:>13}|{:>10}|",
                group_thousands(i64::from(o.price())),
                group_thousands(i64::from(o.revealed_qty())),
                o.id().0
            );
        }
        None => {
            let _ = writeln!(out, "{:>7}|{:>13}|{:>10}|", "", "", "");
        }
    }
    out
}

fn dashed_line(width: usize) -> String {
    with_corners(width, &[0, width - 1])
}

fn column_dashed_line(width: usize) -> String {
    with_corners(width, &COLUMN_CORNERS)
}

fn with_corners(width: usize, corners: &[usize]) -> String {
    (0..width)
        .map(|i| if corners.contains(&i) { '+' } else { '-' })
        .collect()
}

/// Formats an integer with `,` between groups of three digits.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
