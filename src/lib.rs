//! # CLOB Engine
//!
//! Single-instrument central limit order book: limit and iceberg orders,
//! strict price-time priority matching, and trades priced at the resting order.
//!
//! ## Entry point
//!
//! Use [`Engine`] as the single entry point: create with [`Engine::new`], then
//! [`Engine::submit`] each order and read the book through the snapshot accessors.
//!
//! ## Example
//!
//! ```rust
//! use clob_engine::{Engine, Order, OrderId, Side, Trade};
//!
//! let mut engine = Engine::new();
//! engine.submit(Order::limit(Side::Buy, OrderId(1), 101, 10));
//! engine.submit(Order::iceberg(Side::Buy, OrderId(2), 100, 1_000, 100));
//! let trades = engine.submit(Order::limit(Side::Sell, OrderId(3), 100, 60));
//! assert_eq!(
//!     trades,
//!     vec![
//!         Trade::new(OrderId(1), OrderId(3), 101, 10),
//!         Trade::new(OrderId(2), OrderId(3), 100, 50),
//!     ]
//! );
//! assert_eq!(engine.best_bid().map(|o| o.revealed_qty()), Some(50));
//! ```
//!
//! ## Lower-level API
//!
//! You can also use [`OrderBook`] and [`match_order`] directly.

pub mod api;
pub mod display;
pub mod engine;
pub mod market_data_gen;
pub mod matching;
pub mod order;
pub mod order_book;
pub mod record;
pub mod trade;
pub mod types;

pub use display::{render_book, render_trades};
pub use engine::Engine;
pub use market_data_gen::{replay_into_engine, Generator, GeneratorConfig};
pub use matching::match_order;
pub use order::{Order, OrderKind};
pub use order_book::{insert_bid_price_index, insert_offer_price_index, BookSnapshot, OrderBook, RestingOrder};
pub use record::parse_order;
pub use trade::Trade;
pub use types::{NewOrder, OrderId, Price, Quantity, Side};
