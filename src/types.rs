//! Core types and IDs for the order book.
//!
//! Prices are whole minor currency units and compare exactly. [`NewOrder`] is the
//! wire shape of a submission before it becomes an [`crate::Order`].

/// Order identifier, unique per order within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct OrderId(pub i32);

/// Price in minor currency units.
pub type Price = i16;

/// Order and trade quantity.
pub type Quantity = i32;

/// Order side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Order submission as received over the API.
///
/// `peak_size` selects the iceberg variant when present.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewOrder {
    pub side: Side,
    pub id: i32,
    pub price: Price,
    pub quantity: Quantity,
    #[serde(default)]
    pub peak_size: Option<Quantity>,
}
