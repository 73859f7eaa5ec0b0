//! Orders: limit and iceberg.
//!
//! Both variants share side, id, price and fill accounting. An iceberg only shows
//! a bounded peak of its remaining size to the matcher; see [`Order::revealed_qty`].

use log::warn;

use crate::trade::Trade;
use crate::types::{NewOrder, OrderId, Price, Quantity, Side};

/// Variant-specific state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum OrderKind {
    /// Fully visible.
    Limit,
    /// Hidden size behind a refreshed peak. `revealed_peak_qty` may run ahead of
    /// the remaining quantity; readers clamp through [`Order::revealed_qty`].
    Iceberg {
        peak_size: Quantity,
        revealed_peak_qty: Quantity,
    },
}

/// An order as submitted and, if not fully filled, as it rests on the book.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Order {
    side: Side,
    id: OrderId,
    price: Price,
    original_qty: Quantity,
    remaining_qty: Quantity,
    kind: OrderKind,
    trades: Vec<Trade>,
}

impl Order {
    /// Fully visible limit order.
    pub fn limit(side: Side, id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            side,
            id,
            price,
            original_qty: quantity,
            remaining_qty: quantity,
            kind: OrderKind::Limit,
            trades: Vec::new(),
        }
    }

    /// Iceberg order. The first peak is revealed in full. `peak_size` is not
    /// checked against `quantity`.
    pub fn iceberg(side: Side, id: OrderId, price: Price, quantity: Quantity, peak_size: Quantity) -> Self {
        Self {
            side,
            id,
            price,
            original_qty: quantity,
            remaining_qty: quantity,
            kind: OrderKind::Iceberg {
                peak_size,
                revealed_peak_qty: peak_size,
            },
            trades: Vec::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn original_qty(&self) -> Quantity {
        self.original_qty
    }

    pub fn remaining_qty(&self) -> Quantity {
        self.remaining_qty
    }

    pub fn kind(&self) -> &OrderKind {
        &self.kind
    }

    pub fn is_buy(&self) -> bool {
        self.side == Side::Buy
    }

    pub fn is_iceberg(&self) -> bool {
        matches!(self.kind, OrderKind::Iceberg { .. })
    }

    /// Peak size for icebergs, `None` for limit orders.
    pub fn peak_size(&self) -> Option<Quantity> {
        match self.kind {
            OrderKind::Limit => None,
            OrderKind::Iceberg { peak_size, .. } => Some(peak_size),
        }
    }

    /// Unclamped peak counter for icebergs, `None` for limit orders.
    pub fn revealed_peak_qty(&self) -> Option<Quantity> {
        match self.kind {
            OrderKind::Limit => None,
            OrderKind::Iceberg {
                revealed_peak_qty, ..
            } => Some(revealed_peak_qty),
        }
    }

    /// Quantity visible to a contra-side matcher.
    pub fn revealed_qty(&self) -> Quantity {
        match self.kind {
            OrderKind::Limit => self.remaining_qty,
            OrderKind::Iceberg {
                revealed_peak_qty, ..
            } => revealed_peak_qty.min(self.remaining_qty),
        }
    }

    pub fn is_filled(&self) -> bool {
        self.remaining_qty == 0
    }

    /// Trades this order took part in, oldest first.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Books a trade against this order.
    ///
    /// An overtrade (trade larger than what remains) is logged and still
    /// subtracted in full.
    pub fn apply_trade(&mut self, trade: &Trade) {
        self.trades.push(*trade);
        let traded = trade.quantity;
        if traded > self.remaining_qty {
            warn!(
                "traded quantity [{}] exceeds remaining quantity [{}] of order {}",
                traded, self.remaining_qty, self.id.0
            );
        }
        self.remaining_qty -= traded;

        if let OrderKind::Iceberg {
            peak_size,
            revealed_peak_qty,
        } = &mut self.kind
        {
            let peak_size = *peak_size;
            *revealed_peak_qty -= traded;
            if traded >= peak_size {
                // Whatever went past this peak is taken from the next one.
                let overhang = traded - peak_size;
                *revealed_peak_qty = (peak_size.min(self.remaining_qty) - overhang).max(0);
            }
        }
    }

    /// Re-reveals a full peak after a pass in which this order was the aggressor,
    /// if the pass traded at least one peak in total. No-op for limit orders.
    pub fn refresh_peak(&mut self, trades: &[Trade]) {
        if let OrderKind::Iceberg {
            peak_size,
            revealed_peak_qty,
        } = &mut self.kind
        {
            let peak_size = *peak_size;
            let total_traded: i64 = trades.iter().map(|t| i64::from(t.quantity)).sum();
            if total_traded >= i64::from(peak_size) {
                *revealed_peak_qty = peak_size.min(self.remaining_qty);
            }
        }
    }
}

impl From<NewOrder> for Order {
    fn from(new: NewOrder) -> Self {
        let id = OrderId(new.id);
        match new.peak_size {
            Some(peak) => Order::iceberg(new.side, id, new.price, new.quantity, peak),
            None => Order::limit(new.side, id, new.price, new.quantity),
        }
    }
}
