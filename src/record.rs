//! Line-oriented input records.
//!
//! `side,id,price,qty` is a limit order; `side,id,price,qty,peakSize` is an
//! iceberg. Side is `B` or `S`. Only integer width is checked: zero and negative
//! values are passed through.

use std::str::FromStr;

use crate::order::Order;
use crate::types::{OrderId, Side};

/// Parses one input record into an order.
pub fn parse_order(line: &str) -> Result<Order, String> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != 4 && fields.len() != 5 {
        return Err(format!(
            "expected 4 or 5 comma-separated fields, got {}",
            fields.len()
        ));
    }

    let side = parse_side(fields[0])?;
    let id = OrderId(parse_field::<i32>(fields[1], "id")?);
    let price = parse_field::<i16>(fields[2], "price")?;
    let quantity = parse_field::<i32>(fields[3], "quantity")?;

    match fields.get(4) {
        Some(peak) => {
            let peak_size = parse_field::<i32>(peak, "peak size")?;
            Ok(Order::iceberg(side, id, price, quantity, peak_size))
        }
        None => Ok(Order::limit(side, id, price, quantity)),
    }
}

fn parse_side(field: &str) -> Result<Side, String> {
    match field {
        "B" => Ok(Side::Buy),
        "S" => Ok(Side::Sell),
        other => Err(format!("invalid side '{}', expected B or S", other)),
    }
}

fn parse_field<T>(field: &str, name: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field
        .parse::<T>()
        .map_err(|e| format!("invalid {} '{}': {}", name, field, e))
}
