//! Synthetic order stream generator.
//!
//! Deterministic, configurable stream of limit and iceberg orders for replay
//! tests, demos, and benchmarks. Same seed ⇒ same sequence of orders.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::Engine;
use crate::order::Order;
use crate::types::{OrderId, Price, Quantity, Side};

/// Configuration for the synthetic order generator.
/// All ranges are inclusive. Same config + seed produces the same stream.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed ⇒ same order stream.
    pub seed: u64,
    /// Number of orders produced by [`Generator::all_orders`].
    pub num_orders: usize,
    /// Probability of Buy (0.0..=1.0). Sell otherwise.
    pub buy_ratio: f64,
    /// Probability of an iceberg (0.0..=1.0). Limit otherwise.
    pub iceberg_ratio: f64,
    pub price_min: Price,
    pub price_max: Price,
    pub quantity_min: Quantity,
    pub quantity_max: Quantity,
    /// Iceberg peak range; the drawn peak is capped at the order quantity.
    pub peak_min: Quantity,
    pub peak_max: Quantity,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_orders: 1000,
            buy_ratio: 0.5,
            iceberg_ratio: 0.2,
            price_min: 95,
            price_max: 105,
            quantity_min: 1,
            quantity_max: 1000,
            peak_min: 1,
            peak_max: 200,
        }
    }
}

/// Deterministic order stream. Ids start at 1.
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
    next_order_id: i32,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            rng,
            config,
            next_order_id: 1,
        }
    }

    /// Generates the next order. Advances internal state (order id, RNG).
    pub fn next_order(&mut self) -> Order {
        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        let side = if self.rng.gen::<f64>() < self.config.buy_ratio {
            Side::Buy
        } else {
            Side::Sell
        };
        let price = self
            .rng
            .gen_range(self.config.price_min..=self.config.price_max);
        let quantity = self
            .rng
            .gen_range(self.config.quantity_min..=self.config.quantity_max);
        if self.rng.gen::<f64>() < self.config.iceberg_ratio {
            let peak = self
                .rng
                .gen_range(self.config.peak_min..=self.config.peak_max)
                .min(quantity);
            Order::iceberg(side, id, price, quantity, peak)
        } else {
            Order::limit(side, id, price, quantity)
        }
    }

    pub fn take_orders(&mut self, n: usize) -> Vec<Order> {
        (0..n).map(|_| self.next_order()).collect()
    }

    /// Returns the full stream of orders as defined by config.num_orders.
    pub fn all_orders(&mut self) -> Vec<Order> {
        self.take_orders(self.config.num_orders)
    }
}

/// Replays a sequence of orders into the engine. Returns the total number of trades.
pub fn replay_into_engine(engine: &mut Engine, orders: impl IntoIterator<Item = Order>) -> usize {
    orders
        .into_iter()
        .map(|order| engine.submit(order).len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let c = GeneratorConfig {
            seed: 42,
            num_orders: 10,
            ..Default::default()
        };
        let orders1 = Generator::new(c.clone()).all_orders();
        let orders2 = Generator::new(c).all_orders();
        assert_eq!(orders1.len(), 10);
        for (a, b) in orders1.iter().zip(orders2.iter()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.side(), b.side());
            assert_eq!(a.price(), b.price());
            assert_eq!(a.original_qty(), b.original_qty());
            assert_eq!(a.peak_size(), b.peak_size());
        }
    }

    #[test]
    fn different_seed_different_stream() {
        let o1 = Generator::new(GeneratorConfig {
            seed: 1,
            num_orders: 5,
            ..Default::default()
        })
        .all_orders();
        let o2 = Generator::new(GeneratorConfig {
            seed: 2,
            num_orders: 5,
            ..Default::default()
        })
        .all_orders();
        let identical = o1.iter().zip(o2.iter()).all(|(a, b)| {
            a.side() == b.side() && a.price() == b.price() && a.original_qty() == b.original_qty()
        });
        assert!(!identical, "different seeds should produce different order content");
    }

    #[test]
    fn generated_orders_respect_ranges() {
        let config = GeneratorConfig {
            seed: 7,
            num_orders: 200,
            iceberg_ratio: 0.5,
            ..Default::default()
        };
        for (i, order) in Generator::new(config.clone()).all_orders().iter().enumerate() {
            assert_eq!(order.id(), OrderId(i as i32 + 1));
            assert!((config.price_min..=config.price_max).contains(&order.price()));
            assert!((config.quantity_min..=config.quantity_max).contains(&order.original_qty()));
            if let Some(peak) = order.peak_size() {
                assert!(peak >= 1 && peak <= order.original_qty());
            }
        }
    }

    #[test]
    fn replay_into_engine_produces_trades() {
        let mut engine = Engine::new();
        let orders = Generator::new(GeneratorConfig {
            seed: 123,
            num_orders: 200,
            ..Default::default()
        })
        .all_orders();
        let total_trades = replay_into_engine(&mut engine, orders);
        assert!(total_trades > 0);
    }
}
