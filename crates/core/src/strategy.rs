//! Strategy pattern - tính phí ship với các strategy thay thế được
//!
//! [`ShippingCost`] nhận một strategy lúc khởi tạo và delegate việc tính
//! phí cho nó. Muốn đổi strategy thì tạo context mới.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Order cần ship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    shipper: String,
}

impl Order {
    pub fn new(shipper: impl Into<String>) -> Self {
        Self {
            shipper: shipper.into(),
        }
    }

    pub fn shipper(&self) -> &str {
        &self.shipper
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new("missing")
    }
}

/// Thuật toán tính phí ship
pub trait ShippingStrategy {
    fn calculate(&self, order: &Order) -> f64;

    fn name(&self) -> &str {
        "custom"
    }
}

/// Closure cũng dùng được làm strategy
impl<F> ShippingStrategy for F
where
    F: Fn(&Order) -> f64,
{
    fn calculate(&self, order: &Order) -> f64 {
        self(order)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FedExStrategy;

impl ShippingStrategy for FedExStrategy {
    fn calculate(&self, _order: &Order) -> f64 {
        3.00
    }

    fn name(&self) -> &str {
        "FedEx"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostalStrategy;

impl ShippingStrategy for PostalStrategy {
    fn calculate(&self, _order: &Order) -> f64 {
        4.00
    }

    fn name(&self) -> &str {
        "Postal"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpsStrategy;

impl ShippingStrategy for UpsStrategy {
    fn calculate(&self, _order: &Order) -> f64 {
        5.00
    }

    fn name(&self) -> &str {
        "UPS"
    }
}

/// Các hãng vận chuyển có sẵn strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shipper {
    FedEx,
    Postal,
    Ups,
}

impl Shipper {
    pub const ALL: [Shipper; 3] = [Shipper::FedEx, Shipper::Postal, Shipper::Ups];

    pub fn strategy(self) -> Box<dyn ShippingStrategy> {
        match self {
            Shipper::FedEx => Box::new(FedExStrategy),
            Shipper::Postal => Box::new(PostalStrategy),
            Shipper::Ups => Box::new(UpsStrategy),
        }
    }
}

impl fmt::Display for Shipper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shipper::FedEx => "FedEx",
            Shipper::Postal => "Postal",
            Shipper::Ups => "UPS",
        };
        f.write_str(name)
    }
}

/// Context: delegate việc tính phí cho strategy đã chọn
pub struct ShippingCost {
    strategy: Box<dyn ShippingStrategy>,
}

impl ShippingCost {
    pub fn new(strategy: Box<dyn ShippingStrategy>) -> Self {
        Self { strategy }
    }

    pub fn for_shipper(shipper: Shipper) -> Self {
        Self::new(shipper.strategy())
    }

    pub fn shipping_cost(&self, order: &Order) -> f64 {
        let cost = self.strategy.calculate(order);
        log::debug!(
            "{} shipping cost for order ({}): {:.2}",
            self.strategy.name(),
            order.shipper(),
            cost
        );
        cost
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_costs() {
        let order = Order::default();

        assert_eq!(ShippingCost::new(Box::new(FedExStrategy)).shipping_cost(&order), 3.00);
        assert_eq!(ShippingCost::new(Box::new(PostalStrategy)).shipping_cost(&order), 4.00);
        assert_eq!(ShippingCost::new(Box::new(UpsStrategy)).shipping_cost(&order), 5.00);
    }

    #[test]
    fn test_cost_ignores_order_contents() {
        for shipper in Shipper::ALL {
            let calculator = ShippingCost::for_shipper(shipper);
            let a = calculator.shipping_cost(&Order::new("FedEx"));
            let b = calculator.shipping_cost(&Order::new("somebody else"));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_default_order_shipper() {
        assert_eq!(Order::default().shipper(), "missing");
    }

    #[test]
    fn test_closure_strategy() {
        let calculator = ShippingCost::new(Box::new(|order: &Order| {
            if order.shipper() == "express" {
                10.0
            } else {
                1.5
            }
        }));

        assert_eq!(calculator.shipping_cost(&Order::new("express")), 10.0);
        assert_eq!(calculator.shipping_cost(&Order::default()), 1.5);
        assert_eq!(calculator.strategy_name(), "custom");
    }

    #[test]
    fn test_shipper_names() {
        assert_eq!(ShippingCost::for_shipper(Shipper::Ups).strategy_name(), "UPS");
        assert_eq!(Shipper::Ups.to_string(), "UPS");
        assert_eq!(serde_json::to_string(&Shipper::FedEx).unwrap(), "\"fedex\"");
    }
}
