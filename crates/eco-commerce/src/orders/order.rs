//! Order types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;

/// A placed order, as held by the order storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Date the order was placed.
    pub placed_on: NaiveDate,
    /// Amount charged.
    pub total: Money,
    /// Ordered line items.
    pub items: Vec<OrderLine>,
}

impl Order {
    /// Create an order with no line items.
    pub fn new(id: impl Into<OrderId>, placed_on: NaiveDate, total: Money) -> Self {
        Self {
            id: id.into(),
            placed_on,
            total,
            items: Vec::new(),
        }
    }

    /// Append a line item.
    pub fn with_item(mut self, product: Product, quantity: u32) -> Result<Self, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        self.items.push(OrderLine { product, quantity });
        Ok(self)
    }

    /// Comma-joined "name xN" summary of the line items.
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(OrderLine::summary)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product at time of order.
    pub product: Product,
    /// Quantity ordered.
    pub quantity: u32,
}

impl OrderLine {
    pub fn summary(&self) -> String {
        format!("{} x{}", self.product.name, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bundled_catalog;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    #[test]
    fn test_items_summary() {
        let catalog = bundled_catalog();
        let shirt = catalog.get(&ProductId::new("1")).unwrap().clone();
        let brush = catalog.get(&ProductId::new("3")).unwrap().clone();

        let order = Order::new("ord-1", date(), Money::new(99700, Currency::INR))
            .with_item(shirt, 1)
            .unwrap()
            .with_item(brush, 2)
            .unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items_summary(), "Organic Cotton T-Shirt x1, Bamboo Toothbrush x2");
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let brush = bundled_catalog().get(&ProductId::new("3")).unwrap().clone();
        let result = Order::new("ord-2", date(), Money::zero(Currency::INR)).with_item(brush, 0);
        assert_eq!(result, Err(CommerceError::InvalidQuantity(0)));
    }

    #[test]
    fn test_order_json_shape() {
        let order = Order::new("ord-3", date(), Money::new(1000, Currency::INR));
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], "ord-3");
        assert_eq!(json["placedOn"], "2024-05-02");
        assert_eq!(json["total"]["amount_minor"], 1000);
    }
}
