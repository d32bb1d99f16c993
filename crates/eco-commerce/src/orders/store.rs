//! Order storage seam.

use crate::orders::Order;

/// Read access to the current user's order history.
///
/// Implementations return orders in placement order, oldest first.
pub trait OrderStore: Send + Sync {
    fn orders(&self) -> Vec<Order>;
}

/// Order history held in memory, e.g. loaded from a file at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrders {
    orders: Vec<Order>,
}

impl InMemoryOrders {
    /// Wrap orders, sorting them by placement date (stable for equal dates).
    pub fn new(mut orders: Vec<Order>) -> Self {
        orders.sort_by_key(|o| o.placed_on);
        Self { orders }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrders {
    fn orders(&self) -> Vec<Order> {
        self.orders.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_orders_sorted_by_placement() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        let store = InMemoryOrders::new(vec![
            Order::new("late", day(20), Money::zero(Currency::INR)),
            Order::new("early", day(1), Money::zero(Currency::INR)),
            Order::new("same-day", day(20), Money::zero(Currency::INR)),
        ]);

        let ids: Vec<_> = store.orders().into_iter().map(|o| o.id.into_inner()).collect();
        assert_eq!(ids, vec!["early", "late", "same-day"]);
    }
}
