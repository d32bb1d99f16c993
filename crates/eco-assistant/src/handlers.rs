//! Fixed-text replies for the intents answered without text generation.

use eco_commerce::catalog::{Catalog, Product};
use eco_commerce::orders::Order;
use eco_commerce::search::{search, MatchKind, SearchOutcome, SearchQuery};

pub const NO_ORDERS_REPLY: &str =
    "I couldn't find any recent orders for you. Please make sure you're logged in.";

pub const RETURN_POLICY_REPLY: &str = "Our return policy: You can return any unused product within 30 days for a full refund. For more details or to start a return, visit your order history page.";

pub const NO_PRODUCTS_REPLY: &str = "Sorry, I couldn't find any products matching your search.";

/// Describe the most recent order. `orders` is oldest first.
pub fn order_status(orders: &[Order]) -> String {
    match orders.last() {
        None => NO_ORDERS_REPLY.to_string(),
        Some(last) => format!(
            "Your last order ({}) for {} was placed on {}. Items: {}.",
            last.id,
            last.total.display_compact(),
            last.placed_on.format("%Y-%m-%d"),
            last.items_summary()
        ),
    }
}

pub fn return_policy() -> String {
    RETURN_POLICY_REPLY.to_string()
}

/// List catalog products matching the query, by name first, then by material.
pub fn product_search(query: &str, catalog: &Catalog) -> String {
    let query = SearchQuery::new(query);
    match search(&query, catalog) {
        SearchOutcome::Found { kind, products } => {
            let heading = match kind {
                MatchKind::Name => "Here are some products matching your search:",
                MatchKind::Material => "Eco-friendly options:",
            };
            let mut reply = heading.to_string();
            for product in products {
                reply.push('\n');
                reply.push_str(&product_line(product));
            }
            reply
        }
        SearchOutcome::NoMatch => NO_PRODUCTS_REPLY.to_string(),
    }
}

fn product_line(product: &Product) -> String {
    format!("• {} ({})", product.name, product.price.display_compact())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eco_commerce::catalog::bundled_catalog;
    use eco_commerce::money::{Currency, Money};

    #[test]
    fn test_no_orders_message() {
        assert_eq!(
            order_status(&[]),
            "I couldn't find any recent orders for you. Please make sure you're logged in."
        );
    }

    #[test]
    fn test_last_order_is_described() {
        let catalog = bundled_catalog();
        let first = Order::new(
            "ORD-1",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Money::new(9_900, Currency::INR),
        );
        let last = Order::new(
            "ORD-2",
            NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
            Money::new(109_700, Currency::INR),
        )
        .with_item(catalog.products()[0].clone(), 1)
        .unwrap()
        .with_item(catalog.products()[1].clone(), 1)
        .unwrap();

        assert_eq!(
            order_status(&[first, last]),
            "Your last order (ORD-2) for ₹1097 was placed on 2024-05-09. \
             Items: Organic Cotton T-Shirt x1, Recycled Plastic Water Bottle x1."
        );
    }

    #[test]
    fn test_return_policy_text() {
        assert!(return_policy().starts_with("Our return policy: You can return any unused product within 30 days"));
    }

    #[test]
    fn test_search_by_name() {
        assert_eq!(
            product_search("find bamboo toothbrush", &bundled_catalog()),
            "Here are some products matching your search:\n• Bamboo Toothbrush (₹99)"
        );
    }

    #[test]
    fn test_single_word_name_hit_lists_product() {
        // "bamboo" appears in the name, so the name pass answers.
        assert_eq!(
            product_search("bamboo", &bundled_catalog()),
            "Here are some products matching your search:\n• Bamboo Toothbrush (₹99)"
        );
    }

    #[test]
    fn test_search_by_material() {
        assert_eq!(
            product_search("arabica", &bundled_catalog()),
            "Eco-friendly options:\n• Fair Trade Coffee Beans (₹499)"
        );
    }

    #[test]
    fn test_multiple_hits_keep_catalog_order() {
        assert_eq!(
            product_search("plastic", &bundled_catalog()),
            "Here are some products matching your search:\n\
             • Recycled Plastic Water Bottle (₹299)\n\
             • Conventional Plastic Bag (₹10)"
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(product_search("zzz", &bundled_catalog()), NO_PRODUCTS_REPLY);
        assert_eq!(product_search("zzz", &Catalog::empty()), NO_PRODUCTS_REPLY);
    }
}
