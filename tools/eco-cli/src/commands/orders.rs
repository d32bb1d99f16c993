//! Order status.

use anyhow::Result;
use eco_assistant::handlers;
use eco_commerce::orders::OrderStore;
use serde_json::json;

use super::OrdersArgs;
use crate::context::Context;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let orders = ctx.load_orders()?.orders();
    let reply = handlers::order_status(&orders);

    if ctx.output.is_json() {
        let shown = if args.all { &orders[..] } else { last(&orders) };
        ctx.output.json(&json!({
            "reply": reply,
            "orders": shown,
        }));
        return Ok(());
    }

    ctx.output.reply(&reply);

    if args.all && !orders.is_empty() {
        ctx.output.header("Order history");
        for order in &orders {
            ctx.output.list_item(&format!(
                "{}  {}  {:>8}  {}",
                order.id,
                order.placed_on.format("%Y-%m-%d"),
                order.total.display_compact(),
                order.items_summary()
            ));
        }
    }

    Ok(())
}

fn last<T>(items: &[T]) -> &[T] {
    &items[items.len().saturating_sub(1)..]
}
