//! Product search as the assistant runs it.

use anyhow::Result;
use eco_assistant::handlers;
use eco_commerce::search::{search, SearchQuery};
use serde_json::json;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let load = ctx.load_catalog().await?;
    let text = args.query.join(" ");

    if ctx.output.is_json() {
        let query = SearchQuery::new(&text);
        let outcome = search(&query, &load.catalog);
        ctx.output.json(&json!({
            "query": query.as_str(),
            "matchedBy": outcome.kind().map(|kind| kind.as_str()),
            "products": outcome.products(),
        }));
        return Ok(());
    }

    ctx.output.reply(&handlers::product_search(&text, &load.catalog));
    Ok(())
}
