//! Answer a single message.

use anyhow::{Context as _, Result};
use eco_assistant::classify;
use serde_json::json;

use super::AskArgs;
use crate::context::Context;

/// Run the ask command.
pub async fn run(args: AskArgs, ctx: &Context) -> Result<()> {
    let text = args.text();
    let intent = classify(&text);
    ctx.output.debug(&format!("Intent: {}", intent.as_str()));

    let assistant = ctx.assistant().await?;
    let reply = assistant
        .answer(&intent, &text)
        .await
        .context("Couldn't get a response. Please try again later.")?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "intent": intent,
            "reply": reply,
        }));
        return Ok(());
    }

    ctx.output.reply(&reply);
    Ok(())
}
