//! Interactive chat with EcoGuide.

use anyhow::Result;
use dialoguer::Input;
use eco_assistant::{ChatError, ChatSession, GREETING};

use super::ChatArgs;
use crate::context::Context;

/// Run the chat command.
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    let mut session = ChatSession::new(ctx.assistant().await?);

    ctx.output.header("EcoGuide");
    ctx.output.reply(GREETING);
    ctx.output.info("Type /reset to start over, /reload to refetch the catalog, /quit to leave.");

    for message in &args.message {
        ctx.output.info(&format!("You: {}", message));
        send(&mut session, message, ctx).await;
    }

    if ctx.output.is_json() {
        ctx.output.json(&session.history());
        return Ok(());
    }

    loop {
        let line: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;

        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                ctx.output.success("Conversation cleared");
                ctx.output.reply(GREETING);
            }
            "/reload" => {
                let load = ctx.load_catalog().await?;
                session.assistant_mut().replace_catalog(load.catalog);
                ctx.output.success(&format!(
                    "Catalog reloaded: {} products ({})",
                    session.assistant().catalog().len(),
                    load.origin.describe()
                ));
            }
            "" => continue,
            text => send(&mut session, text, ctx).await,
        }
    }

    Ok(())
}

async fn send(session: &mut ChatSession, text: &str, ctx: &Context) {
    let spinner = ctx.output.spinner("EcoGuide is typing...");
    let result = session.send(text).await;
    spinner.finish_and_clear();

    match result {
        Ok(reply) => ctx.output.reply(&reply),
        Err(ChatError::EmptyMessage) => {}
        Err(err) => {
            ctx.output.warn(&err.to_string());
            if let Some(cause) = std::error::Error::source(&err) {
                ctx.output.debug(&cause.to_string());
            }
        }
    }
}
