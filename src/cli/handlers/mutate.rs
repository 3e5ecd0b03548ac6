use anyhow::Result;

use super::{CommandContext, execute_and_print};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    tracing::debug!("mutations run against a throwaway store; nothing is kept");
    execute_and_print(&ctx, &document, variables)
}
