use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

/// Command-line values that take precedence over the `server` config section.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
}

pub fn handle_serve(ctx: CommandContext, overrides: ServeOverrides) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(host) = overrides.host {
        settings.host = host;
    }
    if let Some(port) = overrides.port {
        settings.port = port;
    }
    if overrides.no_graphiql {
        settings.graphiql = false;
    }

    let schema = build_schema(ctx.repository()?);

    let url = settings.url();
    println!("{} {}", "GraphQL API running on".green(), url.cyan());
    if settings.graphiql {
        println!("GraphiQL explorer: {}", url);
    }

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &settings).await })
        .context("GraphQL server failed")?;
    Ok(())
}
