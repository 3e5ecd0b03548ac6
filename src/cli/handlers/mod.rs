mod mutate;
mod query;
mod schema;
mod seed;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use seed::handle_seed;
pub use serve::{ServeOverrides, handle_serve};

use crate::config::RestaurantsConfig;
use crate::storage::RestaurantRepository;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RestaurantsConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: RestaurantsConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Build a fresh store from the `store` config section.
    pub fn repository(&self) -> Result<RestaurantRepository> {
        RestaurantRepository::from_settings(&self.config.store, &self.root)
            .context("Failed to seed restaurant store")
    }
}

pub(crate) fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Execute a document against a freshly seeded schema and print the response.
pub(crate) fn execute_and_print(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let schema = crate::graphql::build_schema(ctx.repository()?);
    let vars = parse_variables(variables)?;

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
