use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use restaurants::cli::handlers::{
    CommandContext, ServeOverrides, handle_mutate, handle_query, handle_schema, handle_seed,
    handle_serve,
};
use restaurants::cli::{Cli, Commands};
use restaurants::config::RestaurantsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    restaurants::logging::init(cli.verbose, cli.log_file.as_deref());

    let (mut config, root) = load_config(cli.config)?;
    if let Some(seed) = cli.seed {
        config.store.seed = seed;
    }
    if let Some(id_mode) = cli.id_mode {
        config.store.id_mode = id_mode;
    }
    let ctx = CommandContext::new(config, root);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handle_serve(
            ctx,
            ServeOverrides {
                host,
                port,
                no_graphiql,
            },
        ),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(&ctx),
        Commands::Seed { json } => handle_seed(&ctx, json),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<(RestaurantsConfig, PathBuf)> {
    match path {
        Some(path) => RestaurantsConfig::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            let cwd = std::env::current_dir()?;
            RestaurantsConfig::load(&cwd).context("Failed to load restaurants configuration")
        }
    }
}
