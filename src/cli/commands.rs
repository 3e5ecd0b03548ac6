use crate::model::{IdMode, SeedRevision};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "restaurants")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL API for restaurants and their dishes"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .restaurants.yml by default)
    #[arg(long, global = true, env = "RESTAURANTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Built-in seed revision: one-based or zero-based (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<SeedRevision>,

    /// Id assignment: counter, max-plus-one or last-plus-one (overrides config)
    #[arg(long, global = true)]
    pub id_mode: Option<IdMode>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not serve the GraphiQL explorer on GET
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a freshly seeded store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,

    /// Print the restaurants the store starts with
    Seed {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
