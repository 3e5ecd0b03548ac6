//! GraphQL schema, resolvers and HTTP transport.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! restaurants serve --port 4000
//!
//! # Execute a query from the CLI
//! restaurants query '{ restaurants { id name } }'
//!
//! # Execute a mutation from the CLI
//! restaurants mutate 'setRestaurant(input: { name: "New" }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `restaurant`, `restaurants`
//! - **Mutations**: `setRestaurant`, `deleteRestaurant`, `editRestaurant`

mod schema;
mod server;
mod types;

pub use schema::{AppState, MutationRoot, QueryRoot, RestaurantsSchema, build_schema};
pub use server::{router, run_server, serve};
pub use types::*;
