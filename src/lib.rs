//! # Restaurants - an in-memory GraphQL API
//!
//! Serves a list of restaurants and their dishes over GraphQL. The data
//! lives in process memory, seeded at startup, and is lost on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:4000/graphql (GraphiQL on GET)
//! restaurants serve
//!
//! # One-off query against a freshly seeded store
//! restaurants query '{ restaurant(id: 1) { name dishes { name price } } }'
//!
//! # Print the schema
//! restaurants schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Restaurant, Dish, seed data)
//! - [`storage`]: The in-memory restaurant store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.restaurants.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RestaurantError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum transport.
pub mod graphql;

/// Data models for restaurants.
pub mod model;

/// In-memory storage layer.
pub mod storage;

pub mod logging;
