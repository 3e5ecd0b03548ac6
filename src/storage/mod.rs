//! In-memory storage layer for restaurants.
//!
//! The store is built once at startup, either from a built-in seed
//! revision or from a seed file, and lives until the process exits.
//!
//! ## Seed file format
//!
//! ```yaml
//! - id: 1
//!   name: WoodsHill
//!   description: American cuisine, farm to table
//!   dishes:
//!     - name: Swordfish grill
//!       price: 27
//! ```
//!
//! ## Components
//!
//! - [`RestaurantRepository`]: list/get/create/delete/edit over the store
//! - [`load_seed_file`]: Read restaurants from a JSON or YAML file

mod repository;
mod seed_file;

pub use repository::RestaurantRepository;
pub use seed_file::{SeedFormat, detect_format, load_seed_file, parse_seed};
