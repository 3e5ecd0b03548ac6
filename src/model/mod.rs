//! Data models for restaurants.
//!
//! This module defines the core data structures:
//!
//! - [`Restaurant`]: A restaurant record owned by the store
//! - [`Dish`]: An anonymous menu entry nested under a restaurant
//! - [`RestaurantInput`]: The field set supplied to create and edit
//! - [`SeedRevision`]: Which built-in data set the store starts from
//! - [`IdMode`]: How the store assigns ids to new restaurants

mod restaurant;
mod seed;
mod types;

pub use restaurant::{Dish, Restaurant, RestaurantInput};
pub use seed::seed_restaurants;
pub use types::{IdMode, SeedRevision};
