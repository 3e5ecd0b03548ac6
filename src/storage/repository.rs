use super::seed_file::load_seed_file;
use crate::{
    config::StoreSettings,
    error::{RestaurantError, Result},
    model::{IdMode, Restaurant, RestaurantInput, seed_restaurants},
};
use std::collections::HashSet;
use std::path::Path;

/// The in-memory restaurant store.
///
/// Owns every record; callers get borrows or clones. Record order is
/// insertion order and survives deletes.
#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    restaurants: Vec<Restaurant>,
    id_mode: IdMode,
    /// Next id handed out in [`IdMode::Counter`] mode; `None` once
    /// `i32::MAX` has been used.
    counter: Option<i32>,
}

impl Default for RestaurantRepository {
    /// An empty store in counter mode.
    fn default() -> Self {
        Self {
            restaurants: Vec::new(),
            id_mode: IdMode::default(),
            counter: Some(1),
        }
    }
}

impl RestaurantRepository {
    pub fn new(restaurants: Vec<Restaurant>, id_mode: IdMode) -> Result<Self> {
        let mut seen = HashSet::with_capacity(restaurants.len());
        for r in &restaurants {
            if !seen.insert(r.id) {
                return Err(RestaurantError::Seed(format!(
                    "duplicate restaurant id {}",
                    r.id
                )));
            }
        }

        let counter = match max_id(&restaurants) {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                RestaurantError::Seed(format!("no id left after restaurant id {}", max))
            })?,
            None => 1,
        };

        Ok(Self {
            restaurants,
            id_mode,
            counter: Some(counter),
        })
    }

    /// Build the store described by the `store` config section.
    ///
    /// A relative `seed_file` is resolved against `project_root`.
    pub fn from_settings(settings: &StoreSettings, project_root: &Path) -> Result<Self> {
        let restaurants = match settings.seed_file {
            Some(ref file) => {
                let path = project_root.join(file);
                tracing::debug!(path = %path.display(), "loading seed file");
                load_seed_file(&path)?
            }
            None => seed_restaurants(settings.seed),
        };
        tracing::info!(
            count = restaurants.len(),
            id_mode = %settings.id_mode,
            "seeded restaurant store"
        );
        Self::new(restaurants, settings.id_mode)
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn list(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn get(&self, id: i32) -> Result<&Restaurant> {
        tracing::debug!(id, "looking up restaurant");
        self.restaurants
            .iter()
            .find(|r| r.id == id)
            .ok_or(RestaurantError::NotFound(id))
    }

    pub fn create(&mut self, input: RestaurantInput) -> Result<Restaurant> {
        let id = self.assign_id()?;
        let restaurant = Restaurant::from_input(id, input);
        self.restaurants.push(restaurant.clone());
        tracing::info!(id, name = %restaurant.name, "created restaurant");
        Ok(restaurant)
    }

    /// Remove a restaurant, returning the removed record.
    pub fn delete(&mut self, id: i32) -> Result<Restaurant> {
        let pos = self.position(id)?;
        let removed = self.restaurants.remove(pos);
        tracing::info!(id, "deleted restaurant");
        Ok(removed)
    }

    /// Shallow-merge `input` onto an existing restaurant.
    pub fn edit(&mut self, id: i32, input: RestaurantInput) -> Result<Restaurant> {
        let pos = self.position(id)?;
        let restaurant = &mut self.restaurants[pos];
        restaurant.apply(input);
        tracing::info!(id, "edited restaurant");
        Ok(restaurant.clone())
    }

    fn position(&self, id: i32) -> Result<usize> {
        self.restaurants
            .iter()
            .position(|r| r.id == id)
            .ok_or(RestaurantError::NotFound(id))
    }

    fn assign_id(&mut self) -> Result<i32> {
        let id = match self.id_mode {
            IdMode::Counter => {
                let id = self.counter;
                self.counter = id.and_then(|id| id.checked_add(1));
                id
            }
            IdMode::MaxPlusOne => match max_id(&self.restaurants) {
                Some(max) => max.checked_add(1),
                None => Some(1),
            },
            IdMode::LastPlusOne => match self.restaurants.last() {
                Some(last) if last.id != 0 => last.id.checked_add(1),
                _ => Some(1),
            },
        };
        id.ok_or(RestaurantError::IdsExhausted)
    }
}

fn max_id(restaurants: &[Restaurant]) -> Option<i32> {
    restaurants.iter().map(|r| r.id).max()
}
