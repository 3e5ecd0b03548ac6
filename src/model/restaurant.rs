use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub price: f64,
}

impl Dish {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i32,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub dishes: Vec<Dish>,
}

/// Fields supplied to create or edit a restaurant.
///
/// A `None` field is "not provided": create stores its empty value, edit
/// leaves the existing value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dishes: Option<Vec<Dish>>,
}

impl Restaurant {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            dishes: Vec::new(),
        }
    }

    /// Build a fresh record from an id and the provided input fields.
    pub fn from_input(id: i32, input: RestaurantInput) -> Self {
        Self {
            id,
            name: input.name.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            dishes: input.dishes.unwrap_or_default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dishes(mut self, dishes: Vec<Dish>) -> Self {
        self.dishes = dishes;
        self
    }

    /// Shallow merge: each provided field overwrites the current one
    /// wholesale. `dishes` is replaced, never merged element-wise.
    pub fn apply(&mut self, input: RestaurantInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(dishes) = input.dishes {
            self.dishes = dishes;
        }
    }
}

impl RestaurantInput {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_dishes(mut self, dishes: Vec<Dish>) -> Self {
        self.dishes = Some(dishes);
        self
    }
}
