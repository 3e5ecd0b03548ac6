use crate::model::{self, Dish as ModelDish, Restaurant as ModelRestaurant};
use async_graphql::{InputObject, SimpleObject};

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Dish {
    pub name: String,
    pub price: f64,
}

impl From<ModelDish> for Dish {
    fn from(d: ModelDish) -> Self {
        Self {
            name: d.name,
            price: d.price,
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub dishes: Vec<Dish>,
}

impl From<ModelRestaurant> for Restaurant {
    fn from(r: ModelRestaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            dishes: r.dishes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(InputObject)]
pub struct DishInput {
    pub name: String,
    pub price: f64,
}

impl From<DishInput> for ModelDish {
    fn from(d: DishInput) -> Self {
        ModelDish::new(d.name, d.price)
    }
}

/// Omitted fields are left untouched by `editRestaurant`. An explicit
/// `null` counts as omitted: `Restaurant` fields are non-null, so there is
/// nothing to clear them to.
#[derive(InputObject)]
pub struct RestaurantInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub dishes: Option<Vec<DishInput>>,
}

impl From<RestaurantInput> for model::RestaurantInput {
    fn from(i: RestaurantInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            dishes: i
                .dishes
                .map(|dishes| dishes.into_iter().map(Into::into).collect()),
        }
    }
}
