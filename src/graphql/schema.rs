use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};
use tokio::sync::RwLock;

use crate::storage::RestaurantRepository;

use super::types::*;

pub type RestaurantsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Shared schema data. Mutations hold the write lock for their whole
/// resolver call, so at most one runs at a time.
pub struct AppState {
    pub store: RwLock<RestaurantRepository>,
}

pub fn build_schema(store: RestaurantRepository) -> RestaurantsSchema {
    let state = Arc::new(AppState {
        store: RwLock::new(store),
    });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

fn get_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single restaurant by ID
    async fn restaurant(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Restaurant> {
        let store = get_state(ctx)?.store.read().await;
        let restaurant = store.get(id)?;
        Ok(restaurant.clone().into())
    }

    /// List all restaurants in insertion order
    async fn restaurants(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Restaurant>> {
        let store = get_state(ctx)?.store.read().await;
        Ok(store.list().iter().cloned().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a restaurant with a store-assigned id
    async fn set_restaurant(
        &self,
        ctx: &Context<'_>,
        input: RestaurantInput,
    ) -> async_graphql::Result<Restaurant> {
        let mut store = get_state(ctx)?.store.write().await;
        Ok(store.create(input.into())?.into())
    }

    /// Delete a restaurant permanently
    async fn delete_restaurant(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<bool> {
        let mut store = get_state(ctx)?.store.write().await;
        store.delete(id)?;
        Ok(true)
    }

    /// Overwrite the provided fields of a restaurant. A supplied `dishes`
    /// list replaces the old one entirely.
    async fn edit_restaurant(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: RestaurantInput,
    ) -> async_graphql::Result<Restaurant> {
        let mut store = get_state(ctx)?.store.write().await;
        Ok(store.edit(id, input.into())?.into())
    }
}
