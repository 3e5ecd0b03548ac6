use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{MethodRouter, post},
};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::RestaurantsSchema;

async fn graphql_handler(
    State(schema): State<RestaurantsSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Build the HTTP router: POST executes documents, GET serves GraphiQL
/// on the same path when enabled.
pub fn router(schema: RestaurantsSchema, settings: &ServerSettings) -> Router {
    let mut route: MethodRouter<RestaurantsSchema> = post(graphql_handler);

    if settings.graphiql {
        let page = GraphiQLSource::build().endpoint(&settings.endpoint).finish();
        route = route.get(move || {
            let page = page.clone();
            async move { Html(page) }
        });
    }

    Router::new()
        .route(&settings.endpoint, route)
        .with_state(schema)
}

/// Serve on an already bound listener until ctrl-c.
pub async fn serve(
    listener: TcpListener,
    schema: RestaurantsSchema,
    settings: &ServerSettings,
) -> Result<()> {
    let app = router(schema, settings);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn run_server(schema: RestaurantsSchema, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind(settings.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, endpoint = %settings.endpoint, "GraphQL server listening");
    serve(listener, schema, settings).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
