//! Route listing: GET /routes renders every defined resource and its route table.

use crate::resource::RouteTable;
use crate::response::success_many;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ResourceListing {
    /// Registry key, e.g. `article_comments`.
    resource: String,
    name: String,
    base: String,
    id: String,
    routes: RouteTable,
}

async fn list_routes(State(state): State<AppState>) -> impl IntoResponse {
    let data: Vec<ResourceListing> = state
        .reverse
        .registry()
        .iter()
        .map(|(key, r)| ResourceListing {
            resource: key.to_string(),
            name: r.name().to_string(),
            base: r.base_path().to_string(),
            id: r.id_token().to_string(),
            routes: r.routes().clone(),
        })
        .collect();
    success_many(data)
}

pub fn route_listing_routes(state: AppState) -> Router {
    Router::new().route("/routes", get(list_routes)).with_state(state)
}
