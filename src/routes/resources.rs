//! Resource routes: every request not claimed by another router is dispatched against the
//! templates registered by resource definitions.

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    response::Response,
    Router,
};

async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    state.dispatcher.dispatch(state.reverse.clone(), req).await
}

pub fn resource_routes(state: AppState) -> Router {
    Router::new().fallback(dispatch).with_state(state)
}
