//! Example consumer: a separate Rust project that uses resource-router as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Or from this directory: `cargo run`

use axum::http::StatusCode;
use resource_router::{
    common_routes_with_ready, filter_fn, load_from_env, resource_routes, success_one, ActionName, Controller,
    ControllerSet, Outcome, ResourceOptions, ResourceRegistrar, RouteRequest,
};
use tokio::net::TcpListener;

async fn show_user(req: RouteRequest) -> Outcome {
    Outcome::respond(success_one(req.params().clone()))
}

async fn home(_req: RouteRequest) -> Outcome {
    Outcome::respond("users home")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resource_router=info")),
        )
        .init();

    let admin_only = filter_fn(|req: &RouteRequest| match req.header("x-admin") {
        Some("1") => Outcome::Pass,
        _ => Outcome::respond(StatusCode::FORBIDDEN),
    });
    let users = Controller::new("users")
        .handle(ActionName::Index, home)
        .handle(ActionName::Show, show_user)
        .before(ActionName::Show, admin_only);

    // Mounted at `/`: GET / and GET /:id.
    let mut registrar = ResourceRegistrar::with_config(load_from_env()?, ControllerSet::new().with(users));
    registrar.resource_with("users", ResourceOptions::new().root(true))?;
    let state = registrar.into_state();

    let app = common_routes_with_ready(state.clone()).merge(resource_routes(state));
    let listener = TcpListener::bind("127.0.0.1:3000").await?;
    let port = listener.local_addr()?.port();
    tracing::info!("Example consumer listening on http://127.0.0.1:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
