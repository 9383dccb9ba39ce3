//! Example server: an articles resource with nested comments, mounted next to the common and
//! route-listing routes. Settings come from RESOURCES_* env vars (or a `.env` file).

use axum::http::StatusCode;
use axum::Router;
use resource_router::{
    common_routes_with_ready, filter_fn, load_from_env, resource_routes, route_listing_routes, success_many,
    success_one, ActionName, Controller, ControllerSet, Location, Outcome, ResourceOptions, ResourceRegistrar,
    RouteRequest,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

async fn list_articles(_req: RouteRequest) -> Outcome {
    Outcome::respond(success_many(vec!["hello", "world"]))
}

async fn show_article(req: RouteRequest) -> Outcome {
    Outcome::respond(success_one(req.params().clone()))
}

async fn create_article(req: RouteRequest) -> Outcome {
    // Pretend the new record got id 1.
    match req.redirect_to(Location::reverse("articles", "show").param("article", "1")) {
        Ok(response) => Outcome::respond(response),
        Err(e) => Outcome::respond(e),
    }
}

async fn publish_article(req: RouteRequest) -> Outcome {
    let id = req.param("article").unwrap_or_default().to_string();
    Outcome::respond(success_one(serde_json::json!({ "published": id })))
}

async fn list_comments(req: RouteRequest) -> Outcome {
    let article = req.param("article").unwrap_or_default().to_string();
    Outcome::respond(success_many(vec![serde_json::json!({ "article": article, "body": "first" })]))
}

fn controllers() -> ControllerSet {
    let signed_in = filter_fn(|req: &RouteRequest| match req.header("authorization") {
        Some(_) => Outcome::Pass,
        None => Outcome::respond((StatusCode::UNAUTHORIZED, "sign in first")),
    });
    ControllerSet::new()
        .with(
            Controller::new("articles")
                .handle(ActionName::Index, list_articles)
                .handle(ActionName::Show, show_article)
                .handle(ActionName::Create, create_article)
                .handle("publish", publish_article)
                .before(ActionName::Create, signed_in.clone())
                .before("publish", signed_in),
        )
        .with(Controller::new("comments").handle(ActionName::Index, list_comments))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("resource_router=info")),
        )
        .init();

    let config = load_from_env()?;
    let body_limit = config.body_limit;
    let mut registrar = ResourceRegistrar::with_config(config, controllers());
    registrar.nested("articles", ResourceOptions::new(), |scope| {
        scope.member().post("publish")?;
        scope.resource("comments")?;
        Ok(())
    })?;
    for (key, resource) in registrar.registry().iter() {
        tracing::info!(resource = %key, "\n{}", resource);
    }
    let state = registrar.into_state();

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(route_listing_routes(state.clone()))
        .merge(resource_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
