use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::{Full, Limited};
use resource_router::{
    filter_fn, route_listing_routes, success_one, ActionName, Controller, ControllerSet, Location, Outcome,
    ResourceOptions, ResourceRegistrar, RouteRequest, RouterConfig,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

async fn index(req: RouteRequest) -> Outcome {
    Outcome::respond(format!("index {}", req.format().unwrap_or("html")))
}

async fn show(req: RouteRequest) -> Outcome {
    Outcome::respond(success_one(req.params().clone()))
}

async fn create(req: RouteRequest) -> Outcome {
    Outcome::respond((StatusCode::CREATED, req.body.clone()))
}

async fn update(req: RouteRequest) -> Outcome {
    match req.redirect_to(Location::reverse("articles", "show").param("article", req.param("article").unwrap_or(""))) {
        Ok(response) => Outcome::respond(response),
        Err(e) => Outcome::respond(e),
    }
}

/// Only answers `/articles/<id>/preview`; everything else falls through.
async fn all(req: RouteRequest) -> Outcome {
    match req.param("op") {
        Some("preview") => Outcome::respond("preview"),
        _ => Outcome::Pass,
    }
}

async fn comment_show(req: RouteRequest) -> Outcome {
    Outcome::respond(format!(
        "comment {} of article {}",
        req.param("comment").unwrap_or("?"),
        req.param("article").unwrap_or("?")
    ))
}

fn articles() -> Controller {
    let owner = filter_fn(|req: &RouteRequest| {
        if req.header("x-user").is_some() {
            Outcome::Pass
        } else {
            Outcome::respond((StatusCode::UNAUTHORIZED, "login required"))
        }
    });
    Controller::new("articles")
        .handle(ActionName::All, all)
        .handle(ActionName::Index, index)
        .handle(ActionName::Create, create)
        .handle(ActionName::Show, show)
        .handle(ActionName::Update, update)
        .handle("publish", |req: RouteRequest| async move {
            Outcome::respond(format!("published {}", req.param("article").unwrap_or("?")))
        })
        .before(ActionName::Update, owner.clone())
        .before("publish", owner)
}

fn registrar(config: RouterConfig) -> ResourceRegistrar {
    let loader = ControllerSet::new()
        .with(articles())
        .with(Controller::new("comments").handle(ActionName::Show, comment_show));
    let mut app = ResourceRegistrar::with_config(config, loader);
    app.nested("articles", ResourceOptions::new(), |scope| {
        scope.member().post("publish")?;
        scope.resource("comments")?;
        Ok(())
    })
    .unwrap();
    app
}

fn app() -> Router {
    registrar(RouterConfig::default()).into_router()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn index_and_format() {
    let (status, _, body) = send(app(), get("/articles")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"index html");

    let (_, _, body) = send(app(), get("/articles.json")).await;
    assert_eq!(body, b"index json");

    let (status, _, body) = send(app(), get("/articles/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"index html");
}

#[tokio::test]
async fn show_extracts_decoded_params() {
    let (status, _, body) = send(app(), get("/Articles/hello%20world.xml")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["article"], "hello world");
    assert_eq!(json["data"]["format"], "xml");
}

#[tokio::test]
async fn strict_case_sensitive_config() {
    let config = RouterConfig {
        case_sensitive: true,
        strict: true,
        ..RouterConfig::default()
    };
    let app = registrar(config).into_router();
    let (status, _, _) = send(app.clone(), get("/Articles")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(app.clone(), get("/articles/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(app, get("/articles")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn post_receives_the_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/articles")
        .body(Body::from("title=hi"))
        .unwrap();
    let (status, _, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, b"title=hi");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = RouterConfig {
        body_limit: 4,
        ..RouterConfig::default()
    };
    let req = Request::builder()
        .method("POST")
        .uri("/articles")
        .body(Body::from("far too long"))
        .unwrap();
    let (status, _, body) = send(registrar(config).into_router(), req).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "payload_too_large");
}

#[tokio::test]
async fn failing_body_stream_is_a_bad_request() {
    // The inner limit trips while the dispatcher reads, well under its own limit.
    let broken = Body::new(Limited::new(Full::new(Bytes::from_static(b"abc")), 1));
    let req = Request::builder()
        .method("POST")
        .uri("/articles")
        .body(broken)
        .unwrap();
    let (status, _, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn before_filter_short_circuits() {
    let req = Request::builder()
        .method("PUT")
        .uri("/articles/7")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, b"login required");

    let req = Request::builder()
        .method("POST")
        .uri("/articles/7/publish")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(app(), req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn redirect_to_a_reversed_location() {
    let req = Request::builder()
        .method("PUT")
        .uri("/articles/7")
        .header("x-user", "ann")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(app(), req).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(headers.get(header::LOCATION).unwrap(), "/articles/7");
}

#[tokio::test]
async fn custom_member_action_runs_after_its_filter() {
    let req = Request::builder()
        .method("POST")
        .uri("/articles/7/publish")
        .header("x-user", "ann")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"published 7");
}

#[tokio::test]
async fn all_action_answers_or_passes() {
    let (status, _, body) = send(app(), get("/articles/3/preview")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"preview");

    // `all` matches and passes; `show` answers.
    let (status, _, body) = send(app(), get("/articles/3")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["article"], "3");
}

#[tokio::test]
async fn nested_resource_dispatch() {
    let (status, _, body) = send(app(), get("/articles/3/comments/9")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"comment 9 of article 3");
}

#[tokio::test]
async fn head_is_answered_by_get_routes() {
    let req = Request::builder()
        .method("HEAD")
        .uri("/articles")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unmatched_request_is_a_json_404() {
    let req = Request::builder()
        .method("DELETE")
        .uri("/articles/3")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "no route for DELETE /articles/3");
}

#[tokio::test]
async fn route_listing() {
    let state = registrar(RouterConfig::default()).into_state();
    let (status, _, body) = send(route_listing_routes(state), get("/routes")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["meta"]["count"], 2);

    let comments = &json["data"][0];
    assert_eq!(comments["resource"], "article_comments");
    assert_eq!(comments["base"], "/articles/:article/comments");
    assert_eq!(comments["routes"][0]["action"], "show");
    assert_eq!(comments["routes"][0]["method"], "GET");
    assert_eq!(comments["routes"][0]["path"], "/articles/:article/comments/:comment.:format?");

    let articles = &json["data"][1];
    assert_eq!(articles["resource"], "articles");
    assert_eq!(articles["routes"][0]["action"], "all");
    assert_eq!(articles["routes"][0]["method"], "ANY");
    assert_eq!(articles["routes"][0]["path"], "/articles/:article?/:op?");
}

#[tokio::test]
async fn filters_run_in_order_and_stop_at_the_first_response() {
    let calls = Arc::new(Mutex::new(Vec::<&'static str>::new()));
    let signed_in = {
        let calls = calls.clone();
        filter_fn(move |req: &RouteRequest| {
            calls.lock().unwrap().push("signed_in");
            match req.header("x-user") {
                Some(_) => Outcome::Pass,
                None => Outcome::respond(StatusCode::UNAUTHORIZED),
            }
        })
    };
    let audit = {
        let calls = calls.clone();
        filter_fn(move |_req: &RouteRequest| {
            calls.lock().unwrap().push("audit");
            Outcome::Pass
        })
    };
    let handler_calls = calls.clone();
    let controller = Controller::new("articles")
        .handle(ActionName::Show, move |req: RouteRequest| {
            let calls = handler_calls.clone();
            async move {
                calls.lock().unwrap().push("show");
                match req.path_for("articles", "show", req.params()) {
                    Ok(path) => Outcome::respond(path),
                    Err(e) => Outcome::respond(e),
                }
            }
        })
        .before(ActionName::Show, signed_in)
        .before(ActionName::Show, audit);
    let mut app = ResourceRegistrar::with_config(RouterConfig::default(), ControllerSet::new().with(controller));
    app.resource("articles").unwrap();
    let router = app.into_router();

    let (status, _, _) = send(router.clone(), get("/articles/1")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(*calls.lock().unwrap(), vec!["signed_in"]);

    calls.lock().unwrap().clear();
    let req = Request::builder()
        .uri("/articles/1.json")
        .header("x-user", "ann")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"/articles/1.json");
    assert_eq!(*calls.lock().unwrap(), vec!["signed_in", "audit", "show"]);
}
