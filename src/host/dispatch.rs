//! axum-backed host: matches requests against registered templates and runs filter chains.

use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::host::{RouteHost, RouteRequest};
use crate::resource::{ActionHandler, FilterChain, Outcome, Verb};
use crate::reverse::ReverseRouter;
use crate::template::TemplateMatcher;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;
use std::error::Error as _;
use std::fmt;
use std::sync::Arc;

struct DispatchRoute {
    verb: Verb,
    template: String,
    matcher: TemplateMatcher,
    filters: FilterChain,
    handler: ActionHandler,
}

/// Routes in registration order. The first route whose verb and template match and whose
/// filters and handler do not pass produces the response.
pub struct Dispatcher {
    config: RouterConfig,
    routes: Vec<DispatchRoute>,
}

impl Dispatcher {
    pub fn new(config: RouterConfig) -> Self {
        Dispatcher {
            config,
            routes: Vec::new(),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub async fn dispatch(&self, reverse: Arc<ReverseRouter>, req: Request) -> Response {
        let (parts, body) = req.into_parts();
        let limit = self.config.body_limit;
        let body = match axum::body::to_bytes(body, limit).await {
            Ok(bytes) => bytes,
            Err(e) if is_length_limit(&e) => {
                tracing::debug!(limit, "request body over limit");
                return RouterError::PayloadTooLarge(limit).into_response();
            }
            Err(e) => {
                tracing::debug!(error = %e, "request body unreadable");
                return RouterError::BadRequest(format!("failed to read request body: {}", e)).into_response();
            }
        };
        let path = parts.uri.path().to_string();
        let base = RouteRequest::new(parts.method, parts.uri, reverse)
            .with_headers(parts.headers)
            .with_body(body);

        for route in &self.routes {
            if !route.verb.matches(&base.method) {
                continue;
            }
            let Some(params) = route.matcher.captures(&path) else {
                continue;
            };
            tracing::debug!(method = %base.method, path = %path, template = %route.template, "route matched");
            match run_route(route, base.clone().with_params(params)).await {
                Outcome::Respond(response) => return response,
                Outcome::Pass => continue,
            }
        }

        RouterError::NoRoute {
            method: base.method.to_string(),
            path,
        }
        .into_response()
    }
}

/// `to_bytes` wraps the limit error directly; errors from the body stream itself are nested deeper.
fn is_length_limit(err: &axum::Error) -> bool {
    err.source().is_some_and(|source| source.is::<LengthLimitError>())
}

async fn run_route(route: &DispatchRoute, req: RouteRequest) -> Outcome {
    for filter in &route.filters {
        if let Outcome::Respond(response) = filter.before(&req).await {
            return Outcome::Respond(response);
        }
    }
    route.handler.call(req).await
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new(RouterConfig::default())
    }
}

impl RouteHost for Dispatcher {
    fn register_route(
        &mut self,
        verb: Verb,
        template: &str,
        filters: FilterChain,
        handler: ActionHandler,
    ) -> Result<(), RouterError> {
        let matcher = TemplateMatcher::compile(template, &self.config).map_err(|e| RouterError::Template {
            template: template.to_string(),
            message: e.to_string(),
        })?;
        self.routes.push(DispatchRoute {
            verb,
            template: template.to_string(),
            matcher,
            filters,
            handler,
        });
        Ok(())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field(
                "routes",
                &self
                    .routes
                    .iter()
                    .map(|r| format!("{} {}", r.verb, r.template))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
