//! Request view handed to filters and actions.

use crate::error::RouterError;
use crate::response::redirect;
use crate::reverse::{ReverseRouter, RouteParams};
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;
use std::sync::Arc;

/// Redirect target: a literal path or a (resource, action, params) triple resolved by reverse routing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Path(String),
    Reverse {
        resource: String,
        action: String,
        params: RouteParams,
    },
}

impl Location {
    pub fn reverse(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Location::Reverse {
            resource: resource.into(),
            action: action.into(),
            params: RouteParams::new(),
        }
    }

    /// Add a parameter to a reverse location. No effect on a literal path.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Location::Reverse { params, .. } = &mut self {
            params.insert(name, value);
        }
        self
    }

    pub fn resolve(&self, router: &ReverseRouter) -> Result<String, RouterError> {
        match self {
            Location::Path(path) => Ok(path.clone()),
            Location::Reverse {
                resource,
                action,
                params,
            } => router.reverse(resource, action, params),
        }
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::Path(path.to_string())
    }
}

impl From<String> for Location {
    fn from(path: String) -> Self {
        Location::Path(path)
    }
}

#[derive(Clone, Debug)]
pub struct RouteRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
    params: RouteParams,
    reverse: Arc<ReverseRouter>,
}

impl RouteRequest {
    pub fn new(method: Method, uri: Uri, reverse: Arc<ReverseRouter>) -> Self {
        RouteRequest {
            method,
            uri,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            params: RouteParams::new(),
            reverse,
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Requested format extension, e.g. `json` for `/articles/2.json`.
    pub fn format(&self) -> Option<&str> {
        self.params.get("format")
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Path for a (resource, action, params) triple.
    pub fn path_for(&self, resource: &str, action: &str, params: &RouteParams) -> Result<String, RouterError> {
        self.reverse.reverse(resource, action, params)
    }

    /// 302 redirect to a literal path or a reverse-routed location.
    pub fn redirect_to(&self, location: impl Into<Location>) -> Result<Response, RouterError> {
        let path = location.into().resolve(&self.reverse)?;
        Ok(redirect(&path))
    }
}
