//! Reverse routing: (resource, action, params) back to a concrete path.

use crate::error::RouterError;
use crate::registry::ResourceRegistry;
use crate::template::{tokenize, Token};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Named path parameter values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RouteParams(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for RouteParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Substitute params into a template.
///
/// A supplied value replaces the token's name, percent-encoded, keeping its leading `/` or `.`
/// and dropping the `?` marker. An absent optional token is removed together with its leading `/` or `.`. An
/// absent required token is left in the output as written; callers must supply every
/// required parameter. A path elided down to nothing (the root index) becomes `/`.
pub fn substitute(template: &str, params: &RouteParams) -> String {
    let mut out = String::with_capacity(template.len());
    for token in tokenize(template) {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Param(param) => match params.get(param.name) {
                Some(value) => {
                    out.push_str(param.leading);
                    out.push_str(&urlencoding::encode(value));
                }
                None if param.optional => {}
                None => {
                    tracing::warn!(
                        template = %template,
                        param = %param.name,
                        "required path parameter missing, token left unresolved"
                    );
                    out.push_str(param.raw);
                }
            },
        }
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Resolves paths against the route tables of registered resources. Read-only.
#[derive(Clone, Debug, Default)]
pub struct ReverseRouter {
    registry: Arc<ResourceRegistry>,
}

impl ReverseRouter {
    pub fn new(registry: Arc<ResourceRegistry>) -> Self {
        ReverseRouter { registry }
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Path for the first route of `resource` recorded under `action`.
    pub fn reverse(&self, resource: &str, action: &str, params: &RouteParams) -> Result<String, RouterError> {
        reverse_in(&self.registry, resource, action, params)
    }
}

pub(crate) fn reverse_in(
    registry: &ResourceRegistry,
    resource: &str,
    action: &str,
    params: &RouteParams,
) -> Result<String, RouterError> {
    let found = registry.lookup(resource)?;
    let record = found
        .routes()
        .first(action)
        .ok_or_else(|| RouterError::UnknownAction {
            resource: resource.to_string(),
            action: action.to_string(),
        })?;
    Ok(substitute(&record.template, params))
}
