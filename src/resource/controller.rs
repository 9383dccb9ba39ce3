//! Controllers: named action handlers plus the before-filters guarding them.

use crate::config::{validate_controller, ResourceOptions};
use crate::error::ControllerError;
use crate::host::RouteRequest;
use crate::resource::ActionName;
use async_trait::async_trait;
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Result of running a filter or an action.
pub enum Outcome {
    /// Stop here and send this response.
    Respond(Response),
    /// Continue: the next filter, the handler, or the next matching route.
    Pass,
}

impl Outcome {
    pub fn respond(response: impl IntoResponse) -> Self {
        Outcome::Respond(response.into_response())
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Respond(r) => f.debug_tuple("Respond").field(&r.status()).finish(),
            Outcome::Pass => f.write_str("Pass"),
        }
    }
}

/// An action handler.
#[async_trait]
pub trait Action: Send + Sync {
    async fn call(&self, req: RouteRequest) -> Outcome;
}

#[async_trait]
impl<F, Fut> Action for F
where
    F: Fn(RouteRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Outcome> + Send,
{
    async fn call(&self, req: RouteRequest) -> Outcome {
        (self)(req).await
    }
}

/// A before-filter. Returning [`Outcome::Respond`] short-circuits the chain.
#[async_trait]
pub trait Filter: Send + Sync {
    async fn before(&self, req: &RouteRequest) -> Outcome;
}

struct FnFilter<F>(F);

#[async_trait]
impl<F> Filter for FnFilter<F>
where
    F: Fn(&RouteRequest) -> Outcome + Send + Sync,
{
    async fn before(&self, req: &RouteRequest) -> Outcome {
        (self.0)(req)
    }
}

pub type ActionHandler = Arc<dyn Action>;
pub type FilterRef = Arc<dyn Filter>;
pub type FilterChain = Vec<FilterRef>;

/// Wrap a synchronous closure as a shareable filter.
pub fn filter_fn<F>(f: F) -> FilterRef
where
    F: Fn(&RouteRequest) -> Outcome + Send + Sync + 'static,
{
    Arc::new(FnFilter(f))
}

/// Filter chains keyed by action name.
#[derive(Clone, Default)]
pub struct BeforeFilters {
    by_action: HashMap<ActionName, FilterChain>,
}

impl BeforeFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to an action's chain. Chains run in insertion order.
    pub fn add(&mut self, action: impl Into<ActionName>, filter: FilterRef) -> &mut Self {
        self.by_action.entry(action.into()).or_default().push(filter);
        self
    }

    pub fn with(mut self, action: impl Into<ActionName>, filter: FilterRef) -> Self {
        self.add(action, filter);
        self
    }

    /// The chain for an action; empty when none was declared.
    pub fn chain(&self, action: &ActionName) -> FilterChain {
        self.by_action.get(action).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_action.is_empty()
    }
}

impl fmt::Debug for BeforeFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.by_action.iter().map(|(k, v)| (k.as_str(), v.len())))
            .finish()
    }
}

/// A controller: declared options and a handler per action it implements.
#[derive(Clone)]
pub struct Controller {
    pub name: String,
    pub options: ResourceOptions,
    handlers: HashMap<ActionName, ActionHandler>,
}

impl Controller {
    pub fn new(name: impl Into<String>) -> Self {
        Controller {
            name: name.into(),
            options: ResourceOptions::default(),
            handlers: HashMap::new(),
        }
    }

    pub fn handle(mut self, action: impl Into<ActionName>, handler: impl Action + 'static) -> Self {
        self.handlers.insert(action.into(), Arc::new(handler));
        self
    }

    pub fn options(mut self, options: ResourceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn before(mut self, action: impl Into<ActionName>, filter: FilterRef) -> Self {
        self.options.before.add(action, filter);
        self
    }

    pub fn handler(&self, action: &ActionName) -> Option<ActionHandler> {
        self.handlers.get(action).cloned()
    }

    pub fn has(&self, action: &ActionName) -> bool {
        self.handlers.contains_key(action)
    }

    pub fn actions(&self) -> impl Iterator<Item = &ActionName> {
        self.handlers.keys()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<&str> = self.handlers.keys().map(ActionName::as_str).collect();
        actions.sort_unstable();
        f.debug_struct("Controller")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("actions", &actions)
            .finish()
    }
}

/// Resolves a controller by name. Caching is the loader's concern.
pub trait ControllerLoader {
    fn load(&self, name: &str) -> Result<Controller, ControllerError>;
}

/// In-memory loader keyed by controller name. Controllers are validated when loaded.
#[derive(Clone, Debug, Default)]
pub struct ControllerSet {
    controllers: HashMap<String, Controller>,
}

impl ControllerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, controller: Controller) -> &mut Self {
        self.controllers.insert(controller.name.clone(), controller);
        self
    }

    pub fn with(mut self, controller: Controller) -> Self {
        self.insert(controller);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controllers.contains_key(name)
    }
}

impl ControllerLoader for ControllerSet {
    fn load(&self, name: &str) -> Result<Controller, ControllerError> {
        let controller = self
            .controllers
            .get(name)
            .cloned()
            .ok_or_else(|| ControllerError::NotFound(name.to_string()))?;
        validate_controller(&controller)?;
        Ok(controller)
    }
}
