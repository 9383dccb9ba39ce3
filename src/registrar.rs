//! Resource definition entry point: loads controllers, builds resources, handles nesting.

use crate::config::{ResourceOptions, RouterConfig};
use crate::error::RouterError;
use crate::host::{Dispatcher, RouteHost};
use crate::registry::ResourceRegistry;
use crate::resource::{Action, ActionHandler, ActionName, Controller, ControllerLoader, CustomKind, Resource, Verb};
use crate::reverse::{reverse_in, ReverseRouter, RouteParams};
use crate::routes::resource_routes;
use crate::scope::DefinitionContext;
use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

/// Wraps a host and a controller loader; defines resources against them.
pub struct ResourceRegistrar<H = Dispatcher> {
    host: H,
    loader: Box<dyn ControllerLoader>,
    registry: ResourceRegistry,
}

impl<H: RouteHost> ResourceRegistrar<H> {
    pub fn new(host: H, loader: impl ControllerLoader + 'static) -> Self {
        ResourceRegistrar {
            host,
            loader: Box::new(loader),
            registry: ResourceRegistry::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Define a top-level resource backed by the controller named `name`.
    pub fn resource(&mut self, name: &str) -> Result<Arc<Resource>, RouterError> {
        self.resource_with(name, ResourceOptions::default())
    }

    pub fn resource_with(&mut self, name: &str, options: ResourceOptions) -> Result<Arc<Resource>, RouterError> {
        self.define(&DefinitionContext::root(), name, options)
    }

    /// Define a top-level resource and, inside `nest`, resources and custom actions under it.
    pub fn nested<F>(&mut self, name: &str, options: ResourceOptions, nest: F) -> Result<Arc<Resource>, RouterError>
    where
        F: FnOnce(&mut ResourceScope<'_, H>) -> Result<(), RouterError>,
    {
        self.define_nested(&DefinitionContext::root(), name, options, nest)
    }

    pub fn reverse(&self, resource: &str, action: &str, params: &RouteParams) -> Result<String, RouterError> {
        reverse_in(&self.registry, resource, action, params)
    }

    fn build(
        &mut self,
        ctx: &DefinitionContext,
        name: &str,
        options: ResourceOptions,
    ) -> Result<(Resource, Controller), RouterError> {
        let controller = self.loader.load(name)?;
        let options = controller.options.clone().merged(options);
        let mut resource = Resource::new(ctx, name, options);
        resource.init(&controller, &mut self.host)?;
        Ok((resource, controller))
    }

    fn define(
        &mut self,
        ctx: &DefinitionContext,
        name: &str,
        options: ResourceOptions,
    ) -> Result<Arc<Resource>, RouterError> {
        let (resource, _) = self.build(ctx, name, options)?;
        Ok(self.register(ctx, resource))
    }

    fn define_nested<F>(
        &mut self,
        ctx: &DefinitionContext,
        name: &str,
        options: ResourceOptions,
        nest: F,
    ) -> Result<Arc<Resource>, RouterError>
    where
        F: FnOnce(&mut ResourceScope<'_, H>) -> Result<(), RouterError>,
    {
        let (mut resource, controller) = self.build(ctx, name, options)?;
        let child = ctx.nested(&resource);
        let nested = {
            let mut scope = ResourceScope {
                registrar: &mut *self,
                ctx: child,
                resource: &mut resource,
                controller: &controller,
            };
            nest(&mut scope)
        };
        // Its routes are already on the host, so the parent is registered either way.
        let resource = self.register(ctx, resource);
        nested.map(|()| resource)
    }

    fn register(&mut self, ctx: &DefinitionContext, resource: Resource) -> Arc<Resource> {
        let key = ctx.registry_key(resource.name());
        let resource = Arc::new(resource);
        tracing::debug!(
            resource = %key,
            base = %resource.base_path(),
            routes = resource.routes().len(),
            depth = ctx.depth(),
            "resource defined"
        );
        self.registry.insert(key, resource.clone());
        resource
    }
}

impl ResourceRegistrar<Dispatcher> {
    pub fn with_config(config: RouterConfig, loader: impl ControllerLoader + 'static) -> Self {
        ResourceRegistrar::new(Dispatcher::new(config), loader)
    }

    /// Freeze definitions into shared, read-only request-time state.
    pub fn into_state(self) -> AppState {
        let registry = Arc::new(self.registry);
        AppState {
            dispatcher: Arc::new(self.host),
            reverse: Arc::new(ReverseRouter::new(registry)),
        }
    }

    pub fn into_router(self) -> Router {
        resource_routes(self.into_state())
    }
}

/// The definition in progress inside a nesting callback.
pub struct ResourceScope<'r, H> {
    registrar: &'r mut ResourceRegistrar<H>,
    ctx: DefinitionContext,
    resource: &'r mut Resource,
    controller: &'r Controller,
}

impl<'r, H: RouteHost> ResourceScope<'r, H> {
    /// Define a resource nested under the current one.
    pub fn resource(&mut self, name: &str) -> Result<Arc<Resource>, RouterError> {
        self.resource_with(name, ResourceOptions::default())
    }

    pub fn resource_with(&mut self, name: &str, options: ResourceOptions) -> Result<Arc<Resource>, RouterError> {
        self.registrar.define(&self.ctx, name, options)
    }

    pub fn nested<F>(&mut self, name: &str, options: ResourceOptions, nest: F) -> Result<Arc<Resource>, RouterError>
    where
        F: FnOnce(&mut ResourceScope<'_, H>) -> Result<(), RouterError>,
    {
        self.registrar.define_nested(&self.ctx, name, options, nest)
    }

    /// Custom actions under the member path (`/articles/:article/<action>`).
    pub fn member(&mut self) -> CustomActions<'_, 'r, H> {
        CustomActions {
            scope: self,
            kind: CustomKind::Member,
        }
    }

    /// Custom actions under the collection path (`/articles/<action>`).
    pub fn collection(&mut self) -> CustomActions<'_, 'r, H> {
        CustomActions {
            scope: self,
            kind: CustomKind::Collection,
        }
    }

    /// The resource being defined.
    pub fn current(&self) -> &Resource {
        self.resource
    }

    pub fn context(&self) -> &DefinitionContext {
        &self.ctx
    }

    fn custom(
        &mut self,
        kind: CustomKind,
        verb: Verb,
        action: &str,
        handler: Option<ActionHandler>,
    ) -> Result<(), RouterError> {
        let handler = handler
            .or_else(|| self.controller.handler(&ActionName::from(action)))
            .ok_or_else(|| RouterError::MissingHandler {
                resource: self.resource.name().to_string(),
                action: action.to_string(),
            })?;
        self.resource
            .add_custom(&mut self.registrar.host, kind, verb, action, handler)
    }
}

/// Attaches custom actions to a member or collection path.
pub struct CustomActions<'s, 'r, H> {
    scope: &'s mut ResourceScope<'r, H>,
    kind: CustomKind,
}

macro_rules! custom_verb {
    ($method:ident, $with:ident, $verb:expr) => {
        /// Handler taken from the controller's same-named action.
        pub fn $method(&mut self, action: &str) -> Result<&mut Self, RouterError> {
            self.route($verb, action, None)
        }

        pub fn $with(&mut self, action: &str, handler: impl Action + 'static) -> Result<&mut Self, RouterError> {
            self.route($verb, action, Some(Arc::new(handler)))
        }
    };
}

impl<'s, 'r, H: RouteHost> CustomActions<'s, 'r, H> {
    /// Register `action` for `verb`. Without an explicit handler the controller must provide one.
    pub fn route(&mut self, verb: Verb, action: &str, handler: Option<ActionHandler>) -> Result<&mut Self, RouterError> {
        self.scope.custom(self.kind, verb, action, handler)?;
        Ok(self)
    }

    custom_verb!(get, get_with, Verb::Get);
    custom_verb!(post, post_with, Verb::Post);
    custom_verb!(put, put_with, Verb::Put);
    custom_verb!(delete, delete_with, Verb::Delete);
    custom_verb!(any, any_with, Verb::Any);
}
