//! Resource Router: convention-based RESTful resource routing for axum.
//!
//! A controller's conventional actions (`index`, `new`, `create`, `show`, `edit`, `update`,
//! `destroy`, plus the catch-all `all`) are registered under derived path templates; resources
//! nest under a parent's member path; paths are rebuilt from (resource, action, params).

pub mod config;
pub mod error;
pub mod host;
pub mod inflect;
pub mod registrar;
pub mod registry;
pub mod resource;
pub mod response;
pub mod reverse;
pub mod routes;
pub mod scope;
pub mod state;
pub mod template;

pub use config::{load_from_env, load_from_file, ResourceOptions, RouterConfig};
pub use error::{ConfigError, ControllerError, RouterError};
pub use host::{Dispatcher, Location, RouteHost, RouteRequest};
pub use registrar::{CustomActions, ResourceRegistrar, ResourceScope};
pub use registry::ResourceRegistry;
pub use resource::{
    filter_fn, Action, ActionName, BeforeFilters, Controller, ControllerLoader, ControllerSet, Filter, Outcome,
    Resource, RouteRecord, RouteTable, Verb,
};
pub use response::{redirect, success_many, success_one};
pub use reverse::{ReverseRouter, RouteParams};
pub use routes::{common_routes, common_routes_with_ready, resource_routes, route_listing_routes};
pub use scope::DefinitionContext;
pub use state::AppState;
