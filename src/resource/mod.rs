//! Resources and the controllers that back them.

pub mod action;
pub mod controller;
pub mod model;
pub mod table;

pub use action::{ActionName, Verb};
pub use controller::{
    filter_fn, Action, ActionHandler, BeforeFilters, Controller, ControllerLoader, ControllerSet, Filter,
    FilterChain, FilterRef, Outcome,
};
pub use model::{CustomKind, Resource};
pub use table::{RouteRecord, RouteTable};
