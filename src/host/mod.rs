//! Host framework seam: where resource routes are handed over for serving.

pub mod dispatch;
pub mod request;

pub use dispatch::Dispatcher;
pub use request::{Location, RouteRequest};

use crate::error::RouterError;
use crate::resource::{ActionHandler, FilterChain, Verb};

/// Registers one route with the host framework.
///
/// `filters` run in order before `handler`; an empty chain means none.
pub trait RouteHost {
    fn register_route(
        &mut self,
        verb: Verb,
        template: &str,
        filters: FilterChain,
        handler: ActionHandler,
    ) -> Result<(), RouterError>;
}
