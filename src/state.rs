//! Shared state for the axum routers. Frozen once resource definition is finished.

use crate::host::Dispatcher;
use crate::reverse::ReverseRouter;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    /// Read-only at request time; shared by every in-flight request.
    pub reverse: Arc<ReverseRouter>,
}
