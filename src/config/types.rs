//! Raw config types: router settings and per-resource options.

use crate::resource::BeforeFilters;
use serde::{Deserialize, Serialize};

/// Default request body limit for dispatched actions (2 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Router-wide matching and dispatch settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Match paths case-sensitively. Off by default.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Reject a trailing slash that the template does not spell out. Off by default.
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

fn default_body_limit() -> usize {
    DEFAULT_BODY_LIMIT
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            case_sensitive: false,
            strict: false,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

/// Options for one resource definition, declared on the controller or at the call site.
///
/// `name` overrides the resource name, `root` mounts it at `/`, `id` overrides the member
/// parameter name. `before` maps action names to filter chains and is code-only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResourceOptions {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub root: Option<bool>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(skip)]
    pub before: BeforeFilters,
}

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn root(mut self, root: bool) -> Self {
        self.root = Some(root);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn before(mut self, before: BeforeFilters) -> Self {
        self.before = before;
        self
    }

    /// Shallow merge: values set in `overrides` win. A non-empty `before` map replaces ours wholesale.
    pub fn merged(self, overrides: ResourceOptions) -> ResourceOptions {
        ResourceOptions {
            name: overrides.name.or(self.name),
            root: overrides.root.or(self.root),
            id: overrides.id.or(self.id),
            before: if overrides.before.is_empty() {
                self.before
            } else {
                overrides.before
            },
        }
    }
}
