//! A resource: identity, base path, before-filters and the routes it registered.

use crate::config::ResourceOptions;
use crate::error::RouterError;
use crate::host::RouteHost;
use crate::inflect::singularize;
use crate::resource::{ActionHandler, ActionName, BeforeFilters, Controller, RouteTable, Verb};
use crate::scope::DefinitionContext;
use crate::template::{action_path, base_path, custom_template, template};
use std::fmt;

/// Where a custom action is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomKind {
    /// Under the member path: `/articles/:article/<action>`.
    Member,
    /// Under the collection path: `/articles/<action>`.
    Collection,
}

pub struct Resource {
    name: String,
    root: bool,
    id: String,
    /// Fixed at construction from the definition context; never recomputed.
    base: String,
    before: BeforeFilters,
    routes: RouteTable,
}

impl Resource {
    /// Build a resource under `ctx`. `name` is used unless the options override it.
    pub fn new(ctx: &DefinitionContext, name: &str, options: ResourceOptions) -> Self {
        let name = options.name.unwrap_or_else(|| name.to_string());
        let root = options.root.unwrap_or(false);
        let id = options
            .id
            .unwrap_or_else(|| if root { "id".to_string() } else { singularize(&name) });
        let base = base_path(ctx.base_prefix(), &name, root);
        Resource {
            name,
            root,
            id,
            base,
            before: options.before,
            routes: RouteTable::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Parameter name addressing one member, e.g. `article` in `/articles/:article`.
    pub fn id_token(&self) -> &str {
        &self.id
    }

    pub fn base_path(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn before_filters(&self) -> &BeforeFilters {
        &self.before
    }

    /// Template for an action, including the `.:format?` suffix (except for `all`).
    /// Custom actions resolve to their recorded template, or a collection template if unrecorded.
    pub fn path(&self, action: impl Into<ActionName>) -> String {
        let action = action.into();
        match &action {
            ActionName::Custom(name) => self
                .routes
                .first(name)
                .map(|r| r.template.clone())
                .unwrap_or_else(|| custom_template(&self.base, name)),
            _ => template(&self.base, &self.id, &action),
        }
    }

    /// Path addressing one member, without format suffix. Nested resources mount under it.
    pub fn member_path(&self) -> String {
        action_path(&self.base, &self.id, &ActionName::Show)
    }

    /// Path addressing the collection, without format suffix.
    pub fn collection_path(&self) -> &str {
        &self.base
    }

    /// Register every conventional action the controller implements, in the fixed order.
    pub(crate) fn init<H: RouteHost>(&mut self, controller: &Controller, host: &mut H) -> Result<(), RouterError> {
        for action in ActionName::STANDARD.iter() {
            let (Some(handler), Some(verb)) = (controller.handler(action), action.standard_verb()) else {
                continue;
            };
            let template = template(&self.base, &self.id, action);
            self.map(host, action.clone(), verb, template, handler)?;
        }
        Ok(())
    }

    /// Register a custom action under the member or collection path.
    pub(crate) fn add_custom<H: RouteHost>(
        &mut self,
        host: &mut H,
        kind: CustomKind,
        verb: Verb,
        action: &str,
        handler: ActionHandler,
    ) -> Result<(), RouterError> {
        let under = match kind {
            CustomKind::Member => self.member_path(),
            CustomKind::Collection => self.collection_path().to_string(),
        };
        let template = custom_template(&under, action);
        self.map(host, ActionName::from(action), verb, template, handler)
    }

    /// Hand the route to the host, then record it.
    fn map<H: RouteHost>(
        &mut self,
        host: &mut H,
        action: ActionName,
        verb: Verb,
        template: String,
        handler: ActionHandler,
    ) -> Result<(), RouterError> {
        let filters = self.before.chain(&action);
        tracing::debug!(
            resource = %self.name,
            action = %action,
            method = %verb,
            path = %template,
            filters = filters.len(),
            "route registered"
        );
        host.register_route(verb, &template, filters, handler)?;
        self.routes.push(action, verb, template);
        Ok(())
    }
}

/// One `action\tMETHOD\ttemplate` line per registered route.
impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.routes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}\t{}\t{}", r.action, r.method, r.template)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("root", &self.root)
            .field("id", &self.id)
            .field("base", &self.base)
            .field("before", &self.before)
            .field("routes", &self.routes)
            .finish()
    }
}
