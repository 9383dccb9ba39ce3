//! Action identifiers and the HTTP verbs they are registered under.

use axum::http::Method;
use serde::{Serialize, Serializer};
use std::fmt;

/// Name of a controller action: one of the conventional actions or a custom one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionName {
    All,
    Index,
    New,
    Create,
    Show,
    Edit,
    Update,
    Destroy,
    Custom(String),
}

impl ActionName {
    /// Conventional actions in registration order. The order is load-bearing.
    pub const STANDARD: [ActionName; 8] = [
        ActionName::All,
        ActionName::Index,
        ActionName::New,
        ActionName::Create,
        ActionName::Show,
        ActionName::Edit,
        ActionName::Update,
        ActionName::Destroy,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ActionName::All => "all",
            ActionName::Index => "index",
            ActionName::New => "new",
            ActionName::Create => "create",
            ActionName::Show => "show",
            ActionName::Edit => "edit",
            ActionName::Update => "update",
            ActionName::Destroy => "destroy",
            ActionName::Custom(name) => name.as_str(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ActionName::Custom(_))
    }

    /// Verb for a conventional action; custom actions carry their verb at the call site.
    pub fn standard_verb(&self) -> Option<Verb> {
        match self {
            ActionName::All => Some(Verb::Any),
            ActionName::Index | ActionName::Show | ActionName::New | ActionName::Edit => Some(Verb::Get),
            ActionName::Create => Some(Verb::Post),
            ActionName::Update => Some(Verb::Put),
            ActionName::Destroy => Some(Verb::Delete),
            ActionName::Custom(_) => None,
        }
    }
}

impl From<&str> for ActionName {
    fn from(s: &str) -> Self {
        match s {
            "all" => ActionName::All,
            "index" => ActionName::Index,
            "new" => ActionName::New,
            "create" => ActionName::Create,
            "show" => ActionName::Show,
            "edit" => ActionName::Edit,
            "update" => ActionName::Update,
            "destroy" => ActionName::Destroy,
            other => ActionName::Custom(other.to_string()),
        }
    }
}

impl From<String> for ActionName {
    fn from(s: String) -> Self {
        ActionName::from(s.as_str())
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ActionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// HTTP verb a route is registered for. `Any` matches every method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Any,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Any => "ANY",
        }
    }

    /// Whether a request method is served by this verb. GET routes also answer HEAD.
    pub fn matches(&self, method: &Method) -> bool {
        match self {
            Verb::Any => true,
            Verb::Get => method == Method::GET || method == Method::HEAD,
            Verb::Post => method == Method::POST,
            Verb::Put => method == Method::PUT,
            Verb::Delete => method == Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
