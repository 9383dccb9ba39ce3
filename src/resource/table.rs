//! Ordered, append-only record of the routes a resource registered.

use crate::resource::{ActionName, Verb};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub action: ActionName,
    pub method: Verb,
    #[serde(rename = "path")]
    pub template: String,
}

/// Insertion order is preserved; lookups by action return the first record.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicates are kept.
    pub fn push(&mut self, action: ActionName, method: Verb, template: impl Into<String>) {
        self.records.push(RouteRecord {
            action,
            method,
            template: template.into(),
        });
    }

    pub fn first(&self, action: &str) -> Option<&RouteRecord> {
        self.records.iter().find(|r| r.action.as_str() == action)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl std::ops::Index<usize> for RouteTable {
    type Output = RouteRecord;

    fn index(&self, index: usize) -> &RouteRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteRecord;
    type IntoIter = std::slice::Iter<'a, RouteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
