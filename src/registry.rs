//! Defined resources keyed by their compound name (`articles`, `article_comments`).

use crate::error::RouterError;
use crate::resource::Resource;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct ResourceRegistry {
    by_name: BTreeMap<String, Arc<Resource>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resource. Redefining a name replaces the previous entry; it is returned.
    pub fn insert(&mut self, key: impl Into<String>, resource: Arc<Resource>) -> Option<Arc<Resource>> {
        let key = key.into();
        let previous = self.by_name.insert(key.clone(), resource);
        if previous.is_some() {
            tracing::debug!(resource = %key, "resource redefined, previous entry replaced");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Resource>> {
        self.by_name.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&Arc<Resource>, RouterError> {
        self.get(name)
            .ok_or_else(|| RouterError::UnknownResource(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Resource>)> {
        self.by_name.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
