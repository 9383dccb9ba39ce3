//! Nesting context for resource definitions.
//!
//! A context carries the active base prefix and the trail of ancestor resource names. Nesting
//! builds a child context and hands it to the nested definition; the parent's context is never
//! mutated, so leaving a nested definition (normally or through an error) restores it.

use crate::inflect::singularize;
use crate::resource::Resource;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DefinitionContext {
    base_prefix: Option<String>,
    trail: Vec<String>,
}

impl DefinitionContext {
    /// Top level: no prefix, no ancestors.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context for resources defined inside `parent`: prefixed by its member path.
    pub fn nested(&self, parent: &Resource) -> Self {
        let mut trail = self.trail.clone();
        trail.push(parent.name().to_string());
        DefinitionContext {
            base_prefix: Some(parent.member_path()),
            trail,
        }
    }

    pub fn base_prefix(&self) -> Option<&str> {
        self.base_prefix.as_deref()
    }

    /// Ancestor names, outermost first.
    pub fn trail(&self) -> &[String] {
        &self.trail
    }

    pub fn depth(&self) -> usize {
        self.trail.len()
    }

    /// Registry key for a resource defined here: singularized ancestors and the name, joined by `_`.
    pub fn registry_key(&self, name: &str) -> String {
        let mut parts: Vec<String> = self.trail.iter().map(|s| singularize(s)).collect();
        parts.push(name.to_string());
        parts.join("_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceOptions;

    #[test]
    fn nesting_prefixes_by_member_path() {
        let top = DefinitionContext::root();
        let articles = Resource::new(&top, "articles", ResourceOptions::new());
        let inner = top.nested(&articles);
        assert_eq!(inner.base_prefix(), Some("/articles/:article"));
        assert_eq!(inner.trail().to_vec(), vec!["articles".to_string()]);

        let comments = Resource::new(&inner, "comments", ResourceOptions::new());
        assert_eq!(comments.base_path(), "/articles/:article/comments");
        let deepest = inner.nested(&comments);
        assert_eq!(deepest.base_prefix(), Some("/articles/:article/comments/:comment"));
        assert_eq!(deepest.depth(), 2);

        // The outer context is untouched by nesting.
        assert_eq!(top, DefinitionContext::root());
        assert_eq!(inner.depth(), 1);
    }

    #[test]
    fn registry_keys() {
        let top = DefinitionContext::root();
        assert_eq!(top.registry_key("articles"), "articles");
        let articles = Resource::new(&top, "articles", ResourceOptions::new());
        let inner = top.nested(&articles);
        assert_eq!(inner.registry_key("comments"), "article_comments");
        let comments = Resource::new(&inner, "comments", ResourceOptions::new());
        assert_eq!(inner.nested(&comments).registry_key("likes"), "article_comment_likes");
    }
}
