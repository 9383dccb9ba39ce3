//! Path template generation for resource actions.

use crate::resource::ActionName;

/// Trailing optional format-extension capture appended to every action but `all`.
pub const FORMAT_SUFFIX: &str = ".:format?";

/// Optional trailing segment of the `all` action, used for custom bulk operations.
const ALL_SUFFIX: &str = "?/:op?";

/// Join two path pieces with exactly one `/` between them.
pub fn join(left: &str, right: &str) -> String {
    let right = right.trim_start_matches('/');
    let mut out = String::with_capacity(left.len() + right.len() + 1);
    out.push_str(left);
    if !left.ends_with('/') {
        out.push('/');
    }
    out.push_str(right);
    out
}

/// Base path of a resource: `/name` at top level, `/` for a root resource, or
/// `prefix/name` under an active parent prefix.
pub fn base_path(parent_prefix: Option<&str>, name: &str, root: bool) -> String {
    match parent_prefix {
        Some(prefix) if !prefix.is_empty() => join(prefix, name),
        _ if root => "/".to_string(),
        _ => join("/", name),
    }
}

/// Path for an action without the format suffix.
///
/// Member actions (`show`, `edit`, `update`, `destroy`, `all`) append `/:id`; `new` and `edit`
/// append their own name; `all` ends in an optional id and an optional `op` segment.
pub fn action_path(base: &str, id_token: &str, action: &ActionName) -> String {
    let mut path = base.to_string();
    if matches!(
        action,
        ActionName::All | ActionName::Show | ActionName::Edit | ActionName::Update | ActionName::Destroy
    ) {
        path = join(&path, &format!(":{}", id_token));
    }
    match action {
        ActionName::All => path.push_str(ALL_SUFFIX),
        ActionName::New | ActionName::Edit => path = join(&path, action.as_str()),
        _ => {}
    }
    path
}

/// Full template registered for an action: the action path plus `.:format?` (except `all`).
pub fn template(base: &str, id_token: &str, action: &ActionName) -> String {
    let mut path = action_path(base, id_token, action);
    if *action != ActionName::All {
        path.push_str(FORMAT_SUFFIX);
    }
    path
}

/// Template for a custom action attached under a member or collection path.
pub fn custom_template(under: &str, action: &str) -> String {
    let mut path = join(under, action);
    path.push_str(FORMAT_SUFFIX);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_is_idempotent_about_slashes() {
        assert_eq!(join("/", "articles"), "/articles");
        assert_eq!(join("/articles", "new"), "/articles/new");
        assert_eq!(join("/articles/", "new"), "/articles/new");
        assert_eq!(join("/articles", "/new"), "/articles/new");
        assert_eq!(join("/", ":id"), "/:id");
    }

    #[test]
    fn base_paths() {
        assert_eq!(base_path(None, "articles", false), "/articles");
        assert_eq!(base_path(None, "articles", true), "/");
        assert_eq!(base_path(Some(""), "articles", false), "/articles");
        assert_eq!(
            base_path(Some("/articles/:article"), "comments", false),
            "/articles/:article/comments"
        );
    }

    #[test]
    fn templates_for_standard_actions() {
        let base = "/articles";
        assert_eq!(template(base, "article", &ActionName::Index), "/articles.:format?");
        assert_eq!(template(base, "article", &ActionName::New), "/articles/new.:format?");
        assert_eq!(template(base, "article", &ActionName::Create), "/articles.:format?");
        assert_eq!(template(base, "article", &ActionName::Show), "/articles/:article.:format?");
        assert_eq!(template(base, "article", &ActionName::Edit), "/articles/:article/edit.:format?");
        assert_eq!(template(base, "article", &ActionName::Update), "/articles/:article.:format?");
        assert_eq!(template(base, "article", &ActionName::Destroy), "/articles/:article.:format?");
        assert_eq!(template(base, "article", &ActionName::All), "/articles/:article?/:op?");
    }

    #[test]
    fn root_templates() {
        assert_eq!(template("/", "id", &ActionName::Index), "/.:format?");
        assert_eq!(template("/", "id", &ActionName::New), "/new.:format?");
        assert_eq!(template("/", "id", &ActionName::Show), "/:id.:format?");
        assert_eq!(template("/", "id", &ActionName::Edit), "/:id/edit.:format?");
        assert_eq!(template("/", "id", &ActionName::All), "/:id?/:op?");
    }

    #[test]
    fn custom_templates() {
        assert_eq!(
            custom_template("/articles/:article", "bonus"),
            "/articles/:article/bonus.:format?"
        );
        assert_eq!(
            custom_template("/articles/:article/comments", "search"),
            "/articles/:article/comments/search.:format?"
        );
    }
}
