//! Load-time validation of controllers and their options.

use crate::error::ControllerError;
use crate::resource::Controller;
use regex::Regex;
use std::sync::OnceLock;

fn segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_\-]+$").expect("static regex"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("static regex"))
}

/// A name usable as a literal path segment.
pub fn is_path_segment(s: &str) -> bool {
    segment_re().is_match(s)
}

/// A name usable as a template parameter (`:name`).
pub fn is_param_name(s: &str) -> bool {
    word_re().is_match(s)
}

/// Check a controller before any of its routes are registered.
pub fn validate_controller(controller: &Controller) -> Result<(), ControllerError> {
    let invalid = |message: String| ControllerError::Invalid {
        controller: controller.name.clone(),
        message,
    };

    if controller.name.is_empty() || !controller.name.split('/').all(is_path_segment) {
        return Err(invalid("controller name must be one or more path segments".into()));
    }
    if let Some(name) = &controller.options.name {
        if !is_path_segment(name) {
            return Err(invalid(format!("resource name '{}' is not a valid path segment", name)));
        }
    }
    if let Some(id) = &controller.options.id {
        if !is_param_name(id) {
            return Err(invalid(format!("id '{}' must be a word identifier", id)));
        }
    }
    for action in controller.actions() {
        if action.is_custom() && !is_path_segment(action.as_str()) {
            return Err(invalid(format!("action '{}' is not a valid path segment", action)));
        }
    }
    Ok(())
}
