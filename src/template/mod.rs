pub mod lexer;
pub mod matcher;
pub mod path;

pub use lexer::{param_names, tokenize, ParamToken, Token};
pub use matcher::TemplateMatcher;
pub use path::{action_path, base_path, custom_template, join, template, FORMAT_SUFFIX};
