//! Request-time matching of concrete paths against path templates.
//!
//! Templates are compiled to anchored regexes: a slash-led param captures `[^/]+?`, a dot-led
//! param captures `[^/.]+?`, optional tokens become optional groups.

use crate::config::RouterConfig;
use crate::reverse::RouteParams;
use crate::template::lexer::{tokenize, Token};
use regex::{Regex, RegexBuilder};

#[derive(Clone, Debug)]
pub struct TemplateMatcher {
    regex: Regex,
    /// Parameter name per capture group, in group order.
    names: Vec<String>,
}

impl TemplateMatcher {
    pub fn compile(template: &str, config: &RouterConfig) -> Result<Self, regex::Error> {
        let mut pattern = String::from("^");
        let mut names = Vec::new();
        for token in tokenize(template) {
            match token {
                Token::Literal(text) => pattern.push_str(&regex::escape(text)),
                Token::Param(param) => {
                    let class = if param.is_extension() { "[^/.]+?" } else { "[^/]+?" };
                    pattern.push_str("(?:");
                    pattern.push_str(&regex::escape(param.leading));
                    pattern.push('(');
                    pattern.push_str(class);
                    pattern.push_str("))");
                    if param.optional {
                        pattern.push('?');
                    }
                    names.push(param.name.to_string());
                }
            }
        }
        if !config.strict {
            pattern.push_str("/?");
        }
        pattern.push('$');

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(!config.case_sensitive)
            .build()?;
        Ok(TemplateMatcher { regex, names })
    }

    /// Match a request path, returning decoded parameter values when it fits.
    /// Absent optional params are not present in the result.
    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        let caps = self.regex.captures(path)?;
        let mut params = RouteParams::new();
        for (i, name) in self.names.iter().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                let value = urlencoding::decode(m.as_str())
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| m.as_str().to_string());
                params.insert(name.clone(), value);
            }
        }
        Some(params)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}
