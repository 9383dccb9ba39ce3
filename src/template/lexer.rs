//! Tokenizer for path templates.
//!
//! A template is literal text interleaved with parameter tokens. A parameter token is an
//! optional leading `/`, an optional `.`, a `:`, a word name (`[A-Za-z0-9_]+`) and an optional
//! trailing `?` marking it optional. The leading `/` or `.` belongs to the token, so eliding an
//! absent optional parameter removes it too: `/articles/:article.:format?` lexes to
//! `"/articles"`, `/:article`, `.:format?`.

/// One piece of a lexed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Param(ParamToken<'a>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamToken<'a> {
    /// `""`, `"/"`, `"."` or `"/."`.
    pub leading: &'a str,
    pub name: &'a str,
    pub optional: bool,
    /// The full source text of the token, used when a required value is missing.
    pub raw: &'a str,
}

impl ParamToken<'_> {
    /// Dot-led params are extensions and may not contain a dot themselves.
    pub fn is_extension(&self) -> bool {
        self.leading.ends_with('.')
    }
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Split a template into literal and parameter tokens, left to right.
pub fn tokenize(template: &str) -> Vec<Token<'_>> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match param_at(template, i) {
            Some((param, end)) => {
                if literal_start < i {
                    tokens.push(Token::Literal(&template[literal_start..i]));
                }
                tokens.push(Token::Param(param));
                i = end;
                literal_start = end;
            }
            None => i += 1,
        }
    }
    if literal_start < bytes.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    tokens
}

/// Try to read a parameter token starting at byte `start`. Returns the token and its end offset.
fn param_at(template: &str, start: usize) -> Option<(ParamToken<'_>, usize)> {
    let bytes = template.as_bytes();
    let mut j = start;
    if bytes.get(j) == Some(&b'/') {
        j += 1;
    }
    if bytes.get(j) == Some(&b'.') {
        j += 1;
    }
    if bytes.get(j) != Some(&b':') {
        return None;
    }
    let leading_end = j;
    let name_start = j + 1;
    let mut name_end = name_start;
    while name_end < bytes.len() && is_word(bytes[name_end]) {
        name_end += 1;
    }
    if name_end == name_start {
        return None;
    }
    let optional = bytes.get(name_end) == Some(&b'?');
    let end = if optional { name_end + 1 } else { name_end };
    Some((
        ParamToken {
            leading: &template[start..leading_end],
            name: &template[name_start..name_end],
            optional,
            raw: &template[start..end],
        },
        end,
    ))
}

/// Names of every parameter in a template, in order of appearance.
pub fn param_names(template: &str) -> Vec<&str> {
    tokenize(template)
        .into_iter()
        .filter_map(|t| match t {
            Token::Param(p) => Some(p.name),
            Token::Literal(_) => None,
        })
        .collect()
}
