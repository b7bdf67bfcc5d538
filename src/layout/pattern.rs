//! Naming pattern expansion
//!
//! Patterns are plain strings with two kinds of tokens:
//!
//! - `{randstr:N}` - replaced by N random ASCII letters drawn from the stream
//! - `{name}` - replaced by the value of `name` in the [`PlaceholderContext`]
//!
//! `randstr` directives are expanded first, then named placeholders, in a
//! single left-to-right pass each. Substituted text is never scanned again.
//! Unknown names and malformed directives are kept literally unless the
//! expander is strict.
//!
//! # Example
//!
//! ```
//! use treegen::layout::pattern::{PatternExpander, PlaceholderContext};
//! use treegen::random::SeededStream;
//!
//! let mut stream = SeededStream::new(42);
//! let ctx = PlaceholderContext::new().with("index", 3u64).with("ext", "dat");
//! let name = PatternExpander::permissive()
//!     .expand("file_{index}.{ext}", &ctx, &mut stream)
//!     .unwrap();
//! assert_eq!(name, "file_3.dat");
//! ```

use crate::error::{Error, Result};
use crate::random::SeededStream;
use std::collections::BTreeMap;
use std::fmt;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const RANDSTR_PREFIX: &str = "randstr:";

/// Value bound to a placeholder name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for PlaceholderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderValue::Int(v) => write!(f, "{}", v),
            PlaceholderValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PlaceholderValue {
    fn from(v: i64) -> Self {
        PlaceholderValue::Int(v)
    }
}

impl From<u64> for PlaceholderValue {
    fn from(v: u64) -> Self {
        PlaceholderValue::Int(v as i64)
    }
}

impl From<usize> for PlaceholderValue {
    fn from(v: usize) -> Self {
        PlaceholderValue::Int(v as i64)
    }
}

impl From<&str> for PlaceholderValue {
    fn from(s: &str) -> Self {
        PlaceholderValue::Text(s.to_string())
    }
}

impl From<String> for PlaceholderValue {
    fn from(s: String) -> Self {
        PlaceholderValue::Text(s)
    }
}

/// Named values available to a pattern
#[derive(Debug, Clone, Default)]
pub struct PlaceholderContext {
    values: BTreeMap<String, PlaceholderValue>,
}

impl PlaceholderContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PlaceholderValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value`, replacing any previous binding
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PlaceholderValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a binding
    pub fn get(&self, name: &str) -> Option<&PlaceholderValue> {
        self.values.get(name)
    }

    /// Bound names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }
}

/// Expands naming patterns against a context and the run's stream
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExpander {
    strict: bool,
}

impl PatternExpander {
    /// Unknown tokens pass through unchanged
    pub fn permissive() -> Self {
        Self { strict: false }
    }

    /// Any token left after expansion is a configuration error
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Expand `template`
    ///
    /// Never fails in permissive mode.
    pub fn expand(
        &self,
        template: &str,
        ctx: &PlaceholderContext,
        stream: &mut SeededStream,
    ) -> Result<String> {
        let with_randstr = expand_randstr(template, stream);
        let (expanded, unresolved) = substitute_names(&with_randstr, ctx);

        if self.strict {
            if let Some(token) = unresolved {
                return Err(Error::Config(format!(
                    "unresolved placeholder '{}' in pattern '{}'",
                    token, template
                )));
            }
        }

        Ok(expanded)
    }
}

/// Replace every well-formed `{randstr:N}` with N random letters
fn expand_randstr(template: &str, stream: &mut SeededStream) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match parse_randstr(tail) {
            Some((len, consumed)) => {
                out.push_str(&random_letters(len, stream));
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse `{randstr:N}` at the start of `s`, returning N and the token length
fn parse_randstr(s: &str) -> Option<(usize, usize)> {
    let body = s.strip_prefix('{')?.strip_prefix(RANDSTR_PREFIX)?;
    let end = body.find('}')?;
    let digits = &body[..end];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let len = digits.parse::<usize>().ok()?;
    Some((len, 1 + RANDSTR_PREFIX.len() + end + 1))
}

fn random_letters(len: usize, stream: &mut SeededStream) -> String {
    (0..len)
        .map(|_| LETTERS[stream.next_int(LETTERS.len() as u64) as usize] as char)
        .collect()
}

/// Replace every `{name}` bound in `ctx`; unknown names stay literal
///
/// Also returns the first `{...}` token of `template` that did not resolve.
fn substitute_names<'t>(
    template: &'t str,
    ctx: &PlaceholderContext,
) -> (String, Option<&'t str>) {
    let mut out = String::with_capacity(template.len());
    let mut unresolved = None;
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let close = tail[1..].find('}');
        let resolved = close.and_then(|end| ctx.get(&tail[1..1 + end]).map(|v| (v, end + 2)));

        match resolved {
            Some((value, consumed)) => {
                out.push_str(&value.to_string());
                rest = &tail[consumed..];
            }
            None => {
                if let (None, Some(end)) = (unresolved, close) {
                    unresolved = Some(&tail[..end + 2]);
                }
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    (out, unresolved)
}
