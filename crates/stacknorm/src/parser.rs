//! Raw fragment parsing.
//!
//! Raw frames arrive as `name@file:line:column` fragments. Parsing is a
//! strict positional split: the first `:`-delimited piece is the
//! `name@file` head, the next two are line and column, and the head splits
//! once more on `@` into name and file. Extra pieces are ignored, missing
//! pieces stay unset, and no fragment ever fails to parse.
//!
//! The split is deliberately no smarter than this. Fragments with embedded
//! `:` or `@` characters (Windows drive letters, `@`-scoped module paths)
//! shift fields positionally, and existing raw-trace producers depend on
//! those exact semantics.

use crate::frame::Frame;

/// Parses raw frame fragments into [`Frame`] records.
///
/// Always yields exactly one frame per fragment, in input order; malformed
/// fragments produce frames with the unresolved fields left unset instead
/// of being dropped.
///
/// # Example
///
/// ```rust
/// use stacknorm::parse;
///
/// let frames = parse(&["foo@bar.js:10:5"]);
///
/// assert_eq!(frames.len(), 1);
/// assert_eq!(frames[0].name.as_deref(), Some("foo"));
/// assert_eq!(frames[0].file.as_deref(), Some("bar.js"));
/// assert_eq!(frames[0].line.as_deref(), Some("10"));
/// assert_eq!(frames[0].column.as_deref(), Some("5"));
/// ```
pub fn parse<S: AsRef<str>>(fragments: &[S]) -> Vec<Frame> {
    fragments
        .iter()
        .map(|fragment| parse_fragment(fragment.as_ref()))
        .collect()
}

/// Parses a single `name@file:line:column` fragment.
///
/// The head piece always exists, so `name` is always resolved (possibly to
/// an empty string for anonymous frames like `@app.js:1:2`); `file`,
/// `line`, and `column` are unset when their separator is missing.
#[must_use]
pub fn parse_fragment(fragment: &str) -> Frame {
    let mut location = fragment.split(':');
    let head = location.next().unwrap_or_default();
    let line = location.next().map(String::from);
    let column = location.next().map(String::from);

    let mut script = head.split('@');
    let name = script.next().map(String::from);
    let file = script.next().map(String::from);

    Frame {
        name,
        file,
        line,
        column,
    }
}
