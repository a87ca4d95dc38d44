//! Slice extraction
//!
//! A "slice" is a named field embedded in a document body. Two syntaxes
//! co-exist in one grammar:
//!
//! ```text
//! Source: https://example.org/Foo.js
//! |Version    |0.4.3|
//! |Description:|does a thing|
//! ```
//!
//! Extraction is name-keyed and returns the first match in document order.
//! Every call scans from the start of the document with fresh state; there
//! is no scanner shared across calls, so interleaved extraction from
//! different documents cannot contaminate each other.

use regex::Regex;
use std::sync::LazyLock;

static SLICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(?:\|\s*([A-Za-z][\w.]*)\s*:?\s*\|\s*([^\n|]*?)\s*\|\s*$|([A-Za-z][\w.]*):[ \t]*([^\n]*?)[ \t]*\r?$)",
    )
    .expect("slice regex is valid")
});

/// Extract the value of the first slice named `name`, if any
///
/// The document is never mutated; the returned value borrows from it.
pub fn slice_value<'a>(document: &'a str, name: &str) -> Option<&'a str> {
    for captures in SLICE_RE.captures_iter(document) {
        // table form populates groups 1/2, line form groups 3/4
        if let Some(found) = captures.get(1) {
            if found.as_str() == name {
                return Some(captures.get(2).map_or("", |m| m.as_str()));
            }
        } else if let Some(found) = captures.get(3) {
            if found.as_str() == name {
                return Some(captures.get(4).map_or("", |m| m.as_str()));
            }
        }
    }
    None
}

/// Extract the value of the first slice named `name`, falling back to `default`
pub fn slice_or<'a>(document: &'a str, name: &str, default: &'a str) -> &'a str {
    slice_value(document, name).unwrap_or(default)
}
