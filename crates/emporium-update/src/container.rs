//! Container document parsing
//!
//! A container is a wiki export holding several addressable records: an HTML
//! document whose store area carries one `<div title="...">` per record with
//! the body HTML-escaped inside a `<pre>` block:
//!
//! ```html
//! <div id="storeArea">
//! <div title="FieldEditorPlugin" modifier="..." tags="plugin">
//! <pre>|Version|0.4.2|
//! ...</pre>
//! </div>
//! </div>
//! ```
//!
//! Only titles and bodies matter here; other record attributes are ignored.

use emporium_core::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static STORE_AREA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div\s+id=["']storeArea["'][^>]*>(.*)"#).expect("store area regex is valid")
});

static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div\s+title="([^"]*)"[^>]*>\s*<pre>(.*?)</pre>\s*</div>"#)
        .expect("record regex is valid")
});

/// One named record inside a container document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    pub title: String,
    pub text: String,
}

/// A parsed container document, indexed by record title
#[derive(Debug, Clone)]
pub struct ContainerDocument {
    records: HashMap<String, ContainerRecord>,
}

impl ContainerDocument {
    /// Parse a container out of a fetched document body
    ///
    /// `url` only provides error context. A document without a store area is
    /// malformed; a store area with zero records is not.
    pub fn parse(body: &str, url: &str) -> Result<Self> {
        let store_area = STORE_AREA_RE
            .captures(body)
            .ok_or_else(|| Error::container_parse(url, "no store area found"))?;

        let records = RECORD_RE
            .captures_iter(store_area.get(1).map_or("", |m| m.as_str()))
            .map(|captures| {
                let record = ContainerRecord {
                    title: unescape_html(&captures[1]),
                    text: unescape_html(&captures[2]),
                };
                (record.title.clone(), record)
            })
            .collect();

        Ok(Self { records })
    }

    /// Look up a record by title
    pub fn get(&self, title: &str) -> Option<&ContainerRecord> {
        self.records.get(title)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Undo the HTML escaping applied to record bodies and titles
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
