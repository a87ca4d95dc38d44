//! Catalog document parsing and merging
//!
//! A catalog document is free-form prose followed by a fenced region holding
//! a JSON array of partial descriptors:
//!
//! ```text
//! Extensions known to this store (edit to add your own).
//! //{{{
//! [
//!   { "url": "https://github.com/emporium-dev/extensions/blob/master/NightShiftPlugin.js" }
//! ]
//! //}}}
//! ```
//!
//! The end fence is anchored at end-of-document (trailing whitespace
//! tolerated). A malformed region degrades to `None`; callers fall back to
//! the built-in default catalog rather than failing the host.

use emporium_core::{ExtensionDescriptor, InstalledExtension};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Opens the machine-readable region of a catalog document
pub const FENCE_OPEN: &str = "//{{{";

/// Closes the machine-readable region; must end the document
pub const FENCE_CLOSE: &str = "//}}}";

static CATALOG_REGION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)//\{\{\{\s+(.+?)\s+//\}\}\}\s*$").expect("catalog region regex is valid")
});

static FRAGMENT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.html|/)$").expect("fragment name regex is valid"));

static FILE_STEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\w+)\.(js|txt)$").expect("file stem regex is valid"));

/// Parse the descriptor list out of a catalog document
///
/// Returns `None` when the fences are missing or the enclosed region is not
/// a JSON array of descriptors; never panics or propagates the parse error.
/// Every descriptor in a successful result has its name populated where one
/// can be derived.
pub fn parse_collection(document: &str) -> Option<Vec<ExtensionDescriptor>> {
    let region = CATALOG_REGION_RE.captures(document)?;
    match serde_json::from_str::<Vec<ExtensionDescriptor>>(&region[1]) {
        Ok(descriptors) => Some(resolve_names(descriptors)),
        Err(error) => {
            warn!("ignoring malformed catalog region: {error}");
            None
        }
    }
}

/// Derive a display name from a source URL
///
/// A fragment names the record when the pre-fragment part ends in `.html`
/// or `/`; otherwise the stem of a `.js`/`.txt` filename is used.
pub fn guess_name_by_url(url: &str) -> Option<String> {
    let (base, fragment) = emporium_core::url::split_fragment(url);
    if let Some(fragment) = fragment {
        if FRAGMENT_NAME_RE.is_match(base) {
            return Some(fragment.to_string());
        }
    }
    FILE_STEM_RE
        .captures(base)
        .map(|captures| captures[1].to_string())
}

/// Fill in missing descriptor names from their URLs
fn resolve_names(mut descriptors: Vec<ExtensionDescriptor>) -> Vec<ExtensionDescriptor> {
    for descriptor in &mut descriptors {
        if descriptor.name.is_none() {
            descriptor.name = guess_name_by_url(&descriptor.url);
        }
    }
    descriptors
}

/// Concatenate catalogs, primary first
///
/// No de-duplication is performed; callers must tolerate duplicate entries
/// by URL.
pub fn merge_collections(
    primary: Vec<ExtensionDescriptor>,
    others: Vec<Vec<ExtensionDescriptor>>,
) -> Vec<ExtensionDescriptor> {
    let mut merged = primary;
    for catalog in others {
        merged.extend(catalog);
    }
    merged
}

/// Parse a catalog document, falling back to the built-in defaults
pub fn catalog_or_default(document: Option<&str>) -> Vec<ExtensionDescriptor> {
    document
        .and_then(parse_collection)
        .unwrap_or_else(crate::defaults::default_catalog)
}

/// Filter a catalog down to entries not already installed
///
/// An entry is considered installed when some record carries both its name
/// as title and its URL as resolvable source.
pub fn offerable(
    catalog: &[ExtensionDescriptor],
    installed: &[InstalledExtension],
) -> Vec<ExtensionDescriptor> {
    catalog
        .iter()
        .filter(|descriptor| {
            !installed.iter().any(|record| {
                Some(record.title.as_str()) == descriptor.name.as_deref()
                    && record.resolvable_source() == Some(descriptor.url.as_str())
            })
        })
        .cloned()
        .collect()
}
