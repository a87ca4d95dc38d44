//! Shared types for catalog descriptors, installed records, and fetched content
//!
//! "Extension" is an overloaded word: a catalog entry describing something
//! installable (`ExtensionDescriptor`) and a record already living in the
//! host store (`InstalledExtension`) are different things with different
//! lifecycles, and they never share a type.

use crate::slice::{slice_or, slice_value};
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tag marking a record as an active plugin
pub const PLUGIN_TAG: &str = "plugin";

/// Tag marking a record as an additional catalog source
pub const CATALOG_TAG: &str = "extensionCatalog";

/// Title of the host record holding the central catalog
pub const CATALOG_DOCUMENT_TITLE: &str = "AvailableExtensions";

/// How the resource behind a source URL is packaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// The URL serves the extension body directly
    Text,
    /// The URL serves a multi-record container; the fragment names the record
    Container,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Text => write!(f, "text"),
            SourceType::Container => write!(f, "container"),
        }
    }
}

/// What an extension is, as declared by its descriptor or guessed from content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtensionKind {
    /// Executable plugin code the host can activate
    Plugin,
    /// A catalog document contributing more descriptors
    Collection,
    /// Anything else; imported without special handling
    Other(String),
}

impl From<String> for ExtensionKind {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "plugin" => ExtensionKind::Plugin,
            "collection" => ExtensionKind::Collection,
            _ => ExtensionKind::Other(value),
        }
    }
}

impl From<ExtensionKind> for String {
    fn from(kind: ExtensionKind) -> Self {
        match kind {
            ExtensionKind::Plugin => "plugin".to_string(),
            ExtensionKind::Collection => "collection".to_string(),
            ExtensionKind::Other(value) => value,
        }
    }
}

/// A catalog entry describing an installable extension
///
/// Constructed when a catalog document is parsed and immutable thereafter;
/// never persisted by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDescriptor {
    /// Display name; derived from the URL when the catalog omits it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Where to fetch the extension from
    pub url: String,

    /// Packaging of the resource behind `url`; inferred from the URL when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared kind; guessed from fetched content when absent
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ExtensionKind>,

    /// Version advertised by the catalog (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Embedded body; when present, installation skips the fetch entirely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ExtensionDescriptor {
    /// Create a descriptor pointing at `url` with everything else unset
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            name: None,
            url: url.into(),
            source_type: None,
            description: None,
            kind: None,
            version: None,
            text: None,
        }
    }
}

/// Snapshot of an installed extension record, owned by the host store
///
/// The engine only reads these; mutations go back through the host store
/// (tag addition, body replacement, source-url stamping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledExtension {
    pub title: String,
    pub text: String,
    pub tags: BTreeSet<String>,
    /// Source URL stamped on the record by a previous install, if any
    pub source_url: Option<String>,
}

impl InstalledExtension {
    /// Create a bare record snapshot
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            tags: BTreeSet::new(),
            source_url: None,
        }
    }

    /// The `Version` slice, verbatim
    pub fn version_string(&self) -> Option<&str> {
        slice_value(&self.text, "Version")
    }

    /// The parsed version, or `None` when the record declares none
    pub fn version(&self) -> Option<Version> {
        self.version_string().and_then(Version::parse)
    }

    /// The `Description` slice, or empty
    pub fn description(&self) -> &str {
        slice_or(&self.text, "Description", "")
    }

    /// The URL where updates for this record are looked up
    ///
    /// An explicitly stamped source URL wins over the `Source` slice; a
    /// record with neither cannot be checked.
    pub fn resolvable_source(&self) -> Option<&str> {
        self.source_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| slice_value(&self.text, "Source").filter(|url| !url.is_empty()))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Content fetched from a remote source
///
/// Ephemeral; ownership transfers to the caller as soon as the load
/// completes. `text_only` marks content that came from a plain fetch rather
/// than a container import, which is what permits in-place body replacement
/// at install time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteContent {
    pub title: String,
    pub text: String,
    pub text_only: bool,
}

impl RemoteContent {
    /// The `Version` slice, verbatim
    pub fn version_string(&self) -> Option<&str> {
        slice_value(&self.text, "Version")
    }

    /// The parsed version, or `None` when the content declares none
    pub fn version(&self) -> Option<Version> {
        self.version_string().and_then(Version::parse)
    }
}

/// Guess what kind of extension a piece of content is
///
/// A `Type: plugin` slice or a title ending in `Plugin` marks plugin code.
/// Anything unrecognized stays `None` and is imported without special
/// handling.
pub fn guess_kind(title: &str, text: &str) -> Option<ExtensionKind> {
    if slice_or(text, "Type", "").eq_ignore_ascii_case("plugin") || title.ends_with("Plugin") {
        return Some(ExtensionKind::Plugin);
    }
    None
}
