//! # emporium-core
//!
//! Core library for the Emporium extension engine providing:
//! - Version parsing and comparison
//! - Slice extraction (named fields embedded in document bodies)
//! - URL normalization and source-type inference
//! - Shared types for catalog descriptors, installed records, and fetched content

pub mod error;
pub mod slice;
pub mod types;
pub mod url;
pub mod version;

pub use error::{Error, Result};
pub use types::{
    guess_kind, ExtensionDescriptor, ExtensionKind, InstalledExtension, RemoteContent, SourceType,
    CATALOG_DOCUMENT_TITLE, CATALOG_TAG, PLUGIN_TAG,
};
pub use version::Version;
