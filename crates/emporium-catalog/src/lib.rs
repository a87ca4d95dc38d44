//! # emporium-catalog
//!
//! Catalog handling for the Emporium extension engine:
//! - Parsing descriptor lists out of fenced catalog documents
//! - Deriving names for descriptors that omit them
//! - Merging catalogs from multiple sources
//! - The built-in default catalog used when no document parses

pub mod defaults;
pub mod parser;

pub use defaults::{default_catalog, default_catalog_document};
pub use parser::{
    catalog_or_default, guess_name_by_url, merge_collections, offerable, parse_collection,
};
