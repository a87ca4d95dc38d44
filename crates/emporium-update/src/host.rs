//! Host-boundary traits
//!
//! The engine never persists records or executes plugin code itself. Both
//! capabilities are injected by the host application, which also keeps the
//! engine fully testable with in-memory fakes.

use emporium_core::{InstalledExtension, Result};

/// The host's record store
///
/// Record discovery (which records count as installed extensions) is a host
/// concern; the engine consumes the list the host hands it.
pub trait HostStore {
    /// Fetch a record snapshot by title
    fn fetch(&self, title: &str) -> Option<InstalledExtension>;

    /// Add a new record
    fn add(&mut self, record: InstalledExtension);

    /// Replace the body of an existing record in place, preserving its other
    /// fields; returns false when no such record exists
    fn replace_body(&mut self, title: &str, body: &str) -> bool;

    /// Stamp a durable source URL onto a record so future checks have a
    /// pointer even if the body carries no Source slice
    fn stamp_source_url(&mut self, title: &str, url: &str);

    /// Mark the store as having unsaved changes
    fn set_dirty(&mut self);

    /// Tell the host something about `title` changed (refresh displays etc.)
    fn notify(&mut self, title: &str);
}

/// The host's plugin activation capability
///
/// Opaque and all-or-nothing: activation may have arbitrary side effects in
/// the host environment and there is no partial rollback.
pub trait Activator {
    fn activate(&mut self, code: &str) -> Result<()>;
}

/// Order extensions for display, those without a resolvable source last
pub fn sort_missing_source_last(extensions: &mut [InstalledExtension]) {
    extensions.sort_by_key(|extension| extension.resolvable_source().is_none());
}
