//! Install coordination
//!
//! Takes freshly loaded content and a declared type, performs host-side
//! activation and tagging, and persists the result through the host store.
//! "Failed to activate" and "failed to import" are independent failure
//! axes: content whose activation fails is still imported, and the outcome
//! reports both.

use crate::host::{Activator, HostStore};
use emporium_core::{
    guess_kind, Error, ExtensionKind, InstalledExtension, RemoteContent, CATALOG_TAG, PLUGIN_TAG,
};
use tracing::{info, warn};

/// Result of an install, distinguishing "new import" from "update"
#[derive(Debug)]
pub struct InstallOutcome {
    pub title: String,

    /// True when a record with the same title already existed
    pub updated: bool,

    /// Set when the host rejected the plugin code; the record was persisted
    /// regardless
    pub activation_error: Option<Error>,
}

impl std::fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = if self.updated { "updated" } else { "imported" };
        write!(f, "{} was {}", self.title, action)?;
        if let Some(error) = &self.activation_error {
            write!(f, " ({error})")?;
        }
        Ok(())
    }
}

/// Performs installs against the host boundary
pub struct InstallCoordinator<S: HostStore, A: Activator> {
    store: S,
    activator: A,
}

impl<S: HostStore, A: Activator> InstallCoordinator<S, A> {
    pub fn new(store: S, activator: A) -> Self {
        Self { store, activator }
    }

    /// Install `content` as `kind`, stamping `source_url` for future checks
    ///
    /// When `kind` is absent it is guessed from the content. Plugins are
    /// activated first and tagged; collections are tagged so future catalog
    /// runs pick them up; everything else is imported as-is.
    pub fn install(
        &mut self,
        content: &RemoteContent,
        kind: Option<ExtensionKind>,
        source_url: Option<&str>,
    ) -> InstallOutcome {
        let kind = kind.or_else(|| guess_kind(&content.title, &content.text));

        let mut record = InstalledExtension::new(content.title.clone(), content.text.clone());
        let mut activation_error = None;

        match kind {
            Some(ExtensionKind::Plugin) => {
                if let Err(error) = self.activator.activate(&content.text) {
                    warn!("activation of {} failed: {error}", content.title);
                    activation_error = Some(error);
                }
                record.tags.insert(PLUGIN_TAG.to_string());
            }
            Some(ExtensionKind::Collection) => {
                record.tags.insert(CATALOG_TAG.to_string());
            }
            _ => {}
        }

        let updated = self.persist(record, content, source_url);

        let outcome = InstallOutcome {
            title: content.title.clone(),
            updated,
            activation_error,
        };
        info!("{outcome}");
        outcome
    }

    /// Persist a record, returning whether a prior record existed
    ///
    /// Text-only content over an existing record replaces the body in place
    /// so the record's other fields survive; anything else becomes a new
    /// record (or a full replacement for structured imports).
    fn persist(
        &mut self,
        record: InstalledExtension,
        content: &RemoteContent,
        source_url: Option<&str>,
    ) -> bool {
        let existing = self.store.fetch(&content.title);
        let updated = existing.is_some();

        if content.text_only && updated {
            self.store.replace_body(&content.title, &content.text);
        } else {
            self.store.add(record);
        }

        if let Some(url) = source_url {
            let resolvable = self
                .store
                .fetch(&content.title)
                .and_then(|persisted| persisted.resolvable_source().map(str::to_string));
            if resolvable.as_deref() != Some(url) {
                self.store.stamp_source_url(&content.title, url);
            }
        }

        self.store.set_dirty();
        self.store.notify(&content.title);
        updated
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
