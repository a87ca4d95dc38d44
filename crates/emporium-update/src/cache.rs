//! Update-result cache
//!
//! Holds content discovered strictly newer than an installed extension,
//! keyed by normalized source URL, until the user confirms or abandons the
//! update. Entries are removed on consumption; a consumed update is never
//! offered again. This is the only mutable state the engine owns.

use emporium_core::url::to_raw_url;
use emporium_core::{RemoteContent, Version};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// A discovered-but-unconfirmed update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    /// The fetched content, already known to be newer
    pub content: RemoteContent,

    /// Title of the installed extension it was compared against
    ///
    /// Two installed extensions declaring the same source URL would make the
    /// entry ambiguous; recording the title lets consumers detect that and
    /// re-fetch instead of trusting it.
    pub checked_against: String,

    /// Version of the installed extension at check time
    pub installed_version: Option<Version>,
}

/// URL-keyed store of pending updates
#[derive(Debug, Default)]
pub struct UpdateCache {
    entries: Mutex<HashMap<String, PendingUpdate>>,
}

impl UpdateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical key for a source URL
    pub fn key_for(url: &str) -> String {
        to_raw_url(url).into_owned()
    }

    /// Record a pending update for `url`, replacing any previous entry
    pub fn insert(&self, url: &str, pending: PendingUpdate) {
        self.entries
            .lock()
            .unwrap()
            .insert(Self::key_for(url), pending);
    }

    /// The pending update for `url`, if any
    pub fn get(&self, url: &str) -> Option<PendingUpdate> {
        self.entries
            .lock()
            .unwrap()
            .get(&Self::key_for(url))
            .cloned()
    }

    /// Remove and return the pending update for `url`
    pub fn remove(&self, url: &str) -> Option<PendingUpdate> {
        let removed = self.entries.lock().unwrap().remove(&Self::key_for(url));
        if removed.is_some() {
            debug!("dropped pending update for {url}");
        }
        removed
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.lock().unwrap().contains_key(&Self::key_for(url))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
