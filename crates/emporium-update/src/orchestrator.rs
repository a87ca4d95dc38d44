//! Update detection and orchestration
//!
//! For an installed extension, loads its declared source, compares versions,
//! caches discovered-but-unconfirmed updates, and on confirmation routes to
//! the install path. Version is the sole update signal: equal versions are
//! never an update, even when the bytes differ.

use crate::cache::{PendingUpdate, UpdateCache};
use crate::config::ExplorerOptions;
use crate::host::{Activator, HostStore};
use crate::installer::{InstallCoordinator, InstallOutcome};
use crate::loader::ContentLoader;
use emporium_core::version::compare;
use emporium_core::{
    Error, ExtensionDescriptor, ExtensionKind, InstalledExtension, RemoteContent, Result,
};
use std::cmp::Ordering;
use tracing::{debug, info};

/// Result of checking one extension for an update
#[derive(Debug)]
pub enum CheckOutcome {
    /// Nothing to check: no source URL. The loader is never invoked.
    NoSource,

    /// The source could not be loaded or interpreted
    Failed { error: Error },

    /// Loaded fine, but the remote version is not newer
    UpToDate { content: RemoteContent },

    /// The remote content is strictly newer; it has been cached for a
    /// follow-up install
    UpdateAvailable { content: RemoteContent },
}

impl CheckOutcome {
    /// True when an update was found
    pub fn found_update(&self) -> bool {
        matches!(self, CheckOutcome::UpdateAvailable { .. })
    }

    /// A user-facing one-liner describing this outcome
    pub fn summary(&self, installed: &InstalledExtension) -> String {
        match self {
            CheckOutcome::NoSource => "no source url".to_string(),
            CheckOutcome::Failed { error } => {
                format!("failed to load {}: {error}", installed.title)
            }
            CheckOutcome::UpToDate { .. } => "current version is up-to-date".to_string(),
            CheckOutcome::UpdateAvailable { content } => format!(
                "update of {} is available (current version: {}, available version: {})",
                installed.title,
                installed
                    .version()
                    .map_or_else(|| "unknown".to_string(), |version| version.to_string()),
                content
                    .version()
                    .map_or_else(|| "unknown".to_string(), |version| version.to_string()),
            ),
        }
    }
}

/// Drives update checks and installs; owns the engine's mutable state
///
/// Created once at startup and shared; the update cache and the loader's
/// container cache live here and are never mutated by host or UI code
/// directly.
pub struct UpdateOrchestrator<L: ContentLoader> {
    loader: L,
    cache: UpdateCache,
    options: ExplorerOptions,
}

impl<L: ContentLoader> UpdateOrchestrator<L> {
    pub fn new(loader: L) -> Self {
        Self::with_options(loader, ExplorerOptions::default())
    }

    pub fn with_options(loader: L, options: ExplorerOptions) -> Self {
        Self {
            loader,
            cache: UpdateCache::new(),
            options,
        }
    }

    /// The update cache (read access for hosts that render pending updates)
    pub fn cache(&self) -> &UpdateCache {
        &self.cache
    }

    /// Check whether the content at `url` is newer than `installed`
    ///
    /// An empty URL is "nothing to check", not an error. Content strictly
    /// newer than the installed version is cached under the normalized URL
    /// before the outcome is returned.
    pub async fn check_for_update(
        &self,
        url: &str,
        installed: &InstalledExtension,
    ) -> CheckOutcome {
        if url.is_empty() {
            return CheckOutcome::NoSource;
        }

        // update checks always go to the network so a container fetched long
        // ago cannot mask a newly published version; the fetch still
        // populates the container cache for a follow-up install
        let loaded = self.loader.load(None, url, &installed.title, false).await;

        let content = match loaded {
            Ok(content) => content,
            Err(error) => {
                debug!("update check for {url} failed: {error}");
                return CheckOutcome::Failed { error };
            }
        };

        if compare(content.version(), installed.version()) == Ordering::Greater {
            info!(
                "update of {} available at {url} ({:?} -> {:?})",
                installed.title,
                installed.version_string(),
                content.version_string()
            );
            self.cache.insert(
                url,
                PendingUpdate {
                    content: content.clone(),
                    checked_against: installed.title.clone(),
                    installed_version: installed.version(),
                },
            );
            CheckOutcome::UpdateAvailable { content }
        } else {
            debug!("{} is up to date against {url}", installed.title);
            CheckOutcome::UpToDate { content }
        }
    }

    /// Check every extension, one independent asynchronous check each
    ///
    /// No concurrency limit is enforced and completion order is
    /// unspecified; results come back in input order regardless.
    pub async fn check_all<'a>(
        &self,
        installed: &'a [InstalledExtension],
    ) -> Vec<(&'a str, CheckOutcome)> {
        let checks = installed.iter().map(|extension| async move {
            let outcome = match extension.resolvable_source() {
                Some(url) => self.check_for_update(url, extension).await,
                None => CheckOutcome::NoSource,
            };
            (extension.title.as_str(), outcome)
        });
        futures::future::join_all(checks).await
    }

    /// The startup bulk check, honoring the configured opt-out
    pub async fn startup_check<'a>(
        &self,
        installed: &'a [InstalledExtension],
    ) -> Vec<(&'a str, CheckOutcome)> {
        if !self.options.check_on_startup {
            debug!("startup update check disabled");
            return Vec::new();
        }
        self.check_all(installed).await
    }

    /// A cached update for `url` that is still actionable for `installed`
    ///
    /// Re-validates instead of trusting the stored entry: the entry must
    /// have been compared against this same extension and its version delta
    /// must still be positive (a late-arriving check response or an entry
    /// shared between two extensions with the same source URL is dropped,
    /// forcing a re-fetch).
    pub fn actionable_update(
        &self,
        url: &str,
        installed: &InstalledExtension,
    ) -> Option<RemoteContent> {
        let pending = self.cache.get(url)?;

        if pending.checked_against != installed.title {
            debug!(
                "pending update for {url} was checked against {}, not {}; dropping",
                pending.checked_against, installed.title
            );
            self.cache.remove(url);
            return None;
        }

        if compare(pending.content.version(), installed.version()) != Ordering::Greater {
            debug!(
                "pending update for {url} (found over {:?}) is no longer newer; dropping",
                pending.installed_version
            );
            self.cache.remove(url);
            return None;
        }

        Some(pending.content)
    }

    /// Drop any pending update for `url`
    pub fn invalidate(&self, url: &str) {
        self.cache.remove(url);
    }

    /// Install content through the coordinator, consuming any pending update
    /// cached for its source URL
    pub fn install<S: HostStore, A: Activator>(
        &self,
        coordinator: &mut InstallCoordinator<S, A>,
        content: &RemoteContent,
        kind: Option<ExtensionKind>,
        source_url: Option<&str>,
    ) -> InstallOutcome {
        let outcome = coordinator.install(content, kind, source_url);
        if let Some(url) = source_url {
            self.invalidate(url);
        }
        outcome
    }

    /// Install the update previously discovered for `url`, if still valid
    pub fn confirm_update<S: HostStore, A: Activator>(
        &self,
        url: &str,
        installed: &InstalledExtension,
        coordinator: &mut InstallCoordinator<S, A>,
    ) -> Option<InstallOutcome> {
        let content = self.actionable_update(url, installed)?;
        Some(self.install(coordinator, &content, None, Some(url)))
    }

    /// Fetch a catalog entry and install it
    ///
    /// A descriptor with an embedded body installs without touching the
    /// network. The descriptor's declared source type and kind win over
    /// inference.
    pub async fn grab_and_install<S: HostStore, A: Activator>(
        &self,
        descriptor: &ExtensionDescriptor,
        coordinator: &mut InstallCoordinator<S, A>,
    ) -> Result<InstallOutcome> {
        let title = descriptor
            .name
            .clone()
            .or_else(|| emporium_catalog::guess_name_by_url(&descriptor.url))
            .ok_or_else(|| Error::collection_parse("descriptor has no resolvable name"))?;

        if let Some(text) = descriptor.text.as_deref().filter(|text| !text.is_empty()) {
            let content = RemoteContent {
                title,
                text: text.to_string(),
                text_only: true,
            };
            return Ok(self.install(
                coordinator,
                &content,
                descriptor.kind.clone(),
                Some(&descriptor.url),
            ));
        }

        let content = self
            .loader
            .load(
                descriptor.source_type,
                &descriptor.url,
                &title,
                self.options.use_container_cache,
            )
            .await?;
        info!("loaded {}, about to import and install", content.title);

        Ok(self.install(
            coordinator,
            &content,
            descriptor.kind.clone(),
            Some(&descriptor.url),
        ))
    }
}
