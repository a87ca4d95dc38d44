//! Remote content loading
//!
//! Fetches a named resource by URL in one of two shapes:
//! - **text**: the URL serves the extension body directly
//! - **container**: the URL is `base#record`; the base serves a container
//!   document and the named record is extracted from it
//!
//! Container bodies are cached per base URL so several records can share one
//! fetch. The fragment is never part of the GET request.

use crate::config::ExplorerOptions;
use crate::container::ContainerDocument;
use emporium_core::url::{infer_source_type, split_fragment, to_raw_url};
use emporium_core::{Error, RemoteContent, Result, SourceType};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};

/// Something that can load remote content
///
/// The engine is generic over this so tests can substitute a fake loader
/// and assert on what was (or was not) requested.
pub trait ContentLoader {
    /// Load the resource at `url`, interpreting it as `source_type`
    ///
    /// When `source_type` is `None` it is inferred from the URL. The loaded
    /// content is renamed to `desired_title`. `use_cache` permits serving a
    /// container body from cache instead of the network.
    fn load(
        &self,
        source_type: Option<SourceType>,
        url: &str,
        desired_title: &str,
        use_cache: bool,
    ) -> impl std::future::Future<Output = Result<RemoteContent>> + Send;
}

/// The reqwest-backed loader
pub struct HttpLoader {
    client: reqwest::Client,
    container_cache: Mutex<HashMap<String, String>>,
}

impl HttpLoader {
    /// Create a loader with default options
    pub fn new() -> Result<Self> {
        Self::with_options(&ExplorerOptions::default())
    }

    /// Create a loader with the given options
    pub fn with_options(options: &ExplorerOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.http_timeout_secs))
            .build()
            .map_err(|error| Error::network("", format!("could not build client: {error}")))?;

        Ok(Self {
            client,
            container_cache: Mutex::new(HashMap::new()),
        })
    }

    /// GET a URL and return its body with line endings normalized to LF
    ///
    /// Normalization is mandatory: version and slice comparisons must not
    /// depend on which platform served the content.
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("fetching {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| Error::network(url, error.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::network(url, format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|error| Error::network(url, error.to_string()))?;

        Ok(body.replace("\r\n", "\n"))
    }

    async fn load_text(&self, url: &str, desired_title: &str) -> Result<RemoteContent> {
        let request_url = to_raw_url(url);
        let text = self.fetch_text(&request_url).await?;
        Ok(RemoteContent {
            title: desired_title.to_string(),
            text,
            text_only: true,
        })
    }

    async fn load_container(
        &self,
        url: &str,
        desired_title: &str,
        use_cache: bool,
    ) -> Result<RemoteContent> {
        let (base_url, fragment) = split_fragment(url);
        let record_name = fragment.unwrap_or(desired_title);

        let cached = if use_cache {
            self.container_cache.lock().unwrap().get(base_url).cloned()
        } else {
            None
        };

        let body = match cached {
            Some(body) => {
                debug!("container cache hit for {base_url}");
                body
            }
            None => {
                let body = self.fetch_text(base_url).await?;
                self.container_cache
                    .lock()
                    .unwrap()
                    .insert(base_url.to_string(), body.clone());
                body
            }
        };

        let container = ContainerDocument::parse(&body, base_url)?;
        let record = container.get(record_name).ok_or_else(|| {
            warn!("container at {base_url} has no record named {record_name}");
            Error::container_parse(base_url, format!("no record named {record_name}"))
        })?;

        Ok(RemoteContent {
            title: desired_title.to_string(),
            text: record.text.clone(),
            text_only: false,
        })
    }
}

impl ContentLoader for HttpLoader {
    async fn load(
        &self,
        source_type: Option<SourceType>,
        url: &str,
        desired_title: &str,
        use_cache: bool,
    ) -> Result<RemoteContent> {
        let source_type = source_type.unwrap_or_else(|| infer_source_type(url));
        match source_type {
            SourceType::Text => self.load_text(url, desired_title).await,
            SourceType::Container => self.load_container(url, desired_title, use_cache).await,
        }
    }
}
