//! Runtime options for the update engine

use serde::{Deserialize, Serialize};

/// Options the host hands the engine at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorerOptions {
    /// Check every installed extension for updates on startup
    pub check_on_startup: bool,

    /// Reuse fetched container bodies across loads of the same base URL
    pub use_container_cache: bool,

    /// HTTP request timeout, seconds
    pub http_timeout_secs: u64,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            check_on_startup: true,
            use_container_cache: true,
            http_timeout_secs: 30,
        }
    }
}
