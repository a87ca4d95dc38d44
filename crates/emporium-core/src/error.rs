//! Error types for emporium-core

use thiserror::Error;

/// Result type alias using emporium-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the extension engine
///
/// Every variant is recoverable: a failed check or install degrades to
/// "no update / no install performed" plus a reportable message. Nothing
/// here is fatal to the host process.
#[derive(Error, Debug)]
pub enum Error {
    /// Fetch failed (network error or non-success status)
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// Malformed multi-record container document
    #[error("could not read container at {url}: {message}")]
    ContainerParse { url: String, message: String },

    /// Malformed JSON in a catalog region
    #[error("could not parse extensions list: {message}")]
    CollectionParse { message: String },

    /// Host rejected plugin code
    #[error("plugin activation failed: {message}")]
    Activation { message: String },

    /// No URL to check against
    #[error("no source url")]
    MissingSource,
}

impl Error {
    /// Create a network failure error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a container parse error
    pub fn container_parse(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContainerParse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a collection parse error
    pub fn collection_parse(message: impl Into<String>) -> Self {
        Self::CollectionParse {
            message: message.into(),
        }
    }

    /// Create an activation failure error
    pub fn activation(message: impl Into<String>) -> Self {
        Self::Activation {
            message: message.into(),
        }
    }
}
