//! Host adapter traits

use async_trait::async_trait;
use ovation_api::ManifestData;
use thiserror::Error;

/// Errors from host adapter operations
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Parse failed: {0}")]
    Parse(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HostResult<T> = Result<T, HostError>;

/// A manifest plus the URL it was actually fetched from, so relative icon
/// paths can be resolved against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedManifest {
    /// Final URL after redirects
    pub url: String,

    /// Parsed manifest
    pub manifest: ManifestData,
}

/// Capability check: is this environment one the prompt should appear in?
pub trait EnvironmentProbe: Send + Sync {
    fn is_supported(&self) -> bool;
}

/// Fetches and parses the application manifest
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch the manifest at `path` (a URL or a path the source knows how
    /// to resolve).
    async fn fetch(&self, path: &str) -> HostResult<FetchedManifest>;
}

/// Routes an accepted prompt to the platform store review page
#[async_trait]
pub trait ReviewSurface: Send + Sync {
    async fn open_review(&self, product_id: &str) -> HostResult<()>;
}
