//! HTTP manifest source

use async_trait::async_trait;
use ovation_api::ManifestData;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::{FetchedManifest, HostError, HostResult, ManifestSource};

/// Total request timeout for manifest fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect timeout for manifest fetches
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches manifests over HTTP(S). There is no retry: a failed fetch is
/// reported once and the caller degrades to overrides-only branding.
pub struct HttpManifestSource {
    client: Client,
    base: Option<Url>,
}

impl HttpManifestSource {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base: None }
    }

    /// Resolve relative manifest paths against this base URL.
    pub fn with_base(mut self, base: Url) -> Self {
        self.base = Some(base);
        self
    }

    fn resolve(&self, path: &str) -> HostResult<Url> {
        if let Ok(url) = Url::parse(path) {
            return Ok(url);
        }

        match &self.base {
            Some(base) => base.join(path).map_err(|e| HostError::InvalidUrl {
                url: path.to_string(),
                message: e.to_string(),
            }),
            None => Err(HostError::InvalidUrl {
                url: path.to_string(),
                message: "relative path with no base URL".into(),
            }),
        }
    }
}

impl Default for HttpManifestSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch(&self, path: &str) -> HostResult<FetchedManifest> {
        let url = self.resolve(path)?;
        debug!(url = %url, "Fetching manifest");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HostError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(HostError::Fetch(format!("HTTP {}", resp.status())));
        }

        let final_url = resp.url().to_string();
        let body = resp
            .text()
            .await
            .map_err(|e| HostError::Fetch(e.to_string()))?;
        let manifest: ManifestData =
            serde_json::from_str(&body).map_err(|e| HostError::Parse(e.to_string()))?;

        debug!(url = %final_url, icon_count = manifest.icons.len(), "Manifest fetched");

        Ok(FetchedManifest {
            url: final_url,
            manifest,
        })
    }
}
