//! Mock host adapters for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use ovation_api::{ManifestData, ManifestIcon};

use crate::{
    EnvironmentProbe, FetchedManifest, HostError, HostResult, ManifestSource, ReviewSurface,
};

/// Environment probe with a togglable answer.
pub struct MockProbe {
    supported: Arc<Mutex<bool>>,
}

impl MockProbe {
    pub fn supported() -> Self {
        Self {
            supported: Arc::new(Mutex::new(true)),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_supported(&self, value: bool) {
        *self.supported.lock().unwrap() = value;
    }
}

impl EnvironmentProbe for MockProbe {
    fn is_supported(&self) -> bool {
        *self.supported.lock().unwrap()
    }
}

/// Manifest source that serves a canned response or a configured failure.
pub struct MockManifestSource {
    response: Mutex<Option<FetchedManifest>>,
    /// Set to true to make fetch() fail
    pub fail_fetch: Arc<Mutex<bool>>,
}

impl MockManifestSource {
    pub fn with_manifest(url: impl Into<String>, manifest: ManifestData) -> Self {
        Self {
            response: Mutex::new(Some(FetchedManifest {
                url: url.into(),
                manifest,
            })),
            fail_fetch: Arc::new(Mutex::new(false)),
        }
    }

    /// A source serving a minimal manifest with one icon.
    pub fn with_icon(url: impl Into<String>, icon_src: impl Into<String>) -> Self {
        let manifest = ManifestData {
            name: Some("Mock App".to_string()),
            icons: vec![ManifestIcon {
                src: icon_src.into(),
                sizes: Some("192x192".to_string()),
            }],
            theme_color: None,
        };
        Self::with_manifest(url, manifest)
    }

    pub fn failing() -> Self {
        Self {
            response: Mutex::new(None),
            fail_fetch: Arc::new(Mutex::new(true)),
        }
    }
}

#[async_trait]
impl ManifestSource for MockManifestSource {
    async fn fetch(&self, _path: &str) -> HostResult<FetchedManifest> {
        if *self.fail_fetch.lock().unwrap() {
            return Err(HostError::Fetch("Mock fetch failure".to_string()));
        }

        self.response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| HostError::Fetch("Mock fetch failure".to_string()))
    }
}

/// Review surface that records navigations instead of performing them.
#[derive(Default)]
pub struct MockReviewSurface {
    opened: Arc<Mutex<Vec<String>>>,
    /// Set to true to make open_review() fail
    pub fail_navigation: Arc<Mutex<bool>>,
}

impl MockReviewSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Product ids passed to open_review() so far.
    pub fn opened_ids(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewSurface for MockReviewSurface {
    async fn open_review(&self, product_id: &str) -> HostResult<()> {
        if *self.fail_navigation.lock().unwrap() {
            return Err(HostError::Navigation("Mock navigation failure".to_string()));
        }

        self.opened.lock().unwrap().push(product_id.to_string());
        Ok(())
    }
}
