//! Store review deep link

use async_trait::async_trait;
use tracing::info;
use url::Url;

use crate::{HostError, HostResult, ReviewSurface};

/// Deep link prefix for the store review page
const REVIEW_URL_PREFIX: &str = "ms-windows-store://review/?ProductId=";

/// Build the review deep link for a product id.
pub fn review_url(product_id: &str) -> HostResult<Url> {
    let raw = format!("{REVIEW_URL_PREFIX}{product_id}");
    Url::parse(&raw).map_err(|e| HostError::InvalidUrl {
        url: raw.clone(),
        message: e.to_string(),
    })
}

/// Opens the review page through the operating system's URI handler.
#[derive(Debug, Default)]
pub struct SystemReviewSurface;

impl SystemReviewSurface {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReviewSurface for SystemReviewSurface {
    async fn open_review(&self, product_id: &str) -> HostResult<()> {
        let url = review_url(product_id)?;
        open::that(url.as_str()).map_err(|e| HostError::Navigation(e.to_string()))?;
        info!(product_id, "Review page opened");
        Ok(())
    }
}
