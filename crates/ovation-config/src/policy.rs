//! Normalized prompt policy

use crate::schema::RawPromptConfig;
use std::time::Duration;

/// Default manifest resource path
pub const DEFAULT_MANIFEST_PATH: &str = "manifest.webmanifest";

/// Default delay between a trigger firing and the prompt-due event
pub const DEFAULT_SHOW_DELAY: Duration = Duration::from_secs(10);

/// Validated, normalized prompt configuration.
///
/// Thresholds are `None` when disabled; raw `0` values normalize to `None`.
#[derive(Debug, Clone)]
pub struct PromptPolicy {
    /// Store product identifier for the review deep link
    pub product_id: Option<String>,

    /// Manifest resource path or URL
    pub manifest_path: String,

    /// Explicit icon override
    pub icon: Option<String>,

    /// Explicit display name override
    pub display_name: Option<String>,

    /// If true, only a Windows 10 platform string counts as supported
    pub platform_restricted: bool,

    /// Day interval to re-trigger
    pub min_days: Option<u32>,

    /// Launch-count interval to re-trigger
    pub min_launches: Option<u32>,

    /// Delay before the prompt-due event fires
    pub show_delay: Duration,
}

impl Default for PromptPolicy {
    fn default() -> Self {
        Self {
            product_id: None,
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            icon: None,
            display_name: None,
            platform_restricted: true,
            min_days: None,
            min_launches: None,
            show_delay: DEFAULT_SHOW_DELAY,
        }
    }
}

impl PromptPolicy {
    /// Convert raw config into a normalized policy
    pub fn from_raw(raw: RawPromptConfig) -> Self {
        Self {
            product_id: raw.product_id,
            manifest_path: raw.manifest_path,
            icon: raw.icon,
            display_name: raw.display_name,
            platform_restricted: raw.platform_restricted,
            min_days: threshold_or_disabled(raw.min_days),
            min_launches: threshold_or_disabled(raw.min_launches),
            show_delay: Duration::from_secs(raw.show_delay_seconds),
        }
    }
}

/// Normalize a threshold: `0` and absent both mean "disabled".
pub fn threshold_or_disabled(value: Option<u32>) -> Option<u32> {
    match value {
        Some(0) | None => None,
        Some(v) => Some(v),
    }
}
