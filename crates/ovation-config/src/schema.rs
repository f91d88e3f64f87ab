//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPromptConfig {
    /// Config schema version
    pub config_version: u32,

    /// Store product identifier for the review deep link
    #[serde(default)]
    pub product_id: Option<String>,

    /// Manifest resource path or URL
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// Explicit icon override (skips manifest icon lookup)
    #[serde(default)]
    pub icon: Option<String>,

    /// Explicit display name override
    #[serde(default)]
    pub display_name: Option<String>,

    /// If true, only a Windows 10 platform string counts as supported
    #[serde(default = "default_platform_restricted")]
    pub platform_restricted: bool,

    /// Day interval to re-trigger; 0 or absent disables
    #[serde(default)]
    pub min_days: Option<u32>,

    /// Launch-count interval to re-trigger; 0 or absent disables
    #[serde(default)]
    pub min_launches: Option<u32>,

    /// Delay between a trigger firing and the prompt-due event, in seconds
    #[serde(default = "default_show_delay_seconds")]
    pub show_delay_seconds: u64,
}

fn default_manifest_path() -> String {
    "manifest.webmanifest".to_string()
}

fn default_platform_restricted() -> bool {
    true
}

fn default_show_delay_seconds() -> u64 {
    10
}
