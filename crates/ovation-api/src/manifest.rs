//! Web app manifest subset consumed for prompt branding

use serde::{Deserialize, Serialize};

/// The manifest fields the prompt cares about. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestData {
    /// Application name
    #[serde(default)]
    pub name: Option<String>,

    /// Icon entries, in manifest order
    #[serde(default)]
    pub icons: Vec<ManifestIcon>,

    /// Theme color as a hex string (e.g. "#336699")
    #[serde(default)]
    pub theme_color: Option<String>,
}

/// One manifest icon entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    /// Icon URL, possibly relative to the manifest location
    pub src: String,

    /// Declared sizes string (e.g. "192x192"), if present
    #[serde(default)]
    pub sizes: Option<String>,
}
