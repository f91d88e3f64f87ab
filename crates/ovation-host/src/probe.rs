//! Platform support probe

use crate::EnvironmentProbe;

/// Substring that marks a supported platform string when restricted
pub const WINDOWS_10_MARKER: &str = "Windows NT 10.0";

/// Probe over a host-supplied platform string (the equivalent of a browser
/// user agent). When restricted, only a Windows 10 string is supported;
/// unrestricted probes report everything as supported.
#[derive(Debug, Clone)]
pub struct PlatformProbe {
    restricted: bool,
    platform: String,
}

impl PlatformProbe {
    pub fn new(restricted: bool, platform: impl Into<String>) -> Self {
        Self {
            restricted,
            platform: platform.into(),
        }
    }

    /// A probe that reports every platform as supported.
    pub fn unrestricted() -> Self {
        Self::new(false, String::new())
    }
}

impl EnvironmentProbe for PlatformProbe {
    fn is_supported(&self) -> bool {
        !self.restricted || self.platform.contains(WINDOWS_10_MARKER)
    }
}
