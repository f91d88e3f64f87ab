//! Evaluation outcomes and prompt views

use serde::{Deserialize, Serialize};

/// Which heuristic produced a show decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Elapsed-days threshold reached
    Days,
    /// Launch-count threshold reached
    Launches,
}

/// Why an evaluation decided not to show the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressReason {
    /// User already accepted or declined
    Resolved,
    /// Environment probe reported an unsupported platform
    Unsupported,
    /// Neither a day nor a launch threshold is configured
    NoThresholds,
    /// A prompt was already opened this calendar day
    AlreadyShownToday,
    /// Thresholds are configured but none is satisfied
    ThresholdNotMet,
}

/// Scope of a state reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetScope {
    /// Reset `status` to unprompted
    Status,
    /// Delete the persisted threshold overrides
    Thresholds,
    /// Delete launch counters and timestamps
    Counters,
    /// All of the above
    All,
}

/// Background/foreground pair derived from the manifest theme color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Normalized `#rrggbb` background
    pub background: String,

    /// `#000000` or `#ffffff`, whichever reads against the background
    pub foreground: String,
}

/// Everything a host needs to render an open prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptView {
    /// Application display name, if resolvable
    pub display_name: Option<String>,

    /// Icon URL (explicit override or first manifest icon, absolutized)
    pub icon: String,

    /// Colors derived from the manifest theme color
    pub theme: Option<ThemeColors>,
}
