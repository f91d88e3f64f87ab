//! User response status and choices

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persisted user response to the rating prompt.
///
/// `Accepted` and `Declined` are terminal ("resolved"): once either is
/// recorded the prompt never reopens. `Postponed` and `Closed` are interim
/// and leave the prompt eligible for a later trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStatus {
    #[default]
    Unprompted,
    Accepted,
    Declined,
    Postponed,
    Closed,
}

impl PromptStatus {
    /// Resolved statuses suppress all future prompts.
    pub fn is_resolved(&self) -> bool {
        matches!(self, PromptStatus::Accepted | PromptStatus::Declined)
    }

    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptStatus::Unprompted => "unprompted",
            PromptStatus::Accepted => "accepted",
            PromptStatus::Declined => "declined",
            PromptStatus::Postponed => "postponed",
            PromptStatus::Closed => "closed",
        }
    }
}

/// Error for an unrecognized stored status string
#[derive(Debug, Clone, Error)]
#[error("Unknown prompt status: {0:?}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for PromptStatus {
    type Err = UnknownStatus;

    /// Parse a stored status. The empty string is accepted as `Unprompted`;
    /// older deployments persisted "" before ever prompting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "unprompted" => Ok(PromptStatus::Unprompted),
            "accepted" => Ok(PromptStatus::Accepted),
            "declined" => Ok(PromptStatus::Declined),
            "postponed" => Ok(PromptStatus::Postponed),
            "closed" => Ok(PromptStatus::Closed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A user's response to an open prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseChoice {
    /// Rate the app (navigates to the store review page)
    Accept,
    /// Never ask again
    Decline,
    /// Ask again later
    Postpone,
    /// Dismissed via the close button or background
    Close,
}

impl ResponseChoice {
    /// The status this choice persists.
    pub fn resulting_status(&self) -> PromptStatus {
        match self {
            ResponseChoice::Accept => PromptStatus::Accepted,
            ResponseChoice::Decline => PromptStatus::Declined,
            ResponseChoice::Postpone => PromptStatus::Postponed,
            ResponseChoice::Close => PromptStatus::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_statuses() {
        assert!(PromptStatus::Accepted.is_resolved());
        assert!(PromptStatus::Declined.is_resolved());
        assert!(!PromptStatus::Unprompted.is_resolved());
        assert!(!PromptStatus::Postponed.is_resolved());
        assert!(!PromptStatus::Closed.is_resolved());
    }

    #[test]
    fn parse_round_trip() {
        for status in [
            PromptStatus::Unprompted,
            PromptStatus::Accepted,
            PromptStatus::Declined,
            PromptStatus::Postponed,
            PromptStatus::Closed,
        ] {
            assert_eq!(status.as_str().parse::<PromptStatus>().unwrap(), status);
        }
    }

    #[test]
    fn empty_string_is_unprompted() {
        assert_eq!("".parse::<PromptStatus>().unwrap(), PromptStatus::Unprompted);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("maybe-later".parse::<PromptStatus>().is_err());
    }

    #[test]
    fn choices_map_to_statuses() {
        assert_eq!(ResponseChoice::Accept.resulting_status(), PromptStatus::Accepted);
        assert_eq!(ResponseChoice::Decline.resulting_status(), PromptStatus::Declined);
        assert_eq!(ResponseChoice::Postpone.resulting_status(), PromptStatus::Postponed);
        assert_eq!(ResponseChoice::Close.resulting_status(), PromptStatus::Closed);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&PromptStatus::Accepted).unwrap();
        assert_eq!(json, "\"accepted\"");
    }
}
