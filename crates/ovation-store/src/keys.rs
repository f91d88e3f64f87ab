//! Typed keys and values for prompt state

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of persisted prompt-state keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// User response status
    Status,
    /// Persisted day-threshold override
    MinDays,
    /// Persisted launch-threshold override
    MinLaunches,
    /// First recorded launch (epoch ms)
    DateFirstLaunched,
    /// Running launch count
    NumLaunches,
    /// Timestamp of the last successful prompt open (epoch ms)
    DateLastLaunched,
}

impl StateKey {
    /// All keys, in stable order
    pub const ALL: [StateKey; 6] = [
        StateKey::Status,
        StateKey::MinDays,
        StateKey::MinLaunches,
        StateKey::DateFirstLaunched,
        StateKey::NumLaunches,
        StateKey::DateLastLaunched,
    ];

    /// Stored key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::Status => "status",
            StateKey::MinDays => "min-days",
            StateKey::MinLaunches => "min-launches",
            StateKey::DateFirstLaunched => "date-first-launched",
            StateKey::NumLaunches => "num-launches",
            StateKey::DateLastLaunched => "date-last-launched",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value: a string or an integer.
///
/// Serializes untagged, so the JSON form is a bare string or number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Integer(i64),
    Text(String),
}

impl StateValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StateValue::Integer(v) => Some(*v),
            StateValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::Text(s) => Some(s),
            StateValue::Integer(_) => None,
        }
    }
}

impl From<i64> for StateValue {
    fn from(v: i64) -> Self {
        StateValue::Integer(v)
    }
}

impl From<&str> for StateValue {
    fn from(s: &str) -> Self {
        StateValue::Text(s.to_string())
    }
}

impl From<String> for StateValue {
    fn from(s: String) -> Self {
        StateValue::Text(s)
    }
}
