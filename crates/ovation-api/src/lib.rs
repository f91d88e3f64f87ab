//! Shared types for the ovation rating-prompt library
//!
//! This crate defines the vocabulary the other ovation crates exchange:
//! - User response statuses and choices
//! - Evaluation outcomes (triggers, suppress reasons, reset scopes)
//! - Manifest and branding data
//! - Epoch-millisecond time helpers

mod manifest;
mod status;
mod time;
mod types;

pub use manifest::*;
pub use status::*;
pub use time::*;
pub use types::*;
