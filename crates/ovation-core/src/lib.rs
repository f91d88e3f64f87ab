//! Prompt scheduling engine
//!
//! Decides when a "rate this app" prompt should appear, tracks the user's
//! response, and resolves the branding a host renders in the prompt. State
//! lives behind an [`ovation_store::StateStore`]; platform access goes
//! through the `ovation-host` contracts, so the engine itself never touches
//! the network or the operating system directly.

mod branding;
mod events;
mod scheduler;
mod state;
mod trigger;

pub use events::*;
pub use scheduler::*;
pub use state::*;

use ovation_store::StoreError;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced by scheduler operations
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user already accepted or declined
    #[error("Prompt already resolved")]
    AlreadyResolved,

    /// A prompt was already opened this calendar day
    #[error("Prompt already shown today")]
    AlreadyShownToday,

    /// The environment probe reported an unsupported platform
    #[error("Environment does not support prompting")]
    Unsupported,

    /// Opening requires a configured store product id
    #[error("No product id configured for the review page")]
    MissingIdentifier,

    /// No icon override and no usable manifest icon
    #[error("No icon available for the prompt")]
    MissingIcon,

    /// State store failure
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for PromptError {
    fn from(err: StoreError) -> Self {
        warn!(error = %err, "State store operation failed");
        PromptError::Store(err)
    }
}

pub type PromptResult<T> = Result<T, PromptError>;
