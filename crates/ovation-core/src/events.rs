//! Events emitted by the scheduler

use ovation_api::{PromptView, ResetScope, ResponseChoice, Trigger};

/// Events published on the scheduler's event channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// The delayed-show timer fired; the prompt may be opened now
    PromptDue { trigger: Trigger },

    /// The prompt opened with the resolved branding
    PromptOpened { view: PromptView },

    /// The user responded and the prompt closed
    PromptClosed { choice: ResponseChoice },

    /// Persisted state was cleared
    StateReset { scope: ResetScope },
}
