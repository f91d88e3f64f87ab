//! Typed access to persisted prompt state

use ovation_api::{PromptStatus, ResetScope};
use ovation_store::{StateKey, StateStore, StateValue};
use std::sync::Arc;
use tracing::debug;

use crate::PromptResult;

/// Typed view over the persisted key-value state.
///
/// Every accessor maps one `StateKey` to its domain type. Values with the
/// wrong shape (a text where an integer belongs, a negative counter) read as
/// absent rather than failing: persisted state is input, not something worth
/// crashing over.
pub struct PromptState {
    store: Arc<dyn StateStore>,
}

impl PromptState {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Current status. Absent, empty, and unrecognized stored values read as
    /// `Unprompted`.
    pub async fn status(&self) -> PromptResult<PromptStatus> {
        let Some(value) = self.store.get(StateKey::Status).await? else {
            return Ok(PromptStatus::Unprompted);
        };

        let Some(text) = value.as_str() else {
            debug!(?value, "Non-text status value, reading as unprompted");
            return Ok(PromptStatus::Unprompted);
        };

        match text.parse::<PromptStatus>() {
            Ok(status) => Ok(status),
            Err(err) => {
                debug!(error = %err, "Unrecognized status, reading as unprompted");
                Ok(PromptStatus::Unprompted)
            }
        }
    }

    pub async fn set_status(&self, status: PromptStatus) -> PromptResult<()> {
        self.store
            .set(StateKey::Status, StateValue::from(status.as_str()))
            .await?;
        Ok(())
    }

    /// Persisted day-threshold override, if any.
    pub async fn min_days(&self) -> PromptResult<Option<u32>> {
        self.read_threshold(StateKey::MinDays).await
    }

    /// Persisted launch-threshold override, if any.
    pub async fn min_launches(&self) -> PromptResult<Option<u32>> {
        self.read_threshold(StateKey::MinLaunches).await
    }

    pub async fn set_min_days(&self, value: Option<u32>) -> PromptResult<()> {
        self.write_threshold(StateKey::MinDays, value).await
    }

    pub async fn set_min_launches(&self, value: Option<u32>) -> PromptResult<()> {
        self.write_threshold(StateKey::MinLaunches, value).await
    }

    async fn read_threshold(&self, key: StateKey) -> PromptResult<Option<u32>> {
        let value = self.store.get(key).await?;
        Ok(value
            .and_then(|v| v.as_i64())
            .and_then(|v| u32::try_from(v).ok()))
    }

    async fn write_threshold(&self, key: StateKey, value: Option<u32>) -> PromptResult<()> {
        match value {
            Some(v) => self.store.set(key, StateValue::from(i64::from(v))).await?,
            None => self.store.delete(key).await?,
        }
        Ok(())
    }

    /// First recorded launch timestamp, epoch ms.
    pub async fn first_launch(&self) -> PromptResult<Option<i64>> {
        let value = self.store.get(StateKey::DateFirstLaunched).await?;
        Ok(value.and_then(|v| v.as_i64()))
    }

    /// Record a launch: initialize the first-launch timestamp if absent and
    /// increment the launch counter. Returns the first-launch timestamp and
    /// the incremented count.
    pub async fn record_launch(&self, now: i64) -> PromptResult<(i64, i64)> {
        let first = match self.first_launch().await? {
            Some(first) => first,
            None => {
                self.store
                    .set(StateKey::DateFirstLaunched, StateValue::from(now))
                    .await?;
                now
            }
        };

        let prior = self
            .store
            .get(StateKey::NumLaunches)
            .await?
            .and_then(|v| v.as_i64())
            .unwrap_or(0)
            .max(0);
        let count = prior + 1;
        self.store
            .set(StateKey::NumLaunches, StateValue::from(count))
            .await?;

        Ok((first, count))
    }

    /// Timestamp of the last successful prompt open, epoch ms.
    pub async fn last_opened(&self) -> PromptResult<Option<i64>> {
        let value = self.store.get(StateKey::DateLastLaunched).await?;
        Ok(value.and_then(|v| v.as_i64()))
    }

    pub async fn mark_opened(&self, now: i64) -> PromptResult<()> {
        self.store
            .set(StateKey::DateLastLaunched, StateValue::from(now))
            .await?;
        Ok(())
    }

    /// Clear state for the given scope.
    pub async fn clear(&self, scope: ResetScope) -> PromptResult<()> {
        match scope {
            ResetScope::Status => self.set_status(PromptStatus::Unprompted).await?,
            ResetScope::Thresholds => self.clear_thresholds().await?,
            ResetScope::Counters => self.clear_counters().await?,
            ResetScope::All => {
                self.set_status(PromptStatus::Unprompted).await?;
                self.clear_thresholds().await?;
                self.clear_counters().await?;
            }
        }
        Ok(())
    }

    async fn clear_thresholds(&self) -> PromptResult<()> {
        self.store.delete(StateKey::MinDays).await?;
        self.store.delete(StateKey::MinLaunches).await?;
        Ok(())
    }

    async fn clear_counters(&self) -> PromptResult<()> {
        self.store.delete(StateKey::DateFirstLaunched).await?;
        self.store.delete(StateKey::NumLaunches).await?;
        self.store.delete(StateKey::DateLastLaunched).await?;
        Ok(())
    }
}
