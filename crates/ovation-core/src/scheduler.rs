//! The prompt scheduler

use ovation_api::{
    now_ms, same_day, PromptStatus, PromptView, ResetScope, ResponseChoice, SuppressReason,
    Trigger,
};
use ovation_config::{threshold_or_disabled, PromptPolicy};
use ovation_host::{EnvironmentProbe, FetchedManifest, ManifestSource, ReviewSurface};
use ovation_store::StateStore;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{branding, trigger, PromptError, PromptEvent, PromptResult, PromptState};

/// Outcome of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A trigger fired; `PromptDue` follows after the delay
    Show { trigger: Trigger, after: Duration },
    /// No prompt this time
    Suppress { reason: SuppressReason },
}

/// Decides when the rating prompt should appear and tracks the response.
///
/// All mutating operations take `&mut self`: one owner drives the prompt
/// lifecycle. Hosts with several entry points wrap the scheduler in an
/// `Arc<tokio::sync::Mutex<_>>`.
pub struct PromptScheduler {
    policy: PromptPolicy,
    state: PromptState,
    probe: Arc<dyn EnvironmentProbe>,
    manifest_source: Arc<dyn ManifestSource>,
    review: Arc<dyn ReviewSurface>,
    show_delay: Duration,
    /// Manifest fetch outcome, cached after the first attempt
    manifest: Option<Option<FetchedManifest>>,
    open: bool,
    pending_show: Option<JoinHandle<()>>,
    event_tx: mpsc::UnboundedSender<PromptEvent>,
    event_rx: Arc<Mutex<Option<mpsc::UnboundedReceiver<PromptEvent>>>>,
}

impl PromptScheduler {
    /// Create a new scheduler
    pub fn new(
        policy: PromptPolicy,
        store: Arc<dyn StateStore>,
        probe: Arc<dyn EnvironmentProbe>,
        manifest_source: Arc<dyn ManifestSource>,
        review: Arc<dyn ReviewSurface>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        info!(
            min_days = ?policy.min_days,
            min_launches = ?policy.min_launches,
            "Prompt scheduler initialized"
        );

        Self {
            show_delay: policy.show_delay,
            policy,
            state: PromptState::new(store),
            probe,
            manifest_source,
            review,
            manifest: None,
            open: false,
            pending_show: None,
            event_tx: tx,
            event_rx: Arc::new(Mutex::new(Some(rx))),
        }
    }

    /// Get the configured policy
    pub fn policy(&self) -> &PromptPolicy {
        &self.policy
    }

    /// Whether a prompt is currently open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current persisted status
    pub async fn status(&self) -> PromptResult<PromptStatus> {
        self.state.status().await
    }

    /// Take the event receiver
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<PromptEvent> {
        self.event_rx
            .lock()
            .unwrap()
            .take()
            .expect("subscribe() can only be called once")
    }

    /// Evaluate the trigger heuristics for a launch at `now` (epoch ms).
    ///
    /// The launch is recorded first (first-launch timestamp, launch counter)
    /// so counters advance even while the prompt is suppressed. On `Show`
    /// the delayed-show timer is armed, replacing any pending one.
    pub async fn evaluate(&mut self, now: i64) -> PromptResult<Decision> {
        let (first, count) = self.state.record_launch(now).await?;

        let status = self.state.status().await?;
        if status.is_resolved() {
            debug!(status = %status.as_str(), "Prompt suppressed");
            return Ok(Decision::Suppress {
                reason: SuppressReason::Resolved,
            });
        }

        if !self.probe.is_supported() {
            debug!("Prompt suppressed on unsupported platform");
            return Ok(Decision::Suppress {
                reason: SuppressReason::Unsupported,
            });
        }

        let min_days = effective_threshold(self.state.min_days().await?, self.policy.min_days);
        let min_launches =
            effective_threshold(self.state.min_launches().await?, self.policy.min_launches);
        if min_days.is_none() && min_launches.is_none() {
            debug!("Prompt suppressed with no thresholds configured");
            return Ok(Decision::Suppress {
                reason: SuppressReason::NoThresholds,
            });
        }

        if let Some(last) = self.state.last_opened().await?
            && same_day(last, now)
        {
            debug!("Prompt suppressed, already shown today");
            return Ok(Decision::Suppress {
                reason: SuppressReason::AlreadyShownToday,
            });
        }

        // Day trigger wins when both fire on the same launch
        if trigger::day_trigger(min_days, first, now) {
            return Ok(self.arm_show(Trigger::Days));
        }

        if trigger::launch_trigger(min_launches, count) {
            return Ok(self.arm_show(Trigger::Launches));
        }

        Ok(Decision::Suppress {
            reason: SuppressReason::ThresholdNotMet,
        })
    }

    /// Evaluate with the current wall-clock time.
    pub async fn evaluate_now(&mut self) -> PromptResult<Decision> {
        self.evaluate(now_ms()).await
    }

    /// Open the prompt at `now` (epoch ms).
    ///
    /// Re-checks every precondition, so a stale `PromptDue` degrades to an
    /// error the host can ignore. On success the open timestamp is persisted
    /// and the resolved branding is returned for rendering.
    pub async fn open(&mut self, now: i64) -> PromptResult<PromptView> {
        let status = self.state.status().await?;
        if status.is_resolved() {
            warn!(status = %status.as_str(), "Open refused, prompt already resolved");
            return Err(PromptError::AlreadyResolved);
        }

        if let Some(last) = self.state.last_opened().await?
            && same_day(last, now)
        {
            warn!("Open refused, prompt already shown today");
            return Err(PromptError::AlreadyShownToday);
        }

        if !self.probe.is_supported() {
            warn!("Open refused on unsupported platform");
            return Err(PromptError::Unsupported);
        }

        if self.policy.product_id.is_none() {
            debug!("Open refused, no product id configured");
            return Err(PromptError::MissingIdentifier);
        }

        let fetched = self.fetch_manifest_once().await;
        let branding = branding::resolve(&self.policy, fetched.as_ref());

        let Some(icon) = branding.icon else {
            debug!("Open refused, no icon available");
            return Err(PromptError::MissingIcon);
        };

        let view = PromptView {
            display_name: branding.display_name,
            icon,
            theme: branding.theme,
        };

        self.state.mark_opened(now).await?;
        self.open = true;

        info!("Prompt opened");
        let _ = self.event_tx.send(PromptEvent::PromptOpened {
            view: view.clone(),
        });

        Ok(view)
    }

    /// Record the user's response and close the prompt.
    ///
    /// `Accept` also navigates to the store review page; a navigation
    /// failure is logged and does not roll back the recorded status.
    pub async fn respond(&mut self, choice: ResponseChoice) -> PromptResult<()> {
        let status = choice.resulting_status();
        self.state.set_status(status).await?;

        if choice == ResponseChoice::Accept {
            match &self.policy.product_id {
                Some(product_id) => {
                    if let Err(err) = self.review.open_review(product_id).await {
                        warn!(error = %err, "Review page navigation failed");
                    }
                }
                None => warn!("Accepted without a product id, skipping review page"),
            }
        }

        self.open = false;

        info!(choice = ?choice, status = %status.as_str(), "Prompt closed");
        let _ = self.event_tx.send(PromptEvent::PromptClosed { choice });

        Ok(())
    }

    /// Clear persisted state for the given scope. Also aborts any pending
    /// delayed show, since its premises no longer hold.
    pub async fn reset(&mut self, scope: ResetScope) -> PromptResult<()> {
        if let Some(pending) = self.pending_show.take() {
            pending.abort();
        }

        self.state.clear(scope).await?;

        info!(scope = ?scope, "State reset");
        let _ = self.event_tx.send(PromptEvent::StateReset { scope });

        Ok(())
    }

    /// Persist a day-threshold override. `None` removes the override.
    pub async fn set_min_days(&mut self, value: Option<u32>) -> PromptResult<()> {
        self.state.set_min_days(value).await
    }

    /// Persist a launch-threshold override. `None` removes the override.
    pub async fn set_min_launches(&mut self, value: Option<u32>) -> PromptResult<()> {
        self.state.set_min_launches(value).await
    }

    /// Change the delay between a trigger and `PromptDue`. In-memory only.
    pub fn set_show_delay(&mut self, delay: Duration) {
        self.show_delay = delay;
    }

    /// Arm the delayed-show timer, replacing any pending one.
    fn arm_show(&mut self, trigger: Trigger) -> Decision {
        if let Some(pending) = self.pending_show.take() {
            pending.abort();
        }

        let delay = self.show_delay;
        let tx = self.event_tx.clone();
        self.pending_show = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(PromptEvent::PromptDue { trigger });
        }));

        info!(trigger = ?trigger, delay_ms = delay.as_millis() as u64, "Prompt trigger fired");

        Decision::Show {
            trigger,
            after: delay,
        }
    }

    /// Fetch the manifest on first use; the outcome (including failure) is
    /// cached for the lifetime of this scheduler.
    async fn fetch_manifest_once(&mut self) -> Option<FetchedManifest> {
        if self.manifest.is_none() {
            let outcome = match self.manifest_source.fetch(&self.policy.manifest_path).await {
                Ok(fetched) => {
                    debug!(url = %fetched.url, "Manifest resolved");
                    Some(fetched)
                }
                Err(err) => {
                    warn!(error = %err, path = %self.policy.manifest_path, "Manifest fetch failed");
                    None
                }
            };
            self.manifest = Some(outcome);
        }

        self.manifest.clone().flatten()
    }
}

impl Drop for PromptScheduler {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_show.take() {
            pending.abort();
        }
    }
}

/// The persisted override wins over the policy value; in both cases 0 and
/// absent mean disabled.
fn effective_threshold(stored: Option<u32>, policy: Option<u32>) -> Option<u32> {
    match stored {
        Some(v) => threshold_or_disabled(Some(v)),
        None => threshold_or_disabled(policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovation_api::MS_PER_DAY;
    use ovation_host::{MockManifestSource, MockProbe, MockReviewSurface};
    use ovation_store::{MemoryStore, StateKey};

    const PRODUCT_ID: &str = "9NBLGGH4R315";
    const T0: i64 = 1_700_000_000_000;

    fn test_policy() -> PromptPolicy {
        PromptPolicy {
            product_id: Some(PRODUCT_ID.to_string()),
            min_days: Some(3),
            min_launches: Some(5),
            show_delay: Duration::from_millis(10),
            ..PromptPolicy::default()
        }
    }

    fn scheduler(policy: PromptPolicy) -> (PromptScheduler, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let scheduler = PromptScheduler::new(
            policy,
            store.clone(),
            Arc::new(MockProbe::supported()),
            Arc::new(MockManifestSource::with_icon(
                "https://example.com/manifest.webmanifest",
                "icon.png",
            )),
            Arc::new(MockReviewSurface::new()),
        );
        (scheduler, store)
    }

    #[test]
    fn stored_threshold_wins_over_policy() {
        assert_eq!(effective_threshold(Some(2), Some(5)), Some(2));
        assert_eq!(effective_threshold(None, Some(5)), Some(5));
        assert_eq!(effective_threshold(Some(0), Some(5)), None);
        assert_eq!(effective_threshold(None, Some(0)), None);
        assert_eq!(effective_threshold(None, None), None);
    }

    #[tokio::test]
    async fn first_evaluate_records_launch_and_suppresses() {
        let (mut scheduler, store) = scheduler(test_policy());

        let decision = scheduler.evaluate(T0).await.unwrap();
        assert_eq!(
            decision,
            Decision::Suppress {
                reason: SuppressReason::ThresholdNotMet
            }
        );

        let count = store.get(StateKey::NumLaunches).await.unwrap();
        assert_eq!(count.and_then(|v| v.as_i64()), Some(1));
        let first = store.get(StateKey::DateFirstLaunched).await.unwrap();
        assert_eq!(first.and_then(|v| v.as_i64()), Some(T0));
    }

    #[tokio::test]
    async fn launch_counter_counts_every_evaluate() {
        let (mut scheduler, store) = scheduler(test_policy());

        for i in 0..4 {
            scheduler.evaluate(T0 + i).await.unwrap();
        }

        let count = store.get(StateKey::NumLaunches).await.unwrap();
        assert_eq!(count.and_then(|v| v.as_i64()), Some(4));
    }

    #[tokio::test]
    async fn unsupported_platform_still_counts_launches() {
        let store = Arc::new(MemoryStore::new());
        let mut scheduler = PromptScheduler::new(
            test_policy(),
            store.clone(),
            Arc::new(MockProbe::unsupported()),
            Arc::new(MockManifestSource::failing()),
            Arc::new(MockReviewSurface::new()),
        );

        let decision = scheduler.evaluate(T0).await.unwrap();
        assert_eq!(
            decision,
            Decision::Suppress {
                reason: SuppressReason::Unsupported
            }
        );

        let count = store.get(StateKey::NumLaunches).await.unwrap();
        assert_eq!(count.and_then(|v| v.as_i64()), Some(1));
    }

    #[tokio::test]
    async fn no_thresholds_suppresses() {
        let policy = PromptPolicy {
            product_id: Some(PRODUCT_ID.to_string()),
            show_delay: Duration::from_millis(10),
            ..PromptPolicy::default()
        };
        let (mut scheduler, _) = scheduler(policy);

        let decision = scheduler.evaluate(T0).await.unwrap();
        assert_eq!(
            decision,
            Decision::Suppress {
                reason: SuppressReason::NoThresholds
            }
        );
    }

    #[tokio::test]
    async fn resolved_status_suppresses_every_later_evaluate() {
        let (mut scheduler, _) = scheduler(test_policy());

        scheduler.respond(ResponseChoice::Decline).await.unwrap();

        for days in [0, 3, 30, 365] {
            let decision = scheduler.evaluate(T0 + days * MS_PER_DAY).await.unwrap();
            assert_eq!(
                decision,
                Decision::Suppress {
                    reason: SuppressReason::Resolved
                }
            );
        }
    }

    #[tokio::test]
    async fn day_trigger_fires_after_interval() {
        let (mut scheduler, _) = scheduler(test_policy());

        scheduler.evaluate(T0).await.unwrap();
        let decision = scheduler.evaluate(T0 + 3 * MS_PER_DAY).await.unwrap();
        assert_eq!(
            decision,
            Decision::Show {
                trigger: Trigger::Days,
                after: Duration::from_millis(10)
            }
        );
    }

    #[tokio::test]
    async fn day_trigger_holds_short_of_interval() {
        let (mut scheduler, _) = scheduler(test_policy());

        scheduler.evaluate(T0).await.unwrap();
        let decision = scheduler.evaluate(T0 + 2 * MS_PER_DAY).await.unwrap();
        assert_eq!(
            decision,
            Decision::Suppress {
                reason: SuppressReason::ThresholdNotMet
            }
        );
    }

    #[tokio::test]
    async fn launch_trigger_fires_on_sixth_evaluate() {
        let policy = PromptPolicy {
            min_days: None,
            ..test_policy()
        };
        let (mut scheduler, _) = scheduler(policy);

        for i in 0..5 {
            let decision = scheduler.evaluate(T0 + i).await.unwrap();
            assert!(matches!(decision, Decision::Suppress { .. }), "launch {i}");
        }

        let decision = scheduler.evaluate(T0 + 5).await.unwrap();
        assert_eq!(
            decision,
            Decision::Show {
                trigger: Trigger::Launches,
                after: Duration::from_millis(10)
            }
        );
    }

    #[tokio::test]
    async fn stored_override_wins_over_policy() {
        let (mut scheduler, _) = scheduler(test_policy());
        scheduler.set_min_launches(Some(2)).await.unwrap();

        scheduler.evaluate(T0).await.unwrap();
        scheduler.evaluate(T0 + 1).await.unwrap();
        let decision = scheduler.evaluate(T0 + 2).await.unwrap();
        assert_eq!(
            decision,
            Decision::Show {
                trigger: Trigger::Launches,
                after: Duration::from_millis(10)
            }
        );
    }

    #[tokio::test]
    async fn stored_zero_disables_policy_threshold() {
        let policy = PromptPolicy {
            min_launches: None,
            ..test_policy()
        };
        let (mut scheduler, _) = scheduler(policy);
        scheduler.set_min_days(Some(0)).await.unwrap();

        let decision = scheduler.evaluate(T0 + 3 * MS_PER_DAY).await.unwrap();
        assert_eq!(
            decision,
            Decision::Suppress {
                reason: SuppressReason::NoThresholds
            }
        );
    }

    #[tokio::test]
    async fn open_resolves_branding_and_persists_timestamp() {
        let (mut scheduler, store) = scheduler(test_policy());

        let view = scheduler.open(T0).await.unwrap();
        assert_eq!(view.display_name.as_deref(), Some("Mock App"));
        assert_eq!(view.icon, "https://example.com/icon.png");
        assert!(scheduler.is_open());

        let last = store.get(StateKey::DateLastLaunched).await.unwrap();
        assert_eq!(last.and_then(|v| v.as_i64()), Some(T0));
    }

    #[tokio::test]
    async fn second_open_same_day_fails() {
        let (mut scheduler, _) = scheduler(test_policy());

        scheduler.open(T0).await.unwrap();
        let err = scheduler.open(T0 + 3_600_000).await.unwrap_err();
        assert!(matches!(err, PromptError::AlreadyShownToday));
    }

    #[tokio::test]
    async fn evaluate_suppresses_after_open_same_day() {
        let (mut scheduler, _) = scheduler(test_policy());

        scheduler.open(T0).await.unwrap();
        let decision = scheduler.evaluate(T0 + 3_600_000).await.unwrap();
        assert_eq!(
            decision,
            Decision::Suppress {
                reason: SuppressReason::AlreadyShownToday
            }
        );
    }

    #[tokio::test]
    async fn open_requires_product_id() {
        let policy = PromptPolicy {
            product_id: None,
            ..test_policy()
        };
        let (mut scheduler, _) = scheduler(policy);

        let err = scheduler.open(T0).await.unwrap_err();
        assert!(matches!(err, PromptError::MissingIdentifier));
    }

    #[tokio::test]
    async fn open_requires_an_icon() {
        let store = Arc::new(MemoryStore::new());
        let mut scheduler = PromptScheduler::new(
            test_policy(),
            store,
            Arc::new(MockProbe::supported()),
            Arc::new(MockManifestSource::failing()),
            Arc::new(MockReviewSurface::new()),
        );

        let err = scheduler.open(T0).await.unwrap_err();
        assert!(matches!(err, PromptError::MissingIcon));
        assert!(!scheduler.is_open());
    }

    #[tokio::test]
    async fn open_refused_after_resolution() {
        let (mut scheduler, _) = scheduler(test_policy());

        scheduler.respond(ResponseChoice::Accept).await.unwrap();
        let err = scheduler.open(T0).await.unwrap_err();
        assert!(matches!(err, PromptError::AlreadyResolved));
    }

    #[tokio::test]
    async fn accept_navigates_to_review_page() {
        let store = Arc::new(MemoryStore::new());
        let review = Arc::new(MockReviewSurface::new());
        let mut scheduler = PromptScheduler::new(
            test_policy(),
            store,
            Arc::new(MockProbe::supported()),
            Arc::new(MockManifestSource::with_icon(
                "https://example.com/manifest.webmanifest",
                "icon.png",
            )),
            review.clone(),
        );

        scheduler.open(T0).await.unwrap();
        scheduler.respond(ResponseChoice::Accept).await.unwrap();

        assert_eq!(review.opened_ids(), vec![PRODUCT_ID.to_string()]);
        assert_eq!(scheduler.status().await.unwrap(), PromptStatus::Accepted);
        assert!(!scheduler.is_open());
    }

    #[tokio::test]
    async fn navigation_failure_keeps_accepted_status() {
        let store = Arc::new(MemoryStore::new());
        let review = Arc::new(MockReviewSurface::new());
        *review.fail_navigation.lock().unwrap() = true;
        let mut scheduler = PromptScheduler::new(
            test_policy(),
            store,
            Arc::new(MockProbe::supported()),
            Arc::new(MockManifestSource::with_icon(
                "https://example.com/manifest.webmanifest",
                "icon.png",
            )),
            review.clone(),
        );

        scheduler.respond(ResponseChoice::Accept).await.unwrap();

        assert!(review.opened_ids().is_empty());
        assert_eq!(scheduler.status().await.unwrap(), PromptStatus::Accepted);
    }

    #[tokio::test]
    async fn postpone_leaves_prompt_eligible() {
        let policy = PromptPolicy {
            min_days: None,
            min_launches: Some(1),
            ..test_policy()
        };
        let (mut scheduler, _) = scheduler(policy);

        scheduler.evaluate(T0).await.unwrap();
        let decision = scheduler.evaluate(T0 + 1).await.unwrap();
        assert!(matches!(decision, Decision::Show { .. }));

        scheduler.open(T0 + 1).await.unwrap();
        scheduler.respond(ResponseChoice::Postpone).await.unwrap();

        let next_day = T0 + MS_PER_DAY;
        let decision = scheduler.evaluate(next_day).await.unwrap();
        assert!(matches!(
            decision,
            Decision::Show {
                trigger: Trigger::Launches,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn reset_all_restores_first_run_behavior() {
        let (mut scheduler, store) = scheduler(test_policy());

        for i in 0..3 {
            scheduler.evaluate(T0 + i).await.unwrap();
        }
        scheduler.respond(ResponseChoice::Decline).await.unwrap();

        scheduler.reset(ResetScope::All).await.unwrap();

        let t1 = T0 + 40 * MS_PER_DAY;
        let decision = scheduler.evaluate(t1).await.unwrap();
        assert_eq!(
            decision,
            Decision::Suppress {
                reason: SuppressReason::ThresholdNotMet
            }
        );

        let count = store.get(StateKey::NumLaunches).await.unwrap();
        assert_eq!(count.and_then(|v| v.as_i64()), Some(1));
        let first = store.get(StateKey::DateFirstLaunched).await.unwrap();
        assert_eq!(first.and_then(|v| v.as_i64()), Some(t1));
    }

    #[tokio::test]
    async fn reset_thresholds_clears_overrides() {
        let (mut scheduler, store) = scheduler(test_policy());

        scheduler.set_min_days(Some(7)).await.unwrap();
        scheduler.set_min_launches(Some(2)).await.unwrap();
        scheduler.reset(ResetScope::Thresholds).await.unwrap();

        assert_eq!(store.get(StateKey::MinDays).await.unwrap(), None);
        assert_eq!(store.get(StateKey::MinLaunches).await.unwrap(), None);
    }

    #[tokio::test]
    async fn prompt_due_event_arrives_after_delay() {
        let policy = PromptPolicy {
            min_days: None,
            min_launches: Some(1),
            ..test_policy()
        };
        let (mut scheduler, _) = scheduler(policy);
        let mut rx = scheduler.subscribe();

        scheduler.evaluate(T0).await.unwrap();
        let decision = scheduler.evaluate(T0 + 1).await.unwrap();
        assert!(matches!(decision, Decision::Show { .. }));

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            PromptEvent::PromptDue {
                trigger: Trigger::Launches
            }
        );
    }

    #[tokio::test]
    async fn reset_aborts_pending_show() {
        let policy = PromptPolicy {
            min_days: None,
            min_launches: Some(1),
            show_delay: Duration::from_millis(50),
            ..test_policy()
        };
        let (mut scheduler, _) = scheduler(policy);
        let mut rx = scheduler.subscribe();

        scheduler.evaluate(T0).await.unwrap();
        scheduler.evaluate(T0 + 1).await.unwrap();
        scheduler.reset(ResetScope::Status).await.unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(
            events,
            vec![PromptEvent::StateReset {
                scope: ResetScope::Status
            }]
        );
    }

    #[tokio::test]
    async fn rearm_replaces_pending_show() {
        let policy = PromptPolicy {
            min_days: None,
            min_launches: Some(1),
            show_delay: Duration::from_millis(50),
            ..test_policy()
        };
        let (mut scheduler, _) = scheduler(policy);
        let mut rx = scheduler.subscribe();

        scheduler.evaluate(T0).await.unwrap();
        scheduler.evaluate(T0 + 1).await.unwrap();
        scheduler.evaluate(T0 + 2).await.unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;

        let mut due = 0;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, PromptEvent::PromptDue { .. }) {
                due += 1;
            }
        }
        assert_eq!(due, 1);
    }

    #[tokio::test]
    async fn drop_aborts_pending_show() {
        let policy = PromptPolicy {
            min_days: None,
            min_launches: Some(1),
            show_delay: Duration::from_millis(50),
            ..test_policy()
        };
        let (mut scheduler, _) = scheduler(policy);
        let mut rx = scheduler.subscribe();

        scheduler.evaluate(T0).await.unwrap();
        scheduler.evaluate(T0 + 1).await.unwrap();
        drop(scheduler);

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    #[should_panic(expected = "subscribe() can only be called once")]
    async fn subscribe_twice_panics() {
        let (scheduler, _) = scheduler(test_policy());
        let _first = scheduler.subscribe();
        let _second = scheduler.subscribe();
    }
}
