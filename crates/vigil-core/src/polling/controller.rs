//! Auto-refresh controller.
//!
//! Runs a caller-supplied refresh callback every `interval` seconds while
//! enabled and publishes a once-per-second countdown for display. Both come
//! from one timer task driven by a single deadline, so the countdown always
//! reads the time left until the next cadence firing.
//!
//! At most one refresh is in flight: a refresh requested while another is
//! running is skipped. A completed refresh (manual or automatic) re-arms the
//! cadence, so the next automatic refresh is `interval` seconds after it.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::runtime::Handle;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::polling::errors::PollingError;
use crate::polling::types::{PollingSnapshot, PollingState, RefreshOutcome};

/// Display tick period.
pub const TICK: Duration = Duration::from_secs(1);

/// Error type a refresh callback may fail with.
pub type RefreshError = Box<dyn std::error::Error + Send + Sync>;

type RefreshFn = Arc<dyn Fn() -> BoxFuture<'static, Result<(), RefreshError>> + Send + Sync>;

/// State shared between the controller handle, its timer task and any
/// in-flight refresh futures.
struct Shared {
    state: Mutex<PollingState>,
    /// Signalled whenever the deadline moves so the timer re-reads it.
    rearmed: Notify,
    snapshots: watch::Sender<PollingSnapshot>,
    on_refresh: RefreshFn,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, PollingState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!(
                    event = "core.polling.state_lock_poisoned",
                    "Mutex poisoned, continuing with last written state"
                );
                poisoned.into_inner()
            }
        }
    }

    fn snapshot(&self) -> PollingSnapshot {
        self.lock().snapshot_at(Instant::now())
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.snapshots.send_replace(snapshot);
    }

    fn deadline(&self) -> Option<Instant> {
        self.lock().deadline()
    }

    /// Claim the refresh slot. With `require_enabled`, a disabled controller
    /// refuses too, so a timer racing a disable never fires.
    fn begin_refresh(self: &Arc<Self>, require_enabled: bool) -> Option<RefreshGuard> {
        {
            let mut state = self.lock();
            if require_enabled && !state.is_enabled() {
                return None;
            }
            if !state.try_begin_refresh() {
                return None;
            }
        }
        self.publish();
        Some(RefreshGuard {
            shared: Arc::clone(self),
        })
    }

    fn finish_refresh(&self, succeeded: bool) {
        {
            let mut state = self.lock();
            if succeeded {
                state.mark_refreshed(Utc::now());
            }
            state.rearm(Instant::now());
        }
        self.rearmed.notify_one();
    }
}

/// Holds the refresh slot; releasing it clears the busy flag even when the
/// refresh future is dropped part way through.
struct RefreshGuard {
    shared: Arc<Shared>,
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.shared.lock().end_refresh();
        // A cadence firing may be parked on this slot. If the refresh was
        // dropped before finishing, the deadline is still due and the timer
        // retries it.
        self.shared.rearmed.notify_one();
        self.shared.publish();
    }
}

async fn run_refresh(shared: Arc<Shared>, guard: RefreshGuard) -> RefreshOutcome {
    let callback = Arc::clone(&shared.on_refresh);
    let result = AssertUnwindSafe(async move { callback().await })
        .catch_unwind()
        .await;

    let outcome = match result {
        Ok(Ok(())) => {
            debug!(event = "core.polling.refresh_completed");
            RefreshOutcome::Completed
        }
        Ok(Err(e)) => {
            warn!(
                event = "core.polling.refresh_failed",
                error = %e,
                "Refresh callback failed, waiting for next cadence"
            );
            RefreshOutcome::Failed
        }
        Err(_) => {
            error!(
                event = "core.polling.refresh_panicked",
                "Refresh callback panicked, waiting for next cadence"
            );
            RefreshOutcome::Failed
        }
    };

    shared.finish_refresh(outcome == RefreshOutcome::Completed);
    drop(guard);
    outcome
}

struct TimerTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

async fn run_timer(shared: Arc<Shared>, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    debug!(event = "core.polling.timer_started");

    'timer: loop {
        let deadline = shared.deadline();
        let due = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = shared.rearmed.notified() => continue,
            _ = ticker.tick() => shared.publish(),
            _ = due => match shared.begin_refresh(true) {
                Some(guard) => {
                    let refresh = run_refresh(Arc::clone(&shared), guard);
                    tokio::pin!(refresh);
                    loop {
                        tokio::select! {
                            biased;
                            _ = cancel.cancelled() => break 'timer,
                            outcome = &mut refresh => {
                                debug!(event = "core.polling.cadence_fired", outcome = ?outcome);
                                break;
                            }
                            _ = ticker.tick() => shared.publish(),
                        }
                    }
                }
                None => {
                    // A manual refresh holds the slot; releasing it notifies us.
                    loop {
                        tokio::select! {
                            _ = cancel.cancelled() => break 'timer,
                            _ = shared.rearmed.notified() => break,
                            _ = ticker.tick() => shared.publish(),
                        }
                    }
                }
            },
        }
    }

    debug!(event = "core.polling.timer_stopped");
}

/// Periodic refresh driver with a derived countdown.
///
/// Must be created inside a Tokio runtime. Dropping the controller cancels
/// its timer; use [`PollingController::shutdown`] to also wait for the timer
/// task to finish.
pub struct PollingController {
    shared: Arc<Shared>,
    runtime: Handle,
    timer: Option<TimerTask>,
}

impl PollingController {
    /// Create a controller that calls `on_refresh` every
    /// `default_interval_secs` seconds while enabled.
    ///
    /// # Errors
    ///
    /// `InvalidInterval` if the interval is 0, `NoRuntime` if called outside
    /// a Tokio runtime.
    pub fn new<F, Fut, E>(
        default_interval_secs: u64,
        enabled: bool,
        on_refresh: F,
    ) -> Result<Self, PollingError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<RefreshError>,
    {
        if default_interval_secs == 0 {
            return Err(PollingError::InvalidInterval {
                value: default_interval_secs,
            });
        }
        let runtime = Handle::try_current().map_err(|_| PollingError::NoRuntime)?;

        let on_refresh: RefreshFn = Arc::new(move || {
            let fut = on_refresh();
            async move { fut.await.map_err(Into::<RefreshError>::into) }.boxed()
        });

        let state = PollingState::new(default_interval_secs, enabled, Instant::now());
        let (snapshots, _) = watch::channel(state.snapshot_at(Instant::now()));

        let mut controller = Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                rearmed: Notify::new(),
                snapshots,
                on_refresh,
            }),
            runtime,
            timer: None,
        };

        if enabled {
            controller.start_timer();
        }

        info!(
            event = "core.polling.created",
            interval_secs = default_interval_secs,
            enabled = enabled
        );

        Ok(controller)
    }

    pub fn snapshot(&self) -> PollingSnapshot {
        self.shared.snapshot()
    }

    /// Receive a snapshot on every display tick and every state change.
    pub fn subscribe(&self) -> watch::Receiver<PollingSnapshot> {
        self.shared.snapshots.subscribe()
    }

    pub fn interval(&self) -> u64 {
        self.shared.lock().interval_secs()
    }

    pub fn countdown(&self) -> u64 {
        self.shared.lock().countdown_at(Instant::now())
    }

    pub fn is_enabled(&self) -> bool {
        self.shared.lock().is_enabled()
    }

    pub fn is_refreshing(&self) -> bool {
        self.shared.lock().is_refreshing()
    }

    pub fn last_refresh(&self) -> chrono::DateTime<Utc> {
        self.shared.lock().last_refresh()
    }

    /// Flip auto-refresh on or off. Returns the new enabled state.
    ///
    /// Disabling cancels the cadence and the countdown tick together,
    /// including an automatic refresh that is in flight. Re-enabling resumes
    /// with the time that was left.
    pub fn toggle(&mut self) -> bool {
        let enabled = {
            let mut state = self.shared.lock();
            let enabled = !state.is_enabled();
            state.set_enabled(enabled, Instant::now());
            enabled
        };

        if enabled {
            self.start_timer();
        } else {
            self.stop_timer();
        }
        self.shared.publish();

        info!(event = "core.polling.toggled", enabled = enabled);
        enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.is_enabled() != enabled {
            self.toggle();
        }
    }

    /// Change the cadence. The countdown restarts at `interval_secs` and,
    /// when enabled, the next automatic refresh is `interval_secs` from now.
    ///
    /// # Errors
    ///
    /// `InvalidInterval` for 0; the state is left unchanged.
    pub fn set_interval(&mut self, interval_secs: u64) -> Result<(), PollingError> {
        if interval_secs == 0 {
            warn!(event = "core.polling.interval_rejected", value = interval_secs);
            return Err(PollingError::InvalidInterval {
                value: interval_secs,
            });
        }

        self.shared
            .lock()
            .set_interval(interval_secs, Instant::now());
        self.shared.rearmed.notify_one();
        self.shared.publish();

        info!(event = "core.polling.interval_changed", interval_secs = interval_secs);
        Ok(())
    }

    /// Request a refresh now.
    ///
    /// The busy flag is set before this returns, so the refresh counts as in
    /// flight even before the future is first polled. Dropping the future
    /// releases the slot without updating `last_refresh`.
    pub fn refresh(&self) -> impl Future<Output = RefreshOutcome> + Send + 'static {
        let shared = Arc::clone(&self.shared);
        let guard = shared.begin_refresh(false);

        async move {
            match guard {
                Some(guard) => run_refresh(shared, guard).await,
                None => {
                    debug!(
                        event = "core.polling.refresh_skipped",
                        "Refresh already in progress"
                    );
                    RefreshOutcome::Skipped
                }
            }
        }
    }

    /// Cancel the timers and wait for the timer task to exit. No callback
    /// fires after this returns.
    pub async fn shutdown(mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel.cancel();
            if let Err(e) = timer.handle.await
                && e.is_panic()
            {
                error!(event = "core.polling.timer_panicked", error = %e);
            }
        }
        info!(event = "core.polling.shutdown_completed");
    }

    fn start_timer(&mut self) {
        self.stop_timer();
        let cancel = CancellationToken::new();
        let handle = self
            .runtime
            .spawn(run_timer(Arc::clone(&self.shared), cancel.clone()));
        self.timer = Some(TimerTask { cancel, handle });
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel.cancel();
        }
    }
}

impl Drop for PollingController {
    fn drop(&mut self) {
        self.stop_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    /// Controller whose callback counts invocations.
    fn counting(interval: u64, enabled: bool) -> (PollingController, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let controller = PollingController::new(interval, enabled, move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<(), RefreshError>(())
            }
        })
        .unwrap();
        (controller, calls)
    }

    /// Controller whose callback blocks until `gate` is notified.
    fn gated(interval: u64, enabled: bool) -> (PollingController, Arc<Notify>, Arc<AtomicUsize>) {
        let gate = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let (g, c) = (Arc::clone(&gate), Arc::clone(&calls));
        let controller = PollingController::new(interval, enabled, move || {
            let (g, c) = (Arc::clone(&g), Arc::clone(&c));
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                g.notified().await;
                Ok::<(), RefreshError>(())
            }
        })
        .unwrap();
        (controller, gate, calls)
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let result = PollingController::new(30, true, || async { Ok::<(), RefreshError>(()) });
        assert!(matches!(result, Err(PollingError::NoRuntime)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_rejects_zero_interval() {
        let result = PollingController::new(0, true, || async { Ok::<(), RefreshError>(()) });
        assert!(matches!(
            result,
            Err(PollingError::InvalidInterval { value: 0 })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state() {
        let (controller, calls) = counting(30, true);
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.interval, 30);
        assert_eq!(snapshot.countdown, 30);
        assert!(snapshot.enabled);
        assert!(!snapshot.is_refreshing);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_interval_resets_countdown() {
        let (mut controller, _calls) = counting(30, true);
        sleep(secs(7.5)).await;

        for interval in [1, 10, 30, 60, 300, 86_400] {
            controller.set_interval(interval).unwrap();
            assert_eq!(controller.countdown(), interval);
            assert_eq!(controller.interval(), interval);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_interval_zero_rejected_state_unchanged() {
        let (mut controller, _calls) = counting(30, true);
        sleep(secs(4.5)).await;
        let before = controller.snapshot();

        let err = controller.set_interval(0).unwrap_err();
        assert_eq!(err, PollingError::InvalidInterval { value: 0 });
        assert_eq!(controller.snapshot(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_twice_restores_state() {
        let (mut controller, _calls) = counting(30, true);
        sleep(secs(7.5)).await;
        let before = controller.snapshot();

        assert!(!controller.toggle());
        assert!(controller.toggle());

        assert_eq!(controller.snapshot(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_never_refreshes() {
        let (controller, calls) = counting(5, false);
        sleep(secs(120.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.countdown(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_off_stops_cadence() {
        let (mut controller, calls) = counting(5, true);
        sleep(secs(5.5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        controller.toggle();
        sleep(secs(120.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cadence_fires_once_and_resets_countdown() {
        let (controller, calls) = counting(30, true);

        sleep(secs(29.5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        sleep(secs(1.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.countdown(), 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_interval_rearms_pending_timer() {
        let (mut controller, calls) = counting(30, true);
        sleep(secs(5.0)).await;
        assert_eq!(controller.countdown(), 25);

        controller.set_interval(10).unwrap();

        sleep(secs(9.5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        sleep(secs(1.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_sets_busy_flag_synchronously() {
        let (controller, gate, _calls) = gated(30, false);

        let pending = controller.refresh();
        assert!(controller.is_refreshing());

        let task = tokio::spawn(pending);
        tokio::task::yield_now().await;
        assert!(controller.is_refreshing());

        gate.notify_one();
        assert_eq!(task.await.unwrap(), RefreshOutcome::Completed);
        assert!(!controller.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refresh_clears_busy_flag_and_keeps_last_refresh() {
        let controller = PollingController::new(30, false, || async {
            Err::<(), RefreshError>("backend unavailable".into())
        })
        .unwrap();
        let before = controller.last_refresh();

        let pending = controller.refresh();
        assert!(controller.is_refreshing());
        assert_eq!(pending.await, RefreshOutcome::Failed);

        assert!(!controller.is_refreshing());
        assert_eq!(controller.last_refresh(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_refresh_clears_busy_flag() {
        let explode = true;
        let controller = PollingController::new(30, false, move || async move {
            if explode {
                panic!("callback exploded");
            }
            Ok::<(), RefreshError>(())
        })
        .unwrap();

        assert_eq!(controller.refresh().await, RefreshOutcome::Failed);
        assert!(!controller.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_refresh_updates_last_refresh() {
        let (controller, calls) = counting(30, false);
        let before = controller.last_refresh();

        assert_eq!(controller.refresh().await, RefreshOutcome::Completed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(controller.last_refresh() >= before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_refresh_is_skipped() {
        let (controller, gate, calls) = gated(30, false);

        let first = tokio::spawn(controller.refresh());
        assert_eq!(controller.refresh().await, RefreshOutcome::Skipped);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), RefreshOutcome::Completed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_refresh_releases_slot() {
        let (controller, _gate, calls) = gated(30, false);

        let pending = controller.refresh();
        assert!(controller.is_refreshing());
        drop(pending);

        assert!(!controller.is_refreshing());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_refresh_rearms_cadence() {
        let (controller, calls) = counting(30, true);
        sleep(secs(20.0)).await;

        assert_eq!(controller.refresh().await, RefreshOutcome::Completed);
        assert_eq!(controller.countdown(), 30);

        sleep(secs(29.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sleep(secs(1.5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_callback_keeps_cadence_running() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let controller = PollingController::new(10, true, move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), RefreshError>("boom".into())
            }
        })
        .unwrap();
        let before = controller.last_refresh();

        sleep(secs(30.5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(controller.last_refresh(), before);
        assert!(!controller.is_refreshing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_callback_after_shutdown() {
        let (controller, calls) = counting(5, true);
        sleep(secs(5.5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        controller.shutdown().await;
        sleep(secs(60.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_callback_after_drop() {
        let (controller, calls) = counting(5, true);
        drop(controller);
        sleep(secs(60.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_countdown_ticks() {
        let (controller, _calls) = counting(30, true);
        let rx = controller.subscribe();

        sleep(secs(3.5)).await;
        assert_eq!(rx.borrow().countdown, 27);
        assert!(rx.borrow().enabled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_refresh_while_disabled_resets_countdown() {
        let (mut controller, calls) = counting(30, true);
        sleep(secs(10.0)).await;
        controller.toggle();
        assert_eq!(controller.countdown(), 20);

        assert_eq!(controller.refresh().await, RefreshOutcome::Completed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.countdown(), 30);
        assert!(!controller.is_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_interval_is_accepted() {
        let (mut controller, calls) = counting(30, true);
        controller.set_interval(u64::MAX).unwrap();
        assert_eq!(controller.countdown(), u64::MAX);
        assert_eq!(controller.interval(), u64::MAX);

        sleep(secs(120.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        controller.toggle();
        controller.toggle();
        assert!(controller.is_enabled());

        let (huge, _huge_calls) = counting(u64::MAX, true);
        assert_eq!(huge.countdown(), u64::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_manual_refresh_keeps_cadence_running() {
        let gate = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let (g, c) = (Arc::clone(&gate), Arc::clone(&calls));
        let controller = PollingController::new(5, true, move || {
            let (g, c) = (Arc::clone(&g), Arc::clone(&c));
            async move {
                // Only the first call blocks.
                if c.fetch_add(1, Ordering::SeqCst) == 0 {
                    g.notified().await;
                }
                Ok::<(), RefreshError>(())
            }
        })
        .unwrap();

        sleep(secs(4.0)).await;
        let manual = tokio::spawn(controller.refresh());

        // The cadence comes due at 5s while the manual refresh holds the slot.
        sleep(secs(2.0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        manual.abort();
        assert!(manual.await.unwrap_err().is_cancelled());
        assert!(!controller.is_refreshing());

        sleep(secs(60.5)).await;
        assert!(calls.load(Ordering::SeqCst) >= 12);
        assert!(controller.countdown() > 0);
        assert!(controller.is_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ticks_continue_during_slow_refresh() {
        let (controller, gate, calls) = gated(5, true);
        let mut rx = controller.subscribe();

        sleep(secs(5.5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(controller.is_refreshing());
        let _ = rx.borrow_and_update();

        for _ in 0..3 {
            sleep(secs(1.0)).await;
            assert!(rx.has_changed().unwrap());
            assert!(rx.borrow_and_update().is_refreshing);
        }

        gate.notify_one();
        sleep(secs(0.5)).await;
        assert!(!controller.is_refreshing());
        assert_eq!(controller.countdown(), 5);
    }
}
