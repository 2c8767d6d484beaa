use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::Instant;

/// When the next automatic refresh is due.
///
/// The countdown shown to users is derived from this, so it can never drift
/// away from the cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Schedule {
    /// Enabled: refresh fires `remaining` after `armed_at`.
    ///
    /// Kept as a start and a length so intervals past the end of the
    /// `Instant` range never overflow.
    Armed {
        armed_at: Instant,
        remaining: Duration,
    },
    /// Disabled: `remaining` is restored when re-enabled.
    Paused { remaining: Duration },
}

/// Mutable state of a polling controller.
///
/// Invariant: `0 <= countdown <= interval` for every observation.
#[derive(Debug, Clone)]
pub struct PollingState {
    interval: Duration,
    enabled: bool,
    schedule: Schedule,
    last_refresh: DateTime<Utc>,
    is_refreshing: bool,
}

impl PollingState {
    /// `interval_secs` must be non-zero; callers validate first.
    pub(crate) fn new(interval_secs: u64, enabled: bool, now: Instant) -> Self {
        let interval = Duration::from_secs(interval_secs);
        Self {
            interval,
            enabled,
            schedule: full_schedule(enabled, interval, now),
            last_refresh: Utc::now(),
            is_refreshing: false,
        }
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval.as_secs()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    pub fn last_refresh(&self) -> DateTime<Utc> {
        self.last_refresh
    }

    /// When the next automatic refresh fires. `None` while paused, or when
    /// the deadline lies beyond what `Instant` can represent.
    pub(crate) fn deadline(&self) -> Option<Instant> {
        match self.schedule {
            Schedule::Armed {
                armed_at,
                remaining,
            } => armed_at.checked_add(remaining),
            Schedule::Paused { .. } => None,
        }
    }

    fn remaining_at(&self, now: Instant) -> Duration {
        match self.schedule {
            Schedule::Armed {
                armed_at,
                remaining,
            } => remaining.saturating_sub(now.saturating_duration_since(armed_at)),
            Schedule::Paused { remaining } => remaining,
        }
    }

    /// Whole seconds until the next refresh, rounded up and clamped to the
    /// interval.
    pub fn countdown_at(&self, now: Instant) -> u64 {
        ceil_secs(self.remaining_at(now)).min(self.interval_secs())
    }

    /// Flip between armed and paused, carrying the remaining time across.
    pub(crate) fn set_enabled(&mut self, enabled: bool, now: Instant) {
        if self.enabled == enabled {
            return;
        }
        let remaining = self.remaining_at(now);
        self.schedule = if enabled {
            Schedule::Armed {
                armed_at: now,
                remaining,
            }
        } else {
            Schedule::Paused { remaining }
        };
        self.enabled = enabled;
    }

    pub(crate) fn set_interval(&mut self, interval_secs: u64, now: Instant) {
        self.interval = Duration::from_secs(interval_secs);
        self.rearm(now);
    }

    /// Restart the countdown from a full interval.
    pub(crate) fn rearm(&mut self, now: Instant) {
        self.schedule = full_schedule(self.enabled, self.interval, now);
    }

    /// Claim the single refresh slot. Returns false if one is in flight.
    pub(crate) fn try_begin_refresh(&mut self) -> bool {
        if self.is_refreshing {
            return false;
        }
        self.is_refreshing = true;
        true
    }

    pub(crate) fn end_refresh(&mut self) {
        self.is_refreshing = false;
    }

    pub(crate) fn mark_refreshed(&mut self, at: DateTime<Utc>) {
        self.last_refresh = at;
    }

    pub fn snapshot_at(&self, now: Instant) -> PollingSnapshot {
        PollingSnapshot {
            interval: self.interval_secs(),
            countdown: self.countdown_at(now),
            enabled: self.enabled,
            is_refreshing: self.is_refreshing,
            last_refresh: self.last_refresh,
        }
    }
}

fn full_schedule(enabled: bool, interval: Duration, now: Instant) -> Schedule {
    if enabled {
        Schedule::Armed {
            armed_at: now,
            remaining: interval,
        }
    } else {
        Schedule::Paused {
            remaining: interval,
        }
    }
}

fn ceil_secs(d: Duration) -> u64 {
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}

/// Read-only view of the controller for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollingSnapshot {
    pub interval: u64,
    pub countdown: u64,
    pub enabled: bool,
    pub is_refreshing: bool,
    pub last_refresh: DateTime<Utc>,
}

/// Result of one refresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The callback resolved successfully.
    Completed,
    /// The callback returned an error or panicked.
    Failed,
    /// Another refresh was already in flight; the callback was not invoked.
    Skipped,
}
