use chrono::Timelike;

use crate::dashboard::types::{AlertBucket, DashboardView};
use crate::siem::operations::{count_alerts, derive_posture};
use crate::siem::types::{Alert, SiemSnapshot, TimelineEvent};

/// Hours per bar in the alerts-over-time chart.
pub const DEFAULT_BUCKET_HOURS: u32 = 4;

/// The `limit` newest alerts, newest first.
pub fn recent_alerts(alerts: &[Alert], limit: usize) -> Vec<Alert> {
    let mut sorted = alerts.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

/// Histogram of alerts by hour of day, `bucket_hours` per bucket.
///
/// Always returns `24 / bucket_hours` buckets (rounded up) so empty periods
/// still render. `bucket_hours` of 0 is treated as 1.
pub fn bucket_alerts(alerts: &[Alert], bucket_hours: u32) -> Vec<AlertBucket> {
    let width = bucket_hours.clamp(1, 24);
    let mut buckets: Vec<AlertBucket> = (0..24)
        .step_by(width as usize)
        .map(AlertBucket::new)
        .collect();

    for alert in alerts {
        let index = (alert.timestamp.hour() / width) as usize;
        if let Some(bucket) = buckets.get_mut(index) {
            bucket.add(alert.severity);
        }
    }

    buckets
}

fn sorted_timeline(events: &[TimelineEvent]) -> Vec<TimelineEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.timestamp);
    sorted
}

/// Build the dashboard view model from a snapshot.
pub fn build_dashboard(snapshot: &SiemSnapshot, recent_limit: usize) -> DashboardView {
    let counts = count_alerts(&snapshot.alerts);
    let posture = derive_posture(&counts);

    tracing::debug!(
        event = "core.dashboard.built",
        posture = ?posture,
        total = counts.total,
        critical = counts.critical
    );

    DashboardView {
        posture,
        counts,
        timeline: sorted_timeline(&snapshot.timeline),
        recent_alerts: recent_alerts(&snapshot.alerts, recent_limit),
        chart: bucket_alerts(&snapshot.alerts, DEFAULT_BUCKET_HOURS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::siem::operations::test_support::{alert, ts};
    use crate::siem::types::{SecurityPosture, SeverityLevel};

    #[test]
    fn test_recent_alerts_newest_first_and_limited() {
        let alerts = vec![
            alert("old", SeverityLevel::Info, "2024-01-17T08:00:00Z"),
            alert("new", SeverityLevel::Alert, "2024-01-17T14:00:00Z"),
            alert("mid", SeverityLevel::Warning, "2024-01-17T11:00:00Z"),
        ];

        let recent = recent_alerts(&alerts, 2);
        let ids: Vec<&str> = recent.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid"]);
    }

    #[test]
    fn test_bucket_alerts_by_hour_of_day() {
        let alerts = vec![
            alert("1", SeverityLevel::Critical, "2024-01-17T01:30:00Z"),
            alert("2", SeverityLevel::Warning, "2024-01-17T03:59:00Z"),
            alert("3", SeverityLevel::Alert, "2024-01-17T04:00:00Z"),
            alert("4", SeverityLevel::Alert, "2024-01-16T23:10:00Z"),
        ];

        let buckets = bucket_alerts(&alerts, 4);
        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].label, "00:00");
        assert_eq!(buckets[0].critical, 1);
        assert_eq!(buckets[0].warning, 1);
        assert_eq!(buckets[1].label, "04:00");
        assert_eq!(buckets[1].alert, 1);
        assert_eq!(buckets[5].label, "20:00");
        assert_eq!(buckets[5].alert, 1);
        assert_eq!(buckets.iter().map(AlertBucket::total).sum::<usize>(), 4);
    }

    #[test]
    fn test_bucket_alerts_uneven_width() {
        let alerts = vec![alert("1", SeverityLevel::Info, "2024-01-17T23:00:00Z")];

        let buckets = bucket_alerts(&alerts, 5);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[4].label, "20:00");
        assert_eq!(buckets[4].info, 1);
    }

    #[test]
    fn test_bucket_alerts_zero_width_treated_as_hourly() {
        assert_eq!(bucket_alerts(&[], 0).len(), 24);
    }

    #[test]
    fn test_build_dashboard() {
        let snapshot = SiemSnapshot {
            alerts: vec![
                alert("1", SeverityLevel::Warning, "2024-01-17T10:00:00Z"),
                alert("2", SeverityLevel::Info, "2024-01-17T12:00:00Z"),
            ],
            timeline: vec![
                TimelineEvent {
                    timestamp: ts("2024-01-17T12:00:00Z"),
                    severity: SeverityLevel::Info,
                    label: "later".to_string(),
                },
                TimelineEvent {
                    timestamp: ts("2024-01-17T10:00:00Z"),
                    severity: SeverityLevel::Warning,
                    label: "earlier".to_string(),
                },
            ],
            ..Default::default()
        };

        let view = build_dashboard(&snapshot, 5);
        assert_eq!(view.posture, SecurityPosture::Suspicious);
        assert_eq!(view.counts.total, 2);
        assert_eq!(view.recent_alerts[0].id, "2");
        assert_eq!(view.timeline[0].label, "earlier");
        assert_eq!(view.chart.len(), 6);
    }
}
