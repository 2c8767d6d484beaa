use chrono::{DateTime, Utc};

use crate::search::types::{AlertFilter, LogFilter, SearchResults, SourceCounts};
use crate::siem::types::{Alert, LogSource, SiemSnapshot, UnifiedLog};

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn contains_opt(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| contains(h, needle_lower))
}

/// Normalize a free-text query. Blank queries become `None`.
fn normalize_query(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

/// Case-insensitive match on the alert's searchable text fields.
///
/// The detection type matches both its wire spelling (`BRUTE_FORCE`) and its
/// display spelling (`brute force`).
pub fn alert_matches(alert: &Alert, query_lower: &str) -> bool {
    contains(&alert.reason, query_lower)
        || contains(alert.detection_type.as_str(), query_lower)
        || contains(&alert.detection_type.display_name(), query_lower)
        || contains_opt(alert.user.as_deref(), query_lower)
        || contains_opt(alert.service.as_deref(), query_lower)
        || contains_opt(alert.source_ip.as_deref(), query_lower)
        || contains_opt(alert.raw_log.as_deref(), query_lower)
}

/// Case-insensitive match on message, service, user and IP.
pub fn log_matches(log: &UnifiedLog, query_lower: &str) -> bool {
    contains(&log.message, query_lower)
        || contains(&log.service, query_lower)
        || contains_opt(log.user.as_deref(), query_lower)
        || contains_opt(log.ip.as_deref(), query_lower)
}

pub fn filter_alerts(alerts: &[Alert], filter: &AlertFilter) -> Vec<Alert> {
    let query = normalize_query(filter.query.as_deref());

    alerts
        .iter()
        .filter(|a| filter.severity.is_none_or(|s| a.severity == s))
        .filter(|a| query.as_deref().is_none_or(|q| alert_matches(a, q)))
        .cloned()
        .collect()
}

/// Filter logs by source tab, service, free text and time range.
///
/// The time range is measured back from `now`; logs stamped after `now` are
/// kept.
pub fn filter_logs(logs: &[UnifiedLog], filter: &LogFilter, now: DateTime<Utc>) -> Vec<UnifiedLog> {
    let query = normalize_query(filter.query.as_deref());
    let window = filter.range.window();

    logs.iter()
        .filter(|l| filter.source.is_none_or(|s| l.source == s))
        .filter(|l| {
            filter
                .service
                .as_deref()
                .is_none_or(|svc| l.service == svc)
        })
        .filter(|l| query.as_deref().is_none_or(|q| log_matches(l, q)))
        .filter(|l| window.is_none_or(|w| now.signed_duration_since(l.timestamp) <= w))
        .cloned()
        .collect()
}

/// Distinct services in first-seen order.
pub fn unique_services(logs: &[UnifiedLog]) -> Vec<String> {
    let mut services: Vec<String> = Vec::new();
    for log in logs {
        if !services.iter().any(|s| s == &log.service) {
            services.push(log.service.clone());
        }
    }
    services
}

pub fn count_by_source(logs: &[UnifiedLog]) -> SourceCounts {
    let mut counts = SourceCounts::default();
    for log in logs {
        match log.source {
            LogSource::Syslog => counts.syslog += 1,
            LogSource::Auth => counts.auth += 1,
            LogSource::Suricata => counts.suricata += 1,
        }
    }
    counts
}

/// Search alerts and logs together. A blank query yields no results.
pub fn search(snapshot: &SiemSnapshot, query: &str) -> SearchResults {
    let Some(q) = normalize_query(Some(query)) else {
        return SearchResults::default();
    };

    let results = SearchResults {
        alerts: snapshot
            .alerts
            .iter()
            .filter(|a| alert_matches(a, &q))
            .cloned()
            .collect(),
        logs: snapshot
            .logs
            .iter()
            .filter(|l| log_matches(l, &q))
            .cloned()
            .collect(),
    };

    tracing::info!(
        event = "core.search.completed",
        query = query,
        alerts = results.alerts.len(),
        logs = results.logs.len()
    );

    results
}
