use serde::Serialize;

use crate::siem::types::{Alert, AlertCounts, SecurityPosture, SeverityLevel, TimelineEvent};

/// One bar of the alerts-over-time chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertBucket {
    /// Bucket start as hour of day, e.g. "08:00".
    pub label: String,
    pub critical: usize,
    pub alert: usize,
    pub warning: usize,
    pub info: usize,
}

impl AlertBucket {
    pub fn new(start_hour: u32) -> Self {
        Self {
            label: format!("{:02}:00", start_hour),
            critical: 0,
            alert: 0,
            warning: 0,
            info: 0,
        }
    }

    pub fn add(&mut self, severity: SeverityLevel) {
        match severity {
            SeverityLevel::Critical => self.critical += 1,
            SeverityLevel::Alert => self.alert += 1,
            SeverityLevel::Warning => self.warning += 1,
            SeverityLevel::Info => self.info += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.alert + self.warning + self.info
    }
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub posture: SecurityPosture,
    pub counts: AlertCounts,
    pub timeline: Vec<TimelineEvent>,
    pub recent_alerts: Vec<Alert>,
    pub chart: Vec<AlertBucket>,
}
