//! SIEM data contract.
//!
//! These shapes are produced by an external backend and consumed verbatim by
//! the dashboard. JSON keys are camelCase; enum values keep the backend's
//! spelling (`CRITICAL`, `syslog`, `BRUTE_FORCE`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of an alert or log line.
///
/// Variants are declared lowest to highest so that the derived ordering ranks
/// `Critical` above everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    #[serde(alias = "info")]
    Info,
    #[serde(alias = "warning")]
    Warning,
    #[serde(alias = "alert")]
    Alert,
    #[serde(alias = "critical")]
    Critical,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 4] = [
        SeverityLevel::Critical,
        SeverityLevel::Alert,
        SeverityLevel::Warning,
        SeverityLevel::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => "CRITICAL",
            SeverityLevel::Alert => "ALERT",
            SeverityLevel::Warning => "WARNING",
            SeverityLevel::Info => "INFO",
        }
    }

    /// Parse a severity from user input, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CRITICAL" => Some(SeverityLevel::Critical),
            "ALERT" => Some(SeverityLevel::Alert),
            "WARNING" => Some(SeverityLevel::Warning),
            "INFO" => Some(SeverityLevel::Info),
            _ => None,
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse, system-wide threat state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityPosture {
    Normal,
    Suspicious,
    UnderAttack,
}

impl SecurityPosture {
    pub fn label(&self) -> &'static str {
        match self {
            SecurityPosture::Normal => "Normal",
            SecurityPosture::Suspicious => "Suspicious",
            SecurityPosture::UnderAttack => "Under Attack",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SecurityPosture::Normal => "No active threats detected",
            SecurityPosture::Suspicious => "Anomalous activity detected",
            SecurityPosture::UnderAttack => "Active threat in progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    Syslog,
    Auth,
    Suricata,
}

impl LogSource {
    pub const ALL: [LogSource; 3] = [LogSource::Syslog, LogSource::Auth, LogSource::Suricata];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogSource::Syslog => "syslog",
            LogSource::Auth => "auth",
            LogSource::Suricata => "suricata",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "syslog" => Some(LogSource::Syslog),
            "auth" => Some(LogSource::Auth),
            "suricata" => Some(LogSource::Suricata),
            _ => None,
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionType {
    PrivilegeEscalation,
    ServiceRestartAbuse,
    DnsAnomaly,
    HttpAnomaly,
    HttpsAnomaly,
    TimeManipulation,
    LogTampering,
    BruteForce,
    SuspiciousCommand,
}

impl DetectionType {
    /// Wire spelling, e.g. `BRUTE_FORCE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionType::PrivilegeEscalation => "PRIVILEGE_ESCALATION",
            DetectionType::ServiceRestartAbuse => "SERVICE_RESTART_ABUSE",
            DetectionType::DnsAnomaly => "DNS_ANOMALY",
            DetectionType::HttpAnomaly => "HTTP_ANOMALY",
            DetectionType::HttpsAnomaly => "HTTPS_ANOMALY",
            DetectionType::TimeManipulation => "TIME_MANIPULATION",
            DetectionType::LogTampering => "LOG_TAMPERING",
            DetectionType::BruteForce => "BRUTE_FORCE",
            DetectionType::SuspiciousCommand => "SUSPICIOUS_COMMAND",
        }
    }

    /// Human spelling, e.g. `BRUTE FORCE`.
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for DetectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub severity: SeverityLevel,
    pub detection_type: DetectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_ip: Option<String>,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_log: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlated_events: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitre_attack_id: Option<String>,
}

impl Alert {
    /// The most specific actor for table display: user, then source IP, then
    /// service.
    pub fn identifier(&self) -> &str {
        self.user
            .as_deref()
            .or(self.source_ip.as_deref())
            .or(self.service.as_deref())
            .unwrap_or("-")
    }
}

/// A log line normalized across syslog, auth and suricata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub source: LogSource,
    pub service: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLevel>,
}

/// Catalog entry describing a detection rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    #[serde(rename = "type")]
    pub detection_type: DetectionType,
    pub name: String,
    pub description: String,
    pub why_it_matters: String,
    pub mitre_attack_id: String,
    pub mitre_attack_name: String,
    pub mitre_tactic: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    Ready,
    Running,
    Completed,
}

impl fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SimulationStatus::Ready => "ready",
            SimulationStatus::Running => "running",
            SimulationStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedAlert {
    pub severity: SeverityLevel,
    #[serde(rename = "type")]
    pub detection_type: DetectionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub expected_alerts: Vec<ExpectedAlert>,
    pub status: SimulationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: DateTime<Utc>,
    pub severity: SeverityLevel,
    pub label: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub critical: usize,
    pub alert: usize,
    pub warning: usize,
    pub info: usize,
    pub total: usize,
}

impl AlertCounts {
    pub fn get(&self, severity: SeverityLevel) -> usize {
        match severity {
            SeverityLevel::Critical => self.critical,
            SeverityLevel::Alert => self.alert,
            SeverityLevel::Warning => self.warning,
            SeverityLevel::Info => self.info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TamperKind {
    TimeChange,
    ServiceRestart,
    LogRotation,
}

impl TamperKind {
    pub fn label(&self) -> &'static str {
        match self {
            TamperKind::TimeChange => "Time change",
            TamperKind::ServiceRestart => "Service restart",
            TamperKind::LogRotation => "Log rotation",
        }
    }
}

/// Evidence that log timestamps or log files may have been tampered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TamperIndicator {
    #[serde(rename = "type")]
    pub kind: TamperKind,
    pub timestamp: DateTime<Utc>,
    pub severity: SeverityLevel,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TamperingReport {
    /// Confidence in log integrity, 0 to 100.
    pub trust_level: u8,
    #[serde(default)]
    pub indicators: Vec<TamperIndicator>,
}

impl Default for TamperingReport {
    fn default() -> Self {
        Self {
            trust_level: 100,
            indicators: Vec::new(),
        }
    }
}

/// Coarse reading of a trust level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustBand {
    Trusted,
    Degraded,
    Compromised,
}

/// Everything the dashboard renders, as delivered by a [`crate::source::SiemSource`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiemSnapshot {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub logs: Vec<UnifiedLog>,
    #[serde(default)]
    pub detections: Vec<Detection>,
    #[serde(default)]
    pub simulations: Vec<Simulation>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub tampering: TamperingReport,
}

impl SiemSnapshot {
    /// Timestamp of the newest log line, if any.
    pub fn latest_log_time(&self) -> Option<DateTime<Utc>> {
        self.logs.iter().map(|l| l.timestamp).max()
    }
}
