use crate::siem::types::{Alert, AlertCounts, SecurityPosture, SeverityLevel, TrustBand};

/// Trust levels at or above this are considered trusted.
pub const TRUSTED_THRESHOLD: u8 = 80;

/// Trust levels below this are considered compromised.
pub const COMPROMISED_THRESHOLD: u8 = 50;

/// Aggregate alert counts per severity.
pub fn count_alerts(alerts: &[Alert]) -> AlertCounts {
    let mut counts = AlertCounts::default();

    for alert in alerts {
        match alert.severity {
            SeverityLevel::Critical => counts.critical += 1,
            SeverityLevel::Alert => counts.alert += 1,
            SeverityLevel::Warning => counts.warning += 1,
            SeverityLevel::Info => counts.info += 1,
        }
    }

    counts.total = alerts.len();
    counts
}

/// Derive the security posture from alert counts.
///
/// Any critical alert means an active attack; any alert or warning means
/// suspicious activity; informational alerts alone leave the posture normal.
pub fn derive_posture(counts: &AlertCounts) -> SecurityPosture {
    if counts.critical > 0 {
        SecurityPosture::UnderAttack
    } else if counts.alert > 0 || counts.warning > 0 {
        SecurityPosture::Suspicious
    } else {
        SecurityPosture::Normal
    }
}

pub fn trust_band(trust_level: u8) -> TrustBand {
    if trust_level >= TRUSTED_THRESHOLD {
        TrustBand::Trusted
    } else if trust_level >= COMPROMISED_THRESHOLD {
        TrustBand::Degraded
    } else {
        TrustBand::Compromised
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::siem::types::{Alert, DetectionType, LogSource, SeverityLevel, UnifiedLog};
    use chrono::{DateTime, Utc};

    pub fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    pub fn alert(id: &str, severity: SeverityLevel, at: &str) -> Alert {
        Alert {
            id: id.to_string(),
            timestamp: ts(at),
            severity,
            detection_type: DetectionType::BruteForce,
            service: Some("sshd".to_string()),
            user: None,
            source_ip: None,
            destination_ip: None,
            reason: format!("reason for {}", id),
            raw_log: None,
            correlated_events: None,
            mitre_attack_id: None,
        }
    }

    pub fn log(id: &str, source: LogSource, service: &str, message: &str, at: &str) -> UnifiedLog {
        UnifiedLog {
            id: id.to_string(),
            timestamp: ts(at),
            source,
            service: service.to_string(),
            message: message.to_string(),
            user: None,
            ip: None,
            severity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::alert;
    use super::*;

    #[test]
    fn test_count_alerts_by_severity() {
        let alerts = vec![
            alert("1", SeverityLevel::Critical, "2024-01-17T10:00:00Z"),
            alert("2", SeverityLevel::Alert, "2024-01-17T10:05:00Z"),
            alert("3", SeverityLevel::Alert, "2024-01-17T10:10:00Z"),
            alert("4", SeverityLevel::Info, "2024-01-17T10:15:00Z"),
        ];

        let counts = count_alerts(&alerts);
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.alert, 2);
        assert_eq!(counts.warning, 0);
        assert_eq!(counts.info, 1);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.get(SeverityLevel::Alert), 2);
    }

    #[test]
    fn test_count_alerts_empty() {
        assert_eq!(count_alerts(&[]), AlertCounts::default());
    }

    #[test]
    fn test_derive_posture() {
        let mut counts = AlertCounts::default();
        assert_eq!(derive_posture(&counts), SecurityPosture::Normal);

        counts.info = 3;
        assert_eq!(derive_posture(&counts), SecurityPosture::Normal);

        counts.warning = 1;
        assert_eq!(derive_posture(&counts), SecurityPosture::Suspicious);

        counts.critical = 1;
        assert_eq!(derive_posture(&counts), SecurityPosture::UnderAttack);
    }

    #[test]
    fn test_trust_band_thresholds() {
        assert_eq!(trust_band(100), TrustBand::Trusted);
        assert_eq!(trust_band(80), TrustBand::Trusted);
        assert_eq!(trust_band(79), TrustBand::Degraded);
        assert_eq!(trust_band(65), TrustBand::Degraded);
        assert_eq!(trust_band(50), TrustBand::Degraded);
        assert_eq!(trust_band(49), TrustBand::Compromised);
        assert_eq!(trust_band(0), TrustBand::Compromised);
    }
}
