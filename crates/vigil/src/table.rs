use vigil_core::dashboard::AlertBucket;
use vigil_core::siem::{Alert, Detection, Simulation, TamperIndicator, UnifiedLog};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Box-drawn table with fixed column widths.
pub struct TableFormatter {
    headers: Vec<&'static str>,
    widths: Vec<usize>,
}

impl TableFormatter {
    /// Column widths start from the header width and grow to fit the widest
    /// cell, capped at `max_widths`.
    pub fn new(headers: &[&'static str], max_widths: &[usize], rows: &[Vec<String>]) -> Self {
        let widths = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let cap = max_widths.get(i).copied().unwrap_or(30);
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.chars().count())
                    .min(cap.max(header.chars().count()))
            })
            .collect();

        Self {
            headers: headers.to_vec(),
            widths,
        }
    }

    pub fn render(&self, rows: &[Vec<String>]) -> String {
        let mut lines = vec![
            self.border('┌', '┬', '┐'),
            self.row(self.headers.iter().map(|h| h.to_string())),
            self.border('├', '┼', '┤'),
        ];
        for row in rows {
            lines.push(self.row(row.iter().cloned()));
        }
        lines.push(self.border('└', '┴', '┘'));
        lines.join("\n")
    }

    pub fn print_table(&self, rows: &[Vec<String>]) {
        println!("{}", self.render(rows));
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(&mid.to_string()))
    }

    fn row(&self, cells: impl Iterator<Item = String>) -> String {
        let padded: Vec<String> = cells
            .zip(&self.widths)
            .map(|(cell, width)| truncate(&cell, *width))
            .collect();
        format!("│ {} │", padded.join(" │ "))
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) so multi-byte characters are never
/// split.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

pub fn print_alerts(alerts: &[Alert]) {
    let rows: Vec<Vec<String>> = alerts
        .iter()
        .map(|a| {
            vec![
                a.timestamp.format(TIME_FORMAT).to_string(),
                a.severity.to_string(),
                a.detection_type.display_name(),
                a.identifier().to_string(),
                a.reason.clone(),
            ]
        })
        .collect();

    TableFormatter::new(
        &["Time", "Severity", "Type", "Identifier", "Reason"],
        &[19, 8, 22, 18, 50],
        &rows,
    )
    .print_table(&rows);
}

pub fn print_logs(logs: &[UnifiedLog]) {
    let rows: Vec<Vec<String>> = logs
        .iter()
        .map(|l| {
            vec![
                l.timestamp.format(TIME_FORMAT).to_string(),
                l.source.to_string(),
                l.service.clone(),
                l.severity.map(|s| s.to_string()).unwrap_or_default(),
                l.message.clone(),
            ]
        })
        .collect();

    TableFormatter::new(
        &["Time", "Source", "Service", "Severity", "Message"],
        &[19, 8, 14, 8, 60],
        &rows,
    )
    .print_table(&rows);
}

pub fn print_detections(detections: &[Detection]) {
    let rows: Vec<Vec<String>> = detections
        .iter()
        .map(|d| {
            vec![
                d.name.clone(),
                d.mitre_attack_id.clone(),
                d.mitre_tactic.clone(),
                d.description.clone(),
            ]
        })
        .collect();

    TableFormatter::new(
        &["Detection", "MITRE", "Tactic", "Description"],
        &[28, 10, 20, 60],
        &rows,
    )
    .print_table(&rows);
}

pub fn print_simulations(simulations: &[Simulation]) {
    let rows: Vec<Vec<String>> = simulations
        .iter()
        .map(|s| {
            let expected: Vec<String> = s
                .expected_alerts
                .iter()
                .map(|e| format!("{} {}", e.severity, e.detection_type.display_name()))
                .collect();
            vec![
                s.id.clone(),
                s.name.clone(),
                s.status.to_string(),
                expected.join(", "),
            ]
        })
        .collect();

    TableFormatter::new(
        &["Id", "Name", "Status", "Expected Alerts"],
        &[16, 28, 9, 50],
        &rows,
    )
    .print_table(&rows);
}

pub fn print_tamper_indicators(indicators: &[TamperIndicator]) {
    let rows: Vec<Vec<String>> = indicators
        .iter()
        .map(|t| {
            vec![
                t.timestamp.format(TIME_FORMAT).to_string(),
                t.kind.label().to_string(),
                t.severity.to_string(),
                t.details.clone(),
            ]
        })
        .collect();

    TableFormatter::new(
        &["Time", "Indicator", "Severity", "Details"],
        &[19, 15, 8, 60],
        &rows,
    )
    .print_table(&rows);
}

/// Horizontal bar chart of alert buckets, one line per bucket.
pub fn render_chart(buckets: &[AlertBucket]) -> String {
    let peak = buckets.iter().map(AlertBucket::total).max().unwrap_or(0);
    let scale = |n: usize| {
        if peak == 0 {
            0
        } else {
            (n * 30).div_ceil(peak)
        }
    };

    buckets
        .iter()
        .map(|b| {
            format!(
                "{} │{} {}",
                b.label,
                "█".repeat(scale(b.total())),
                b.total()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
