use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How the presentation layer should weight a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

// ---------------------------------------------------------------------------
// Finding – one report line with its numeric facts
// ---------------------------------------------------------------------------

/// A single report entry. Each variant carries the numbers behind the line
/// so a structured consumer does not have to re-parse the rendered text.
///
/// Findings are immutable once produced and keep their emission order: ECG
/// findings precede EEG findings, and EEG findings follow the caller's
/// channel-selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Mean inter-peak interval of the rhythmic channel, in time-axis units.
    BeatIntervalSummary { mean_interval: f64 },

    /// Inter-peak interval spread exceeded the irregularity threshold.
    ///
    /// A heuristic variability flag, not a clinical diagnosis.
    IrregularRhythm { interval_std: f64 },

    /// Fewer than two peaks were detected — no interval statistics possible.
    InsufficientPeaks { peak_count: usize },

    /// Amplitude-outlier count for one oscillatory channel (zero means a
    /// clean channel, still reported).
    AmplitudeEvents { channel: String, count: usize },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::IrregularRhythm { .. } => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::BeatIntervalSummary { mean_interval } => {
                write!(f, "ECG: Average beat interval = {mean_interval:.2} seconds")
            }
            Finding::IrregularRhythm { .. } => {
                write!(f, "ECG shows irregular beat spacing (variable timing).")
            }
            Finding::InsufficientPeaks { .. } => {
                write!(f, "ECG: Not enough peaks detected for analysis.")
            }
            Finding::AmplitudeEvents { channel, count } if *count > 0 => {
                write!(
                    f,
                    "EEG {channel}: {count} unusual high-amplitude events detected."
                )
            }
            Finding::AmplitudeEvents { channel, .. } => {
                write!(f, "EEG {channel}: No unusual events detected.")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Suggested name for the exported plain-text artifact.
pub const SUGGESTED_FILENAME: &str = "session_report.txt";

/// Ordered findings for one analysis invocation.
///
/// An empty report is valid — it means no channel was selected for either
/// analysis, and the presentation layer renders a neutral "nothing to
/// report" state instead of an empty section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Plain-text serialization: one finding per line, newline-joined,
    /// suitable for byte-for-byte file export.
    pub fn to_text(&self) -> String {
        self.findings
            .iter()
            .map(|finding| finding.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Concatenate the analyzers' outputs into one ordered report: rhythm
/// findings first, then amplitude findings in channel-selection order.
pub fn assemble_report(rhythm: Vec<Finding>, amplitude: Vec<Finding>) -> Report {
    let mut findings = rhythm;
    findings.extend(amplitude);
    Report { findings }
}
