//! Analysis configuration.
//!
//! Every vocabulary and threshold the engine consults lives here rather than
//! in embedded literals, so tests (and unusual recording montages) can swap
//! them out. All fields have defaults matching the channel naming and
//! sampling assumptions of the supported export format.

/// Per-marker ECG name pattern.
///
/// The hardware exports label ECG/EOG channels inconsistently: auxiliary
/// inputs are `X1`/`X2` (exact casing), while ocular channels show up as any
/// casing of `LEOG`/`REOG`. The `match_case` flag preserves that distinction.
#[derive(Debug, Clone)]
pub struct EcgMarker {
    /// Substring to look for in the column name.
    pub pattern: String,
    /// Whether the substring match is case-sensitive.
    pub match_case: bool,
}

impl EcgMarker {
    pub fn case_sensitive(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            match_case: true,
        }
    }

    pub fn case_insensitive(pattern: &str) -> Self {
        Self {
            // Stored uppercased so matching only folds the column name.
            pattern: pattern.to_ascii_uppercase(),
            match_case: false,
        }
    }

    /// Does `name` contain this marker?
    pub fn matches(&self, name: &str) -> bool {
        if self.match_case {
            name.contains(&self.pattern)
        } else {
            name.to_ascii_uppercase().contains(&self.pattern)
        }
    }
}

/// Vocabularies used to assign channel roles from column names.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Ordered time-column candidates, matched case-insensitively against
    /// column names. Candidate order takes precedence over column order.
    ///
    /// Default: `["Time", "Seconds"]`.
    pub time_candidates: Vec<String>,

    /// Canonical 10–20 electrode names. A column is EEG only on an exact,
    /// case-sensitive match.
    pub eeg_channels: Vec<String>,

    /// ECG/EOG name markers, checked only for columns the EEG pass skipped.
    pub ecg_markers: Vec<EcgMarker>,

    /// A column whose name contains any of these substrings is never a
    /// signal channel (status words, triggers, event annotations).
    pub ignore_keywords: Vec<String>,

    /// Exact name of the common-mode reference channel.
    ///
    /// Default: `"CM"`.
    pub reference_channel: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            time_candidates: vec!["Time".into(), "Seconds".into()],
            eeg_channels: [
                "Fz", "Cz", "P3", "C3", "F3", "F4", "C4", "P4", "Fp1", "Fp2",
                "T3", "T4", "T5", "T6", "O1", "O2", "F7", "F8", "A1", "A2",
                "Pz",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            ecg_markers: vec![
                EcgMarker::case_sensitive("X1"),
                EcgMarker::case_sensitive("X2"),
                EcgMarker::case_insensitive("LEOG"),
                EcgMarker::case_insensitive("REOG"),
            ],
            ignore_keywords: [
                "X3",
                "Trigger",
                "Time_Offset",
                "ADC_Status",
                "ADC_Sequence",
                "Event",
                "Comments",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            reference_channel: "CM".into(),
        }
    }
}

/// Tunables for beat-interval analysis.
#[derive(Debug, Clone)]
pub struct RhythmConfig {
    /// Minimum index distance between two accepted peaks, preventing a
    /// single beat from being counted twice.
    ///
    /// Default: `200` samples, sized for the ~1 kHz exports the format
    /// typically carries (≈0.2 s refractory window).
    pub min_peak_separation: usize,

    /// Inter-peak interval standard deviation above which the spacing is
    /// flagged as irregular, in the same units as the time axis.
    ///
    /// This is a heuristic variability cutoff, not a clinical criterion.
    ///
    /// Default: `0.15`.
    pub irregularity_threshold: f64,
}

impl Default for RhythmConfig {
    fn default() -> Self {
        Self {
            min_peak_separation: 200,
            irregularity_threshold: 0.15,
        }
    }
}

/// Tunables for amplitude-outlier detection.
#[derive(Debug, Clone)]
pub struct AmplitudeConfig {
    /// A sample is an outlier event when its absolute deviation from the
    /// channel mean exceeds this many standard deviations.
    ///
    /// Default: `5.0`.
    pub deviation_multiplier: f64,
}

impl Default for AmplitudeConfig {
    fn default() -> Self {
        Self {
            deviation_multiplier: 5.0,
        }
    }
}

/// Bundle of every engine tunable, handed to the session driver.
///
/// Construct with struct-update syntax to override a single knob:
///
/// ```
/// use biotrace::config::{AnalysisConfig, RhythmConfig};
///
/// let cfg = AnalysisConfig {
///     rhythm: RhythmConfig {
///         min_peak_separation: 50,
///         ..RhythmConfig::default()
///     },
///     ..AnalysisConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub classifier: ClassifierConfig,
    pub rhythm: RhythmConfig,
    pub amplitude: AmplitudeConfig,
}
