use crate::analysis::{amplitude, rhythm};
use crate::classify::{classify_columns, Classification, ClassifyError};
use crate::config::{AnalysisConfig, ClassifierConfig};
use crate::data::model::{Series, Table};
use crate::report::{assemble_report, Report};

// ---------------------------------------------------------------------------
// Amplitude units
// ---------------------------------------------------------------------------

/// Display/analysis unit for EEG channels. The recording format stores raw
/// samples in microvolts; ECG and reference traces are always presented in
/// millivolts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmplitudeUnit {
    #[default]
    Microvolts,
    Millivolts,
}

impl AmplitudeUnit {
    /// Scale factor from raw microvolt samples into this unit.
    pub fn factor_from_raw(self) -> f64 {
        match self {
            AmplitudeUnit::Microvolts => 1.0,
            AmplitudeUnit::Millivolts => 1e-3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AmplitudeUnit::Microvolts => "µV",
            AmplitudeUnit::Millivolts => "mV",
        }
    }

    /// Lenient parse for command-line / UI input.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "uV" | "µV" | "uv" | "microvolts" => Some(AmplitudeUnit::Microvolts),
            "mV" | "mv" | "millivolts" => Some(AmplitudeUnit::Millivolts),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Session – one loaded recording plus the caller's selections
// ---------------------------------------------------------------------------

/// Number of EEG channels pre-selected for a fresh session.
const DEFAULT_EEG_SELECTION: usize = 5;

/// A loaded recording, its classification, and the channel subsets the
/// caller wants analyzed.
///
/// The table and classification are fixed at construction; re-running
/// [`Session::generate_report`] after a selection change simply recomputes
/// from the immutable table.
pub struct Session {
    table: Table,
    classification: Classification,
    selected_eeg: Vec<String>,
    selected_ecg: Vec<String>,
    include_reference: bool,
    eeg_unit: AmplitudeUnit,
}

impl Session {
    /// Classify `table` and start with the default selection: the first
    /// five EEG channels, every ECG channel, reference included when
    /// present, microvolt display.
    ///
    /// Fails when no time column can be identified; nothing downstream may
    /// run in that case.
    pub fn new(table: Table, cfg: &ClassifierConfig) -> Result<Self, ClassifyError> {
        let classification = classify_columns(&table, cfg)?;
        let selected_eeg = classification
            .eeg
            .iter()
            .take(DEFAULT_EEG_SELECTION)
            .cloned()
            .collect();
        let selected_ecg = classification.ecg.clone();
        let include_reference = classification.reference.is_some();
        Ok(Session {
            table,
            classification,
            selected_eeg,
            selected_ecg,
            include_reference,
            eeg_unit: AmplitudeUnit::default(),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn selected_eeg(&self) -> &[String] {
        &self.selected_eeg
    }

    pub fn selected_ecg(&self) -> &[String] {
        &self.selected_ecg
    }

    pub fn include_reference(&self) -> bool {
        self.include_reference
    }

    pub fn eeg_unit(&self) -> AmplitudeUnit {
        self.eeg_unit
    }

    /// Replace the EEG selection. Names that were not classified as EEG are
    /// dropped; the given order is kept for the survivors.
    pub fn select_eeg(&mut self, channels: Vec<String>) {
        self.selected_eeg = channels
            .into_iter()
            .filter(|c| self.classification.eeg.contains(c))
            .collect();
    }

    /// Replace the ECG selection, same filtering rule as [`Self::select_eeg`].
    pub fn select_ecg(&mut self, channels: Vec<String>) {
        self.selected_ecg = channels
            .into_iter()
            .filter(|c| self.classification.ecg.contains(c))
            .collect();
    }

    pub fn set_include_reference(&mut self, include: bool) {
        self.include_reference = include;
    }

    pub fn set_eeg_unit(&mut self, unit: AmplitudeUnit) {
        self.eeg_unit = unit;
    }

    /// Raw-unit series for one channel against the session's time axis.
    pub fn channel_series(&self, channel: &str) -> Option<Series> {
        self.table
            .series(&self.classification.time_column, channel)
    }

    /// Run both analyzers over the current selection and assemble the
    /// ordered report: beat-interval findings for the first selected ECG
    /// channel, then one amplitude finding per selected EEG channel.
    pub fn generate_report(&self, cfg: &AnalysisConfig) -> Report {
        let mut rhythm_findings = Vec::new();
        if let Some(ecg_channel) = self.selected_ecg.first() {
            match self.channel_series(ecg_channel) {
                Some(series) => {
                    let mv = series.scaled(AmplitudeUnit::Millivolts.factor_from_raw());
                    rhythm_findings = rhythm::analyze_rhythm(&mv, &cfg.rhythm);
                }
                None => log::warn!("ECG channel {ecg_channel:?} is not numeric, skipping"),
            }
        }

        let factor = self.eeg_unit.factor_from_raw();
        let mut amplitude_findings = Vec::new();
        for channel in &self.selected_eeg {
            match self.channel_series(channel) {
                Some(series) => {
                    let scaled = series.scaled(factor);
                    amplitude_findings.push(amplitude::analyze_amplitude(
                        channel,
                        &scaled.values,
                        &cfg.amplitude,
                    ));
                }
                None => log::warn!("EEG channel {channel:?} is not numeric, skipping"),
            }
        }

        assemble_report(rhythm_findings, amplitude_findings)
    }
}
