use thiserror::Error;

use crate::config::ClassifierConfig;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Terminal classification failure. Analysis must not run without a time
/// axis, so the caller halts and surfaces this instead of degrading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("could not find a time column in this file")]
    NoTimeColumn,
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Role assigned to one column, derived from its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRole {
    Time,
    Eeg,
    Ecg,
    Reference,
    Ignored,
    Unclassified,
}

// ---------------------------------------------------------------------------
// Classification result
// ---------------------------------------------------------------------------

/// Column-role assignment for one table. Each list preserves the table's
/// column order; a column appears in at most one non-Ignored role.
#[derive(Debug, Clone)]
pub struct Classification {
    /// The selected time-axis column.
    pub time_column: String,
    /// EEG channels, exact vocabulary matches.
    pub eeg: Vec<String>,
    /// ECG/EOG channels, marker-substring matches.
    pub ecg: Vec<String>,
    /// Common-mode reference channel, if present.
    pub reference: Option<String>,
    /// Columns excluded by the ignore vocabulary (triggers, status words).
    pub ignored: Vec<String>,
    /// Everything else — no vocabulary matched, no guessing attempted.
    pub unclassified: Vec<String>,
}

impl Classification {
    /// Role of a single column by name.
    pub fn role(&self, name: &str) -> ChannelRole {
        if name == self.time_column {
            ChannelRole::Time
        } else if self.eeg.iter().any(|c| c == name) {
            ChannelRole::Eeg
        } else if self.ecg.iter().any(|c| c == name) {
            ChannelRole::Ecg
        } else if self.reference.as_deref() == Some(name) {
            ChannelRole::Reference
        } else if self.ignored.iter().any(|c| c == name) {
            ChannelRole::Ignored
        } else {
            ChannelRole::Unclassified
        }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Assign a role to every column of `table`.
///
/// Time-column selection, in order of precedence:
/// 1. the first entry of `cfg.time_candidates` that case-insensitively
///    equals some column name (candidate order beats column order);
/// 2. the first numeric column in declaration order;
/// 3. neither → [`ClassifyError::NoTimeColumn`].
///
/// Channel roles are assigned over the remaining columns in two passes, EEG
/// first and ECG against what the EEG pass left over. The pass order is a
/// behavioral contract: a name matching both vocabularies lands in EEG.
/// A column containing an ignore keyword is never a signal channel, whatever
/// else its name matches.
///
/// Pure function of the column names and `cfg`; the table's cell data is
/// consulted only for the numeric-fallback step.
pub fn classify_columns(
    table: &Table,
    cfg: &ClassifierConfig,
) -> Result<Classification, ClassifyError> {
    let time_column = select_time_column(table, cfg)?;

    let is_ignored = |name: &str| cfg.ignore_keywords.iter().any(|k| name.contains(k.as_str()));

    // EEG pass: exact vocabulary membership.
    let mut eeg: Vec<String> = Vec::new();
    for col in table.columns() {
        let name = col.name.as_str();
        if name == time_column {
            continue;
        }
        if cfg.eeg_channels.iter().any(|c| c == name) && !is_ignored(name) {
            eeg.push(name.to_string());
        }
    }

    // ECG pass over the remainder.
    let mut ecg: Vec<String> = Vec::new();
    for col in table.columns() {
        let name = col.name.as_str();
        if name == time_column || eeg.iter().any(|c| c == name) {
            continue;
        }
        if cfg.ecg_markers.iter().any(|m| m.matches(name)) && !is_ignored(name) {
            ecg.push(name.to_string());
        }
    }

    let mut reference = None;
    let mut ignored = Vec::new();
    let mut unclassified = Vec::new();
    for col in table.columns() {
        let name = col.name.as_str();
        if name == time_column
            || eeg.iter().any(|c| c == name)
            || ecg.iter().any(|c| c == name)
        {
            continue;
        }
        if name == cfg.reference_channel && reference.is_none() {
            reference = Some(name.to_string());
        } else if is_ignored(name) {
            ignored.push(name.to_string());
        } else {
            unclassified.push(name.to_string());
        }
    }

    log::debug!(
        "classified columns: time={time_column:?} eeg={eeg:?} ecg={ecg:?} reference={reference:?}"
    );

    Ok(Classification {
        time_column,
        eeg,
        ecg,
        reference,
        ignored,
        unclassified,
    })
}

fn select_time_column(table: &Table, cfg: &ClassifierConfig) -> Result<String, ClassifyError> {
    for candidate in &cfg.time_candidates {
        if let Some(col) = table
            .columns()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(candidate))
        {
            return Ok(col.name.clone());
        }
    }
    table
        .columns()
        .iter()
        .find(|c| c.is_numeric())
        .map(|c| c.name.clone())
        .ok_or(ClassifyError::NoTimeColumn)
}
