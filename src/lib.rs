//! # biotrace — EEG/ECG recording triage
//!
//! Parses a multi-channel physiological recording exported as a
//! comment-annotated CSV, classifies each column by signal role, and
//! produces an automated irregularity report: beat-interval statistics for
//! the rhythmic (ECG) channel and amplitude-outlier counts for the
//! oscillatory (EEG) channels.
//!
//! ## Pipeline
//!
//! ```text
//! recording .csv
//!   │
//!   ├─ data::loader        skip '#' metadata lines → Table
//!   ├─ classify            column names → time axis + channel roles
//!   ├─ Session             caller-selected channel subsets + unit mode
//!   ├─ analysis::rhythm    peaks → inter-peak intervals → spacing findings
//!   ├─ analysis::amplitude 5σ deviation-from-mean outlier events
//!   └─ report              ordered findings + plain-text export
//! ```
//!
//! Detection thresholds are heuristic triage aids, not medical-grade
//! validation.
//!
//! ## Quick start
//!
//! ```
//! use biotrace::config::AnalysisConfig;
//! use biotrace::data::loader::parse_recording;
//! use biotrace::session::Session;
//!
//! let csv = "\
//! ## exported 2024-11-02 08:14:03
//! Time,Fz,X1,Trigger
//! 0.000,1.2,40.0,0
//! 0.004,1.4,900.0,0
//! 0.008,1.1,38.0,0
//! ";
//!
//! let cfg = AnalysisConfig::default();
//! let table = parse_recording(csv).unwrap();
//! let session = Session::new(table, &cfg.classifier).unwrap();
//! assert_eq!(session.classification().time_column, "Time");
//! assert_eq!(session.classification().eeg, vec!["Fz".to_string()]);
//!
//! let report = session.generate_report(&cfg);
//! for finding in &report.findings {
//!     println!("- {finding}");
//! }
//! ```

pub mod analysis;
pub mod classify;
pub mod config;
pub mod data;
pub mod report;
pub mod session;

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use classify::{classify_columns, ChannelRole, Classification, ClassifyError};
pub use config::AnalysisConfig;
pub use data::loader::{load_file, parse_recording, LoadError};
pub use data::model::{Series, Table};
pub use report::{assemble_report, Finding, Report, Severity};
pub use session::{AmplitudeUnit, Session};
