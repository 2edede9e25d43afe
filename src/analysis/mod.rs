/// Numeric analysis passes over classified channels.
///
/// Both analyzers are pure: each call recomputes from its input series and
/// the supplied configuration, emitting [`crate::report::Finding`]s. Numeric
/// degeneracies (too few peaks, zero variance, non-monotonic time) are
/// absorbed into findings or defined fallbacks, never raised as errors.
pub mod amplitude;
pub mod rhythm;
pub mod stats;
