//! Amplitude-outlier detection for oscillatory (EEG) channels.

use crate::config::AmplitudeConfig;
use crate::report::Finding;

use super::stats;

/// Indices whose absolute deviation from the channel mean exceeds
/// `multiplier` standard deviations.
///
/// A constant-valued channel has zero standard deviation; rather than let
/// every sample become "infinitely far" from the mean, the contract is that
/// such a channel has no outlier events. An empty slice likewise yields
/// none.
pub fn amplitude_outliers(values: &[f64], multiplier: f64) -> Vec<usize> {
    if values.is_empty() {
        return Vec::new();
    }
    let mean = stats::mean(values);
    let std = stats::population_std(values);
    if std == 0.0 {
        return Vec::new();
    }
    let cutoff = multiplier * std;
    values
        .iter()
        .enumerate()
        .filter(|(_, &v)| (v - mean).abs() > cutoff)
        .map(|(i, _)| i)
        .collect()
}

/// Analyze one oscillatory channel, producing its single per-channel
/// finding. `values` are expected in the caller's chosen display unit; the
/// deviation rule is scale-invariant, so the count does not depend on it.
pub fn analyze_amplitude(channel: &str, values: &[f64], cfg: &AmplitudeConfig) -> Finding {
    let count = amplitude_outliers(values, cfg.deviation_multiplier).len();
    Finding::AmplitudeEvents {
        channel: channel.to_string(),
        count,
    }
}
