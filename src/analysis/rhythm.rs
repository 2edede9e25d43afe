//! Beat-interval analysis for the rhythmic (ECG) channel.
//!
//! Peaks stand in for heartbeats; the spacing between them is measured on
//! the time axis, not in sample indices, so irregular sampling does not
//! masquerade as irregular rhythm.

use crate::config::RhythmConfig;
use crate::data::model::Series;
use crate::report::Finding;

use super::stats;

/// Indices of local maxima separated by at least `min_separation` samples.
///
/// Taller peaks claim their neighbourhood first: candidates are visited in
/// descending amplitude and kept only when no already-accepted peak lies
/// within the separation window. The result is sorted ascending.
///
/// A maximum must be strictly greater than both neighbours, so the first and
/// last samples and plateau tops never qualify.
pub fn find_peaks(values: &[f64], min_separation: usize) -> Vec<usize> {
    let n = values.len();
    if n < 3 {
        return Vec::new();
    }

    let mut candidates: Vec<usize> = (1..n - 1)
        .filter(|&i| values[i] > values[i - 1] && values[i] > values[i + 1])
        .collect();

    if min_separation > 1 {
        candidates.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
        let mut kept: Vec<usize> = Vec::with_capacity(candidates.len());
        for idx in candidates {
            if kept.iter().all(|&k| idx.abs_diff(k) >= min_separation) {
                kept.push(idx);
            }
        }
        kept.sort_unstable();
        candidates = kept;
    }

    candidates
}

/// Elapsed time between consecutive peaks.
pub fn inter_peak_intervals(series: &Series, peaks: &[usize]) -> Vec<f64> {
    peaks
        .windows(2)
        .map(|pair| series.time[pair[1]] - series.time[pair[0]])
        .collect()
}

/// Analyze one rhythmic channel.
///
/// With fewer than two accepted peaks the only output is an informational
/// "not enough peaks" finding. Otherwise the mean inter-peak interval is
/// always reported, and a warning is added when the population standard
/// deviation of the intervals exceeds `cfg.irregularity_threshold`.
///
/// Non-monotonic or duplicated timestamps yield zero or negative intervals;
/// the statistics still compute (garbage in, garbage out) and nothing
/// panics.
pub fn analyze_rhythm(series: &Series, cfg: &RhythmConfig) -> Vec<Finding> {
    let peaks = find_peaks(&series.values, cfg.min_peak_separation);
    if peaks.len() < 2 {
        return vec![Finding::InsufficientPeaks {
            peak_count: peaks.len(),
        }];
    }

    let intervals = inter_peak_intervals(series, &peaks);
    let mean_interval = stats::mean(&intervals);
    let interval_std = stats::population_std(&intervals);
    log::debug!(
        "rhythm: {} peaks, mean interval {mean_interval:.4}, std {interval_std:.4}",
        peaks.len()
    );

    let mut findings = vec![Finding::BeatIntervalSummary { mean_interval }];
    if interval_std > cfg.irregularity_threshold {
        findings.push(Finding::IrregularRhythm { interval_std });
    }
    findings
}
