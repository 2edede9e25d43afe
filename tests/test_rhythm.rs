mod common;

use approx::assert_abs_diff_eq;
use biotrace::analysis::rhythm::{analyze_rhythm, find_peaks, inter_peak_intervals};
use biotrace::config::RhythmConfig;
use biotrace::report::{Finding, Severity};

fn relaxed() -> RhythmConfig {
    RhythmConfig {
        min_peak_separation: 2,
        ..RhythmConfig::default()
    }
}

#[test]
fn regular_alternating_signal_has_uniform_intervals_and_no_warning() {
    // Maxima every other sample, 0.2 s apart → intervals of 0.4 s each.
    let values = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
    let time = common::time_axis(values.len(), 0.2);
    let series = common::series(&time, &values);

    let peaks = find_peaks(&series.values, 2);
    assert_eq!(peaks, vec![1, 3, 5, 7, 9]);

    let intervals = inter_peak_intervals(&series, &peaks);
    assert_eq!(intervals.len(), 4);
    for interval in &intervals {
        assert_abs_diff_eq!(*interval, 0.4, epsilon = 1e-12);
    }

    let findings = analyze_rhythm(&series, &relaxed());
    assert_eq!(findings.len(), 1, "uniform spacing must not warn");
    match &findings[0] {
        Finding::BeatIntervalSummary { mean_interval } => {
            assert_abs_diff_eq!(*mean_interval, 0.4, epsilon = 1e-12);
        }
        other => panic!("expected interval summary, got {other:?}"),
    }
}

#[test]
fn irregular_spacing_emits_a_warning() {
    // Peaks land at t = 0.0, 0.4, 1.6, 2.0 → intervals 0.4, 1.2, 0.4 with
    // population std ≈ 0.377, past the 0.15 threshold.
    let time = [-0.1, 0.0, 0.2, 0.4, 1.0, 1.6, 1.8, 2.0, 2.1];
    let values = [0.0, 5.0, 0.0, 5.0, 0.0, 5.0, 0.0, 5.0, 0.0];
    let series = common::series(&time, &values);

    let findings = analyze_rhythm(&series, &relaxed());
    assert_eq!(findings.len(), 2);
    assert!(matches!(
        findings[0],
        Finding::BeatIntervalSummary { .. }
    ));
    match &findings[1] {
        Finding::IrregularRhythm { interval_std } => {
            assert!(*interval_std > 0.15, "std {interval_std} should exceed threshold");
            assert_eq!(findings[1].severity(), Severity::Warning);
        }
        other => panic!("expected irregularity warning, got {other:?}"),
    }
}

#[test]
fn fewer_than_two_peaks_yields_only_the_insufficient_finding() {
    // Monotonic ramp: no interior maximum at all.
    let values: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let time = common::time_axis(values.len(), 0.1);
    let series = common::series(&time, &values);

    let findings = analyze_rhythm(&series, &relaxed());
    assert_eq!(
        findings,
        vec![Finding::InsufficientPeaks { peak_count: 0 }]
    );
    assert_eq!(findings[0].severity(), Severity::Info);

    // A single spike gives exactly one peak — still insufficient.
    let single = common::series(&common::time_axis(5, 0.1), &[0.0, 0.0, 3.0, 0.0, 0.0]);
    let findings = analyze_rhythm(&single, &relaxed());
    assert_eq!(
        findings,
        vec![Finding::InsufficientPeaks { peak_count: 1 }]
    );
}

#[test]
fn taller_peaks_claim_their_separation_window() {
    let values = [0.0, 1.0, 0.0, 2.0, 0.0];
    assert_eq!(find_peaks(&values, 3), vec![3]);
    // With no meaningful separation both survive.
    assert_eq!(find_peaks(&values, 1), vec![1, 3]);
}

#[test]
fn endpoints_and_plateaus_are_not_peaks() {
    // First/last samples have only one neighbour; plateau tops are not
    // strictly greater than both sides.
    let values = [5.0, 1.0, 3.0, 3.0, 1.0, 5.0];
    assert_eq!(find_peaks(&values, 1), Vec::<usize>::new());
}

#[test]
fn non_monotonic_time_does_not_panic() {
    // Timestamps run backwards mid-series; intervals go negative but the
    // statistics still compute.
    let time = [0.0, 0.5, 0.4, 0.3, 0.8, 0.9];
    let values = [0.0, 4.0, 0.0, 4.0, 0.0, 1.0];
    let series = common::series(&time, &values);

    let findings = analyze_rhythm(&series, &relaxed());
    assert!(!findings.is_empty());
}

#[test]
fn default_separation_suits_millisecond_sampling() {
    let cfg = RhythmConfig::default();
    assert_eq!(cfg.min_peak_separation, 200);
    assert_abs_diff_eq!(cfg.irregularity_threshold, 0.15);
}
