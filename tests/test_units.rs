mod common;

use approx::assert_abs_diff_eq;
use biotrace::session::AmplitudeUnit;

#[test]
fn scaling_returns_a_fresh_series() {
    let original = common::series(&[0.0, 0.1, 0.2], &[1000.0, 2000.0, 3000.0]);
    let scaled = original.scaled(1e-3);

    assert_eq!(scaled.time, original.time);
    assert_eq!(scaled.values, vec![1.0, 2.0, 3.0]);
    // Source untouched.
    assert_eq!(original.values, vec![1000.0, 2000.0, 3000.0]);
}

#[test]
fn scale_then_inverse_scale_round_trips() {
    let original = common::series(
        &[0.0, 0.1, 0.2, 0.3],
        &[12.5, -830.2, 0.0031, 44000.0],
    );
    let factor = 1e-3;
    let round_tripped = original.scaled(factor).scaled(1.0 / factor);

    for (got, want) in round_tripped.values.iter().zip(&original.values) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-9 * want.abs().max(1.0));
    }
}

#[test]
fn unit_factors_match_the_raw_microvolt_convention() {
    assert_abs_diff_eq!(AmplitudeUnit::Microvolts.factor_from_raw(), 1.0);
    assert_abs_diff_eq!(AmplitudeUnit::Millivolts.factor_from_raw(), 1e-3);
    assert_eq!(AmplitudeUnit::Microvolts.label(), "µV");
    assert_eq!(AmplitudeUnit::Millivolts.label(), "mV");
}

#[test]
fn unit_parsing_accepts_cli_spellings() {
    assert_eq!(AmplitudeUnit::parse("uV"), Some(AmplitudeUnit::Microvolts));
    assert_eq!(AmplitudeUnit::parse("µV"), Some(AmplitudeUnit::Microvolts));
    assert_eq!(AmplitudeUnit::parse("mV"), Some(AmplitudeUnit::Millivolts));
    assert_eq!(AmplitudeUnit::parse("volts"), None);
}
