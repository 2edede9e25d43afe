#![allow(dead_code)]

use biotrace::data::loader::parse_recording;
use biotrace::data::model::{Series, Table};

/// Parse an inline CSV literal, panicking on malformed fixtures.
pub fn table(csv: &str) -> Table {
    parse_recording(csv).expect("fixture CSV should parse")
}

/// Build a series from slices.
pub fn series(time: &[f64], values: &[f64]) -> Series {
    Series {
        time: time.to_vec(),
        values: values.to_vec(),
    }
}

/// Evenly spaced time axis: `n` samples, `step` apart, starting at zero.
pub fn time_axis(n: usize, step: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * step).collect()
}
