use std::f64::consts::PI;
use std::io::Write;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

const SAMPLE_RATE: f64 = 500.0;
const DURATION_S: f64 = 30.0;

/// Cortical rhythm plus measurement noise, in microvolts.
fn generate_eeg(
    time: &[f64],
    freq_hz: f64,
    amplitude_uv: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    let mut values: Vec<f64> = time
        .iter()
        .map(|&t| {
            amplitude_uv * (2.0 * PI * freq_hz * t).sin()
                + 0.4 * amplitude_uv * (2.0 * PI * freq_hz * 0.55 * t).sin()
                + rng.gauss(0.0, 5.0)
        })
        .collect();

    // A few movement-artifact spikes well past the 5-sigma cutoff.
    for _ in 0..3 {
        let idx = (rng.next_f64() * values.len() as f64) as usize % values.len();
        let sign = if rng.next_f64() < 0.5 { -1.0 } else { 1.0 };
        values[idx] += sign * (350.0 + rng.next_f64() * 150.0);
    }
    values
}

/// QRS-like spike train with mild beat-to-beat jitter, in microvolts.
/// Returns the signal and the beat sample indices.
fn generate_ecg(time: &[f64], rng: &mut SimpleRng) -> (Vec<f64>, Vec<usize>) {
    let n = time.len();
    let mut values: Vec<f64> = (0..n).map(|_| rng.gauss(0.0, 10.0)).collect();
    let mut beats = Vec::new();

    let half_width = 12usize;
    let mut next_beat = 0.5;
    while next_beat < DURATION_S - 0.1 {
        let center = (next_beat * SAMPLE_RATE).round() as usize;
        beats.push(center);
        for k in 0..2 * half_width {
            let idx = center + k - half_width;
            if idx < n {
                let rise = if k < half_width {
                    k as f64 / half_width as f64
                } else {
                    (2 * half_width - k) as f64 / half_width as f64
                };
                values[idx] += 1200.0 * rise;
            }
        }
        next_beat += 0.8 + (rng.next_f64() - 0.5) * 0.1;
    }
    (values, beats)
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n = (SAMPLE_RATE * DURATION_S) as usize;
    let time: Vec<f64> = (0..n).map(|i| i as f64 / SAMPLE_RATE).collect();

    // (name, dominant frequency Hz, amplitude µV)
    let eeg_specs = [
        ("Fz", 10.0, 20.0),
        ("Cz", 9.5, 18.0),
        ("P3", 10.5, 22.0),
        ("C4", 8.0, 15.0),
        ("O1", 11.0, 25.0),
    ];

    let mut eeg_columns: Vec<(&str, Vec<f64>)> = Vec::new();
    for (name, freq, amp) in eeg_specs {
        eeg_columns.push((name, generate_eeg(&time, freq, amp, &mut rng)));
    }

    let (ecg, beats) = generate_ecg(&time, &mut rng);

    // Slow common-mode drift.
    let cm: Vec<f64> = time
        .iter()
        .map(|&t| 50.0 * (2.0 * PI * 0.2 * t).sin() + rng.gauss(0.0, 3.0))
        .collect();

    let mut trigger = vec![0.0; n];
    for &b in &beats {
        trigger[b] = 1.0;
    }

    let output_path = "sample_recording.csv";
    let mut file = std::fs::File::create(output_path).expect("Failed to create output file");
    writeln!(file, "# Device: biotrace synthetic exporter").unwrap();
    writeln!(file, "# Sample rate: {SAMPLE_RATE} Hz").unwrap();
    writeln!(file, "# Duration: {DURATION_S} s").unwrap();

    let mut writer = csv::Writer::from_writer(file);
    let mut header = vec!["Time"];
    header.extend(eeg_columns.iter().map(|(name, _)| *name));
    header.extend(["X1", "CM", "Trigger"]);
    writer.write_record(&header).expect("Failed to write header");

    for i in 0..n {
        let mut row = vec![format!("{:.3}", time[i])];
        for (_, values) in &eeg_columns {
            row.push(format!("{:.3}", values[i]));
        }
        row.push(format!("{:.3}", ecg[i]));
        row.push(format!("{:.3}", cm[i]));
        row.push(format!("{:.0}", trigger[i]));
        writer.write_record(&row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");

    println!(
        "Wrote {} samples ({} beats, {} EEG channels) to {output_path}",
        n,
        beats.len(),
        eeg_columns.len()
    );
}
