use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use biotrace::config::AnalysisConfig;
use biotrace::data::loader;
use biotrace::report;
use biotrace::session::{AmplitudeUnit, Session};

fn print_usage() {
    println!("Usage: biotrace <recording.csv> [--units uV|mV] [--json]");
    println!();
    println!("  --units uV|mV   EEG display unit (default uV)");
    println!("  --json          also write a structured JSON report");
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut path: Option<PathBuf> = None;
    let mut unit = AmplitudeUnit::Microvolts;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--units" => {
                let value = iter.next().context("--units needs a value (uV or mV)")?;
                unit = AmplitudeUnit::parse(value)
                    .with_context(|| format!("unknown unit {value:?} (expected uV or mV)"))?;
            }
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if path.is_none() && !other.starts_with('-') => {
                path = Some(PathBuf::from(other));
            }
            other => bail!("unexpected argument {other:?}"),
        }
    }

    let Some(path) = path else {
        print_usage();
        bail!("missing recording path");
    };

    let cfg = AnalysisConfig::default();
    let table = loader::load_file(&path)?;
    let mut session = Session::new(table, &cfg.classifier)?;
    session.set_eeg_unit(unit);

    let class = session.classification();
    println!("Time column:  {}", class.time_column);
    println!("EEG channels: {}", name_list(&class.eeg));
    println!("ECG channels: {}", name_list(&class.ecg));
    if let Some(cm) = &class.reference {
        println!("Reference:    {cm}");
    }
    if !class.ignored.is_empty() {
        println!("Ignored:      {}", name_list(&class.ignored));
    }

    let analyzed = session.generate_report(&cfg);
    println!();
    if analyzed.is_empty() {
        println!("No unusual signal behavior detected.");
        return Ok(());
    }

    println!("Automated signal report (EEG in {}):", session.eeg_unit().label());
    for finding in &analyzed.findings {
        println!("- {finding}");
    }

    let out = path.with_file_name(report::SUGGESTED_FILENAME);
    std::fs::write(&out, analyzed.to_text())
        .with_context(|| format!("writing {}", out.display()))?;
    println!();
    println!("Report written to {}", out.display());

    if json {
        let json_out = out.with_extension("json");
        let payload = serde_json::to_string_pretty(&analyzed)?;
        std::fs::write(&json_out, payload)
            .with_context(|| format!("writing {}", json_out.display()))?;
        println!("JSON report written to {}", json_out.display());
    }

    Ok(())
}

fn name_list(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
