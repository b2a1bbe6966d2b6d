use crate::logging::LogFormat;
use anyhow::{Context, Result};
use clap::Parser;
use sleep_risk_core::{Report, RiskClassifier, Thresholds, HEALTHY_LABEL};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(
    name = "sleep-risk",
    version,
    about = "Screen sleep-health risk from six positional measurements",
    after_help = "Options go before the six values. Everything after them is ignored.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Age in years
    #[arg(allow_hyphen_values = true)]
    pub age: Option<String>,
    /// Gender
    #[arg(allow_hyphen_values = true)]
    pub gender: Option<String>,
    /// Sleep per night, in hours
    #[arg(allow_hyphen_values = true)]
    pub sleep: Option<String>,
    /// Stress level on a 0-10 scale
    #[arg(allow_hyphen_values = true)]
    pub stress: Option<String>,
    /// BMI category code
    #[arg(allow_hyphen_values = true)]
    pub bmi: Option<String>,
    /// Snoring frequency code
    #[arg(allow_hyphen_values = true)]
    pub snoring: Option<String>,
    /// Surplus values after snoring, flags included; never read.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
    /// Print a JSON report instead of the bare label
    #[arg(long)]
    pub json: bool,
    /// JSON file overriding the rule thresholds
    #[arg(long, env = "SLEEP_RISK_THRESHOLDS", value_name = "PATH")]
    pub thresholds: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Positional values up to the first one not supplied.
    pub fn fields(&self) -> Vec<&str> {
        [
            &self.age,
            &self.gender,
            &self.sleep,
            &self.stress,
            &self.bmi,
            &self.snoring,
        ]
        .into_iter()
        .map_while(|f| f.as_deref())
        .collect()
    }

    pub fn classifier(&self) -> Result<RiskClassifier> {
        match &self.thresholds {
            Some(path) => Ok(RiskClassifier::with_thresholds(load_thresholds(path)?)),
            None => Ok(RiskClassifier::new()),
        }
    }
}

pub fn load_thresholds(path: &Path) -> Result<Thresholds> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading thresholds from {}", path.display()))?;
    let thresholds = Thresholds::from_json(&raw)
        .with_context(|| format!("parsing thresholds in {}", path.display()))?;
    thresholds.validate()?;
    Ok(thresholds)
}

/// The single output line for a parsed invocation.
pub fn render(cli: &Cli) -> String {
    let classifier = match cli.classifier() {
        Ok(classifier) => classifier,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "threshold config rejected");
            return fallback(cli.json);
        }
    };

    if !cli.extra.is_empty() {
        debug!(ignored = cli.extra.len(), "extra positional arguments");
    }

    if !cli.json {
        return classifier.label_for_fields(&cli.fields()).to_string();
    }

    match classifier.assess_fields(&cli.fields()) {
        Ok((profile, assessment)) => report_line(&Report::new(profile, assessment)),
        Err(err) => {
            debug!(error = %err, "falling back to default report");
            fallback(true)
        }
    }
}

pub fn fallback(json: bool) -> String {
    if json {
        report_line(&Report::fallback())
    } else {
        HEALTHY_LABEL.to_string()
    }
}

/// Whether `--json` was asked for, judged from raw arguments when clap
/// rejected the command line.
pub fn wants_json(args: &[OsString]) -> bool {
    args.iter().skip(1).any(|a| a == "--json")
}

fn report_line(report: &Report) -> String {
    report.to_json().unwrap_or_else(|err| {
        warn!(error = %err, "report serialization failed");
        HEALTHY_LABEL.to_string()
    })
}
