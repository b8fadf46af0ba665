//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use strum::{Display, EnumString};

/// How periodic diagnostics are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    /// Indented goal tree plus evaluator scores.
    #[default]
    Text,
    /// One `BrainSnapshot` JSON object per bot and line.
    Json,
}

/// Configuration of a headless run.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Scenario name inside the data directory, or a path to a `.ron` file.
    pub scenario: String,
    /// Overrides the data directory bundled with `raven-content`.
    pub data_dir: Option<PathBuf>,
    /// Overrides `<data_dir>/brain.toml`.
    pub brain_config: Option<PathBuf>,
    pub ticks: u64,
    pub seed: u64,
    /// Ticks between diagnostics dumps; `0` disables them.
    pub report_every: u64,
    pub report_format: ReportFormat,
    /// When set, logs are also written to `<log_dir>/raven.log`.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scenario: "arena".to_owned(),
            data_dir: None,
            brain_config: None,
            ticks: 3600,
            seed: 0,
            report_every: 600,
            report_format: ReportFormat::Text,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RAVEN_SCENARIO` - Scenario name or `.ron` path (default: arena)
    /// - `RAVEN_DATA_DIR` - Content directory (default: bundled data)
    /// - `RAVEN_BRAIN_CONFIG` - Brain config TOML (default: `<data_dir>/brain.toml`)
    /// - `RAVEN_TICKS` - Ticks to simulate (default: 3600)
    /// - `RAVEN_SEED` - World seed (default: 0)
    /// - `RAVEN_REPORT_EVERY` - Ticks between diagnostics, 0 disables (default: 600)
    /// - `RAVEN_REPORT_FORMAT` - `text` or `json` (default: text)
    /// - `RAVEN_LOG_DIR` - Also log to a file in this directory (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(scenario) = lookup("RAVEN_SCENARIO").filter(|s| !s.is_empty()) {
            config.scenario = scenario;
        }
        config.data_dir = lookup("RAVEN_DATA_DIR").map(PathBuf::from);
        config.brain_config = lookup("RAVEN_BRAIN_CONFIG").map(PathBuf::from);

        if let Some(ticks) = parse(&lookup, "RAVEN_TICKS") {
            config.ticks = ticks;
        }
        if let Some(seed) = parse(&lookup, "RAVEN_SEED") {
            config.seed = seed;
        }
        if let Some(every) = parse(&lookup, "RAVEN_REPORT_EVERY") {
            config.report_every = every;
        }
        if let Some(format) = parse(&lookup, "RAVEN_REPORT_FORMAT") {
            config.report_format = format;
        }

        config.log_dir = lookup("RAVEN_LOG_DIR").map(PathBuf::from);
        config
    }

    /// True when `scenario` names a file rather than a bundled scenario.
    pub fn scenario_is_path(&self) -> bool {
        self.scenario.ends_with(".ron")
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, value, "ignoring unparsable environment variable");
            None
        }
    }
}
