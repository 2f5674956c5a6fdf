//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;

use stockroom_observability::LogFormat;

use crate::render::OutputFormat;

pub const TRANSCRIPT_VAR: &str = "STOCKROOM_TRANSCRIPT";
pub const OUTPUT_VAR: &str = "STOCKROOM_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

pub const DEFAULT_TRANSCRIPT: &str = "log.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub transcript_path: PathBuf,
    pub output: OutputFormat,
    pub log_format: LogFormat,
    /// Problems found while reading the environment. Logging is not up yet
    /// at that point, so they are reported once it is.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transcript_path: PathBuf::from(DEFAULT_TRANSCRIPT),
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults and
    /// unparsable values fall back to them with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(path) = lookup(TRANSCRIPT_VAR).filter(|p| !p.trim().is_empty()) {
            config.transcript_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(OUTPUT_VAR) {
            match raw.parse::<OutputFormat>() {
                Ok(output) => config.output = output,
                Err(e) => config.warnings.push(format!("{OUTPUT_VAR}: {e}; using table")),
            }
        }
        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config.warnings.push(format!("{LOG_FORMAT_VAR}: {e}; using json")),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
        assert_eq!(Config::default().transcript_path, PathBuf::from("log.txt"));
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            (TRANSCRIPT_VAR, "/tmp/session.log"),
            (OUTPUT_VAR, "json"),
            (LOG_FORMAT_VAR, "pretty"),
        ]);

        assert_eq!(config.transcript_path, PathBuf::from("/tmp/session.log"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn bad_values_fall_back_with_a_warning() {
        let config = config_from(&[(OUTPUT_VAR, "xml"), (TRANSCRIPT_VAR, "  ")]);

        assert_eq!(config.output, OutputFormat::Table);
        assert_eq!(config.transcript_path, PathBuf::from(DEFAULT_TRANSCRIPT));
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].starts_with(OUTPUT_VAR));
    }
}
