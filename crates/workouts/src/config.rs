//! Report configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "WORKOUT_REPORT_FORMAT";

/// Shape of each output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed human-readable template.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}'")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

impl ReportConfig {
    /// Reads the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let format = match env::var(FORMAT_ENV) {
            Ok(raw) => Self::parse_format(&raw),
            Err(_) => ReportFormat::default(),
        };
        Self { format }
    }

    fn parse_format(raw: &str) -> ReportFormat {
        raw.parse().unwrap_or_else(|e| {
            warn!("{e}, using {}", ReportFormat::default());
            ReportFormat::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text() {
        assert_eq!(ReportConfig::default().format, ReportFormat::Text);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!(" TEXT ".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_unknown_format_falls_back() {
        assert_eq!(ReportConfig::parse_format("xml"), ReportFormat::Text);
        assert_eq!(ReportConfig::parse_format("json"), ReportFormat::Json);
    }

    #[test]
    fn test_config_deserializes() {
        let config: ReportConfig = serde_json::from_str(r#"{"format":"json"}"#).unwrap();
        assert_eq!(config.format, ReportFormat::Json);
    }
}
