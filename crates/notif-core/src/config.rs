//! Display configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::date::{CalendarDateFormatter, TimeZoneChoice, DEFAULT_DATE_FORMAT};
use crate::errors::CoreError;

/// How notification times are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// strftime pattern for notifications a week or older
    pub date_format: String,

    /// Time zone for calendar dates
    pub timezone: TimeZoneChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timezone: TimeZoneChoice::Local,
        }
    }
}

impl Config {
    /// Parse a JSON config document
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the calendar date formatter this config describes
    pub fn date_formatter(&self) -> Result<CalendarDateFormatter, CoreError> {
        CalendarDateFormatter::new(self.date_format.clone(), self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateFormatter;
    use std::io::Write;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::from_json(r#"{"timezone":"utc","unknown":true}"#).unwrap();
        assert_eq!(config.timezone, TimeZoneChoice::Utc);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"date_format":"%d.%m.%Y","timezone":"utc"}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        let dates = config.date_formatter().unwrap();
        assert_eq!(dates.format_date(1_710_428_966_000), "14.03.2024");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_bad_timezone_is_json_error() {
        assert!(matches!(
            Config::from_json(r#"{"timezone":"mars"}"#),
            Err(CoreError::Json(_))
        ));
    }
}
