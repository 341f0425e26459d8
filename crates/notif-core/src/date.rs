//! Calendar date rendering for old notifications

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::errors::CoreError;

/// Short numeric date, e.g. `3/14/2024`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Returned when a timestamp cannot be placed on the calendar
pub const INVALID_DATE: &str = "Invalid Date";

/// Renders a millisecond timestamp as a calendar date (no time of day)
pub trait DateFormatter {
    fn format_date(&self, timestamp: i64) -> String;
}

/// Time zone used when rendering dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneChoice {
    /// Host local time zone
    #[default]
    Local,
    Utc,
}

/// strftime-based formatter in the local or UTC time zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDateFormatter {
    pattern: String,
    zone: TimeZoneChoice,
}

impl CalendarDateFormatter {
    /// Create a formatter, rejecting patterns chrono cannot parse
    pub fn new(pattern: impl Into<String>, zone: TimeZoneChoice) -> Result<Self, CoreError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(CoreError::InvalidDateFormat(pattern));
        }
        Ok(Self { pattern, zone })
    }

    /// Default pattern in the host time zone
    pub fn local() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            zone: TimeZoneChoice::Local,
        }
    }

    /// Default pattern in UTC
    pub fn utc() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            zone: TimeZoneChoice::Utc,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn zone(&self) -> TimeZoneChoice {
        self.zone
    }

    fn render<Tz>(&self, zone: &Tz, timestamp: i64) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let Some(dt) = zone.timestamp_millis_opt(timestamp).single() else {
            return INVALID_DATE.to_string();
        };
        let mut out = String::new();
        if write!(out, "{}", dt.format(&self.pattern)).is_err() {
            return INVALID_DATE.to_string();
        }
        out
    }
}

impl Default for CalendarDateFormatter {
    fn default() -> Self {
        Self::local()
    }
}

impl DateFormatter for CalendarDateFormatter {
    fn format_date(&self, timestamp: i64) -> String {
        match self.zone {
            TimeZoneChoice::Local => self.render(&Local, timestamp),
            TimeZoneChoice::Utc => self.render(&Utc, timestamp),
        }
    }
}

impl<D: DateFormatter + ?Sized> DateFormatter for &D {
    fn format_date(&self, timestamp: i64) -> String {
        (**self).format_date(timestamp)
    }
}
