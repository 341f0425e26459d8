//! Parsing notifications from JSON arrays or JSON Lines

use std::path::Path;

use crate::errors::CoreError;
use crate::types::Notification;

/// Result of parsing a batch of notifications
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Successfully parsed notifications, in input order
    pub notifications: Vec<Notification>,
    /// 1-based line number and error for every rejected line
    pub errors: Vec<(usize, CoreError)>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a single JSON object into a notification
pub fn parse_notification(raw: &str) -> Result<Notification, CoreError> {
    Ok(serde_json::from_str(raw)?)
}

/// Parse either a JSON array of notifications or one notification per line
///
/// Bad lines are collected rather than aborting the batch. A malformed array
/// is reported as a single error on line 1.
pub fn parse_notifications(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    if input.trim_start().starts_with('[') {
        match serde_json::from_str::<Vec<Notification>>(input) {
            Ok(notifications) => outcome.notifications = notifications,
            Err(e) => {
                tracing::warn!(error = %e, "rejected notification array");
                outcome.errors.push((1, e.into()));
            }
        }
        return outcome;
    }

    for (index, raw) in input.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        match parse_notification(raw) {
            Ok(notification) => outcome.notifications.push(notification),
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping notification line");
                outcome.errors.push((index + 1, e));
            }
        }
    }

    tracing::debug!(
        parsed = outcome.notifications.len(),
        rejected = outcome.errors.len(),
        "parsed notification lines"
    );
    outcome
}

/// Parse a timestamp given as epoch milliseconds or an RFC 3339 string
pub fn parse_timestamp(raw: &str) -> Result<i64, CoreError> {
    let raw = raw.trim();
    if let Ok(millis) = raw.parse::<i64>() {
        return Ok(millis);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| CoreError::InvalidTimestamp(raw.to_string()))
}

/// Parse a notifications file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseOutcome, CoreError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_notifications(&content))
}
