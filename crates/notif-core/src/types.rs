//! Core type definitions

use serde::{Deserialize, Serialize};

use crate::body::process_notification_body;
use crate::clock::Clock;
use crate::date::DateFormatter;
use crate::relative::RelativeTimeFormatter;

/// A notification as received from the notification server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(alias = "appName", default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// Milliseconds since the Unix epoch
    #[serde(alias = "time")]
    pub timestamp: i64,
}

impl Notification {
    pub fn new(timestamp: i64) -> Self {
        Self {
            id: None,
            app_name: None,
            summary: None,
            body: None,
            timestamp,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Body with any browser-injected link paragraph removed
    pub fn display_body(&self) -> String {
        process_notification_body(self.body.as_deref(), self.app_name.as_deref())
    }

    /// Presentation form: cleaned body and relative time label
    pub fn view<C: Clock, D: DateFormatter>(
        &self,
        times: &RelativeTimeFormatter<C, D>,
    ) -> NotificationView {
        NotificationView {
            id: self.id,
            app_name: self.app_name.clone(),
            summary: self.summary.clone(),
            body: self.display_body(),
            time: times.format(self.timestamp),
        }
    }
}

/// A notification ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub id: Option<u64>,
    pub app_name: Option<String>,
    pub summary: Option<String>,
    pub body: String,
    pub time: String,
}

impl NotificationView {
    /// First line of the body, truncated to `max_len` characters
    pub fn preview(&self, max_len: usize) -> String {
        let preview = self.body.lines().next().unwrap_or("").trim();
        let chars: Vec<char> = preview.chars().collect();
        if chars.len() <= max_len {
            preview.to_string()
        } else if max_len < 3 {
            chars[..max_len].iter().collect()
        } else {
            let truncated: String = chars[..max_len.saturating_sub(3)].iter().collect();
            format!("{}...", truncated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::date::CalendarDateFormatter;

    const NOW: i64 = 1_710_428_966_000;

    #[test]
    fn test_view_cleans_body_and_labels_time() {
        let times = RelativeTimeFormatter::with_parts(FixedClock(NOW), CalendarDateFormatter::utc());
        let notif = Notification::new(NOW - 5 * 60_000)
            .with_id(7)
            .with_app_name("Google Chrome")
            .with_summary("New message")
            .with_body("<a href=\"https://chat.example\">chat.example</a>\n\nhey there");

        let view = notif.view(&times);
        assert_eq!(view.id, Some(7));
        assert_eq!(view.body, "hey there");
        assert_eq!(view.time, "5 mins ago");
        assert_eq!(view.summary.as_deref(), Some("New message"));
    }

    #[test]
    fn test_missing_body_displays_empty() {
        assert_eq!(Notification::new(0).with_app_name("chrome").display_body(), "");
    }

    #[test]
    fn test_deserialize_accepts_camel_case_aliases() {
        let notif: Notification =
            serde_json::from_str(r#"{"appName":"Slack","body":"hi","time":1000}"#).unwrap();
        assert_eq!(notif.app_name.as_deref(), Some("Slack"));
        assert_eq!(notif.timestamp, 1000);
        assert_eq!(notif.id, None);
    }

    #[test]
    fn test_preview_truncates_first_line() {
        let view = NotificationView {
            id: None,
            app_name: None,
            summary: None,
            body: "a rather long first line\nsecond".to_string(),
            time: "Just now".to_string(),
        };
        assert_eq!(view.preview(10), "a rathe...");
        assert_eq!(view.preview(100), "a rather long first line");
    }

    #[test]
    fn test_preview_never_exceeds_max_len() {
        let view = NotificationView {
            id: None,
            app_name: None,
            summary: None,
            body: "hello".to_string(),
            time: "Just now".to_string(),
        };
        assert_eq!(view.preview(0), "");
        assert_eq!(view.preview(2), "he");
        assert_eq!(view.preview(3), "...");
        assert_eq!(view.preview(4), "h...");
        assert_eq!(view.preview(5), "hello");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = NotificationView {
            id: Some(3),
            app_name: Some("Brave".to_string()),
            summary: None,
            body: "hi".to_string(),
            time: "Just now".to_string(),
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["appName"], "Brave");
        assert_eq!(value["time"], "Just now");
        assert!(value.get("app_name").is_none());
    }
}
