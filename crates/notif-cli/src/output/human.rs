//! Human-readable output formatting

use super::colors::*;
use colored::Colorize;
use notif_core::NotificationView;

/// Format a timestamp and its label
pub fn format_time(timestamp: i64, time_label: &str) -> String {
    format!("{} {}", label(&format!("{:>15}", timestamp)), colored_time(time_label))
}

/// Format a notification view: header line, then the indented body
pub fn format_view(view: &NotificationView) -> String {
    let mut parts = Vec::new();

    parts.push(colored_time(&format!("{:>12}", view.time)));

    if let Some(app) = &view.app_name {
        parts.push(colored_app(app));
    }

    if let Some(summary) = &view.summary {
        parts.push(summary.bold().to_string());
    }

    let header = parts.join(" ");

    if view.body.is_empty() {
        return header;
    }

    let indent = "  ";
    let body = view
        .body
        .lines()
        .map(|l| format!("{}{}", indent, l))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(body: &str) -> NotificationView {
        NotificationView {
            id: Some(1),
            app_name: Some("Slack".to_string()),
            summary: Some("Alice".to_string()),
            body: body.to_string(),
            time: "5 mins ago".to_string(),
        }
    }

    #[test]
    fn test_format_view_indents_body() {
        colored::control::set_override(false);
        let out = format_view(&view("hi\n\nthere"));
        assert_eq!(out, "  5 mins ago Slack Alice\n  hi\n  \n  there");
    }

    #[test]
    fn test_format_view_without_body() {
        colored::control::set_override(false);
        assert_eq!(format_view(&view("")), "  5 mins ago Slack Alice");
    }
}
