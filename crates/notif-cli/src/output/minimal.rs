//! Minimal text output formatting

use notif_core::NotificationView;

/// Maximum body preview width
const PREVIEW_LENGTH: usize = 80;

/// Format a notification view as one tab-separated line
pub fn format_view(view: &NotificationView) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        view.time,
        view.app_name.as_deref().unwrap_or(""),
        view.summary.as_deref().unwrap_or(""),
        view.preview(PREVIEW_LENGTH)
    )
}
