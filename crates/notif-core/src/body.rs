//! Notification body cleanup
//!
//! Chromium-based browsers prefix web notifications with a paragraph holding
//! an anchor to the originating site (`<a href=...>example.com</a>`). That
//! paragraph is dropped so the body shows only the page's own message.

/// Lowercase name fragments identifying Chromium-derived browsers
pub const CHROMIUM_BROWSERS: &[&str] = &[
    "brave",
    "chrome",
    "chromium",
    "vivaldi",
    "opera",
    "microsoft edge",
];

/// Paragraph separator in notification bodies
const SEGMENT_DELIMITER: &str = "\n\n";

/// Marker of a browser-injected link paragraph
const ANCHOR_PREFIX: &str = "<a";

/// Whether an application name belongs to a Chromium-derived browser
///
/// Matches by case-insensitive substring, so "Google Chrome" and
/// "Brave Browser" both qualify.
pub fn is_chromium_browser(app_name: &str) -> bool {
    let lower = app_name.to_lowercase();
    CHROMIUM_BROWSERS.iter().any(|name| lower.contains(name))
}

/// Strip the browser-injected link paragraph from a body
///
/// The result is always a suffix of `body`: either all of it, or everything
/// after the first paragraph break.
pub fn clean_body<'a>(body: &'a str, app_name: Option<&str>) -> &'a str {
    let Some(app_name) = app_name else {
        return body;
    };
    if !is_chromium_browser(app_name) {
        return body;
    }

    match body.split_once(SEGMENT_DELIMITER) {
        Some((first, rest)) if first.starts_with(ANCHOR_PREFIX) => rest,
        _ => body,
    }
}

/// Cleaned body text; absent or empty bodies become an empty string
pub fn process_notification_body(body: Option<&str>, app_name: Option<&str>) -> String {
    match body {
        None | Some("") => String::new(),
        Some(body) => clean_body(body, app_name).to_string(),
    }
}
