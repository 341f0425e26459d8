//! ANSI color helpers for terminal output
//!
//! Coloring is switched on or off globally in `main`, so these helpers
//! always apply styles.

use colored::Colorize;

/// Get colored relative time label
pub fn colored_time(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed == "Just now" {
        label.green().to_string()
    } else if trimmed.ends_with(" ago") {
        label.yellow().to_string()
    } else {
        label.white().dimmed().to_string()
    }
}

/// Get colored application name
pub fn colored_app(name: &str) -> String {
    name.cyan().bold().to_string()
}

/// Get colored header
pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Get colored label
pub fn label(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Get colored success message
pub fn success(text: &str) -> String {
    format!("{} {}", "✓".green(), text)
}

/// Get colored warning message
pub fn warning(text: &str) -> String {
    format!("{} {}", "⚠".yellow(), text)
}
