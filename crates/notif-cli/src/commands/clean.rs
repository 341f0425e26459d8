//! Body cleanup for a single notification

use anyhow::Result;
use notif_core::process_notification_body;

use super::read_input;
use crate::cli::{Cli, OutputFormat};
use crate::output::json;

pub fn run(cli: &Cli, body: Option<&str>, app: Option<&str>) -> Result<()> {
    let stdin_body;
    let body = match body {
        Some(body) => body,
        None => {
            stdin_body = read_input(None)?;
            strip_final_newline(&stdin_body)
        }
    };

    let cleaned = process_notification_body(Some(body), app);
    if cleaned.len() != body.len() {
        tracing::info!(app = app.unwrap_or(""), "removed link paragraph");
    }

    match cli.effective_format() {
        OutputFormat::Json => json::print(&json::clean_to_json(app, body, &cleaned), cli.pretty),
        OutputFormat::Human | OutputFormat::Minimal => {
            println!("{}", cleaned);
            Ok(())
        }
    }
}

/// Drop the newline a shell pipeline appends, keeping any paragraph breaks
fn strip_final_newline(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_final_newline() {
        assert_eq!(strip_final_newline("body\n"), "body");
        assert_eq!(strip_final_newline("body\r\n"), "body");
        assert_eq!(strip_final_newline("a\n\nb\n\n"), "a\n\nb\n");
        assert_eq!(strip_final_newline("body"), "body");
    }
}
