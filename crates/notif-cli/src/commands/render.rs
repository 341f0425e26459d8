//! Render a batch of notifications

use anyhow::{bail, Result};
use notif_core::parse_notifications;
use std::path::Path;

use super::{read_input, Times};
use crate::cli::{Cli, OutputFormat};
use crate::output::{colors, human, json, minimal};

pub fn run(cli: &Cli, times: &Times, file: Option<&Path>, strict: bool) -> Result<()> {
    let input = read_input(file)?;
    let outcome = parse_notifications(&input);

    if !outcome.errors.is_empty() {
        for (line, err) in &outcome.errors {
            eprintln!("{}", colors::warning(&format!("line {}: {}", line, err)));
        }
        if strict {
            bail!("{} notification(s) failed to parse", outcome.errors.len());
        }
    }

    let views: Vec<_> = outcome
        .notifications
        .iter()
        .map(|notification| notification.view(times))
        .collect();
    tracing::info!(count = views.len(), "rendered notifications");

    match cli.effective_format() {
        OutputFormat::Human => {
            if views.is_empty() {
                println!("No notifications");
            } else {
                println!("{}", colors::header(&format!("Notifications ({})", views.len())));
                println!();
                for view in &views {
                    println!("{}", human::format_view(view));
                }
            }
        }
        OutputFormat::Json => {
            for view in &views {
                json::print(&json::view_to_json(view)?, cli.pretty)?;
            }
        }
        OutputFormat::Minimal => {
            for view in &views {
                println!("{}", minimal::format_view(view));
            }
        }
    }

    Ok(())
}
