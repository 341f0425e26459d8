//! Relative time labels for raw timestamps

use anyhow::Result;
use notif_core::parse_timestamp;

use super::Times;
use crate::cli::{Cli, OutputFormat};
use crate::output::{human, json};

pub fn run(cli: &Cli, times: &Times, timestamps: &[String]) -> Result<()> {
    let format = cli.effective_format();

    for raw in timestamps {
        let timestamp = parse_timestamp(raw)?;
        let label = times.format(timestamp);
        tracing::debug!(timestamp, bucket = ?times.classify(timestamp), "labelled");

        match format {
            OutputFormat::Json => {
                json::print(&json::time_to_json(timestamp, &label), cli.pretty)?;
            }
            OutputFormat::Human => println!("{}", human::format_time(timestamp, &label)),
            OutputFormat::Minimal => println!("{}", label),
        }
    }

    Ok(())
}
