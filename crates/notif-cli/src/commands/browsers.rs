//! Known Chromium-derived browsers

use anyhow::Result;
use notif_core::{is_chromium_browser, CHROMIUM_BROWSERS};
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::output::{colors, json as json_out};

pub fn run(cli: &Cli, check: Option<&str>) -> Result<()> {
    let format = cli.effective_format();

    if let Some(app) = check {
        let matched = is_chromium_browser(app);
        return match format {
            OutputFormat::Json => {
                json_out::print(&json!({ "app": app, "chromium": matched }), cli.pretty)
            }
            OutputFormat::Minimal => {
                println!("{}", matched);
                Ok(())
            }
            OutputFormat::Human => {
                if matched {
                    println!("{}", colors::success(&format!("{} bodies are cleaned", app)));
                } else {
                    println!("{}", colors::warning(&format!("{} bodies are left as-is", app)));
                }
                Ok(())
            }
        };
    }

    match format {
        OutputFormat::Json => json_out::print(&json!(CHROMIUM_BROWSERS), cli.pretty)?,
        OutputFormat::Human => {
            println!("{}", colors::header("Chromium-derived browsers"));
            println!();
            for name in CHROMIUM_BROWSERS {
                println!("  {}", colors::colored_app(name));
            }
        }
        OutputFormat::Minimal => {
            for name in CHROMIUM_BROWSERS {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
