//! CLI argument definitions for notif

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Format desktop notifications for display
#[derive(Parser, Debug)]
#[command(name = "notif")]
#[command(author = "Claude Code SDK")]
#[command(version)]
#[command(about = "Relative time labels and body cleanup for desktop notifications")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true, env = "NOTIF_CONFIG")]
    pub config: Option<PathBuf>,

    /// strftime pattern for notifications a week or older
    #[arg(long, global = true)]
    pub date_format: Option<String>,

    /// Render calendar dates in UTC instead of local time
    #[arg(long, global = true)]
    pub utc: bool,

    /// Treat this instant (epoch milliseconds) as now
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub now: Option<i64>,

    /// Output format (auto-detects based on TTY if not specified)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Output JSON (alias for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON with indentation
    #[arg(long, short = 'p', global = true)]
    pub pretty: bool,

    /// Force color output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log progress to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Get the effective output format
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        if let Some(f) = self.format {
            return f;
        }
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Human
        } else {
            OutputFormat::Json
        }
    }

    /// Check if colors should be used
    pub fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        if self.color {
            return true;
        }
        atty::is(atty::Stream::Stdout)
    }
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output (one object per line)
    Json,
    /// Formatted text only
    Minimal,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Relative time label for one or more timestamps
    Time {
        /// Epoch milliseconds or RFC 3339 timestamps
        #[arg(required = true, allow_negative_numbers = true)]
        timestamps: Vec<String>,
    },

    /// Strip browser-injected link paragraphs from a notification body
    Clean {
        /// Notification body (read from stdin if omitted)
        body: Option<String>,

        /// Name of the application that sent the notification
        #[arg(short, long)]
        app: Option<String>,
    },

    /// Render notifications from a JSON array or JSON Lines file
    Render {
        /// Input file (read from stdin if omitted or "-")
        file: Option<PathBuf>,

        /// Exit with an error if any line fails to parse
        #[arg(long)]
        strict: bool,
    },

    /// List the browsers whose notifications get cleaned
    Browsers {
        /// Check whether an application name matches
        #[arg(long)]
        check: Option<String>,
    },
}
