//! notif - CLI for formatting desktop notifications

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use notif_core::{
    Clock, Config, FixedClock, RelativeTimeFormatter, SystemClock, TimeZoneChoice,
};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    colored::control::set_override(cli.use_color());

    let config = load_config(&cli)?;
    let dates = config
        .date_formatter()
        .context("Invalid date format in configuration")?;

    // Freeze "now" once so every label in a run shares the same reference
    let now = cli.now.unwrap_or_else(|| SystemClock.now_millis());
    tracing::info!(now, zone = ?config.timezone, pattern = %config.date_format, "formatting");
    let times = RelativeTimeFormatter::with_parts(FixedClock(now), dates);

    match &cli.command {
        Command::Time { timestamps } => commands::time::run(&cli, &times, timestamps),

        Command::Clean { body, app } => {
            commands::clean::run(&cli, body.as_deref(), app.as_deref())
        }

        Command::Render { file, strict } => {
            commands::render::run(&cli, &times, file.as_deref(), *strict)
        }

        Command::Browsers { check } => commands::browsers::run(&cli, check.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            Config::load(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        }
        None => Config::default(),
    };

    Ok(apply_overrides(config, cli))
}

/// Command-line flags take precedence over the config file
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(pattern) = &cli.date_format {
        config.date_format = pattern.clone();
    }
    if cli.utc {
        config.timezone = TimeZoneChoice::Utc;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use notif_core::DEFAULT_DATE_FORMAT;
    use std::io::Write;

    fn config_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"date_format":"%d.%m.%Y","timezone":"local"}}"#).unwrap();
        file
    }

    #[test]
    fn test_flags_override_file() {
        let file = config_file();
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "notif", "--config", path, "--utc", "--date-format", "%Y", "browsers",
        ]);

        let config = load_config(&cli).unwrap();
        assert_eq!(config.date_format, "%Y");
        assert_eq!(config.timezone, TimeZoneChoice::Utc);
    }

    #[test]
    fn test_file_values_kept_without_flags() {
        let file = config_file();
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["notif", "--config", path, "browsers"]);

        let config = load_config(&cli).unwrap();
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert_eq!(config.timezone, TimeZoneChoice::Local);
    }

    #[test]
    fn test_each_flag_applies_alone() {
        let cli = Cli::parse_from(["notif", "--utc", "browsers"]);
        let config = apply_overrides(Config::default(), &cli);
        assert_eq!(config.timezone, TimeZoneChoice::Utc);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);

        let cli = Cli::parse_from(["notif", "--date-format", "%Y", "browsers"]);
        let config = apply_overrides(Config::default(), &cli);
        assert_eq!(config.timezone, TimeZoneChoice::Local);
        assert_eq!(config.date_format, "%Y");
    }

    #[test]
    fn test_missing_config_path_uses_defaults() {
        let cli = Cli::parse_from(["notif", "browsers"]);
        assert_eq!(load_config(&cli).unwrap(), Config::default());
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let cli = Cli::parse_from(["notif", "--config", missing.to_str().unwrap(), "browsers"]);

        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config from"));
    }
}
