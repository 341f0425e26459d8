//! Command implementations

pub mod browsers;
pub mod clean;
pub mod render;
pub mod time;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Shared formatter type: frozen clock, configured calendar dates
pub type Times = notif_core::RelativeTimeFormatter<
    notif_core::FixedClock,
    notif_core::CalendarDateFormatter,
>;

/// Read a file, or stdin when the path is absent or "-"
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"timestamp\":1}}").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "{\"timestamp\":1}");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.jsonl");
        let err = read_input(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
