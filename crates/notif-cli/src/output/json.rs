//! JSON output formatting

use anyhow::Result;
use notif_core::NotificationView;
use serde_json::{json, Value};

/// Print a JSON value on its own line
pub fn print(value: &Value, pretty: bool) -> Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}

/// Output a timestamp label as JSON
pub fn time_to_json(timestamp: i64, label: &str) -> Value {
    json!({
        "timestamp": timestamp,
        "time": label,
    })
}

/// Output a cleaned body as JSON
pub fn clean_to_json(app: Option<&str>, original: &str, cleaned: &str) -> Value {
    json!({
        "appName": app,
        "body": cleaned,
        "changed": original != cleaned,
    })
}

/// Output a notification view as JSON
pub fn view_to_json(view: &NotificationView) -> Result<Value> {
    Ok(serde_json::to_value(view)?)
}
