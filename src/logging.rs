use std::cmp::Ordering;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if let Some(line) = format_event(config::log_level(), level, event, fields, now_unix_seconds()) {
        write_line(&line);
    }
}

/// Renders one log line, or `None` when `level` is below `min_level`.
/// Non-object `fields` are dropped.
fn format_event(
    min_level: LogLevel,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
    ts: u64,
) -> Option<String> {
    if level < min_level {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload).to_string())
}

#[cfg(target_arch = "wasm32")]
fn write_line(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}
