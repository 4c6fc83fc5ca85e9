use crate::logging::LogLevel;

pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 150.0;
pub const BOTTOM_SLACK_PX: f64 = 50.0;
pub const VISIBILITY_THRESHOLD: f64 = 0.15;
pub const FOLLOWER_DURATION_MS: u32 = 800;
pub const FALLBACK_SECTION: &str = "home";
pub const BOTTOM_SECTION: &str = "contact";
pub const STAGGER_STEP_MS: usize = 50;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Thresholds used to derive scroll state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub back_to_top_threshold: f64,
    pub activation_offset: f64,
    pub bottom_slack: f64,
    pub visibility_threshold: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD_PX,
            activation_offset: SECTION_ACTIVATION_OFFSET_PX,
            bottom_slack: BOTTOM_SLACK_PX,
            visibility_threshold: VISIBILITY_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowerConfig {
    pub duration_ms: u32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            duration_ms: FOLLOWER_DURATION_MS,
        }
    }
}

/// Minimum level written by `log_event`, fixed when the crate is built.
pub fn log_level() -> LogLevel {
    parse_log_level(option_env!("PORTFOLIO_LOG_LEVEL"), DEFAULT_LOG_LEVEL)
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    match value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        Some("warn") => LogLevel::Warn,
        Some("error") => LogLevel::Error,
        _ => default,
    }
}
