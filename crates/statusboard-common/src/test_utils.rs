//! Test utilities and shared fixtures for the status board workspace.
//!
//! Enabled for other crates through the `testing` feature.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for creating a fixed timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Discord-related test utilities.
pub mod discord_fixtures {
    use crate::{ChannelId, MessageId, UserId};

    /// Create a test channel ID.
    pub const fn test_channel_id() -> ChannelId {
        ChannelId(123_456_789_012_345_678)
    }

    /// Create a test admin user ID.
    pub const fn test_admin_id() -> UserId {
        UserId(550_322_941_250_895_882)
    }

    /// Create a user ID that is never on an allow-list.
    pub const fn test_outsider_id() -> UserId {
        UserId(987_654_321_098_765_432)
    }

    /// Create a test message ID.
    pub const fn test_message_id() -> MessageId {
        MessageId(1_380_000_000_000_000_001)
    }
}

/// Persisted board state fixtures.
pub mod state_fixtures {
    /// State file as written by older deployments: integer message id,
    /// a status value that is no longer offered.
    pub fn legacy_state_json() -> &'static str {
        r#"{
  "games": {
    "Apex": "undetected",
    "valorant": "high_risk",
    "Rust": "maintenance"
  },
  "message_id": 1380000000000000001
}"#
    }

    /// A hand-edited file that is not valid JSON.
    pub fn corrupt_state_json() -> &'static str {
        r#"{ "games": { "Apex": "undetected", }"#
    }
}
