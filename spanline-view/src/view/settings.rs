//! Tunables for view composition
//!
//! Defaults here mirror `spanline-config`'s embedded TOML; the config crate
//! deserializes user files and hands a `ComposeSettings` to compose().

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Proportion of the event date range added as margin on each side of the
/// visible window.
pub const MARGIN_RATIO: f64 = 0.2;

/// Minimum zoom granularity: a fixed one-hour floor. (The alternative,
/// range-proportional floor is deliberately not implemented; this constant
/// is the documented policy and is overridable via configuration.)
pub const DEFAULT_ZOOM_FLOOR_SECS: i64 = 3600;

/// Width of the fallback window used when no event carries a date.
pub const DEFAULT_FALLBACK_WINDOW_DAYS: i64 = 14;

/// Fill applied to background lane elements by the refinement pass.
pub const DEFAULT_LANE_TINT: &str = "light-gray";

/// Knobs consumed by window math and refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeSettings {
    pub margin_ratio: f64,
    pub zoom_floor_secs: i64,
    /// Center of the fallback window when the event set has no dates.
    pub fallback_reference: NaiveDateTime,
    pub fallback_window_days: i64,
    pub lane_tint: String,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        ComposeSettings {
            margin_ratio: MARGIN_RATIO,
            zoom_floor_secs: DEFAULT_ZOOM_FLOOR_SECS,
            fallback_reference: NaiveDate::from_ymd_opt(2000, 1, 1)
                .expect("fallback reference date is valid")
                .and_time(NaiveTime::MIN),
            fallback_window_days: DEFAULT_FALLBACK_WINDOW_DAYS,
            lane_tint: DEFAULT_LANE_TINT.to_string(),
        }
    }
}
