//! Display settings shared by the views.

use time::macros::{format_description, offset};
use time::UtcOffset;

pub const DISPLAY_OFFSET_VAR: &str = "KEYSCORE_DISPLAY_UTC_OFFSET";

/// Brasília time, where the dashboard's users are.
pub const DEFAULT_DISPLAY_OFFSET: UtcOffset = offset!(-3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Offset timestamps are converted to before display.
    pub utc_offset: UtcOffset,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            utc_offset: DEFAULT_DISPLAY_OFFSET,
        }
    }
}

impl ViewConfig {
    /// Read [`DISPLAY_OFFSET_VAR`] from the environment (or the compile-time
    /// value on wasm). Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        let raw = std::env::var(DISPLAY_OFFSET_VAR)
            .ok()
            .or_else(|| option_env!("KEYSCORE_DISPLAY_UTC_OFFSET").map(str::to_string));
        Self::from_value(raw.as_deref())
    }

    pub fn from_value(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match parse_offset(raw) {
            Some(utc_offset) => Self { utc_offset },
            None => {
                tracing::warn!(value = raw, "ignoring invalid {DISPLAY_OFFSET_VAR}; expected ±HH:MM");
                Self::default()
            }
        }
    }
}

/// Parse `±HH:MM` (also accepts `Z`).
pub fn parse_offset(raw: &str) -> Option<UtcOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") {
        return Some(UtcOffset::UTC);
    }
    UtcOffset::parse(
        raw,
        &format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .ok()
}
