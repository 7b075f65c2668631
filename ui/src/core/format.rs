//! Formatting helpers for presenting results.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Percentage with no trailing `.0`: `97.0` → `97%`, `97.5` → `97.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// `dd/MM/yyyy HH:mm` in the given offset.
///
/// Timestamps without an offset are taken to already be in `offset`. Input
/// that does not parse, or cannot be shifted into `offset`, is shown as-is.
pub fn format_created_at(raw: &str, offset: UtcOffset) -> String {
    let Some(moment) = parse_timestamp(raw, offset) else {
        tracing::warn!(created_at = raw, "unparseable result timestamp");
        return raw.to_string();
    };

    let Some(local) = moment.checked_to_offset(offset) else {
        tracing::warn!(created_at = raw, "result timestamp out of range in display offset");
        return raw.to_string();
    };

    local
        .format(&format_description!("[day]/[month]/[year] [hour]:[minute]"))
        .unwrap_or_else(|_| raw.to_string())
}

fn parse_timestamp(raw: &str, offset: UtcOffset) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(moment);
    }
    PrimitiveDateTime::parse(
        raw,
        &format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        ),
    )
    .ok()
    .map(|naive| naive.assume_offset(offset))
}
