//! Pure helpers mapping raw record fields to display semantics.
//!
//! Several views render the same fields; keeping the mapping here is what
//! keeps them agreeing on it. No state, no side effects.

use chrono::{DateTime, NaiveDate};

/// Swatch used when no color text is available.
const NEUTRAL_SWATCH: &str = "#6B7280";

/// Known color names, checked in order; the first substring match wins.
const COLOR_RULES: &[(&str, &str)] = &[
    ("black", "#111827"),
    ("white", "#F9FAFB"),
    ("brown", "#8B5E3C"),
    ("gold", "#D4A373"),
    ("gray", "#94A3B8"),
    ("grey", "#94A3B8"),
    ("tan", "#DDB892"),
    ("beige", "#F5E6D3"),
    ("orange", "#F97316"),
    ("red", "#EF4444"),
];

/// Friendly date rendering. Empty input reads as "Not specified";
/// calendar dates and RFC 3339 instants format as `M/D/YYYY`; anything
/// unparseable is echoed back unchanged.
pub fn format_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "Not specified".to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return instant.date_naive().format("%-m/%-d/%Y").to_string();
    }
    value.to_string()
}

/// Maps a free-form color description to a concrete display color.
///
/// Known color names match case-insensitively anywhere in the text, so
/// "Golden" and "golden retriever color" land on the same gold swatch.
/// Unknown descriptions get a hue derived from a rolling hash of the text,
/// stable across runs, so distinct strings keep distinct but reproducible
/// swatches.
pub fn color_to_swatch(text: &str) -> String {
    if text.is_empty() {
        return NEUTRAL_SWATCH.to_string();
    }
    let lowered = text.to_lowercase();
    for (name, hex) in COLOR_RULES {
        if lowered.contains(name) {
            return (*hex).to_string();
        }
    }
    format!("hsl({} 60% 55%)", fallback_hue(text))
}

/// 32-bit polynomial rolling hash over UTF-16 code units, modulo 360.
fn fallback_hue(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = (unit as i32).wrapping_add((hash << 5).wrapping_sub(hash));
    }
    hash.unsigned_abs() % 360
}
