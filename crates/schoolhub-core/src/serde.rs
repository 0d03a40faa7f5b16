use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Accepts either a calendar date (`2001-04-12`) or an RFC 3339 timestamp
/// (`2001-04-12T00:00:00.000Z`) and keeps the date part.
pub fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible_date(&raw).map_err(serde::de::Error::custom)
}

pub fn parse_flexible_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| format!("invalid date: {}", raw))
}
