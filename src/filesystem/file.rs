// src/filesystem/file.rs
use super::Item;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Accepts RFC 3339, RFC 2822, a handful of naive date-time layouts (read as
/// UTC), a bare `YYYY-MM-DD` date, or integer milliseconds since the epoch.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }
    raw.parse::<i64>().ok().and_then(|millis| Utc.timestamp_millis_opt(millis).single())
}

impl Item {
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Sort key for `updatedAt`. Unparseable values count as the epoch and
    /// are reported once per call.
    pub fn updated_millis(&self) -> i64 {
        match self.updated() {
            Some(dt) => dt.timestamp_millis(),
            None => {
                tracing::warn!(item = %self.id, raw = %self.updated_at, "invalid updatedAt, sorting as epoch");
                0
            }
        }
    }
}
