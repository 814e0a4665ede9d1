use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::error::{Result, ShelfLifeError};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Milliseconds with sub-millisecond precision where the delta fits in nanoseconds.
fn fractional_millis(delta: TimeDelta) -> f64 {
    match delta.num_nanoseconds() {
        Some(ns) => ns as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64,
    }
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ShelfLifeError::InvalidTimestamp(s.to_string()))
}

/// Fraction of the manufacturing-to-expiry lifespan still ahead of `now`, 0–100.
///
/// Callers must reject `expires <= manufactured` before calling.
pub fn remaining_life_percentage(
    manufactured: DateTime<Utc>,
    expires: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let remaining = expires - now;
    if remaining <= TimeDelta::zero() {
        return 0.0;
    }
    if now - manufactured <= TimeDelta::zero() {
        return 100.0;
    }
    let total = fractional_millis(expires - manufactured);
    (fractional_millis(remaining) / total * 100.0).clamp(0.0, 100.0)
}

/// Whole days until expiry, rounded up and floored at zero.
///
/// Computed independently of [`remaining_life_percentage`]; near expiry the two
/// can disagree.
pub fn days_until_expiry(expires: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let diff_days = (fractional_millis(expires - now) / MS_PER_DAY).ceil();
    if diff_days <= 0.0 {
        0
    } else if diff_days >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        diff_days as u32
    }
}

/// Serde adapter for product timestamps: reads RFC 3339 or `YYYY-MM-DD`,
/// writes RFC 3339.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn parses_bare_dates_as_utc_midnight() {
        assert_eq!(ts("2024-01-31"), ts("2024-01-31T00:00:00Z"));
    }

    #[test]
    fn parses_offsets() {
        assert_eq!(ts("2024-01-01T02:00:00+02:00"), ts("2024-01-01"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_timestamp("next tuesday"),
            Err(ShelfLifeError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn percentage_mid_life() {
        let pct = remaining_life_percentage(ts("2024-01-01"), ts("2024-01-31"), ts("2024-01-25"));
        assert_eq!(pct, 20.0);
    }

    #[test]
    fn percentage_at_or_before_manufacture_is_full() {
        let mfg = ts("2024-01-01");
        let exp = ts("2024-01-31");
        assert_eq!(remaining_life_percentage(mfg, exp, mfg), 100.0);
        assert_eq!(remaining_life_percentage(mfg, exp, ts("2023-12-01")), 100.0);
    }

    #[test]
    fn percentage_at_or_after_expiry_is_zero() {
        let mfg = ts("2024-01-01");
        let exp = ts("2024-01-31");
        assert_eq!(remaining_life_percentage(mfg, exp, exp), 0.0);
        assert_eq!(remaining_life_percentage(mfg, exp, ts("2024-03-01")), 0.0);
    }

    #[test]
    fn days_round_up_partial_days() {
        let exp = ts("2024-01-31");
        assert_eq!(days_until_expiry(exp, ts("2024-01-30T23:00:00Z")), 1);
        assert_eq!(days_until_expiry(exp, ts("2024-01-24")), 7);
        assert_eq!(days_until_expiry(exp, ts("2024-01-23T12:00:00Z")), 8);
    }

    #[test]
    fn sub_millisecond_offsets_are_not_truncated() {
        let mfg = ts("2024-01-01");
        let exp = ts("2024-01-31");

        let just_after_mfg = ts("2024-01-01T00:00:00.000900Z");
        let pct = remaining_life_percentage(mfg, exp, just_after_mfg);
        assert!(pct < 100.0, "got {pct}");
        assert!(pct > 99.9);

        let just_before_exp = ts("2024-01-30T23:59:59.999100Z");
        assert!(remaining_life_percentage(mfg, exp, just_before_exp) > 0.0);
        assert_eq!(days_until_expiry(exp, just_before_exp), 1);
    }

    #[test]
    fn days_never_negative() {
        let exp = ts("2024-01-31");
        assert_eq!(days_until_expiry(exp, exp), 0);
        assert_eq!(days_until_expiry(exp, ts("2024-02-10")), 0);
    }
}
