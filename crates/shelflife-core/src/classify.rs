use chrono::{DateTime, SecondsFormat, Utc};

use crate::dates;
use crate::error::{Result, ShelfLifeError};
use crate::types::{FreshnessResult, Product, Tag};

/// Upper bound (inclusive) of the Critical band, in remaining-life percent.
pub const CRITICAL_MAX_PERCENT: f64 = 20.0;

/// Upper bound (inclusive) of the Warning band, in remaining-life percent.
pub const WARNING_MAX_PERCENT: f64 = 49.0;

/// Map a remaining-life percentage to its tag. Total over [0, 100].
pub fn tag_for_percentage(percentage: f64) -> Tag {
    if percentage <= CRITICAL_MAX_PERCENT {
        Tag::Critical
    } else if percentage <= WARNING_MAX_PERCENT {
        Tag::Warning
    } else {
        Tag::Good
    }
}

/// Classify a product's freshness at `now`.
pub fn classify(product: &Product, now: DateTime<Utc>) -> Result<FreshnessResult> {
    if product.expiry_date <= product.manufacturing_date {
        return Err(ShelfLifeError::InvalidDateRange {
            id: product.id.clone(),
            manufactured: product
                .manufacturing_date
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            expires: product.expiry_date.to_rfc3339_opts(SecondsFormat::Secs, true),
        });
    }

    let percentage =
        dates::remaining_life_percentage(product.manufacturing_date, product.expiry_date, now);
    let days = dates::days_until_expiry(product.expiry_date, now);
    let tag = tag_for_percentage(percentage);

    tracing::debug!(
        product_id = %product.id,
        percentage,
        days_until_expiry = days,
        tag = tag.as_str(),
        "classified product"
    );

    Ok(FreshnessResult {
        remaining_life_percentage: percentage,
        days_until_expiry: days,
        tag,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::product;
    use super::*;
    use crate::dates::parse_timestamp;

    #[test]
    fn tag_boundaries() {
        assert_eq!(tag_for_percentage(0.0), Tag::Critical);
        assert_eq!(tag_for_percentage(20.0), Tag::Critical);
        assert_eq!(tag_for_percentage(20.0001), Tag::Warning);
        assert_eq!(tag_for_percentage(21.0), Tag::Warning);
        assert_eq!(tag_for_percentage(49.0), Tag::Warning);
        assert_eq!(tag_for_percentage(49.5), Tag::Good);
        assert_eq!(tag_for_percentage(50.0), Tag::Good);
        assert_eq!(tag_for_percentage(100.0), Tag::Good);
    }

    #[test]
    fn late_in_life_is_critical() {
        let p = product("milk", "2024-01-01", "2024-01-31", 1.0, 1);
        let result = classify(&p, parse_timestamp("2024-01-25").unwrap()).unwrap();
        assert_eq!(result.remaining_life_percentage, 20.0);
        assert_eq!(result.days_until_expiry, 6);
        assert_eq!(result.tag, Tag::Critical);
    }

    #[test]
    fn fresh_on_manufacture_day() {
        let p = product("milk", "2024-01-01", "2024-01-31", 1.0, 1);
        let result = classify(&p, parse_timestamp("2024-01-01").unwrap()).unwrap();
        assert_eq!(result.remaining_life_percentage, 100.0);
        assert_eq!(result.days_until_expiry, 30);
        assert_eq!(result.tag, Tag::Good);
    }

    #[test]
    fn expired_product_is_zero_everywhere() {
        let p = product("milk", "2024-01-01", "2024-01-31", 1.0, 1);
        let result = classify(&p, parse_timestamp("2024-02-15").unwrap()).unwrap();
        assert_eq!(result.remaining_life_percentage, 0.0);
        assert_eq!(result.days_until_expiry, 0);
        assert_eq!(result.tag, Tag::Critical);
    }

    #[test]
    fn rejects_expiry_not_after_manufacture() {
        let same = product("bad", "2024-01-01", "2024-01-01", 1.0, 1);
        let backwards = product("worse", "2024-02-01", "2024-01-01", 1.0, 1);
        let now = parse_timestamp("2024-01-10").unwrap();
        assert!(matches!(
            classify(&same, now),
            Err(ShelfLifeError::InvalidDateRange { ref id, .. }) if id == "bad"
        ));
        assert!(classify(&backwards, now).is_err());
    }

    #[test]
    fn percentage_stays_in_range_across_timeline() {
        let p = product("cheese", "2024-01-01", "2024-03-01", 1.0, 1);
        let start = parse_timestamp("2023-12-01").unwrap();
        for day in 0..120 {
            let now = start + chrono::Duration::hours(day * 13);
            let result = classify(&p, now).unwrap();
            assert!((0.0..=100.0).contains(&result.remaining_life_percentage));
        }
    }
}
