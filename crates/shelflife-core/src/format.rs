use chrono::{DateTime, Utc};

use crate::summary::CatalogSummary;
use crate::types::{ExpiryBucket, FreshnessResult, Product, Recommendation, Tag};

// ── Helpers ────────────────────────────────────────────────────────────────

pub fn format_currency(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{symbol}{:.2}", -amount)
    } else {
        format!("{symbol}{amount:.2}")
    }
}

/// `Jan 31, 2024`
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "n/a".to_string(),
    }
}

fn days_phrase(days: u32) -> String {
    match days {
        0 => "expired".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{n} days left"),
    }
}

// ── Products ───────────────────────────────────────────────────────────────

/// One-line product view: `[Critical]  20.0%  6 days left  milk  Whole Milk (Dairy) ...`
pub fn format_product_line(
    product: &Product,
    freshness: &FreshnessResult,
    currency: &str,
) -> String {
    format!(
        "[{:<8}] {:>5.1}%  {:<13} {}  {} ({}) @ {}  {} x {}",
        freshness.tag.label(),
        freshness.remaining_life_percentage,
        days_phrase(freshness.days_until_expiry),
        product.id,
        product.name,
        product.category,
        if product.location.is_empty() {
            "-"
        } else {
            product.location.as_str()
        },
        product.quantity,
        format_currency(currency, product.price),
    )
}

pub fn format_product_detail(
    product: &Product,
    freshness: &FreshnessResult,
    currency: &str,
) -> String {
    let mut lines = vec![
        format!("{} ({})", product.name, product.id),
        format!("  Category:      {}", product.category),
        format!("  Location:      {}", product.location),
        format!("  Supplier:      {}", product.supplier),
        format!("  Batch:         {}", product.batch_number),
        format!("  Manufactured:  {}", format_date(product.manufacturing_date)),
        format!("  Expires:       {}", format_date(product.expiry_date)),
        format!(
            "  Stock:         {} x {} = {}",
            product.quantity,
            format_currency(currency, product.price),
            format_currency(currency, product.value())
        ),
        format!(
            "  Freshness:     {} ({:.1}% remaining, {})",
            freshness.tag.label(),
            freshness.remaining_life_percentage,
            days_phrase(freshness.days_until_expiry)
        ),
    ];
    if !product.description.is_empty() {
        lines.push(format!("  Notes:         {}", product.description));
    }
    lines.join("\n")
}

pub fn format_recommendations(recommendations: &[Recommendation], currency: &str) -> String {
    let mut out = vec!["Recommended actions:".to_string()];
    for (i, rec) in recommendations.iter().enumerate() {
        let savings = rec
            .estimated_savings
            .map(|s| format!(" - save {}", format_currency(currency, s)))
            .unwrap_or_default();
        out.push(format!(
            "  {}. {} [{} priority]{}",
            i + 1,
            rec.title,
            rec.urgency,
            savings
        ));
        out.push(format!("     {}", rec.description));
    }
    out.join("\n")
}

// ── Summary ────────────────────────────────────────────────────────────────

pub fn format_summary(summary: &CatalogSummary, currency: &str) -> String {
    let mut lines = vec![
        "Catalog summary".to_string(),
        format!("  Products:          {}", summary.total_items),
        format!("  Units:             {}", summary.total_quantity),
        format!(
            "  Total value:       {}",
            format_currency(currency, summary.total_value)
        ),
        format!(
            "  Average price:     {}",
            summary
                .average_price
                .map(|p| format_currency(currency, p))
                .unwrap_or_else(|| "n/a".to_string())
        ),
        format!("  Health score:      {}", format_ratio(summary.health_score)),
        format!(
            "  Potential savings: {}",
            format_currency(currency, summary.potential_savings)
        ),
        String::new(),
        "By tag:".to_string(),
    ];

    for tag in Tag::ALL {
        let share = match tag {
            Tag::Critical => format_ratio(summary.critical_percentage),
            Tag::Warning => format_ratio(summary.warning_percentage),
            Tag::Good => String::new(),
        };
        let row = format!(
            "  {:<9} {:>4}  {:>12} at risk  {}",
            tag.label(),
            summary.tag_counts.get(tag),
            format_currency(currency, summary.value_at_risk.get(tag)),
            share
        );
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("Expiring in:".to_string());
    for bucket in ExpiryBucket::ALL {
        lines.push(format!(
            "  {:<11} {:>4}",
            bucket.label(),
            summary.expiry_distribution.get(bucket)
        ));
    }

    if !summary.top_categories.is_empty() {
        lines.push(String::new());
        lines.push("Top categories:".to_string());
        for c in &summary.top_categories {
            lines.push(format!("  {:<16} {:>4}", c.category, c.count));
        }
    }

    lines.join("\n")
}
