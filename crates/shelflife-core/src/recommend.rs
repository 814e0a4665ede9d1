use crate::classify::{CRITICAL_MAX_PERCENT, WARNING_MAX_PERCENT};
use crate::types::{ActionKind, FreshnessResult, Product, Recommendation, Urgency};

// Savings policy, as fractions of price × quantity.
const DONATE_SAVINGS_RATE: f64 = 0.15;
const EMERGENCY_DISCOUNT_SAVINGS_RATE: f64 = 0.30;
const DYNAMIC_DISCOUNT_SAVINGS_RATE: f64 = 0.40;
const TRANSFER_SAVINGS_RATE: f64 = 0.20;
const TRANSFER_QUANTITY_SHARE: f64 = 0.6;

fn rec(
    kind: ActionKind,
    title: &str,
    description: String,
    urgency: Urgency,
    estimated_savings: Option<f64>,
) -> Recommendation {
    Recommendation {
        kind,
        title: title.to_string(),
        description,
        urgency,
        estimated_savings,
    }
}

/// Units suggested for a store-to-store transfer: 60% of stock, rounded down.
pub fn transfer_quantity(quantity: u32) -> u32 {
    (f64::from(quantity) * TRANSFER_QUANTITY_SHARE).floor() as u32
}

/// Mitigation actions for a classified product, most prominent first.
///
/// Branches on the same thresholds as the classifier so a Critical tag always
/// gets the Critical set of actions.
pub fn recommend(product: &Product, freshness: &FreshnessResult) -> Vec<Recommendation> {
    let value = product.value();
    let remaining = freshness.remaining_life_percentage;

    if remaining <= CRITICAL_MAX_PERCENT {
        vec![
            rec(
                ActionKind::Donate,
                "Donate to Charity",
                format!(
                    "Donate {} units to local food banks or charities before expiry. Tax deduction available.",
                    product.quantity
                ),
                Urgency::High,
                Some(value * DONATE_SAVINGS_RATE),
            ),
            rec(
                ActionKind::Discount,
                "Emergency Discount (70% off)",
                "Apply maximum discount to move inventory quickly. Monitor sales velocity."
                    .to_string(),
                Urgency::High,
                Some(value * EMERGENCY_DISCOUNT_SAVINGS_RATE),
            ),
            rec(
                ActionKind::PrioritySale,
                "Priority Sale Display",
                "Move to front-of-store display with \"Manager's Special\" signage.".to_string(),
                Urgency::High,
                None,
            ),
        ]
    } else if remaining <= WARNING_MAX_PERCENT {
        vec![
            rec(
                ActionKind::Discount,
                "Dynamic Discount (30-50% off)",
                "Apply moderate discount based on sales velocity. Adjust daily.".to_string(),
                Urgency::Medium,
                Some(value * DYNAMIC_DISCOUNT_SAVINGS_RATE),
            ),
            rec(
                ActionKind::Transfer,
                "Store-to-Store Transfer",
                format!(
                    "Transfer {} units to high-velocity stores. Optimize inventory distribution.",
                    transfer_quantity(product.quantity)
                ),
                Urgency::Medium,
                Some(value * TRANSFER_SAVINGS_RATE),
            ),
        ]
    } else {
        vec![rec(
            ActionKind::Transfer,
            "Inventory Optimization",
            "Monitor sales patterns. Consider strategic redistribution if needed.".to_string(),
            Urgency::Low,
            None,
        )]
    }
}

/// Largest estimated saving among `recommendations`; unestimated entries count as 0.
pub fn max_estimated_savings(recommendations: &[Recommendation]) -> f64 {
    recommendations
        .iter()
        .map(|r| r.estimated_savings.unwrap_or(0.0))
        .fold(0.0, f64::max)
}
