use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::classify;
use crate::error::Result;
use crate::format::format_currency;
use crate::types::{Product, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Critical,
    Warning,
    Emergency,
    /// Catalog-wide reminder, not tied to one product.
    Reminder,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Emergency => "emergency",
            Self::Reminder => "reminder",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub title: String,
    pub message: String,
    pub days_until_expiry: u32,
    pub value_at_risk: f64,
}

/// Derive expiry alerts for a catalog, in catalog order.
///
/// A product can raise more than one alert (e.g. Critical and Emergency).
/// When any product is Critical, a single reminder counting them closes the list.
pub fn derive_alerts(
    products: &[Product],
    now: DateTime<Utc>,
    warning_window_days: u32,
    currency: &str,
) -> Result<Vec<Alert>> {
    let mut alerts = Vec::new();
    let mut critical_items = 0usize;
    let mut critical_value = 0.0;

    for product in products {
        let freshness = classify(product, now)?;
        let days = freshness.days_until_expiry;
        let value = product.value();
        let alert = |kind: AlertKind, title: &str, message: String| Alert {
            kind,
            product_id: Some(product.id.clone()),
            title: title.to_string(),
            message,
            days_until_expiry: days,
            value_at_risk: value,
        };

        if freshness.tag == Tag::Critical {
            critical_items += 1;
            critical_value += value;
            alerts.push(alert(
                AlertKind::Critical,
                "URGENT: Critical Item Alert",
                format!(
                    "{} expires in {days} days. Immediate action required to prevent loss of {}.",
                    product.name,
                    format_currency(currency, value)
                ),
            ));
        }

        if freshness.tag == Tag::Warning && days <= warning_window_days {
            alerts.push(alert(
                AlertKind::Warning,
                "Warning: Item Approaching Expiry",
                format!(
                    "{} expires in {days} days. Consider applying discount or transfer to high-velocity store.",
                    product.name
                ),
            ));
        }

        if days == 1 {
            alerts.push(alert(
                AlertKind::Emergency,
                "EMERGENCY: Item Expires Tomorrow",
                format!(
                    "{} expires tomorrow! Emergency action required - donate, discount heavily, or remove from inventory.",
                    product.name
                ),
            ));
        }
    }

    if critical_items > 0 {
        alerts.push(Alert {
            kind: AlertKind::Reminder,
            product_id: None,
            title: "Daily Reminder: Critical Items".to_string(),
            message: format!(
                "You have {critical_items} critical items requiring immediate attention. Review and take action to minimize losses."
            ),
            days_until_expiry: 0,
            value_at_risk: critical_value,
        });
    }

    tracing::debug!(alerts = alerts.len(), "derived alerts");
    Ok(alerts)
}
