use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Enums ──────────────────────────────────────────────────────────────────

/// Discrete freshness class derived from remaining-life percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Critical,
    Warning,
    Good,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Critical, Tag::Warning, Tag::Good];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Good => "good",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Good => "Good",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Warning => "yellow",
            Self::Good => "green",
        }
    }

    /// Accepts the tag name or its colour alias, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "critical" | "red" => Some(Self::Critical),
            "warning" | "yellow" => Some(Self::Warning),
            "good" | "green" => Some(Self::Good),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Donate,
    Transfer,
    Discount,
    PrioritySale,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donate => "donate",
            Self::Transfer => "transfer",
            Self::Discount => "discount",
            Self::PrioritySale => "priority_sale",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expiry window a product falls into by its days-until-expiry value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpiryBucket {
    #[serde(rename = "0-7 days")]
    WithinWeek,
    #[serde(rename = "8-14 days")]
    WithinTwoWeeks,
    #[serde(rename = "15-30 days")]
    WithinMonth,
    #[serde(rename = "30+ days")]
    BeyondMonth,
}

impl ExpiryBucket {
    pub const ALL: [ExpiryBucket; 4] = [
        ExpiryBucket::WithinWeek,
        ExpiryBucket::WithinTwoWeeks,
        ExpiryBucket::WithinMonth,
        ExpiryBucket::BeyondMonth,
    ];

    pub fn from_days(days: u32) -> Self {
        match days {
            0..=7 => Self::WithinWeek,
            8..=14 => Self::WithinTwoWeeks,
            15..=30 => Self::WithinMonth,
            _ => Self::BeyondMonth,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WithinWeek => "0-7 days",
            Self::WithinTwoWeeks => "8-14 days",
            Self::WithinMonth => "15-30 days",
            Self::BeyondMonth => "30+ days",
        }
    }
}

impl std::fmt::Display for ExpiryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Summary scalars that need a non-zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    CriticalPercentage,
    WarningPercentage,
    HealthScore,
    AveragePrice,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CriticalPercentage => "critical percentage",
            Self::WarningPercentage => "warning percentage",
            Self::HealthScore => "health score",
            Self::AveragePrice => "average price",
        }
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Catalog entries ────────────────────────────────────────────────────────

/// A catalog entry. The core only ever reads products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(with = "crate::dates::timestamp")]
    pub manufacturing_date: DateTime<Utc>,
    #[serde(with = "crate::dates::timestamp")]
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub batch_number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Monetary value on hand: price × quantity.
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// ── Derived results ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessResult {
    pub remaining_life_percentage: f64,
    pub days_until_expiry: u32,
    pub tag: Tag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_savings: Option<f64>,
}

// ── Config ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    pub warning_window_days: u32,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            warning_window_days: 14,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfLifeConfig {
    pub version: String,
    pub catalog: String,
    pub currency: String,
    pub alerts: AlertSettings,
    pub logging: LoggingSettings,
}

impl Default for ShelfLifeConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            catalog: "catalog.json".to_string(),
            currency: "$".to_string(),
            alerts: AlertSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_from_camel_case_json() {
        let json = r#"{"id":"p-1","name":"Whole Milk","category":"Dairy","image":"milk.jpg","expiryDate":"2024-01-31","manufacturingDate":"2024-01-01","price":3.5,"quantity":40,"location":"Aisle 3","supplier":"Acme Dairy","batchNumber":"B-77","description":"1 gallon"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.batch_number, "B-77");
        assert_eq!(product.image.as_deref(), Some("milk.jpg"));
        assert_eq!(product.value(), 140.0);
    }

    #[test]
    fn optional_text_fields_default_to_empty() {
        let json = r#"{"id":"p-2","name":"Bread","category":"Bakery","price":2.0,"quantity":1,"manufacturingDate":"2024-01-01T06:00:00Z","expiryDate":"2024-01-05T06:00:00Z"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.supplier.is_empty());
        assert!(product.image.is_none());
    }

    #[test]
    fn tag_parse_accepts_colour_aliases() {
        assert_eq!(Tag::parse("red"), Some(Tag::Critical));
        assert_eq!(Tag::parse("Warning"), Some(Tag::Warning));
        assert_eq!(Tag::parse("GREEN"), Some(Tag::Good));
        assert_eq!(Tag::parse("blue"), None);
    }

    #[test]
    fn expiry_bucket_boundaries() {
        assert_eq!(ExpiryBucket::from_days(0), ExpiryBucket::WithinWeek);
        assert_eq!(ExpiryBucket::from_days(7), ExpiryBucket::WithinWeek);
        assert_eq!(ExpiryBucket::from_days(8), ExpiryBucket::WithinTwoWeeks);
        assert_eq!(ExpiryBucket::from_days(14), ExpiryBucket::WithinTwoWeeks);
        assert_eq!(ExpiryBucket::from_days(15), ExpiryBucket::WithinMonth);
        assert_eq!(ExpiryBucket::from_days(30), ExpiryBucket::WithinMonth);
        assert_eq!(ExpiryBucket::from_days(31), ExpiryBucket::BeyondMonth);
    }

    #[test]
    fn recommendation_serializes_kind_as_type() {
        let rec = Recommendation {
            kind: ActionKind::PrioritySale,
            title: "t".to_string(),
            description: "d".to_string(),
            urgency: Urgency::High,
            estimated_savings: None,
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["type"], "priority_sale");
        assert_eq!(value["urgency"], "high");
        assert!(value.get("estimatedSavings").is_none());
    }

    #[test]
    fn config_default() {
        let config = ShelfLifeConfig::default();
        assert_eq!(config.version, "1");
        assert_eq!(config.catalog, "catalog.json");
        assert_eq!(config.alerts.warning_window_days, 14);
    }

    #[test]
    fn config_partial_yaml_fills_defaults() {
        let parsed: ShelfLifeConfig = serde_yaml::from_str("catalog: stock.jsonl\n").unwrap();
        assert_eq!(parsed.catalog, "stock.jsonl");
        assert_eq!(parsed.currency, "$");
        assert_eq!(parsed.logging.level, "warn");
    }
}
