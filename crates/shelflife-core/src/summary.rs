use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::error::{Result, ShelfLifeError};
use crate::recommend::{max_estimated_savings, recommend};
use crate::types::{ExpiryBucket, FreshnessResult, Product, Recommendation, Statistic, Tag};

/// Number of categories kept in [`CatalogSummary::top_categories`].
pub const TOP_CATEGORY_LIMIT: usize = 5;

const WARNING_HEALTH_WEIGHT: f64 = 0.5;

/// One value per freshness tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TagTally<T> {
    pub critical: T,
    pub warning: T,
    pub good: T,
}

impl<T: Copy + std::ops::AddAssign> TagTally<T> {
    pub fn get(&self, tag: Tag) -> T {
        match tag {
            Tag::Critical => self.critical,
            Tag::Warning => self.warning,
            Tag::Good => self.good,
        }
    }

    fn add(&mut self, tag: Tag, amount: T) {
        match tag {
            Tag::Critical => self.critical += amount,
            Tag::Warning => self.warning += amount,
            Tag::Good => self.good += amount,
        }
    }

    fn merge(&mut self, other: &Self) {
        for tag in Tag::ALL {
            self.add(tag, other.get(tag));
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpiryDistribution {
    #[serde(rename = "0-7 days")]
    pub within_week: usize,
    #[serde(rename = "8-14 days")]
    pub within_two_weeks: usize,
    #[serde(rename = "15-30 days")]
    pub within_month: usize,
    #[serde(rename = "30+ days")]
    pub beyond_month: usize,
}

impl ExpiryDistribution {
    pub fn get(&self, bucket: ExpiryBucket) -> usize {
        match bucket {
            ExpiryBucket::WithinWeek => self.within_week,
            ExpiryBucket::WithinTwoWeeks => self.within_two_weeks,
            ExpiryBucket::WithinMonth => self.within_month,
            ExpiryBucket::BeyondMonth => self.beyond_month,
        }
    }

    fn slot(&mut self, bucket: ExpiryBucket) -> &mut usize {
        match bucket {
            ExpiryBucket::WithinWeek => &mut self.within_week,
            ExpiryBucket::WithinTwoWeeks => &mut self.within_two_weeks,
            ExpiryBucket::WithinMonth => &mut self.within_month,
            ExpiryBucket::BeyondMonth => &mut self.beyond_month,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Catalog-wide statistics. Ratio scalars are `None` when their denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_items: usize,
    pub total_value: f64,
    pub total_quantity: u64,
    pub tag_counts: TagTally<usize>,
    pub value_at_risk: TagTally<f64>,
    /// All categories in first-seen order.
    pub category_counts: Vec<CategoryCount>,
    pub top_categories: Vec<CategoryCount>,
    pub expiry_distribution: ExpiryDistribution,
    pub critical_percentage: Option<f64>,
    pub warning_percentage: Option<f64>,
    /// Not clamped; see DESIGN.md.
    pub health_score: Option<f64>,
    pub average_price: Option<f64>,
    pub potential_savings: f64,
}

impl CatalogSummary {
    /// Read a ratio scalar, failing if it is undefined for this catalog.
    pub fn statistic(&self, statistic: Statistic) -> Result<f64> {
        let value = match statistic {
            Statistic::CriticalPercentage => self.critical_percentage,
            Statistic::WarningPercentage => self.warning_percentage,
            Statistic::HealthScore => self.health_score,
            Statistic::AveragePrice => self.average_price,
        };
        value.ok_or(ShelfLifeError::UndefinedStatistic(statistic))
    }
}

/// Running tallies for a summary pass. Accumulators over disjoint, consecutive
/// slices of a catalog can be merged in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryAccumulator {
    item_count: usize,
    total_value: f64,
    total_quantity: u64,
    tag_counts: TagTally<usize>,
    value_at_risk: TagTally<f64>,
    categories: Vec<CategoryCount>,
    expiry: ExpiryDistribution,
    potential_savings: f64,
}

impl SummaryAccumulator {
    fn bump_category(&mut self, category: &str, count: usize) {
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.count += count,
            None => self.categories.push(CategoryCount {
                category: category.to_string(),
                count,
            }),
        }
    }

    /// Fold in one already-classified product.
    pub fn add(
        &mut self,
        product: &Product,
        freshness: &FreshnessResult,
        recommendations: &[Recommendation],
    ) {
        let value = product.value();
        self.item_count += 1;
        self.total_value += value;
        self.total_quantity += u64::from(product.quantity);
        self.tag_counts.add(freshness.tag, 1);
        self.value_at_risk.add(freshness.tag, value);
        self.bump_category(&product.category, 1);
        *self
            .expiry
            .slot(ExpiryBucket::from_days(freshness.days_until_expiry)) += 1;
        self.potential_savings += max_estimated_savings(recommendations);
    }

    /// Classify and recommend for `product`, then fold it in.
    pub fn add_product(&mut self, product: &Product, now: DateTime<Utc>) -> Result<()> {
        let freshness = classify(product, now)?;
        let recommendations = recommend(product, &freshness);
        self.add(product, &freshness, &recommendations);
        Ok(())
    }

    /// Combine with the accumulator of the slice that follows this one.
    pub fn merge(mut self, other: SummaryAccumulator) -> SummaryAccumulator {
        self.item_count += other.item_count;
        self.total_value += other.total_value;
        self.total_quantity += other.total_quantity;
        self.tag_counts.merge(&other.tag_counts);
        self.value_at_risk.merge(&other.value_at_risk);
        for entry in &other.categories {
            self.bump_category(&entry.category, entry.count);
        }
        for bucket in ExpiryBucket::ALL {
            *self.expiry.slot(bucket) += other.expiry.get(bucket);
        }
        self.potential_savings += other.potential_savings;
        self
    }

    pub fn finish(self) -> CatalogSummary {
        let (critical_percentage, warning_percentage, health_score) = if self.item_count == 0 {
            (None, None, None)
        } else {
            let total = self.item_count as f64;
            let critical = self.tag_counts.critical as f64 / total * 100.0;
            let warning = self.tag_counts.warning as f64 / total * 100.0;
            let health = 100.0 - critical - warning * WARNING_HEALTH_WEIGHT;
            (Some(critical), Some(warning), Some(health))
        };

        let average_price = if self.total_quantity == 0 {
            None
        } else {
            Some(self.total_value / self.total_quantity as f64)
        };

        // Stable sort keeps first-seen order among equal counts.
        let mut top_categories = self.categories.clone();
        top_categories.sort_by(|a, b| b.count.cmp(&a.count));
        top_categories.truncate(TOP_CATEGORY_LIMIT);

        CatalogSummary {
            total_items: self.item_count,
            total_value: self.total_value,
            total_quantity: self.total_quantity,
            tag_counts: self.tag_counts,
            value_at_risk: self.value_at_risk,
            category_counts: self.categories,
            top_categories,
            expiry_distribution: self.expiry,
            critical_percentage,
            warning_percentage,
            health_score,
            average_price,
            potential_savings: self.potential_savings,
        }
    }
}

/// Summarize a catalog at `now` in a single pass.
///
/// Fails with `InvalidDateRange` on the first malformed product.
pub fn summarize(products: &[Product], now: DateTime<Utc>) -> Result<CatalogSummary> {
    summarize_selection(products, now)
}

/// [`summarize`] over any borrowed selection, e.g. the output of a filter.
pub fn summarize_selection<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    now: DateTime<Utc>,
) -> Result<CatalogSummary> {
    let acc = products
        .into_iter()
        .try_fold(SummaryAccumulator::default(), |mut acc, product| {
            acc.add_product(product, now)?;
            Ok::<_, ShelfLifeError>(acc)
        })?;
    let summary = acc.finish();
    tracing::debug!(
        items = summary.total_items,
        critical = summary.tag_counts.critical,
        warning = summary.tag_counts.warning,
        good = summary.tag_counts.good,
        "summarized catalog"
    );
    Ok(summary)
}

/// Catalog-wide potential savings: the best estimated saving per product, summed.
pub fn potential_savings(products: &[Product], now: DateTime<Utc>) -> Result<f64> {
    products.iter().try_fold(0.0, |total, product| {
        let freshness = classify(product, now)?;
        Ok::<_, ShelfLifeError>(total + max_estimated_savings(&recommend(product, &freshness)))
    })
}
