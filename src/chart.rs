use crate::opportunity::Opportunity;

use rust_decimal::Decimal;

/// How many opportunities the comparison chart carries.
pub const CHART_TOP_N: usize = 5;

/// Brand markers dropped from product names before charting. Matching is
/// case-sensitive and removes the first occurrence only.
const LABEL_MARKERS: [&str; 2] = ["BANANA, ", "APPLE, "];

/// One bar pair on the current-vs-optimized comparison chart. The core
/// computes these; rendering just draws them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub current: Decimal,
    pub optimized: Decimal,
}

/// Shorten a product description to a single chart label token.
pub fn short_label(product: &str) -> String {
    let mut name = product.to_string();
    for marker in LABEL_MARKERS {
        name = name.replacen(marker, "", 1);
    }
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// The top opportunities by annual savings, reshaped for charting.
///
/// Descending by `annual_savings`, ties kept in input order, truncated to
/// [`CHART_TOP_N`]. `current` is the stored annual spend; `optimized` is
/// what remains of it once the savings are captured.
pub fn top_points(items: &[Opportunity]) -> Vec<ChartPoint> {
    let mut ranked: Vec<&Opportunity> = items.iter().collect();
    ranked.sort_by(|a, b| b.annual_savings.cmp(&a.annual_savings));
    ranked.truncate(CHART_TOP_N);

    ranked
        .into_iter()
        .map(|item| ChartPoint {
            name: short_label(&item.product),
            current: item.annual_spend,
            optimized: item.annual_spend - item.annual_savings,
        })
        .collect()
}
