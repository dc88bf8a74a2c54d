use crate::record::{RawRow, COL_LANDED_COST, COL_PRODUCT, COL_WEEKLY_VOLUME};

use rust_decimal::Decimal;
use serde::Serialize;

/// Incumbent supplier assumed for every line item on the sheet.
pub const CURRENT_SUPPLIER: &str = "GenPro";

/// Sourcing partner the markdown target is quoted against.
pub const TARGET_SUPPLIER: &str = "Sumifru Philippines";

/// First cell of the sheet's header line; rows carrying it are never
/// opportunities even if the header turns up past the first line.
pub const HEADER_TOKEN: &str = "Product";

/// Fixed markdown assumed between current and target pricing.
fn spread_ratio() -> Decimal {
    Decimal::new(30, 2)
}

fn weeks_per_year() -> Decimal {
    Decimal::from(52)
}

/// One product's potential cost savings under the fixed-ratio pricing
/// assumption. Built once per sheet row, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub product: String,
    pub current_supplier: String,
    pub current_price: Decimal,
    pub target_supplier: String,
    pub target_price: Decimal,
    pub savings_per_case: Decimal,
    pub annual_spend: Decimal,
    pub annual_savings: Decimal,
    pub spread_percentage: Decimal,
}

impl Opportunity {
    /// Derive every field from one sheet row.
    ///
    /// Numeric columns are coerced, so a short or malformed row still
    /// produces a record; whether it is worth keeping is a separate
    /// question ([`Opportunity::is_actionable`]).
    pub fn from_row(row: &RawRow) -> Self {
        let product = row.field(COL_PRODUCT).to_string();
        let landed_cost = row.decimal_field(COL_LANDED_COST);
        let weekly_volume = row.decimal_field(COL_WEEKLY_VOLUME);

        // Annualization can outgrow Decimal's 96-bit mantissa; an
        // overflowed product reads as zero like any other unusable number.
        let annual_spend = landed_cost
            .checked_mul(weekly_volume)
            .and_then(|weekly_spend| weekly_spend.checked_mul(weeks_per_year()))
            .unwrap_or(Decimal::ZERO);
        let target_price = landed_cost * (Decimal::ONE - spread_ratio());
        let savings_per_case = landed_cost - target_price;
        let annual_savings = annual_spend
            .checked_mul(spread_ratio())
            .unwrap_or(Decimal::ZERO);

        Self {
            product,
            current_supplier: CURRENT_SUPPLIER.to_string(),
            current_price: landed_cost,
            target_supplier: TARGET_SUPPLIER.to_string(),
            target_price,
            savings_per_case,
            annual_spend,
            annual_savings,
            spread_percentage: spread_ratio() * Decimal::ONE_HUNDRED,
        }
    }

    /// Rows with no product name, a stray header cell, or a non-positive
    /// price are excluded from the opportunity list. A zero weekly volume
    /// is not grounds for exclusion; it only zeroes the annual figures.
    pub fn is_actionable(&self) -> bool {
        !self.product.is_empty()
            && self.product != HEADER_TOKEN
            && self.current_price > Decimal::ZERO
    }
}
