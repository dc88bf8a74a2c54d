use std::cmp::Ordering;

use crate::opportunity::Opportunity;

/// Column a listing can be ordered by. One variant per opportunity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Product,
    CurrentSupplier,
    CurrentPrice,
    TargetSupplier,
    TargetPrice,
    SavingsPerCase,
    AnnualSpend,
    AnnualSavings,
    SpreadPercentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current ordering of the opportunity listing. Held by the caller and
/// fed back in on each re-sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::AnnualSavings,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    /// Applies a column selection. Re-selecting the column that is
    /// currently ascending flips it to descending; any other selection
    /// starts the chosen column ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

fn compare(a: &Opportunity, b: &Opportunity, key: SortKey) -> Ordering {
    match key {
        SortKey::Product => a.product.cmp(&b.product),
        SortKey::CurrentSupplier => a.current_supplier.cmp(&b.current_supplier),
        SortKey::CurrentPrice => a.current_price.cmp(&b.current_price),
        SortKey::TargetSupplier => a.target_supplier.cmp(&b.target_supplier),
        SortKey::TargetPrice => a.target_price.cmp(&b.target_price),
        SortKey::SavingsPerCase => a.savings_per_case.cmp(&b.savings_per_case),
        SortKey::AnnualSpend => a.annual_spend.cmp(&b.annual_spend),
        SortKey::AnnualSavings => a.annual_savings.cmp(&b.annual_savings),
        SortKey::SpreadPercentage => a.spread_percentage.cmp(&b.spread_percentage),
    }
}

/// Returns the items reordered under `spec`. The input keeps its sheet
/// order; ties keep their relative position.
pub fn sorted_view(items: &[Opportunity], spec: SortSpec) -> Vec<Opportunity> {
    let mut view = items.to_vec();
    view.sort_by(|a, b| {
        let ordering = compare(a, b, spec.key);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawRow;

    fn opportunity(product: &str, cost: &str, volume: &str) -> Opportunity {
        let row = RawRow::from_fields(vec![
            product.to_string(),
            "1.00".to_string(),
            "40LB".to_string(),
            "PH".to_string(),
            cost.to_string(),
            volume.to_string(),
        ]);
        Opportunity::from_row(&row)
    }

    fn sample() -> Vec<Opportunity> {
        vec![
            opportunity("ONION", "3.10", "90"),
            opportunity("BANANA", "2.00", "1000"),
            opportunity("GARLIC", "6.25", "40"),
        ]
    }

    #[test]
    fn test_default_orders_by_annual_savings_descending() {
        let spec = SortSpec::default();
        let view = sorted_view(&sample(), spec);

        let products: Vec<&str> = view.iter().map(|o| o.product.as_str()).collect();
        assert_eq!(products, vec!["BANANA", "ONION", "GARLIC"]);
    }

    #[test]
    fn test_ascending_reverses_the_default() {
        let spec = SortSpec {
            key: SortKey::AnnualSavings,
            direction: SortDirection::Ascending,
        };
        let view = sorted_view(&sample(), spec);

        let products: Vec<&str> = view.iter().map(|o| o.product.as_str()).collect();
        assert_eq!(products, vec!["GARLIC", "ONION", "BANANA"]);
    }

    #[test]
    fn test_text_keys_order_lexically() {
        let spec = SortSpec {
            key: SortKey::Product,
            direction: SortDirection::Ascending,
        };
        let view = sorted_view(&sample(), spec);

        let products: Vec<&str> = view.iter().map(|o| o.product.as_str()).collect();
        assert_eq!(products, vec!["BANANA", "GARLIC", "ONION"]);
    }

    #[test]
    fn test_price_key_orders_numerically() {
        let spec = SortSpec {
            key: SortKey::CurrentPrice,
            direction: SortDirection::Descending,
        };
        let view = sorted_view(&sample(), spec);

        let products: Vec<&str> = view.iter().map(|o| o.product.as_str()).collect();
        assert_eq!(products, vec!["GARLIC", "ONION", "BANANA"]);
    }

    #[test]
    fn test_every_key_orders_both_directions() {
        let items = sample();

        // Keys that vary across the sample, with their ascending order.
        let varying = [
            (SortKey::Product, ["BANANA", "GARLIC", "ONION"]),
            (SortKey::CurrentPrice, ["BANANA", "ONION", "GARLIC"]),
            (SortKey::TargetPrice, ["BANANA", "ONION", "GARLIC"]),
            (SortKey::SavingsPerCase, ["BANANA", "ONION", "GARLIC"]),
            (SortKey::AnnualSpend, ["GARLIC", "ONION", "BANANA"]),
            (SortKey::AnnualSavings, ["GARLIC", "ONION", "BANANA"]),
        ];
        for (key, expected) in varying {
            let spec = SortSpec {
                key,
                direction: SortDirection::Ascending,
            };
            let view = sorted_view(&items, spec);
            let products: Vec<&str> = view.iter().map(|o| o.product.as_str()).collect();
            assert_eq!(products, expected, "ascending {:?}", key);

            let view = sorted_view(&items, spec.toggle(key));
            let products: Vec<&str> = view.iter().map(|o| o.product.as_str()).collect();
            let reversed: Vec<&str> = expected.iter().rev().copied().collect();
            assert_eq!(products, reversed, "descending {:?}", key);
        }

        // Keys constant across every opportunity tie everywhere, so both
        // directions keep the sheet order.
        let constant = [
            SortKey::CurrentSupplier,
            SortKey::TargetSupplier,
            SortKey::SpreadPercentage,
        ];
        for key in constant {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let view = sorted_view(&items, SortSpec { key, direction });
                let products: Vec<&str> = view.iter().map(|o| o.product.as_str()).collect();
                assert_eq!(products, ["ONION", "BANANA", "GARLIC"], "tied {:?}", key);
            }
        }
    }

    #[test]
    fn test_ties_keep_sheet_order() {
        let items = vec![
            opportunity("FIRST", "2.00", "100"),
            opportunity("SECOND", "2.00", "100"),
            opportunity("THIRD", "2.00", "100"),
        ];
        let view = sorted_view(&items, SortSpec::default());

        let products: Vec<&str> = view.iter().map(|o| o.product.as_str()).collect();
        assert_eq!(products, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_sorting_leaves_the_input_alone() {
        let items = sample();
        let _ = sorted_view(&items, SortSpec::default());

        assert_eq!(items[0].product, "ONION");
        assert_eq!(items[1].product, "BANANA");
        assert_eq!(items[2].product, "GARLIC");
    }

    #[test]
    fn test_selecting_a_new_column_starts_ascending() {
        let spec = SortSpec::default().toggle(SortKey::Product);

        assert_eq!(spec.key, SortKey::Product);
        assert_eq!(spec.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_reselecting_an_ascending_column_flips_it() {
        let spec = SortSpec::default()
            .toggle(SortKey::Product)
            .toggle(SortKey::Product);

        assert_eq!(spec.key, SortKey::Product);
        assert_eq!(spec.direction, SortDirection::Descending);
    }

    #[test]
    fn test_reselecting_a_descending_column_goes_back_to_ascending() {
        let spec = SortSpec::default().toggle(SortKey::AnnualSavings);

        assert_eq!(spec.key, SortKey::AnnualSavings);
        assert_eq!(spec.direction, SortDirection::Ascending);
    }
}
