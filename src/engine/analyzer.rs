use crate::chart::{self, ChartPoint};
use crate::opportunity::Opportunity;
use crate::record::RawRow;

use rust_decimal::Decimal;

/// Everything the presentation layer reads: the opportunity list, its
/// spend/savings aggregates, and the chart-ready top slice. The default
/// value doubles as the result for an absent sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub items: Vec<Opportunity>,
    pub total_spend: Decimal,
    pub total_savings: Decimal,
    pub chart_data: Vec<ChartPoint>,
}

/// Single-pass accumulator turning parsed sheet rows into an [`Analysis`].
///
/// Feed every row in sheet order, header first, then call
/// [`Analyzer::finish`]. Each pass starts from a fresh accumulator; nothing
/// carries over between reads of the sheet.
pub struct Analyzer {
    items: Vec<Opportunity>,
    total_spend: Decimal,
    total_savings: Decimal,
    header_skipped: bool,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total_spend: Decimal::ZERO,
            total_savings: Decimal::ZERO,
            header_skipped: false,
        }
    }

    /// Feed one parsed row. The first row is taken as the sheet header and
    /// dropped without inspection.
    ///
    /// Totals accumulate over every data row, including rows the
    /// actionability filter drops, so the summary cards describe the whole
    /// sheet while the table shows the actionable subset.
    pub fn ingest(&mut self, row: &RawRow) {
        if !self.header_skipped {
            self.header_skipped = true;
            return;
        }

        let opportunity = Opportunity::from_row(row);
        self.total_spend = self.total_spend.saturating_add(opportunity.annual_spend);
        self.total_savings = self.total_savings.saturating_add(opportunity.annual_savings);

        if opportunity.is_actionable() {
            self.items.push(opportunity);
        }
    }

    pub fn finish(self) -> Analysis {
        let chart_data = chart::top_points(&self.items);
        Analysis {
            items: self.items,
            total_spend: self.total_spend,
            total_savings: self.total_savings,
            chart_data,
        }
    }
}
