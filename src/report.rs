use std::io::Write;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::engine::{Analysis, SortSpec, sorted_view};

pub const OPTIMIZATION_SCORE: u32 = 45;

const PROGRESS_WIDTH: usize = 20;
const CHART_BAR_WIDTH: usize = 40;

/// Writes the full analysis report: metric cards, the opportunity
/// table in its default order, then the impact chart.
pub fn render<W: Write>(analysis: &Analysis, mut writer: W) -> std::io::Result<()> {
    writeln!(&mut writer, "Procurement Intelligence")?;
    writeln!(&mut writer, "{}", "=".repeat(24))?;
    writeln!(&mut writer)?;
    render_cards(analysis, &mut writer)?;
    writeln!(&mut writer)?;
    render_table(analysis, &mut writer)?;
    writeln!(&mut writer)?;
    render_chart(analysis, &mut writer)?;
    Ok(())
}

fn render_cards<W: Write>(analysis: &Analysis, writer: &mut W) -> std::io::Result<()> {
    writeln!(
        writer,
        "Total Annual Spend (Est)  {}",
        format_usd(analysis.total_spend, 0)
    )?;
    writeln!(writer, "  Based on annualized weekly volume")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Potential Annual Savings  {}",
        format_usd(analysis.total_savings, 0)
    )?;
    writeln!(writer, "  Calculated at 30% arbitrage target")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Optimization Score        {}/100  [{}]",
        OPTIMIZATION_SCORE,
        progress_bar(OPTIMIZATION_SCORE)
    )?;
    writeln!(writer, "  {}", score_status(OPTIMIZATION_SCORE))?;
    Ok(())
}

fn render_table<W: Write>(analysis: &Analysis, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "Live Opportunities")?;
    writeln!(writer, "Actionable arbitrage targets sorted by value.")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:<32} {:>7} {:>14} {:>13}  {:<20} {:>20}",
        "Product Name",
        "Spread",
        "Current Price",
        "Target Price",
        "Supplier Target",
        "Est. Annual Savings"
    )?;

    for item in sorted_view(&analysis.items, SortSpec::default()) {
        writeln!(
            writer,
            "{:<32} {:>7} {:>14} {:>13}  {:<20} {:>20}",
            item.product,
            format!("+{:.1}%", item.spread_percentage.to_f64().unwrap_or(0.0)),
            format_usd(item.current_price, 2),
            format_usd(item.target_price, 2),
            item.target_supplier,
            format_usd(item.annual_savings, 0),
        )?;
    }

    Ok(())
}

fn render_chart<W: Write>(analysis: &Analysis, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "Optimization Impact")?;
    writeln!(writer, "Comparing current annual landed cost vs optimized target.")?;
    writeln!(writer)?;

    // Bars share one scale so heights stay comparable across products.
    let max = analysis
        .chart_data
        .iter()
        .map(|point| point.current)
        .max()
        .unwrap_or(Decimal::ZERO);

    for point in &analysis.chart_data {
        writeln!(
            writer,
            "{:<12} Current Cost   {:<width$} {:>12}",
            point.name,
            bar(point.current, max),
            format_usd(point.current, 0),
            width = CHART_BAR_WIDTH
        )?;
        writeln!(
            writer,
            "{:<12} Optimized Cost {:<width$} {:>12}",
            "",
            bar(point.optimized, max),
            format_usd(point.optimized, 0),
            width = CHART_BAR_WIDTH
        )?;
    }

    Ok(())
}

fn score_status(score: u32) -> &'static str {
    if score < 50 {
        "Optimization needed"
    } else {
        "Good optimization status"
    }
}

fn progress_bar(score: u32) -> String {
    let filled = ((score as usize * PROGRESS_WIDTH) / 100).min(PROGRESS_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(PROGRESS_WIDTH - filled))
}

fn bar(value: Decimal, max: Decimal) -> String {
    if max <= Decimal::ZERO {
        return String::new();
    }
    let ratio = (value / max).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
    let filled = (ratio * CHART_BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(CHART_BAR_WIDTH))
}

/// Dollar formatting with thousands grouping, e.g. `$1,234.50` or
/// `-$320`. `decimals` fixes the fraction width.
fn format_usd(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp(decimals);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('$');
    out.push_str(&grouped);
    if decimals > 0 {
        let mut frac = frac_part;
        frac.truncate(decimals as usize);
        while frac.len() < decimals as usize {
            frac.push('0');
        }
        out.push('.');
        out.push_str(&frac);
    }
    out
}
