use rust_decimal::Decimal;
use std::str::FromStr;

// Positional layout of the procurement sheet.
pub const COL_PRODUCT: usize = 0;
pub const COL_CURRENT_FOB: usize = 1;
pub const COL_PACK_SIZE: usize = 2;
pub const COL_ORIGIN: usize = 3;
pub const COL_LANDED_COST: usize = 4;
pub const COL_WEEKLY_VOLUME: usize = 5;

/// One parsed sheet line. Column access is total: reading past the end of a
/// short row yields an empty field, never a panic.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    fields: Vec<String>,
}

impl RawRow {
    pub fn parse(line: &str, delimiter: char) -> Self {
        Self {
            fields: split_line(line, delimiter),
        }
    }

    pub fn from_fields(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    /// Numeric read of a column; absent or malformed values are zero.
    pub fn decimal_field(&self, index: usize) -> Decimal {
        coerce_decimal(self.field(index))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a line into fields, honoring double-quoted regions.
///
/// A quote character flips the in-quote state and is not emitted; the
/// delimiter only separates fields outside a quoted region. The final
/// accumulated field is always appended, so no trailing delimiter is
/// required. Doubled-quote escapes are not part of the sheet format.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quote = !in_quote;
        } else if ch == delimiter && !in_quote {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    fields.iter().map(|field| clean_field(field)).collect()
}

/// Trim a field and strip at most one quote from each end. The ends are
/// handled independently, so an unbalanced quote still comes off.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Best-effort numeric coercion: `$` markers and `,` separators are
/// scrubbed before parsing, and anything still unparsable reads as zero.
pub fn coerce_decimal(raw: &str) -> Decimal {
    let cleaned = raw.replace('$', "").replace(',', "");
    Decimal::from_str(cleaned.trim()).unwrap_or(Decimal::ZERO)
}
