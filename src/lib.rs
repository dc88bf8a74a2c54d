pub mod chart;
pub mod engine;
pub mod error;
pub mod export;
pub mod opportunity;
pub mod record;
pub mod report;

use crate::engine::{Analysis, Analyzer};
use crate::error::AnalysisError;
use crate::record::RawRow;

/// Field separator for procurement sheets.
pub const DELIMITER: char = ',';

/// Splits sheet text into rows, dropping blank lines before parsing.
pub fn read_rows(text: &str) -> Vec<RawRow> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| RawRow::parse(line, DELIMITER))
        .collect()
}

pub fn analyze_text(text: &str) -> Analysis {
    let mut analyzer = Analyzer::new();
    for row in read_rows(text) {
        analyzer.ingest(&row);
    }
    analyzer.finish()
}

/// Reads and analyzes the sheet at `path`. A missing sheet is not an
/// error; it yields an empty analysis so the report still renders.
pub fn analyze_file(path: &str) -> Result<Analysis, AnalysisError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            eprintln!("No sheet at '{}', rendering an empty report", path);
            return Ok(Analysis::default());
        }
        Err(source) => {
            return Err(AnalysisError::Read {
                path: path.to_string(),
                source,
            });
        }
    };

    Ok(analyze_text(&text))
}
