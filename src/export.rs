use crate::error::AnalysisError;
use crate::opportunity::Opportunity;

/// Writes the opportunity listing to `path` as CSV, headers included,
/// one row per opportunity in the order given.
pub fn write_opportunities(path: &str, items: &[Opportunity]) -> Result<(), AnalysisError> {
    let export_error = |source: csv::Error| AnalysisError::Export {
        path: path.to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(export_error)?;
    for item in items {
        writer.serialize(item).map_err(export_error)?;
    }
    writer.flush().map_err(csv::Error::from).map_err(export_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawRow;
    use tempfile::NamedTempFile;

    fn banana() -> Opportunity {
        let row = RawRow::parse("\"BANANA, CAVENDISH\",1.80,40LB,PH,2.00,1000", ',');
        Opportunity::from_row(&row)
    }

    #[test]
    fn test_writes_headers_and_rows() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        write_opportunities(&path, &[banana()]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(
            "product,current_supplier,current_price,target_supplier,target_price,\
             savings_per_case,annual_spend,annual_savings,spread_percentage"
        ));
        assert!(contents.contains("\"BANANA, CAVENDISH\",GenPro,2.00,Sumifru Philippines"));
        assert!(contents.contains("104000"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_writes_nothing_for_an_empty_listing() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        write_opportunities(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_surfaces_unwritable_paths() {
        let result = write_opportunities("/nonexistent-dir/out.csv", &[]);
        assert!(matches!(result, Err(AnalysisError::Export { .. })));
    }
}
