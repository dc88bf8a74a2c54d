use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to export {path}")]
    Export {
        path: String,
        #[source]
        source: csv::Error,
    },
}
