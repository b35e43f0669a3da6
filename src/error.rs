use crate::analyzer::AnalyzerError;

/// Errors surfaced by the public conversion API.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid configuration: unknown {field} {value:?}")]
    InvalidConfiguration { field: &'static str, value: String },

    #[error("analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),
}

impl ConvertError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidConfiguration {
            field,
            value: value.to_string(),
        }
    }
}
