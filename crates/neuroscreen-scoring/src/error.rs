use thiserror::Error;

use neuroscreen_instruments::error::CatalogError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("unknown risk algorithm: {0}")]
    UnknownRiskAlgorithm(String),
}
