use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
