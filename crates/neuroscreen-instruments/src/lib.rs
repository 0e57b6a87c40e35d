//! neuroscreen-instruments
//!
//! Static instrument catalog. Defines the sections, questions, scoring
//! rules, score bounds, risk-mapping tables, and demographic-adjustment
//! tables for each supported screening instrument. Pure data — the scoring
//! engine interprets it.

pub mod definition;
pub mod error;
pub mod instruments;

use definition::InstrumentDefinition;
use error::CatalogError;

/// Read-only registry of instrument definitions.
///
/// Constructed explicitly (usually once at process start) and shared by
/// reference; nothing here mutates after construction.
#[derive(Debug, Clone)]
pub struct InstrumentCatalog {
    definitions: Vec<InstrumentDefinition>,
}

impl InstrumentCatalog {
    pub fn new() -> Self {
        Self {
            definitions: vec![
                instruments::mmse::definition(),
                instruments::phq9::definition(),
                instruments::moca::definition(),
                instruments::ad8::definition(),
                instruments::pss::definition(),
            ],
        }
    }

    /// Look up a definition by id. Never returns a partial or default
    /// definition; an unknown id is an error.
    pub fn definition(&self, id: &str) -> Result<&InstrumentDefinition, CatalogError> {
        self.definitions
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CatalogError::UnknownInstrument(id.to_string()))
    }

    /// Ids of all registered instruments, in registration order.
    pub fn instrument_ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.id.as_str())
    }
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        Self::new()
    }
}
