//! burnout-instruments
//!
//! Built-in questionnaire definitions and instrument loading. Pure data:
//! each module under [`instruments`] holds one ready-to-score definition.

pub mod error;
pub mod instruments;

use std::path::Path;

use tracing::info;

use burnout_core::models::instrument::InstrumentDefinition;

use crate::error::InstrumentError;

/// All built-in instrument definitions.
pub fn all_instruments() -> Vec<&'static InstrumentDefinition> {
    vec![instruments::cbi19::cbi19()]
}

/// Look up a built-in instrument by ID.
pub fn get_instrument(id: &str) -> Option<&'static InstrumentDefinition> {
    all_instruments().into_iter().find(|i| i.id == id)
}

/// Load and validate an instrument definition from a JSON file.
pub fn load_instrument(path: &Path) -> Result<InstrumentDefinition, InstrumentError> {
    let contents = std::fs::read_to_string(path)?;
    let definition = InstrumentDefinition::from_json(&contents)?;
    info!(
        instrument = %definition.id,
        items = definition.items.len(),
        "instrument loaded"
    );
    Ok(definition)
}

/// Resolve an instrument argument: a built-in ID, or a path to a JSON
/// definition file.
pub fn resolve_instrument(id_or_path: &str) -> Result<InstrumentDefinition, InstrumentError> {
    if let Some(builtin) = get_instrument(id_or_path) {
        return Ok(builtin.clone());
    }
    let path = Path::new(id_or_path);
    if path.exists() {
        return load_instrument(path);
    }
    Err(InstrumentError::UnknownInstrument(id_or_path.to_string()))
}
