use std::fs;
use std::path::Path;

use serde::{de, Deserialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{FleetError, FleetResult};
use crate::setup::init_types::RawInput;

/// Reads the JSON file at `path` and decodes it into a [`RawInput`].
pub fn load_input(path: &Path) -> FleetResult<RawInput> {
    info!("Loading fleet input from {}", path.display());

    let file_content = fs::read_to_string(path).map_err(|source| FleetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes", file_content.len());

    parse_input(&file_content)
}

/// Decodes raw JSON text. Anything that is not an object with integer fields is a parse error.
pub fn parse_input(content: &str) -> FleetResult<RawInput> {
    let value: Value = serde_json::from_str(content)?;
    // Derived struct impls also accept a positional array; only objects are records.
    if !value.is_object() {
        return Err(FleetError::Parse(de::Error::custom(
            "expected a JSON object at the top level",
        )));
    }
    let input = RawInput::deserialize(value)?;
    Ok(input)
}
