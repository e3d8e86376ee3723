use std::path::Path;

use crate::error::AdvisorError;
use crate::models::{FarmInput, Recommendation};

/// Read farm input from a JSON file and validate it.
pub fn read_farm_input_json(path: impl AsRef<Path>) -> Result<FarmInput, AdvisorError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let input: FarmInput = serde_json::from_str(&content)?;
    input.validate()?;
    Ok(input)
}

/// Read farm input from JSON bytes and validate it.
pub fn read_farm_input_json_from_bytes(data: &[u8]) -> Result<FarmInput, AdvisorError> {
    let content = std::str::from_utf8(data)
        .map_err(|e| AdvisorError::ParseError(format!("Invalid UTF-8: {e}")))?;
    let input: FarmInput = serde_json::from_str(content)?;
    input.validate()?;
    Ok(input)
}

/// Read farm input from a TOML file and validate it.
pub fn read_farm_input_toml(path: impl AsRef<Path>) -> Result<FarmInput, AdvisorError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let input: FarmInput = toml::from_str(&content)?;
    input.validate()?;
    Ok(input)
}

/// Write recommendations to a JSON file.
pub fn write_recommendations_json(
    recs: &[Recommendation],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), AdvisorError> {
    let content = if pretty {
        serde_json::to_string_pretty(recs)?
    } else {
        serde_json::to_string(recs)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}
