mod csv_io;
mod json_io;
mod state;

use std::path::Path;

use crate::error::AdvisorError;
use crate::models::{FarmInput, Recommendation};

pub use csv_io::{
    read_farm_inputs_csv, read_farm_inputs_csv_from_bytes, write_recommendations_csv, FarmRecord,
};
pub use json_io::{
    read_farm_input_json, read_farm_input_json_from_bytes, read_farm_input_toml,
    write_recommendations_json,
};
pub use state::{load_lang, load_state, save_lang, save_state, PersistedState, LANG_KEY, STATE_KEY};

/// Trait for reading farm input from a file.
pub trait FarmInputReader {
    fn read(&self, path: &Path) -> Result<FarmInput, AdvisorError>;
}

/// Trait for writing recommendations to a file.
pub trait RecommendationWriter {
    fn write(&self, recs: &[Recommendation], path: &Path) -> Result<(), AdvisorError>;
}

/// JSON format reader/writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl FarmInputReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<FarmInput, AdvisorError> {
        read_farm_input_json(path)
    }
}

impl RecommendationWriter for JsonFormat {
    fn write(&self, recs: &[Recommendation], path: &Path) -> Result<(), AdvisorError> {
        write_recommendations_json(recs, path, self.pretty)
    }
}

/// TOML farm input reader.
pub struct TomlFormat;

impl FarmInputReader for TomlFormat {
    fn read(&self, path: &Path) -> Result<FarmInput, AdvisorError> {
        read_farm_input_toml(path)
    }
}

/// CSV recommendation writer.
pub struct CsvFormat;

impl RecommendationWriter for CsvFormat {
    fn write(&self, recs: &[Recommendation], path: &Path) -> Result<(), AdvisorError> {
        write_recommendations_csv(recs, path)
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Read farm input, picking the format from the file extension.
pub fn read_farm_input(path: impl AsRef<Path>) -> Result<FarmInput, AdvisorError> {
    let path = path.as_ref();
    match extension(path).as_str() {
        "json" => JsonFormat::default().read(path),
        "toml" => TomlFormat.read(path),
        ext => Err(AdvisorError::ParseError(format!(
            "Unsupported input format: .{ext}. Use .json or .toml"
        ))),
    }
}

/// Write recommendations, picking the format from the file extension.
pub fn write_recommendations(
    recs: &[Recommendation],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), AdvisorError> {
    let path = path.as_ref();
    match extension(path).as_str() {
        "json" => JsonFormat { pretty }.write(recs, path),
        "csv" => CsvFormat.write(recs, path),
        ext => Err(AdvisorError::ParseError(format!(
            "Unsupported output format: .{ext}. Use .json or .csv"
        ))),
    }
}
