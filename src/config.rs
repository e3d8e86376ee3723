use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chat::Lang;
use crate::error::AdvisorError;
use crate::models::{FarmInput, SoilType};

/// Default farm values from the `[farm]` table. Unset fields fall back to
/// [`FarmInput::default`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FarmDefaults {
    pub soil: Option<SoilType>,
    pub rainfall: Option<f64>,
    pub temp: Option<f64>,
    pub ph: Option<f64>,
    pub acreage: Option<f64>,
    pub irrigation: Option<bool>,
    pub budget: Option<f64>,
    pub previous_crop: Option<String>,
}

impl FarmDefaults {
    pub fn to_input(&self) -> FarmInput {
        let base = FarmInput::default();
        FarmInput {
            soil: self.soil.unwrap_or(base.soil),
            rainfall: self.rainfall.unwrap_or(base.rainfall),
            temp: self.temp.unwrap_or(base.temp),
            ph: self.ph.unwrap_or(base.ph),
            acreage: self.acreage.unwrap_or(base.acreage),
            irrigation: self.irrigation.unwrap_or(base.irrigation),
            budget: self.budget.unwrap_or(base.budget),
            previous_crop: self.previous_crop.clone().unwrap_or(base.previous_crop),
        }
    }
}

/// Advisor settings, read from a TOML file.
///
/// ```toml
/// language = "hi"
/// state_dir = "/var/lib/crop-advisor"
/// speech = true
///
/// [farm]
/// soil = "clay"
/// rainfall = 1100.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvisorConfig {
    /// Display language; when unset the stored choice or system locale is used
    pub language: Option<Lang>,
    /// Directory for the local key-value store
    pub state_dir: Option<PathBuf>,
    /// Speak chat answers aloud
    #[serde(default)]
    pub speech: bool,
    #[serde(default)]
    pub farm: FarmDefaults,
}

impl AdvisorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, AdvisorError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AdvisorError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// The default farm input, validated against the form bounds.
    pub fn default_farm(&self) -> Result<FarmInput, AdvisorError> {
        let input = self.farm.to_input();
        input.validate()?;
        Ok(input)
    }
}
