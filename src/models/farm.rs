use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Soil texture class of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Loam,
    Clay,
    Sandy,
    Silty,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::Loam,
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Silty,
    ];
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Loam => write!(f, "loam"),
            SoilType::Clay => write!(f, "clay"),
            SoilType::Sandy => write!(f, "sandy"),
            SoilType::Silty => write!(f, "silty"),
        }
    }
}

impl std::str::FromStr for SoilType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loam" => Ok(SoilType::Loam),
            "clay" => Ok(SoilType::Clay),
            "sandy" => Ok(SoilType::Sandy),
            "silty" => Ok(SoilType::Silty),
            _ => Err(AdvisorError::ParseError(format!("Unknown soil type: '{s}'"))),
        }
    }
}

/// A single problem found while validating farm input against the form bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

/// Form bounds for the numeric inputs. The scoring engine accepts values
/// outside these; only the presentation layers enforce them.
pub const RAINFALL_BOUNDS_MM: (f64, f64) = (0.0, 4000.0);
pub const TEMP_BOUNDS_C: (f64, f64) = (-5.0, 55.0);
pub const PH_BOUNDS: (f64, f64) = (3.0, 10.0);
pub const ACREAGE_BOUNDS_HA: (f64, f64) = (0.0, 1000.0);
pub const BUDGET_BOUNDS: (f64, f64) = (0.0, 500_000.0);

fn default_acreage() -> f64 {
    1.0
}

/// Farm conditions entered by the farmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmInput {
    /// Soil texture
    pub soil: SoilType,
    /// Annual rainfall in mm
    pub rainfall: f64,
    /// Mean growing-season temperature in °C
    pub temp: f64,
    /// Soil pH
    pub ph: f64,
    /// Farm area in hectares
    #[serde(default = "default_acreage")]
    pub acreage: f64,
    /// Whether the field is irrigated
    pub irrigation: bool,
    /// Budget per hectare in rupees
    pub budget: f64,
    /// Crop grown last season, empty if unknown
    #[serde(default, alias = "previous_crop")]
    pub previous_crop: String,
}

impl Default for FarmInput {
    fn default() -> Self {
        Self {
            soil: SoilType::Loam,
            rainfall: 700.0,
            temp: 26.0,
            ph: 6.8,
            acreage: 1.0,
            irrigation: true,
            budget: 40_000.0,
            previous_crop: "Wheat".to_string(),
        }
    }
}

fn check_bounds(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: f64,
    (min, max): (f64, f64),
) {
    if !value.is_finite() {
        issues.push(ValidationIssue {
            field: field.to_string(),
            message: format!("{field} must be a finite number, got {value}"),
        });
    } else if !(min..=max).contains(&value) {
        issues.push(ValidationIssue {
            field: field.to_string(),
            message: format!("{field} must be in {min}..={max}, got {value}"),
        });
    }
}

impl FarmInput {
    /// Validate every numeric field, collecting all issues (non-fail-fast).
    pub fn validate_all(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        check_bounds(&mut issues, "rainfall", self.rainfall, RAINFALL_BOUNDS_MM);
        check_bounds(&mut issues, "temp", self.temp, TEMP_BOUNDS_C);
        check_bounds(&mut issues, "ph", self.ph, PH_BOUNDS);
        check_bounds(&mut issues, "acreage", self.acreage, ACREAGE_BOUNDS_HA);
        check_bounds(&mut issues, "budget", self.budget, BUDGET_BOUNDS);
        issues
    }

    /// Validate input against the form bounds. Returns the first issue as
    /// `AdvisorError::ValidationError`.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        match self.validate_all().into_iter().next() {
            Some(issue) => Err(AdvisorError::ValidationError(issue.message)),
            None => Ok(()),
        }
    }
}
