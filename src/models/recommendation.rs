use serde::{Deserialize, Serialize};

/// A scored crop suggestion for a farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Crop name, matching a catalog profile
    pub crop: String,
    /// Expected yield in t/ha
    pub yield_t_per_ha: f64,
    /// Expected profit per hectare in rupees
    pub profit_per_ha: f64,
    /// Sustainability score, 0-100
    pub sustainability: u8,
    /// Human-readable justification
    pub reason: String,
}
