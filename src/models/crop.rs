use serde::Serialize;

use super::SoilType;

/// Inclusive tolerance range for a growing condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Agronomic and market reference data for one crop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProfile {
    pub name: &'static str,
    /// Expected yield in t/ha under average conditions
    pub base_yield: f64,
    /// Market price per tonne in rupees
    pub price: f64,
    /// Annual rainfall tolerance in mm
    pub rainfall: Range,
    /// Temperature tolerance in °C
    pub temp: Range,
    /// Soil pH tolerance
    pub ph: Range,
    /// Soils the crop does best on
    pub soils: &'static [SoilType],
    /// Heavily dependent on standing water (rice). Penalised without
    /// irrigation and damped in the sustainability score.
    pub water_intensive: bool,
}

impl CropProfile {
    pub fn prefers_soil(&self, soil: SoilType) -> bool {
        self.soils.contains(&soil)
    }
}

/// The built-in crop catalog. Order matters: ties in profit keep this order.
pub static CROP_PROFILES: [CropProfile; 5] = [
    CropProfile {
        name: "Wheat",
        base_yield: 3.2,
        price: 22_000.0,
        rainfall: Range::new(300.0, 900.0),
        temp: Range::new(10.0, 25.0),
        ph: Range::new(6.0, 7.5),
        soils: &[SoilType::Loam, SoilType::Clay],
        water_intensive: false,
    },
    CropProfile {
        name: "Rice",
        base_yield: 4.5,
        price: 19_000.0,
        rainfall: Range::new(800.0, 2000.0),
        temp: Range::new(20.0, 35.0),
        ph: Range::new(5.5, 7.0),
        soils: &[SoilType::Clay, SoilType::Silty],
        water_intensive: true,
    },
    CropProfile {
        name: "Maize",
        base_yield: 5.0,
        price: 17_500.0,
        rainfall: Range::new(400.0, 1200.0),
        temp: Range::new(18.0, 32.0),
        ph: Range::new(5.8, 7.2),
        soils: &[SoilType::Loam, SoilType::Sandy],
        water_intensive: false,
    },
    CropProfile {
        name: "Chickpea",
        base_yield: 1.8,
        price: 55_000.0,
        rainfall: Range::new(250.0, 1000.0),
        temp: Range::new(10.0, 30.0),
        ph: Range::new(6.0, 8.0),
        soils: &[SoilType::Sandy, SoilType::Loam],
        water_intensive: false,
    },
    CropProfile {
        name: "Mustard",
        base_yield: 1.4,
        price: 45_000.0,
        rainfall: Range::new(300.0, 900.0),
        temp: Range::new(10.0, 25.0),
        ph: Range::new(6.0, 7.5),
        soils: &[SoilType::Loam, SoilType::Sandy],
        water_intensive: false,
    },
];

/// The built-in crop catalog.
pub fn crop_profiles() -> &'static [CropProfile] {
    &CROP_PROFILES
}

/// Look up a built-in profile by name, ignoring case.
pub fn find_profile(name: &str) -> Option<&'static CropProfile> {
    let name = name.trim();
    CROP_PROFILES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}
