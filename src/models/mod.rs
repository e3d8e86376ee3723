mod crop;
mod farm;
mod recommendation;

pub use crop::{crop_profiles, find_profile, CropProfile, Range, CROP_PROFILES};
pub use farm::{
    FarmInput, SoilType, ValidationIssue, ACREAGE_BOUNDS_HA, BUDGET_BOUNDS, PH_BOUNDS,
    RAINFALL_BOUNDS_MM, TEMP_BOUNDS_C,
};
pub use recommendation::Recommendation;
