mod advisor;
mod rounding;
mod scoring;

pub use advisor::Advisor;
pub use rounding::{round_half_up, to_fixed};
pub use scoring::{
    assess_crop, budget_multiplier, irrigation_score, rank_all, recommend, recommend_from,
    rotation_bonus, score_range, soil_score, sustainability_score, ComponentScores,
    CropAssessment, IRRIGATION_WEIGHT, MAX_RECOMMENDATIONS, PH_WEIGHT, RAINFALL_WEIGHT,
    ROTATION_BONUS, SOIL_WEIGHT, TEMP_WEIGHT,
};
