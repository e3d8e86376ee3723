use serde::Serialize;

use super::rounding::{round_half_up, to_fixed};
use crate::models::{crop_profiles, CropProfile, FarmInput, Range, Recommendation, SoilType};

/// Number of crops returned by [`recommend`].
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Composite fit weights. They sum to 1.0, so fit stays within [0, 1].
pub const RAINFALL_WEIGHT: f64 = 0.35;
pub const TEMP_WEIGHT: f64 = 0.25;
pub const PH_WEIGHT: f64 = 0.20;
pub const SOIL_WEIGHT: f64 = 0.10;
pub const IRRIGATION_WEIGHT: f64 = 0.10;

const SOIL_MISMATCH_SCORE: f64 = 0.6;
const RAINFED_SCORE: f64 = 0.9;
const RAINFED_WATER_INTENSIVE_SCORE: f64 = 0.6;

/// Yield spans 70% (fit 0) to 130% (fit 1) of the base yield.
const YIELD_FLOOR: f64 = 0.7;
const YIELD_SPAN: f64 = 0.6;

const PRICE_SCALE: f64 = 0.001;
const BUDGET_MULTIPLIER_FLOOR: f64 = 0.9;
const BUDGET_MULTIPLIER_CAP: f64 = 1.1;
const BUDGET_SCALE: f64 = 100_000.0;

pub const ROTATION_BONUS: f64 = 1.08;

const SUSTAINABILITY_BASE: f64 = 60.0;
const SUSTAINABILITY_SPAN: f64 = 40.0;
const IRRIGATION_DAMPING: f64 = 0.95;
const WATER_INTENSIVE_DAMPING: f64 = 0.9;

/// Per-dimension suitability scores for one crop, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScores {
    pub rainfall: f64,
    pub temp: f64,
    pub ph: f64,
    pub soil: f64,
    pub irrigation: f64,
}

impl ComponentScores {
    pub fn compute(input: &FarmInput, profile: &CropProfile) -> Self {
        Self {
            rainfall: score_range(input.rainfall, profile.rainfall),
            temp: score_range(input.temp, profile.temp),
            ph: score_range(input.ph, profile.ph),
            soil: soil_score(profile, input.soil),
            irrigation: irrigation_score(profile, input.irrigation),
        }
    }

    /// Weighted composite fit.
    pub fn fit(&self) -> f64 {
        RAINFALL_WEIGHT * self.rainfall
            + TEMP_WEIGHT * self.temp
            + PH_WEIGHT * self.ph
            + SOIL_WEIGHT * self.soil
            + IRRIGATION_WEIGHT * self.irrigation
    }
}

/// Full scoring breakdown for one crop against one farm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropAssessment {
    pub crop: String,
    pub scores: ComponentScores,
    pub fit: f64,
    /// Yield before rounding and rotation
    pub raw_yield: f64,
    pub budget_multiplier: f64,
    pub rotation_bonus: f64,
    pub recommendation: Recommendation,
}

/// Score how well `value` sits within `range`.
///
/// Returns 1.0 inside the range (inclusive). Outside, the penalty is the
/// deviation relative to the violated bound, so the score reaches 0 once the
/// shortfall or excess equals the bound itself. A zero bound uses 1 as the
/// denominator.
pub fn score_range(value: f64, range: Range) -> f64 {
    if value < range.min {
        let denom = if range.min == 0.0 { 1.0 } else { range.min };
        (1.0 - (range.min - value) / denom).max(0.0)
    } else if value > range.max {
        let denom = if range.max == 0.0 { 1.0 } else { range.max };
        (1.0 - (value - range.max) / denom).max(0.0)
    } else {
        1.0
    }
}

/// Soft penalty when the soil is not one the crop prefers.
pub fn soil_score(profile: &CropProfile, soil: SoilType) -> f64 {
    if profile.prefers_soil(soil) {
        1.0
    } else {
        SOIL_MISMATCH_SCORE
    }
}

pub fn irrigation_score(profile: &CropProfile, irrigated: bool) -> f64 {
    if irrigated {
        1.0
    } else if profile.water_intensive {
        RAINFED_WATER_INTENSIVE_SCORE
    } else {
        RAINFED_SCORE
    }
}

/// Profit multiplier from the per-hectare budget.
///
/// Non-positive budgets map to exactly 1.0, while small positive budgets
/// start at 0.9, so the multiplier jumps at zero. Saturates at 1.1 from
/// 20000 upwards.
pub fn budget_multiplier(budget: f64) -> f64 {
    if budget > 0.0 {
        (BUDGET_MULTIPLIER_FLOOR + budget / BUDGET_SCALE).min(BUDGET_MULTIPLIER_CAP)
    } else {
        1.0
    }
}

/// Bonus for rotating away from last season's crop. Exact, case-sensitive
/// comparison; an empty previous crop earns nothing.
pub fn rotation_bonus(previous_crop: &str, crop: &str) -> f64 {
    if !previous_crop.is_empty() && previous_crop != crop {
        ROTATION_BONUS
    } else {
        1.0
    }
}

/// Sustainability score in [0, 100].
pub fn sustainability_score(fit: f64, irrigated: bool, water_intensive: bool) -> u8 {
    let irrigation_damping = if irrigated { IRRIGATION_DAMPING } else { 1.0 };
    let water_damping = if water_intensive {
        WATER_INTENSIVE_DAMPING
    } else {
        1.0
    };
    let raw = (SUSTAINABILITY_BASE + SUSTAINABILITY_SPAN * (fit * irrigation_damping * water_damping))
        .round();
    raw.clamp(0.0, 100.0) as u8
}

fn reason(input: &FarmInput) -> String {
    format!(
        "{} soil, {}mm rain, {}°C, pH {} → good fit",
        input.soil,
        input.rainfall,
        input.temp,
        to_fixed(input.ph, 1)
    )
}

/// Score a single crop profile against the farm.
pub fn assess_crop(input: &FarmInput, profile: &CropProfile) -> CropAssessment {
    let scores = ComponentScores::compute(input, profile);
    let fit = scores.fit();

    let raw_yield = profile.base_yield * (YIELD_FLOOR + YIELD_SPAN * fit);
    let multiplier = budget_multiplier(input.budget);
    let profit = raw_yield * profile.price * PRICE_SCALE * multiplier;
    let rotation = rotation_bonus(&input.previous_crop, profile.name);

    let recommendation = Recommendation {
        crop: profile.name.to_string(),
        yield_t_per_ha: round_half_up(raw_yield, 2) * rotation,
        profit_per_ha: profit * rotation,
        sustainability: sustainability_score(fit, input.irrigation, profile.water_intensive),
        reason: reason(input),
    };

    CropAssessment {
        crop: profile.name.to_string(),
        scores,
        fit,
        raw_yield,
        budget_multiplier: multiplier,
        rotation_bonus: rotation,
        recommendation,
    }
}

/// Score every profile and sort by profit per hectare, highest first.
/// The sort is stable, so equal profits keep catalog order.
pub fn rank_all(input: &FarmInput, profiles: &[CropProfile]) -> Vec<CropAssessment> {
    let mut assessments: Vec<CropAssessment> =
        profiles.iter().map(|p| assess_crop(input, p)).collect();
    assessments.sort_by(|a, b| {
        b.recommendation
            .profit_per_ha
            .total_cmp(&a.recommendation.profit_per_ha)
    });
    assessments
}

/// Top recommendations from an arbitrary catalog.
pub fn recommend_from(input: &FarmInput, profiles: &[CropProfile]) -> Vec<Recommendation> {
    rank_all(input, profiles)
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|a| a.recommendation)
        .collect()
}

/// Recommend up to three crops for the farm, most profitable first.
pub fn recommend(input: &FarmInput) -> Vec<Recommendation> {
    recommend_from(input, crop_profiles())
}
