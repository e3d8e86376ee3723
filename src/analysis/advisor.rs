use tracing::debug;

use crate::analysis::{assess_crop, rank_all, recommend_from, CropAssessment};
use crate::models::{crop_profiles, CropProfile, FarmInput, Recommendation};

/// Groups the scoring operations over one crop catalog.
pub struct Advisor<'a> {
    profiles: &'a [CropProfile],
}

impl Default for Advisor<'static> {
    fn default() -> Self {
        Self::new(crop_profiles())
    }
}

impl<'a> Advisor<'a> {
    /// Create an advisor over the given catalog.
    pub fn new(profiles: &'a [CropProfile]) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &'a [CropProfile] {
        self.profiles
    }

    /// Top recommendations, most profitable first.
    pub fn recommend(&self, input: &FarmInput) -> Vec<Recommendation> {
        let recs = recommend_from(input, self.profiles);
        debug!(
            soil = %input.soil,
            rainfall = input.rainfall,
            temp = input.temp,
            ph = input.ph,
            top = recs.first().map(|r| r.crop.as_str()).unwrap_or("-"),
            "scored {} crops, returning {}",
            self.profiles.len(),
            recs.len()
        );
        recs
    }

    /// Full breakdown for every crop in the catalog, most profitable first.
    pub fn rank_all(&self, input: &FarmInput) -> Vec<CropAssessment> {
        rank_all(input, self.profiles)
    }

    /// Breakdown for a single crop, looked up by name ignoring case.
    pub fn assess(&self, input: &FarmInput, crop: &str) -> Option<CropAssessment> {
        let crop = crop.trim();
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(crop))
            .map(|p| assess_crop(input, p))
    }

    /// The single best recommendation, if the catalog is non-empty.
    pub fn top(&self, input: &FarmInput) -> Option<Recommendation> {
        self.recommend(input).into_iter().next()
    }
}
