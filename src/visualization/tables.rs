use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::analysis::{to_fixed, CropAssessment};
use crate::chat::{format_rupees, t, Lang, MessageKey};
use crate::models::{CropProfile, Recommendation};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format the ranked recommendations as a table with localized headers.
pub fn format_recommendations(recs: &[Recommendation], lang: Lang) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", t(MessageKey::Recommendations, lang).bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    if recs.is_empty() {
        output.push_str("  No recommendations.\n");
        return output;
    }

    let mut table = new_table();
    table.set_header(vec![
        "#",
        t(MessageKey::CropSuggestion, lang),
        t(MessageKey::Yield, lang),
        t(MessageKey::Profit, lang),
        t(MessageKey::Sustainability, lang),
    ]);

    for (i, rec) in recs.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&rec.crop),
            Cell::new(format!("{} t/ha", to_fixed(rec.yield_t_per_ha, 1))),
            Cell::new(format!("₹{}/ha", format_rupees(rec.profit_per_ha))),
            Cell::new(format!("{}%", rec.sustainability)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    if let Some(top) = recs.first() {
        output.push_str(&format!("  {}\n", top.reason.dimmed()));
    }
    output
}

/// Print the ranked recommendations table.
pub fn print_recommendations(recs: &[Recommendation], lang: Lang) {
    print!("{}", format_recommendations(recs, lang));
}

/// Format the per-crop scoring breakdown.
pub fn format_assessment_table(assessments: &[CropAssessment]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Scoring Breakdown".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(70)));

    let mut table = new_table();
    table.set_header(vec![
        "Crop", "Rain", "Temp", "pH", "Soil", "Irrig.", "Fit", "Budget x", "Rotation x",
        "Yield", "Profit/ha",
    ]);

    for a in assessments {
        table.add_row(vec![
            Cell::new(&a.crop),
            Cell::new(format!("{:.2}", a.scores.rainfall)),
            Cell::new(format!("{:.2}", a.scores.temp)),
            Cell::new(format!("{:.2}", a.scores.ph)),
            Cell::new(format!("{:.2}", a.scores.soil)),
            Cell::new(format!("{:.2}", a.scores.irrigation)),
            Cell::new(format!("{:.3}", a.fit)),
            Cell::new(format!("{:.3}", a.budget_multiplier)),
            Cell::new(format!("{:.2}", a.rotation_bonus)),
            Cell::new(format!("{:.2}", a.recommendation.yield_t_per_ha)),
            Cell::new(format!("{:.2}", a.recommendation.profit_per_ha)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the per-crop scoring breakdown.
pub fn print_assessment_table(assessments: &[CropAssessment]) {
    print!("{}", format_assessment_table(assessments));
}

/// Format the crop reference catalog.
pub fn format_crop_catalog(profiles: &[CropProfile]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Crop Catalog".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(70)));

    let mut table = new_table();
    table.set_header(vec![
        "Crop",
        "Base Yield (t/ha)",
        "Price (₹/t)",
        "Rainfall (mm)",
        "Temp (°C)",
        "pH",
        "Soils",
    ]);

    for p in profiles {
        let soils: Vec<String> = p.soils.iter().map(|s| s.to_string()).collect();
        table.add_row(vec![
            Cell::new(p.name),
            Cell::new(format!("{:.1}", p.base_yield)),
            Cell::new(format_rupees(p.price)),
            Cell::new(p.rainfall),
            Cell::new(p.temp),
            Cell::new(p.ph),
            Cell::new(soils.join(", ")),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the crop reference catalog.
pub fn print_crop_catalog(profiles: &[CropProfile]) {
    print!("{}", format_crop_catalog(profiles));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{rank_all, recommend};
    use crate::models::{crop_profiles, FarmInput};

    #[test]
    fn test_format_recommendations_english() {
        let recs = recommend(&FarmInput::default());
        let output = format_recommendations(&recs, Lang::En);
        assert!(output.contains("Recommendations"));
        assert!(output.contains("Chickpea"));
        assert!(output.contains("2.5 t/ha"));
        assert!(output.contains("₹153/ha"));
        assert!(output.contains("98%"));
        assert!(output.contains("good fit"));
    }

    #[test]
    fn test_format_recommendations_yield_tie_rounds_up() {
        let mut recs = recommend(&FarmInput::default());
        recs[0].yield_t_per_ha = 6.25;
        let output = format_recommendations(&recs, Lang::En);
        assert!(output.contains("6.3 t/ha"));
        assert!(!output.contains("6.2 t/ha"));
    }

    #[test]
    fn test_format_recommendations_hindi_headers() {
        let recs = recommend(&FarmInput::default());
        let output = format_recommendations(&recs, Lang::Hi);
        assert!(output.contains("सुझाव"));
        assert!(output.contains("उत्पादन"));
        assert!(output.contains("मुनाफ़ा"));
    }

    #[test]
    fn test_format_recommendations_empty() {
        let output = format_recommendations(&[], Lang::En);
        assert!(output.contains("No recommendations."));
    }

    #[test]
    fn test_format_assessment_table() {
        let ranked = rank_all(&FarmInput::default(), crop_profiles());
        let output = format_assessment_table(&ranked);
        assert!(output.contains("Scoring Breakdown"));
        for name in ["Wheat", "Rice", "Maize", "Chickpea", "Mustard"] {
            assert!(output.contains(name));
        }
        assert!(output.contains("1.100"));
    }

    #[test]
    fn test_format_crop_catalog() {
        let output = format_crop_catalog(crop_profiles());
        assert!(output.contains("Crop Catalog"));
        assert!(output.contains("800-2000"));
        assert!(output.contains("clay, silty"));
        assert!(output.contains("55,000"));
    }
}
