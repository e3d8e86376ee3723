//! Scoring breakdown example: explain every crop for each farm in a CSV batch.
//!
//! Run from the project root:
//!   cargo run --example crop_breakdown

use crop_advisor::analysis::Advisor;
use crop_advisor::io::read_farm_inputs_csv;
use crop_advisor::models::crop_profiles;
use crop_advisor::visualization::{print_assessment_table, print_crop_catalog};

fn main() {
    let records =
        read_farm_inputs_csv("data/samples/sample_farms.csv").expect("Failed to read CSV file");

    print_crop_catalog(crop_profiles());

    let advisor = Advisor::default();
    for record in &records {
        println!("\n{}", record.name);
        let ranked = advisor.rank_all(&record.input);
        print_assessment_table(&ranked);

        if let Some(best) = ranked.first() {
            println!(
                "  {} wins with fit {:.2} and budget multiplier {:.3}",
                best.crop, best.fit, best.budget_multiplier
            );
        }
    }
}
