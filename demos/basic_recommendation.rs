//! Basic recommendation example: load a farm, rank crops, and display results.
//!
//! Run from the project root:
//!   cargo run --example basic_recommendation

use std::path::Path;

use crop_advisor::analysis::Advisor;
use crop_advisor::chat::Lang;
use crop_advisor::io::{FarmInputReader, JsonFormat};
use crop_advisor::visualization::{print_recommendations, print_sustainability_chart};

fn main() {
    let path = Path::new("data/samples/sample_farm.json");
    let reader = JsonFormat::default();

    let farm = reader.read(path).expect("Failed to read farm JSON");
    println!(
        "Loaded farm: {} soil, {} mm rain, {} °C, pH {}",
        farm.soil, farm.rainfall, farm.temp, farm.ph
    );

    let advisor = Advisor::default();
    let recs = advisor.recommend(&farm);

    for lang in Lang::ALL {
        print_recommendations(&recs, lang);
    }
    print_sustainability_chart(&recs);

    if let Some(top) = recs.first() {
        println!(
            "Best crop for {} ha: {} (about ₹{:.0} in total)",
            farm.acreage,
            top.crop,
            top.profit_per_ha * farm.acreage
        );
    }
}
