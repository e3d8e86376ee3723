mod charts;
mod tables;

pub use charts::{format_sustainability_chart, print_sustainability_chart};
pub use tables::{
    format_assessment_table, format_crop_catalog, format_recommendations, print_assessment_table,
    print_crop_catalog, print_recommendations,
};
