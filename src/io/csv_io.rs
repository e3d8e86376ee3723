use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;
use crate::models::{FarmInput, Recommendation, SoilType};

/// One farm in a batch file.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmRecord {
    pub name: String,
    pub input: FarmInput,
}

/// CSV row structure for batch farm input.
#[derive(Debug, Deserialize)]
struct FarmRow {
    #[serde(default)]
    name: Option<String>,
    soil: String,
    rainfall: f64,
    temp: f64,
    ph: f64,
    #[serde(default)]
    acreage: Option<f64>,
    irrigation: String,
    budget: f64,
    #[serde(default, alias = "previousCrop")]
    previous_crop: Option<String>,
}

/// CSV row structure for exported recommendations.
#[derive(Debug, Serialize)]
struct RecommendationRow<'a> {
    rank: usize,
    crop: &'a str,
    yield_t_per_ha: f64,
    profit_per_ha: f64,
    sustainability: u8,
    reason: &'a str,
}

fn parse_flag(value: &str) -> Result<bool, AdvisorError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        _ => Err(AdvisorError::ParseError(format!(
            "Unknown irrigation value: '{value}'"
        ))),
    }
}

fn row_to_record(index: usize, row: FarmRow) -> Result<FarmRecord, AdvisorError> {
    let soil: SoilType = row.soil.parse()?;
    let input = FarmInput {
        soil,
        rainfall: row.rainfall,
        temp: row.temp,
        ph: row.ph,
        acreage: row.acreage.unwrap_or(1.0),
        irrigation: parse_flag(&row.irrigation)?,
        budget: row.budget,
        previous_crop: row.previous_crop.unwrap_or_default(),
    };
    input.validate().map_err(|e| match e {
        AdvisorError::ValidationError(msg) => {
            AdvisorError::ValidationError(format!("Row {}: {msg}", index + 1))
        }
        other => other,
    })?;

    let name = row
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("Farm {}", index + 1));
    Ok(FarmRecord { name, input })
}

fn parse_farm_records<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<Vec<FarmRecord>, AdvisorError> {
    let mut records = Vec::new();
    for (index, result) in rdr.deserialize().enumerate() {
        let row: FarmRow = result?;
        records.push(row_to_record(index, row)?);
    }
    Ok(records)
}

/// Read a batch of farms, one per CSV row.
pub fn read_farm_inputs_csv(path: impl AsRef<Path>) -> Result<Vec<FarmRecord>, AdvisorError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;
    parse_farm_records(&mut rdr)
}

/// Read a batch of farms from CSV bytes.
pub fn read_farm_inputs_csv_from_bytes(data: &[u8]) -> Result<Vec<FarmRecord>, AdvisorError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);
    parse_farm_records(&mut rdr)
}

/// Write ranked recommendations to a CSV file.
pub fn write_recommendations_csv(
    recs: &[Recommendation],
    path: impl AsRef<Path>,
) -> Result<(), AdvisorError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for (i, rec) in recs.iter().enumerate() {
        wtr.serialize(RecommendationRow {
            rank: i + 1,
            crop: &rec.crop,
            yield_t_per_ha: rec.yield_t_per_ha,
            profit_per_ha: rec.profit_per_ha,
            sustainability: rec.sustainability,
            reason: &rec.reason,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recommend;

    const BATCH: &str = "\
name,soil,rainfall,temp,ph,acreage,irrigation,budget,previous_crop
North field,loam,700,26,6.8,2,yes,40000,Wheat
,clay,1500,30,6.0,,no,0,
";

    #[test]
    fn test_read_batch() {
        let records = read_farm_inputs_csv_from_bytes(BATCH.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "North field");
        assert_eq!(records[0].input.acreage, 2.0);
        assert!(records[0].input.irrigation);
        assert_eq!(records[1].name, "Farm 2");
        assert_eq!(records[1].input.soil, SoilType::Clay);
        assert!(!records[1].input.irrigation);
        assert_eq!(records[1].input.acreage, 1.0);
        assert!(records[1].input.previous_crop.is_empty());
    }

    #[test]
    fn test_read_batch_camel_case_header() {
        let data = "soil,rainfall,temp,ph,irrigation,budget,previousCrop\n\
                    sandy,500,20,7,true,1000,Rice\n";
        let records = read_farm_inputs_csv_from_bytes(data.as_bytes()).unwrap();
        assert_eq!(records[0].input.previous_crop, "Rice");
    }

    #[test]
    fn test_read_batch_bad_soil() {
        let data = "soil,rainfall,temp,ph,irrigation,budget\npeat,500,20,7,true,0\n";
        let err = read_farm_inputs_csv_from_bytes(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AdvisorError::ParseError(_)));
    }

    #[test]
    fn test_read_batch_bad_irrigation() {
        let data = "soil,rainfall,temp,ph,irrigation,budget\nloam,500,20,7,maybe,0\n";
        let err = read_farm_inputs_csv_from_bytes(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_read_batch_reports_row_on_validation_error() {
        let data = "soil,rainfall,temp,ph,irrigation,budget\n\
                    loam,500,20,7,true,0\n\
                    loam,500,20,12,true,0\n";
        let err = read_farm_inputs_csv_from_bytes(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AdvisorError::ValidationError(_)));
        assert!(err.to_string().contains("Row 2"));
    }

    #[test]
    fn test_read_batch_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("farms.csv");
        std::fs::write(&path, BATCH).unwrap();
        assert_eq!(read_farm_inputs_csv(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_write_recommendations_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recs.csv");
        let recs = recommend(&FarmInput::default());
        write_recommendations_csv(&recs, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "rank,crop,yield_t_per_ha,profit_per_ha,sustainability,reason"
        );
        assert!(lines.next().unwrap().starts_with("1,Chickpea,"));
        assert_eq!(content.lines().count(), 4);
    }
}
