use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Pricing, StationDataset, StationRecord};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Columns the CSV must carry.  Absence of any of them is a fatal startup
/// error, reported before a single row is parsed.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Station Name",
    "State",
    "City",
    "Latitude",
    "Longitude",
    "Facility Type",
    "EV Level2 EVSE Num",
    "EV DC Fast Count",
    "EV Pricing",
    "Access Days Time2",
];

/// Load-time schema failures.  Filtering itself never raises these; a
/// dataset that loads is total for every filter operation.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("dataset is missing required column(s): {0}")]
    MissingColumns(String),
    #[error("unsupported file extension: .{0} (expected .csv)")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One CSV row as it appears on disk, before normalization.  Numeric cells
/// may be empty; `Option` lets the csv crate map those to `None`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Station Name")]
    station_name: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Facility Type")]
    facility_type: Option<String>,
    #[serde(rename = "EV Level2 EVSE Num")]
    level2_count: Option<f64>,
    #[serde(rename = "EV DC Fast Count")]
    dc_fast_count: Option<f64>,
    #[serde(rename = "EV Pricing")]
    pricing: Option<String>,
    #[serde(rename = "Access Days Time2")]
    access_score: f64,
}

impl RawRecord {
    /// Normalize into the domain record.  This is the single place where
    /// the pricing reduction happens; records never carry the raw value.
    fn normalize(self) -> StationRecord {
        let facility_type = self
            .facility_type
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        StationRecord {
            station_name: self.station_name,
            state: self.state,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            facility_type,
            level2_count: self.level2_count,
            dc_fast_count: self.dc_fast_count,
            pricing: Pricing::from_raw(self.pricing.as_deref().unwrap_or("")),
            access_score: self.access_score,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a station dataset from a CSV file.
pub fn load_file(path: &Path) -> Result<StationDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "csv" {
        return Err(SchemaError::UnsupportedExtension(ext).into());
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_records(file).with_context(|| format!("loading {}", path.display()))
}

/// Parse a station dataset from any CSV byte stream.
pub fn read_records<R: Read>(input: R) -> Result<StationDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    check_schema(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.normalize());
    }

    Ok(StationDataset::from_records(records))
}

fn check_schema(headers: &[String]) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|req| !headers.iter().any(|h| h == req))
        .collect();

    if !missing.is_empty() {
        bail!(SchemaError::MissingColumns(missing.join(", ")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Station Name,State,City,Latitude,Longitude,Facility Type,\
EV Level2 EVSE Num,EV DC Fast Count,EV Pricing,Access Days Time2";

    #[test]
    fn loads_and_normalizes_rows() {
        let csv = format!(
            "{HEADER}\n\
             City Hall,CA,Palo Alto,37.44,-122.16,MUNI_GOV,4,,free,12\n\
             Garage B,CA,Palo Alto,37.45,-122.17,PARKING_GARAGE,,2,$2/hr,8\n"
        );
        let ds = read_records(csv.as_bytes()).unwrap();

        assert_eq!(ds.len(), 2);
        let first = &ds.records[0];
        assert_eq!(first.station_name, "City Hall");
        assert_eq!(first.pricing, Pricing::Free);
        assert_eq!(first.level2_count, Some(4.0));
        assert_eq!(first.dc_fast_count, None);

        let second = &ds.records[1];
        assert_eq!(second.pricing, Pricing::Other);
        assert_eq!(second.level2_count, None);
        assert_eq!(second.dc_fast_count, Some(2.0));
        assert_eq!(second.access_score, 8.0);
    }

    #[test]
    fn numeric_looking_state_and_city_stay_text() {
        let csv = format!("{HEADER}\n1,42,007,37.0,-122.0,PUBLIC,1,0,free,5\n");
        let ds = read_records(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].state, "42");
        assert_eq!(ds.records[0].city, "007");
    }

    #[test]
    fn blank_facility_type_becomes_none() {
        let csv = format!("{HEADER}\nA,CA,Fresno,36.7,-119.8,  ,1,0,free,5\n");
        let ds = read_records(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].facility_type, None);
    }

    #[test]
    fn missing_column_is_a_fatal_schema_error() {
        let csv = "Station Name,State,City\nA,CA,Fresno\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("missing required column"));
        assert!(msg.contains("Latitude"));
    }

    #[test]
    fn non_csv_extension_is_rejected() {
        let err = load_file(Path::new("stations.parquet")).unwrap_err();
        assert!(format!("{err}").contains("unsupported file extension"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_file(Path::new("does-not-exist.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist.csv"));
    }

    #[test]
    fn malformed_row_reports_the_row_number() {
        let csv = format!("{HEADER}\nA,CA,Fresno,not-a-number,-119.8,PUBLIC,1,0,free,5\n");
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }
}
