//! Bulk geo-data sources used to (re)populate the store.
//!
//! Rows carry ten columns in a fixed order:
//! geoname_id, continent_code, continent_name, country_iso_code, country_name,
//! subdivision_iso_code, subdivision_name, city_name, metro_code, time_zone

use super::types::{GeoRecord, LocationError, Result};
use std::path::{Path, PathBuf};

const COLUMNS: usize = 10;

/// Anything that can produce the full set of dataset rows.
pub trait GeoSource {
    fn read_rows(&self) -> Result<Vec<GeoRecord>>;

    /// Short label for log lines.
    fn describe(&self) -> String {
        "in-memory rows".into()
    }
}

impl GeoSource for Vec<GeoRecord> {
    fn read_rows(&self) -> Result<Vec<GeoRecord>> {
        Ok(self.clone())
    }
}

/// CSV file source.
pub struct CsvGeoSource {
    path: PathBuf,
    has_headers: bool,
}

impl CsvGeoSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), has_headers: false }
    }

    /// Skip the first line of the file.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GeoSource for CsvGeoSource {
    fn read_rows(&self) -> Result<Vec<GeoRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| {
                LocationError::DataUnavailable(format!("{}: {}", self.path.display(), e))
            })?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                LocationError::DataUnavailable(format!("{}: {}", self.path.display(), e))
            })?;
            let line = record.position().map_or(0, |p| p.line());
            rows.push(parse_record(&record).map_err(|msg| {
                LocationError::DataUnavailable(format!(
                    "{} line {}: {}",
                    self.path.display(),
                    line,
                    msg
                ))
            })?);
        }

        log::debug!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_record(record: &csv::StringRecord) -> std::result::Result<GeoRecord, String> {
    if record.len() != COLUMNS {
        return Err(format!("expected {} columns, found {}", COLUMNS, record.len()));
    }
    let field = |i: usize| record.get(i).unwrap_or_default().to_string();
    let geoname_id = record
        .get(0)
        .unwrap_or_default()
        .parse::<i64>()
        .map_err(|e| format!("bad geoname_id '{}': {}", field(0), e))?;

    Ok(GeoRecord {
        geoname_id,
        continent_code: field(1),
        continent_name: field(2),
        country_iso_code: field(3),
        country_name: field(4),
        subdivision_iso_code: field(5),
        subdivision_name: field(6),
        city_name: field(7),
        metro_code: field(8),
        time_zone: field(9),
    })
}
