//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// One row of the reference geo dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub geoname_id: i64,
    pub continent_code: String,
    pub continent_name: String,
    /// ISO 3166-1 alpha-2 country code (e.g. "FR")
    pub country_iso_code: String,
    pub country_name: String,
    pub subdivision_iso_code: String,
    pub subdivision_name: String,
    pub city_name: String,
    pub metro_code: String,
    pub time_zone: String,
}

/// A named entity with the number of times it was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub name: String,
    pub count: usize,
}

impl Mention {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self { name: name.into(), count }
    }
}

/// A region (subdivision) together with the country that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRegion {
    pub name: String,
    pub country: String,
}

/// A `(region, country)` pair a city was found under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityPlacement {
    pub region: String,
    pub country: String,
}

/// The full result of one resolution run.
///
/// Lists keep first-seen order. Maps are keyed by display name and hold
/// distinct values in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationModel {
    /// Distinct candidates accepted as countries.
    pub countries: Vec<String>,
    /// Country mentions, most frequent first. Countries only reached through
    /// city records are appended with a single mention.
    pub country_mentions: Vec<Mention>,
    /// Countries discovered through region and city records.
    pub other_countries: Vec<String>,
    pub regions: Vec<ResolvedRegion>,
    /// Regions discovered through city records.
    pub other_regions: Vec<String>,
    pub cities: Vec<String>,
    pub city_mentions: Vec<Mention>,
    pub city_regions: BTreeMap<String, Vec<CityPlacement>>,
    pub country_regions: BTreeMap<String, Vec<String>>,
    pub region_cities: BTreeMap<String, Vec<String>>,
    pub country_cities: BTreeMap<String, Vec<String>>,
    /// "city, region, country" for every city whose region was independently
    /// resolved under the same country.
    pub address_strings: Vec<String>,
    /// Candidates that matched nothing, in mention order with repeats.
    pub other: Vec<String>,
}

impl LocationModel {
    /// Names of all resolved regions, in first-seen order.
    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    /// Mention count for a country, 0 if never mentioned.
    pub fn country_mention_count(&self, name: &str) -> usize {
        self.country_mentions
            .iter()
            .find(|m| m.name == name)
            .map_or(0, |m| m.count)
    }

    /// Mention count for a city, 0 if never mentioned.
    pub fn city_mention_count(&self, name: &str) -> usize {
        self.city_mentions
            .iter()
            .find(|m| m.name == name)
            .map_or(0, |m| m.count)
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
            && self.regions.is_empty()
            && self.cities.is_empty()
            && self.other.is_empty()
    }

    /// Multi-line summary for terminal output.
    pub fn summary(&self) -> String {
        let mentions = |list: &[Mention]| {
            list.iter()
                .map(|m| format!("{} ({})", m.name, m.count))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut out = String::new();
        out.push_str(&format!("  Countries: {}\n", mentions(&self.country_mentions)));
        out.push_str(&format!("  Regions:   {}\n", self.region_names().join(", ")));
        out.push_str(&format!("  Cities:    {}\n", mentions(&self.city_mentions)));
        for address in &self.address_strings {
            out.push_str(&format!("    - {}\n", address));
        }
        out.push_str(&format!("  Other:     {}\n", self.other.join(", ")));
        out
    }
}

/// The resolution stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Countries,
    Regions,
    Cities,
    Other,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Countries => write!(f, "country"),
            Self::Regions => write!(f, "region"),
            Self::Cities => write!(f, "city"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Location resolution errors.
#[derive(Debug, Error)]
pub enum LocationError {
    /// No candidates were supplied and there is no way to obtain them.
    #[error("No candidates supplied. Pass place names as arguments or use --input")]
    InvalidInput,

    /// The bulk source could not be read, or the store is empty and cannot be filled.
    #[error("Geo dataset unavailable: {0}")]
    DataUnavailable(String),

    /// The backing store failed a read or write.
    #[error("Geo store error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A resolution stage failed; the run produced no result.
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<LocationError>,
    },
}

impl LocationError {
    pub(crate) fn in_stage(self, stage: Stage) -> Self {
        match self {
            Self::Stage { .. } => self,
            other => Self::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    /// The stage that failed, if the error came out of a resolution run.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocationError>;
