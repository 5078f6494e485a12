//! Location resolution subsystem.
//!
//! Turns place-name candidates into a country → region → city hierarchy using
//! an ISO 3166-1 country registry and a SQLite-backed reference dataset.

pub mod countries;
pub mod ignore;
pub mod resolver;
pub mod source;
pub mod store;
pub mod types;

pub use countries::{title_case, Country, CountryMatcher, CountryRegistry};
pub use ignore::IgnoreList;
pub use resolver::{CityStage, CountryStage, LocationResolver, RegionStage};
pub use source::{CsvGeoSource, GeoSource};
pub use store::{GeoStore, SqliteGeoStore};
pub use types::{
    CityPlacement, GeoRecord, LocationError, LocationModel, Mention, ResolvedRegion, Stage,
};
