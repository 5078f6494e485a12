//! geo_mentions resolves place-name mentions into a geographic hierarchy.

pub mod location;
pub mod logging;

pub use location::{LocationError, LocationModel, LocationResolver};
