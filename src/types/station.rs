//! Station metadata and the latest-conditions snapshot the presentation layer
//! pins to its station card.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identity and location of the climate station behind a dataset.
///
/// The engine never interprets these values; they ride along so the
/// presentation layer can label maps and cards without a second lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StationInfo {
    /// Display name, e.g. `"Klimastation Tübingen"`.
    pub name: String,
    /// Latitude in decimal degrees (positive north).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive east).
    pub longitude: f64,
}

impl StationInfo {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// The most recent time-indexed reading, reduced to the fields shown on the
/// station card.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    pub timestamp: NaiveDateTime,
    pub air_temp_c: Option<f64>,
    pub rel_humidity_pct: Option<f64>,
    pub pressure_mbar: Option<f64>,
}
