use chrono::NaiveDateTime;
use serde::Serialize;

/// One normalized logger row (10-minute cadence on the source station).
///
/// Every measurement that failed to parse in the raw export is `None`; a
/// `None` timestamp keeps the row in the table but excludes it from every
/// time-indexed operation.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize)]
pub struct Reading {
    pub timestamp: Option<NaiveDateTime>,
    /// Logger record counter.
    pub record_id: Option<i64>,
    /// Wind direction in degrees, [0, 360].
    pub wind_dir_deg: Option<f64>,
    /// Wind speed in m/s.
    pub wind_speed_ms: Option<f64>,
    /// Air temperature in °C.
    pub air_temp_c: Option<f64>,
    /// Relative humidity in %.
    pub rel_humidity_pct: Option<f64>,
    /// Barometric pressure in mbar.
    pub pressure_mbar: Option<f64>,
    /// Rain over the logging interval in mm.
    pub rain_avg_mm: Option<f64>,
    /// Rain total (second channel) in mm.
    pub rain_total_mm: Option<f64>,
    /// Solar irradiance in kW/m².
    pub solar_kw_m2: Option<f64>,
}
