use chrono::NaiveDateTime;
use serde::Serialize;

/// Aggregate of all readings inside one clock hour.
///
/// Produced once at load time for every hour that has at least one reading;
/// hours without readings are never synthesized. All float fields are rounded
/// to two decimals.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize)]
pub struct HourlyAggregate {
    /// Start of the hour (`YYYY-MM-DD HH:00:00`).
    pub hour: NaiveDateTime,
    /// Number of raw rows in the hour, null-valued rows included.
    pub reading_count: u32,
    /// Circular mean wind direction in [0, 360); `None` when no direction was
    /// recorded or the resultant vector degenerates to zero.
    pub wind_dir_deg: Option<f64>,
    /// Mean wind speed in m/s.
    pub wind_speed_ms: Option<f64>,
    /// Mean air temperature in °C.
    pub air_temp_c: Option<f64>,
    /// Mean relative humidity in %.
    pub rel_humidity_pct: Option<f64>,
    /// Mean barometric pressure in mbar.
    pub pressure_mbar: Option<f64>,
    /// Summed interval rain in mm (0 when no value was recorded).
    pub rain_avg_mm: f64,
    /// Summed rain total channel in mm (0 when no value was recorded).
    pub rain_total_mm: f64,
    /// Mean solar irradiance in kW/m².
    pub solar_kw_m2: Option<f64>,
}
