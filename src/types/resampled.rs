use chrono::NaiveDate;
use serde::Serialize;

/// One re-aggregated bucket of the hourly table: a calendar day (for month
/// queries) or a calendar month (for year queries, dated at the first of the
/// month).
///
/// Buckets span the filtered slice without holes; a bucket with no hourly
/// rows carries null means and zero rain sums so gaps stay visible in the
/// rendered series.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize)]
pub struct PeriodAggregate {
    /// Bucket key date.
    pub bucket: NaiveDate,
    /// Number of hourly rows that contributed.
    pub hour_count: u32,
    /// Circular mean of the hourly wind directions, [0, 360).
    pub wind_dir_deg: Option<f64>,
    pub wind_speed_ms: Option<f64>,
    pub air_temp_c: Option<f64>,
    pub rel_humidity_pct: Option<f64>,
    pub pressure_mbar: Option<f64>,
    /// Summed hourly interval rain in mm.
    pub rain_avg_mm: f64,
    /// Summed hourly rain total channel in mm.
    pub rain_total_mm: f64,
    pub solar_kw_m2: Option<f64>,
}
