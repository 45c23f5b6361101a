//! Turns the raw string-typed export table into typed [`Reading`] rows.

use crate::station_data::error::StationDataError;
use crate::station_data::schema::{
    COL_AIR_TEMP, COL_PRESSURE, COL_RAIN_AVG, COL_RAIN_TOTAL, COL_RECORD, COL_REL_HUMIDITY,
    COL_SOLAR, COL_TIMESTAMP, COL_WIND_DIR, COL_WIND_SPEED, TIMESTAMP_FORMAT,
};
use crate::types::reading::Reading;
use chrono::NaiveDateTime;
use log::{info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;

/// Retrieves a required column by name.
fn get_column<'a>(df: &'a DataFrame, col: &str) -> Result<&'a Column, StationDataError> {
    df.column(col)
        .map_err(|e| StationDataError::ColumnNotFound(col.to_string(), e))
}

/// Parses a decimal cell, accepting both the decimal comma the logger writes
/// and a regular decimal point. Unparsable or non-finite values (the logger
/// emits `"NAN"` on sensor dropouts) become `None`.
pub(crate) fn parse_decimal(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(cell.trim(), TIMESTAMP_FORMAT).ok()
}

/// Extracts an optional float from one cell, coercing textual cells through
/// [`parse_decimal`]. Tables arriving from other loaders may already carry
/// numeric columns; those pass through unchanged.
fn float_cell(column: &Column, idx: usize) -> Option<f64> {
    match column.get(idx) {
        Ok(AnyValue::Float64(v)) if v.is_finite() => Some(v),
        Ok(AnyValue::Float32(v)) if v.is_finite() => Some(v as f64),
        Ok(AnyValue::Int64(v)) => Some(v as f64),
        Ok(AnyValue::Int32(v)) => Some(v as f64),
        Ok(AnyValue::String(s)) => parse_decimal(s),
        Ok(AnyValue::StringOwned(s)) => parse_decimal(s.as_str()),
        _ => None,
    }
}

/// Extracts an optional integer from one cell.
fn int_cell(column: &Column, idx: usize) -> Option<i64> {
    match column.get(idx) {
        Ok(AnyValue::Int64(v)) => Some(v),
        Ok(AnyValue::Int32(v)) => Some(v as i64),
        Ok(AnyValue::String(s)) => s.trim().parse::<i64>().ok(),
        Ok(AnyValue::StringOwned(s)) => s.as_str().trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Extracts an optional timestamp from one textual cell.
fn timestamp_cell(column: &Column, idx: usize) -> Option<NaiveDateTime> {
    match column.get(idx) {
        Ok(AnyValue::String(s)) => parse_timestamp(s),
        Ok(AnyValue::StringOwned(s)) => parse_timestamp(s.as_str()),
        _ => None,
    }
}

/// Normalizes a raw export table into typed readings, sorted by timestamp.
///
/// Per the station contract: decimal commas become decimal points, any cell
/// that fails to parse becomes null rather than an error, and rows whose
/// timestamp cannot be parsed are retained (sorted last) but carry no time
/// index. The three columns unused by any view are never read.
///
/// # Errors
///
/// The only fatal condition is a missing required column
/// ([`StationDataError::ColumnNotFound`]).
pub fn normalize_frame(df: &DataFrame) -> Result<Vec<Reading>, StationDataError> {
    let timestamps = get_column(df, COL_TIMESTAMP)?;
    let records = get_column(df, COL_RECORD)?;
    let wind_dirs = get_column(df, COL_WIND_DIR)?;
    let wind_speeds = get_column(df, COL_WIND_SPEED)?;
    let air_temps = get_column(df, COL_AIR_TEMP)?;
    let humidities = get_column(df, COL_REL_HUMIDITY)?;
    let pressures = get_column(df, COL_PRESSURE)?;
    let rain_avgs = get_column(df, COL_RAIN_AVG)?;
    let rain_totals = get_column(df, COL_RAIN_TOTAL)?;
    let solars = get_column(df, COL_SOLAR)?;

    let height = df.height();
    let mut readings = Vec::with_capacity(height);
    let mut unparsable_timestamps = 0usize;

    for idx in 0..height {
        let timestamp = timestamp_cell(timestamps, idx);
        if timestamp.is_none() {
            unparsable_timestamps += 1;
        }
        readings.push(Reading {
            timestamp,
            record_id: int_cell(records, idx),
            wind_dir_deg: float_cell(wind_dirs, idx),
            wind_speed_ms: float_cell(wind_speeds, idx),
            air_temp_c: float_cell(air_temps, idx),
            rel_humidity_pct: float_cell(humidities, idx),
            pressure_mbar: float_cell(pressures, idx),
            rain_avg_mm: float_cell(rain_avgs, idx),
            rain_total_mm: float_cell(rain_totals, idx),
            solar_kw_m2: float_cell(solars, idx),
        });
    }

    readings.sort_by_key(|r| (r.timestamp.is_none(), r.timestamp));

    if unparsable_timestamps > 0 {
        warn!(
            "{} of {} raw rows have unparsable timestamps and are excluded from time-indexed queries",
            unparsable_timestamps, height
        );
    }
    info!("Normalized {} raw rows", height);

    Ok(readings)
}
