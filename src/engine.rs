//! This module provides the main entry point for querying a station dataset.
//! The engine owns the normalized and hourly tables, builds them once at
//! load time, and answers every view query as a pure function over them.

use crate::aggregate::hourly::aggregate_hourly;
use crate::aggregate::resample::{resample_daily, resample_monthly};
use crate::error::KlimastationError;
use crate::filtering::{HourlyTable, ReadingTable};
use crate::station_data::loader::read_station_csv;
use crate::station_data::normalize::normalize_frame;
use crate::station_data::schema::DEFAULT_HEADER_LINES;
use crate::types::period::{Granularity, PeriodSelector};
use crate::types::reading::Reading;
use crate::types::station::{CurrentConditions, StationInfo};
use crate::views::humidity::HumidityRange;
use crate::views::solar_pivot::{SolarPivot, SolarScale};
use crate::views::temp_precip::TempPrecipSeries;
use crate::views::wind_rose::WindRose;
use crate::views::{DerivedView, ViewKind, ViewResult};
use bon::bon;
use chrono::NaiveDateTime;
use log::info;
use polars::prelude::DataFrame;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// The single-station climate engine.
///
/// Construction normalizes the raw readings, aggregates them into the hourly
/// table and fixes the dataset-wide solar color scale. After that the engine
/// is immutable: every query copies the matching slice out of the owned
/// tables, so queries can run concurrently or in any order with identical
/// results.
///
/// Create an instance with [`Klimastation::from_csv()`] for a station export
/// on disk, or [`Klimastation::from_readings()`] when rows come from
/// somewhere else.
///
/// # Examples
///
/// ```
/// use klimastation::{Klimastation, PeriodSelector, Reading};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 6, 14).unwrap();
/// let readings = vec![
///     Reading {
///         timestamp: date.and_hms_opt(10, 0, 0),
///         wind_dir_deg: Some(350.0),
///         wind_speed_ms: Some(0.4),
///         ..Default::default()
///     },
///     Reading {
///         timestamp: date.and_hms_opt(10, 10, 0),
///         wind_dir_deg: Some(10.0),
///         wind_speed_ms: Some(0.4),
///         ..Default::default()
///     },
/// ];
/// let engine = Klimastation::from_readings(readings, None);
///
/// // The two directions straddle north, so their hour averages to 0°.
/// let rose = engine.wind_rose(PeriodSelector::Day(date));
/// assert_eq!(rose.total(), 1);
/// ```
pub struct Klimastation {
    readings: ReadingTable,
    hourly: HourlyTable,
    solar_scale: Option<SolarScale>,
    station: Option<StationInfo>,
}

#[bon]
impl Klimastation {
    /// Loads a station CSV export and builds the engine from it.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.path(PathBuf)`: **Required.** The export file to read.
    /// * `.skip_rows(usize)`: Optional. Header/metadata lines to skip before
    ///   the data rows. Defaults to the logger's four-line TOA5 preamble.
    /// * `.station(StationInfo)`: Optional. Station metadata to carry along
    ///   for the presentation layer.
    ///
    /// # Returns
    ///
    /// A `Result` containing the ready engine on success, or a
    /// [`KlimastationError`] if the file cannot be read or lacks a required
    /// column.
    ///
    /// # Errors
    ///
    /// Returns [`KlimastationError::StationData`] when the file cannot be
    /// opened, has the wrong column count, or is missing a required column.
    /// Unparsable cells are not errors; they normalize to null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use klimastation::{Klimastation, KlimastationError, StationInfo};
    /// # use std::path::PathBuf;
    /// # fn run() -> Result<(), KlimastationError> {
    /// let engine = Klimastation::from_csv()
    ///     .path(PathBuf::from("Klimadaten_middle.dat"))
    ///     .station(StationInfo::new("Klimastation Tübingen", 48.523669, 9.054517))
    ///     .call()?;
    /// println!("loaded {} readings", engine.readings().len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn from_csv(
        path: PathBuf,
        skip_rows: Option<usize>,
        station: Option<StationInfo>,
    ) -> Result<Klimastation, KlimastationError> {
        let skip_rows = skip_rows.unwrap_or(DEFAULT_HEADER_LINES);
        let frame = read_station_csv(&path, skip_rows)?;
        Self::from_dataframe(&frame, station)
    }

    /// Builds the engine from an already-loaded raw frame.
    ///
    /// # Errors
    ///
    /// Returns [`KlimastationError::StationData`] if a required column is
    /// missing from the frame.
    pub fn from_dataframe(
        frame: &DataFrame,
        station: Option<StationInfo>,
    ) -> Result<Klimastation, KlimastationError> {
        let readings = normalize_frame(frame)?;
        Ok(Self::from_readings(readings, station))
    }

    /// Builds the engine from normalized readings.
    ///
    /// Sorting, hourly aggregation and the solar scale all happen here;
    /// the input order does not matter.
    pub fn from_readings(readings: Vec<Reading>, station: Option<StationInfo>) -> Klimastation {
        let readings = ReadingTable::new(readings);
        let hourly = HourlyTable::new(aggregate_hourly(readings.rows()));
        let solar_scale = SolarScale::from_hourly(hourly.rows());
        info!(
            "engine ready: {} readings, {} hourly rows",
            readings.len(),
            hourly.len()
        );
        Klimastation {
            readings,
            hourly,
            solar_scale,
            station,
        }
    }

    /// The wind rose for a period.
    ///
    /// Always a complete 16×4 histogram; a period without matching hours
    /// comes back all-zero rather than as an error.
    pub fn wind_rose(&self, period: PeriodSelector) -> WindRose {
        WindRose::from_hourly(&self.hourly.for_period(period))
    }

    /// The solar irradiance pivot for a period.
    ///
    /// The color scale attached to the pivot is the engine's dataset-wide
    /// scale, so two selections over the same dataset always share bounds.
    pub fn solar_pivot(&self, period: PeriodSelector) -> ViewResult<SolarPivot> {
        SolarPivot::build(
            &self.hourly.for_period(period),
            period.granularity(),
            self.solar_scale,
        )
    }

    /// Minimum and maximum hourly relative humidity for a period.
    pub fn humidity_range(&self, period: PeriodSelector) -> ViewResult<HumidityRange> {
        HumidityRange::from_hourly(&self.hourly.for_period(period))
    }

    /// The temperature/precipitation series for a period.
    ///
    /// Day selections keep the raw reading cadence; month and year
    /// selections reaggregate the hourly slice into daily or monthly points.
    pub fn temp_precip_series(&self, period: PeriodSelector) -> TempPrecipSeries {
        match period.granularity() {
            Granularity::Day => {
                TempPrecipSeries::from_readings(&self.readings.for_period(period))
            }
            Granularity::Month => {
                TempPrecipSeries::from_daily(&resample_daily(&self.hourly.for_period(period)))
            }
            Granularity::Year => {
                TempPrecipSeries::from_monthly(&resample_monthly(&self.hourly.for_period(period)))
            }
        }
    }

    /// Builds one view for a period, tagged by kind.
    ///
    /// This is the single query surface the presentation layer drives; each
    /// call is independent and leaves the engine untouched.
    pub fn build_view(&self, period: PeriodSelector, kind: ViewKind) -> DerivedView {
        match kind {
            ViewKind::WindRose => DerivedView::WindRose(self.wind_rose(period)),
            ViewKind::SolarPivot => DerivedView::SolarPivot(self.solar_pivot(period)),
            ViewKind::HumidityRange => DerivedView::HumidityRange(self.humidity_range(period)),
            ViewKind::TempPrecip => DerivedView::TempPrecip(self.temp_precip_series(period)),
        }
    }

    /// The normalized raw table.
    pub fn readings(&self) -> &ReadingTable {
        &self.readings
    }

    /// The hourly table.
    pub fn hourly(&self) -> &HourlyTable {
        &self.hourly
    }

    /// Dataset-wide solar color-scale bounds, `None` when the dataset has no
    /// valid irradiance value at all.
    pub fn solar_scale(&self) -> Option<SolarScale> {
        self.solar_scale
    }

    /// Station metadata, when provided at construction.
    pub fn station(&self) -> Option<&StationInfo> {
        self.station.as_ref()
    }

    /// Earliest and latest reading timestamp; bounds for the date pickers.
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.readings.time_range()
    }

    /// Inclusive range of calendar years the dataset covers.
    pub fn years(&self) -> Option<RangeInclusive<i32>> {
        self.readings.years()
    }

    /// The newest reading reduced to the station-card fields.
    pub fn latest_conditions(&self) -> Option<CurrentConditions> {
        let reading = self.readings.latest()?;
        let timestamp = reading.timestamp?;
        Some(CurrentConditions {
            timestamp,
            air_temp_c: reading.air_temp_c,
            rel_humidity_pct: reading.rel_humidity_pct,
            pressure_mbar: reading.pressure_mbar,
        })
    }
}
