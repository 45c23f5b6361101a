//! Paired temperature and precipitation series with fixed display axes.

use crate::types::period::Granularity;
use crate::types::reading::Reading;
use crate::types::resampled::PeriodAggregate;
use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A fixed display range for one value axis.
///
/// These are presentation hints attached to the series, not clamps; points
/// outside the range are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Temperature axis used at every granularity.
pub const TEMP_AXIS: AxisRange = AxisRange {
    min: -10.0,
    max: 35.0,
};

/// Precipitation axis per granularity. Wider selections accumulate larger
/// rain sums, so the range widens with the period.
pub const PRECIP_AXIS_DAY: AxisRange = AxisRange {
    min: -10.0,
    max: 35.0,
};
pub const PRECIP_AXIS_MONTH: AxisRange = AxisRange {
    min: -20.0,
    max: 70.0,
};
pub const PRECIP_AXIS_YEAR: AxisRange = AxisRange {
    min: -10.0,
    max: 100.0,
};

/// One point of the paired series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempPrecipPoint {
    pub timestamp: NaiveDateTime,
    /// Air temperature in °C, null where the period had no valid reading.
    pub air_temp_c: Option<f64>,
    /// Rainfall in mm. Null only for raw readings that failed to parse;
    /// aggregated points carry an explicit zero for dry periods.
    pub rain_mm: Option<f64>,
}

/// Temperature and precipitation over a selected period.
///
/// Day selections keep the raw reading cadence, month selections carry one
/// point per day, year selections one point per month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TempPrecipSeries {
    pub granularity: Granularity,
    pub points: Vec<TempPrecipPoint>,
    pub temp_axis: AxisRange,
    pub precip_axis: AxisRange,
}

impl TempPrecipSeries {
    /// A day series straight from raw readings. Rows without a parsed
    /// timestamp cannot be placed on the time axis and are skipped.
    pub fn from_readings(rows: &[Reading]) -> TempPrecipSeries {
        let points = rows
            .iter()
            .filter_map(|r| {
                r.timestamp.map(|timestamp| TempPrecipPoint {
                    timestamp,
                    air_temp_c: r.air_temp_c,
                    rain_mm: r.rain_avg_mm,
                })
            })
            .collect();
        TempPrecipSeries {
            granularity: Granularity::Day,
            points,
            temp_axis: TEMP_AXIS,
            precip_axis: PRECIP_AXIS_DAY,
        }
    }

    /// A month series from daily buckets.
    pub fn from_daily(buckets: &[PeriodAggregate]) -> TempPrecipSeries {
        Self::from_buckets(buckets, Granularity::Month, PRECIP_AXIS_MONTH)
    }

    /// A year series from monthly buckets.
    pub fn from_monthly(buckets: &[PeriodAggregate]) -> TempPrecipSeries {
        Self::from_buckets(buckets, Granularity::Year, PRECIP_AXIS_YEAR)
    }

    fn from_buckets(
        buckets: &[PeriodAggregate],
        granularity: Granularity,
        precip_axis: AxisRange,
    ) -> TempPrecipSeries {
        let points = buckets
            .iter()
            .map(|b| TempPrecipPoint {
                timestamp: b.bucket.and_time(NaiveTime::MIN),
                air_temp_c: b.air_temp_c,
                rain_mm: Some(b.rain_avg_mm),
            })
            .collect();
        TempPrecipSeries {
            granularity,
            points,
            temp_axis: TEMP_AXIS,
            precip_axis,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(hour: u32, minute: u32, temp: Option<f64>, rain: Option<f64>) -> Reading {
        Reading {
            timestamp: NaiveDate::from_ymd_opt(2021, 6, 14)
                .unwrap()
                .and_hms_opt(hour, minute, 0),
            air_temp_c: temp,
            rain_avg_mm: rain,
            ..Default::default()
        }
    }

    #[test]
    fn day_series_keeps_raw_cadence() {
        let rows = vec![
            reading(10, 0, Some(21.5), Some(0.0)),
            reading(10, 10, None, Some(0.25)),
            reading(10, 20, Some(22.0), None),
        ];
        let series = TempPrecipSeries::from_readings(&rows);
        assert_eq!(series.granularity, Granularity::Day);
        assert_eq!(series.points.len(), 3);
        assert_eq!(series.points[0].air_temp_c, Some(21.5));
        assert_eq!(series.points[1].air_temp_c, None);
        assert_eq!(series.points[2].rain_mm, None);
        assert_eq!(series.temp_axis, TEMP_AXIS);
        assert_eq!(series.precip_axis, PRECIP_AXIS_DAY);
    }

    #[test]
    fn rows_without_timestamp_are_skipped() {
        let rows = vec![
            Reading {
                timestamp: None,
                air_temp_c: Some(19.0),
                ..Default::default()
            },
            reading(8, 0, Some(20.0), Some(0.0)),
        ];
        let series = TempPrecipSeries::from_readings(&rows);
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].air_temp_c, Some(20.0));
    }

    #[test]
    fn month_series_carries_daily_buckets_and_wider_axis() {
        let buckets = vec![
            PeriodAggregate {
                bucket: NaiveDate::from_ymd_opt(2021, 6, 14).unwrap(),
                hour_count: 24,
                air_temp_c: Some(18.5),
                rain_avg_mm: 4.25,
                ..Default::default()
            },
            PeriodAggregate {
                bucket: NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
                ..Default::default()
            },
        ];
        let series = TempPrecipSeries::from_daily(&buckets);
        assert_eq!(series.granularity, Granularity::Month);
        assert_eq!(series.precip_axis, PRECIP_AXIS_MONTH);
        assert_eq!(
            series.points[0].timestamp,
            NaiveDate::from_ymd_opt(2021, 6, 14)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_eq!(series.points[0].rain_mm, Some(4.25));
        // A gap day still plots: zero rain, no temperature.
        assert_eq!(series.points[1].air_temp_c, None);
        assert_eq!(series.points[1].rain_mm, Some(0.0));
    }

    #[test]
    fn year_series_uses_yearly_precip_axis() {
        let buckets = vec![PeriodAggregate {
            bucket: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            hour_count: 720,
            air_temp_c: Some(17.0),
            rain_avg_mm: 61.5,
            ..Default::default()
        }];
        let series = TempPrecipSeries::from_monthly(&buckets);
        assert_eq!(series.granularity, Granularity::Year);
        assert_eq!(series.precip_axis, PRECIP_AXIS_YEAR);
        assert_eq!(series.points[0].rain_mm, Some(61.5));
    }

    #[test]
    fn empty_input_yields_empty_series_with_axes() {
        let series = TempPrecipSeries::from_readings(&[]);
        assert!(series.is_empty());
        assert_eq!(series.temp_axis, TEMP_AXIS);
        assert_eq!(series.precip_axis, PRECIP_AXIS_DAY);
    }
}
