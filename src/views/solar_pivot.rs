//! The solar irradiance pivot: mean irradiance by hour of day and by day or
//! month, with a dataset-wide color scale.

use crate::types::hourly::HourlyAggregate;
use crate::types::period::Granularity;
use crate::views::ViewResult;
use chrono::{Datelike, Timelike};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BTreeMap;

/// Color-scale bounds over the dataset's valid irradiance values.
///
/// The scale is computed once over the whole hourly table rather than per
/// query, so the same irradiance value renders identically no matter which
/// period is selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarScale {
    pub min_kw_m2: f64,
    pub max_kw_m2: f64,
}

impl SolarScale {
    /// Bounds over all non-null irradiance values, `None` when there are
    /// none.
    pub fn from_hourly(rows: &[HourlyAggregate]) -> Option<SolarScale> {
        let min = rows
            .iter()
            .filter_map(|r| r.solar_kw_m2)
            .map(OrderedFloat)
            .min()?;
        let max = rows
            .iter()
            .filter_map(|r| r.solar_kw_m2)
            .map(OrderedFloat)
            .max()?;
        Some(SolarScale {
            min_kw_m2: min.into_inner(),
            max_kw_m2: max.into_inner(),
        })
    }
}

/// What the pivot's columns index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnAxis {
    DayOfMonth,
    MonthOfYear,
}

impl std::fmt::Display for ColumnAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnAxis::DayOfMonth => write!(f, "day"),
            ColumnAxis::MonthOfYear => write!(f, "month"),
        }
    }
}

/// Mean irradiance pivoted into an hour-of-day × day-or-month matrix.
///
/// Cells without data stay null so renderers show a gap instead of a zero.
/// Year selections pivot by month of year, day and month selections by day
/// of month; a day selection additionally forces the complete 0-23 hour
/// axis so the grid keeps its shape across sparse days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarPivot {
    /// Row axis, hours of the day in ascending order.
    pub hours: Vec<u32>,
    /// Column axis in ascending order, meaning given by `column_axis`.
    pub columns: Vec<u32>,
    pub column_axis: ColumnAxis,
    /// `cells[hour][column]`, mean irradiance in kW/m² or null.
    pub cells: Vec<Vec<Option<f64>>>,
    pub scale: SolarScale,
}

impl SolarPivot {
    /// Pivots a slice of the hourly table for one period selection.
    ///
    /// `scale` carries the dataset-wide bounds; when absent they are taken
    /// from the slice itself. A slice without any valid irradiance value
    /// pivots to [`ViewResult::NoData`].
    pub fn build(
        rows: &[HourlyAggregate],
        granularity: Granularity,
        scale: Option<SolarScale>,
    ) -> ViewResult<SolarPivot> {
        let column_axis = match granularity {
            Granularity::Year => ColumnAxis::MonthOfYear,
            Granularity::Day | Granularity::Month => ColumnAxis::DayOfMonth,
        };

        let mut means: BTreeMap<(u32, u32), (f64, u32)> = BTreeMap::new();
        for row in rows {
            let Some(value) = row.solar_kw_m2 else {
                continue;
            };
            let column = match column_axis {
                ColumnAxis::DayOfMonth => row.hour.day(),
                ColumnAxis::MonthOfYear => row.hour.month(),
            };
            let (sum, count) = means.entry((row.hour.hour(), column)).or_insert((0.0, 0));
            *sum += value;
            *count += 1;
        }
        if means.is_empty() {
            return ViewResult::NoData;
        }

        let scale = match scale.or_else(|| SolarScale::from_hourly(rows)) {
            Some(scale) => scale,
            None => return ViewResult::NoData,
        };

        let mut hours: Vec<u32> = means.keys().map(|&(hour, _)| hour).collect();
        hours.sort_unstable();
        hours.dedup();
        if granularity == Granularity::Day {
            hours = (0..24).collect();
        }
        let mut columns: Vec<u32> = means.keys().map(|&(_, column)| column).collect();
        columns.sort_unstable();
        columns.dedup();

        let cells = hours
            .iter()
            .map(|&hour| {
                columns
                    .iter()
                    .map(|&column| {
                        means
                            .get(&(hour, column))
                            .map(|&(sum, count)| sum / count as f64)
                    })
                    .collect()
            })
            .collect();

        ViewResult::Ready(SolarPivot {
            hours,
            columns,
            column_axis,
            cells,
            scale,
        })
    }

    /// The cell for (`hour`, `column`); outer `None` when the pair is not on
    /// the axes, inner `None` for an on-grid gap.
    pub fn cell(&self, hour: u32, column: u32) -> Option<Option<f64>> {
        let row = self.hours.iter().position(|&h| h == hour)?;
        let col = self.columns.iter().position(|&c| c == column)?;
        Some(self.cells[row][col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, hour: u32, solar: Option<f64>) -> HourlyAggregate {
        HourlyAggregate {
            hour: NaiveDate::from_ymd_opt(2021, 6, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            solar_kw_m2: solar,
            ..Default::default()
        }
    }

    #[test]
    fn month_selection_pivots_by_day() {
        let rows = vec![
            row(14, 10, Some(0.25)),
            row(14, 10, Some(0.75)),
            row(14, 11, Some(0.5)),
            row(15, 10, Some(0.125)),
            row(15, 12, None),
        ];
        let pivot = SolarPivot::build(&rows, Granularity::Month, None)
            .ready()
            .unwrap();
        assert_eq!(pivot.column_axis, ColumnAxis::DayOfMonth);
        assert_eq!(pivot.columns, vec![14, 15]);
        assert_eq!(pivot.hours, vec![10, 11]);
        assert_eq!(pivot.cell(10, 14), Some(Some(0.5)));
        assert_eq!(pivot.cell(11, 14), Some(Some(0.5)));
        assert_eq!(pivot.cell(10, 15), Some(Some(0.125)));
        assert_eq!(pivot.cell(11, 15), Some(None));
    }

    #[test]
    fn day_selection_forces_full_hour_axis() {
        let rows = vec![row(14, 5, Some(0.5)), row(14, 6, Some(0.25))];
        let pivot = SolarPivot::build(&rows, Granularity::Day, None)
            .ready()
            .unwrap();
        assert_eq!(pivot.hours, (0..24).collect::<Vec<u32>>());
        assert_eq!(pivot.columns, vec![14]);
        assert_eq!(pivot.cell(5, 14), Some(Some(0.5)));
        assert_eq!(pivot.cell(0, 14), Some(None));
        assert_eq!(pivot.cell(23, 14), Some(None));
    }

    #[test]
    fn year_selection_pivots_by_month() {
        let jan = HourlyAggregate {
            hour: NaiveDate::from_ymd_opt(2021, 1, 3)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            solar_kw_m2: Some(0.25),
            ..Default::default()
        };
        let jun = row(14, 12, Some(0.75));
        let pivot = SolarPivot::build(&[jan, jun], Granularity::Year, None)
            .ready()
            .unwrap();
        assert_eq!(pivot.column_axis, ColumnAxis::MonthOfYear);
        assert_eq!(pivot.columns, vec![1, 6]);
        assert_eq!(pivot.hours, vec![12]);
        assert_eq!(pivot.cell(12, 1), Some(Some(0.25)));
        assert_eq!(pivot.cell(12, 6), Some(Some(0.75)));
    }

    #[test]
    fn slice_without_valid_irradiance_is_no_data() {
        assert!(SolarPivot::build(&[], Granularity::Month, None).is_no_data());
        let rows = vec![row(14, 10, None), row(14, 11, None)];
        assert!(SolarPivot::build(&rows, Granularity::Month, None).is_no_data());
    }

    #[test]
    fn provided_scale_wins_over_slice_bounds() {
        let dataset_scale = SolarScale {
            min_kw_m2: 0.0,
            max_kw_m2: 1.125,
        };
        let rows = vec![row(14, 10, Some(0.5))];
        let pivot = SolarPivot::build(&rows, Granularity::Day, Some(dataset_scale))
            .ready()
            .unwrap();
        assert_eq!(pivot.scale, dataset_scale);

        let fallback = SolarPivot::build(&rows, Granularity::Day, None)
            .ready()
            .unwrap();
        assert_eq!(
            fallback.scale,
            SolarScale {
                min_kw_m2: 0.5,
                max_kw_m2: 0.5
            }
        );
    }

    #[test]
    fn scale_spans_valid_values_only() {
        let rows = vec![
            row(14, 10, Some(0.25)),
            row(14, 11, None),
            row(15, 10, Some(0.875)),
        ];
        assert_eq!(
            SolarScale::from_hourly(&rows),
            Some(SolarScale {
                min_kw_m2: 0.25,
                max_kw_m2: 0.875
            })
        );
        assert_eq!(SolarScale::from_hourly(&[row(14, 10, None)]), None);
    }
}
