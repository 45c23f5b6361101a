//! Minimum and maximum relative humidity over a period.

use crate::types::hourly::HourlyAggregate;
use crate::views::ViewResult;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// The humidity extremes of an hourly slice, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HumidityRange {
    pub min_pct: f64,
    pub max_pct: f64,
}

impl HumidityRange {
    /// Extremes over all non-null hourly humidity means.
    ///
    /// A slice without a single valid value yields [`ViewResult::NoData`]
    /// instead of a range, so callers never see extremes conjured from
    /// nothing.
    pub fn from_hourly(rows: &[HourlyAggregate]) -> ViewResult<HumidityRange> {
        let min = rows
            .iter()
            .filter_map(|r| r.rel_humidity_pct)
            .map(OrderedFloat)
            .min();
        let max = rows
            .iter()
            .filter_map(|r| r.rel_humidity_pct)
            .map(OrderedFloat)
            .max();
        match (min, max) {
            (Some(min), Some(max)) => ViewResult::Ready(HumidityRange {
                min_pct: min.into_inner(),
                max_pct: max.into_inner(),
            }),
            _ => ViewResult::NoData,
        }
    }
}
