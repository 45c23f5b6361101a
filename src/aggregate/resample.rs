//! Re-buckets a period slice of the hourly table into daily or monthly rows.

use crate::aggregate::circular::circular_mean_deg;
use crate::aggregate::MeanAccum;
use crate::types::hourly::HourlyAggregate;
use crate::types::period::Month;
use crate::types::resampled::PeriodAggregate;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct BucketAccum {
    hours: u32,
    dirs: Vec<f64>,
    speed: MeanAccum,
    temp: MeanAccum,
    humidity: MeanAccum,
    pressure: MeanAccum,
    solar: MeanAccum,
    rain_avg: f64,
    rain_total: f64,
}

impl BucketAccum {
    fn push(&mut self, row: &HourlyAggregate) {
        self.hours += 1;
        if let Some(dir) = row.wind_dir_deg {
            self.dirs.push(dir);
        }
        self.speed.push(row.wind_speed_ms);
        self.temp.push(row.air_temp_c);
        self.humidity.push(row.rel_humidity_pct);
        self.pressure.push(row.pressure_mbar);
        self.solar.push(row.solar_kw_m2);
        self.rain_avg += row.rain_avg_mm;
        self.rain_total += row.rain_total_mm;
    }

    fn finish(self, bucket: NaiveDate) -> PeriodAggregate {
        PeriodAggregate {
            bucket,
            hour_count: self.hours,
            wind_dir_deg: circular_mean_deg(self.dirs),
            wind_speed_ms: self.speed.mean(),
            air_temp_c: self.temp.mean(),
            rel_humidity_pct: self.humidity.mean(),
            pressure_mbar: self.pressure.mean(),
            rain_avg_mm: self.rain_avg,
            rain_total_mm: self.rain_total,
            solar_kw_m2: self.solar.mean(),
        }
    }
}

/// Buckets spanning first to last key without holes; keys with no hourly rows
/// yield a bucket with null means and zero rain sums, keeping gaps visible.
fn resample_by(
    hours: &[HourlyAggregate],
    bucket_of: impl Fn(NaiveDate) -> NaiveDate,
    next_bucket: impl Fn(NaiveDate) -> Option<NaiveDate>,
) -> Vec<PeriodAggregate> {
    let mut buckets: BTreeMap<NaiveDate, BucketAccum> = BTreeMap::new();
    for row in hours {
        buckets
            .entry(bucket_of(row.hour.date()))
            .or_default()
            .push(row);
    }

    let (first, last) = match (
        buckets.keys().next().copied(),
        buckets.keys().next_back().copied(),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => return Vec::new(),
    };

    let mut out = Vec::new();
    let mut current = first;
    loop {
        let aggregate = match buckets.remove(&current) {
            Some(accum) => accum.finish(current),
            None => PeriodAggregate {
                bucket: current,
                ..Default::default()
            },
        };
        out.push(aggregate);
        if current >= last {
            break;
        }
        current = match next_bucket(current) {
            Some(next) => next,
            None => break,
        };
    }
    out
}

/// One bucket per calendar day across the slice's span.
pub fn resample_daily(hours: &[HourlyAggregate]) -> Vec<PeriodAggregate> {
    resample_by(hours, |date| date, |date| date.succ_opt())
}

/// One bucket per calendar month across the slice's span, dated at the first
/// of the month.
pub fn resample_monthly(hours: &[HourlyAggregate]) -> Vec<PeriodAggregate> {
    resample_by(
        hours,
        |date| {
            date.with_day(1)
                .expect("the first of an existing date's month always exists")
        },
        |date| Month::new(date.year(), date.month()).succ().first_day(),
    )
}
