//! Builds the hourly table from normalized readings.

use crate::aggregate::circular::circular_mean_deg;
use crate::aggregate::MeanAccum;
use crate::types::hourly::HourlyAggregate;
use crate::types::reading::Reading;
use chrono::{NaiveDateTime, Timelike};
use log::info;
use std::collections::BTreeMap;

/// Rounds to two decimals, the presentation contract of the hourly table.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round2_opt(value: Option<f64>) -> Option<f64> {
    value.map(round2)
}

/// Truncates a timestamp to the start of its hour.
pub(crate) fn hour_floor(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .date()
        .and_hms_opt(timestamp.hour(), 0, 0)
        .expect("truncating an existing timestamp to its hour cannot fail")
}

#[derive(Debug, Default)]
struct HourAccum {
    rows: u32,
    dirs: Vec<f64>,
    speed: MeanAccum,
    temp: MeanAccum,
    humidity: MeanAccum,
    pressure: MeanAccum,
    solar: MeanAccum,
    rain_avg: f64,
    rain_total: f64,
}

impl HourAccum {
    fn push(&mut self, reading: &Reading) {
        self.rows += 1;
        if let Some(dir) = reading.wind_dir_deg {
            self.dirs.push(dir);
        }
        self.speed.push(reading.wind_speed_ms);
        self.temp.push(reading.air_temp_c);
        self.humidity.push(reading.rel_humidity_pct);
        self.pressure.push(reading.pressure_mbar);
        self.solar.push(reading.solar_kw_m2);
        if let Some(rain) = reading.rain_avg_mm {
            self.rain_avg += rain;
        }
        if let Some(rain) = reading.rain_total_mm {
            self.rain_total += rain;
        }
    }

    fn finish(self, hour: NaiveDateTime) -> HourlyAggregate {
        HourlyAggregate {
            hour,
            reading_count: self.rows,
            // Rounding can push a value like 359.999 up to 360.00; wrap it
            // back so directions stay in [0, 360).
            wind_dir_deg: circular_mean_deg(self.dirs).map(|deg| round2(deg) % 360.0),
            wind_speed_ms: round2_opt(self.speed.mean()),
            air_temp_c: round2_opt(self.temp.mean()),
            rel_humidity_pct: round2_opt(self.humidity.mean()),
            pressure_mbar: round2_opt(self.pressure.mean()),
            rain_avg_mm: round2(self.rain_avg),
            rain_total_mm: round2(self.rain_total),
            solar_kw_m2: round2_opt(self.solar.mean()),
        }
    }
}

/// Groups time-indexed readings by hour floor and aggregates every group.
///
/// Readings without a timestamp are skipped; hours without readings are
/// omitted, never synthesized. `reading_count` counts all rows of the hour,
/// including rows whose measurement cells are null. Wind direction gets the
/// circular mean, the remaining intensive fields arithmetic means over
/// non-null values, the rain fields sums.
pub fn aggregate_hourly(readings: &[Reading]) -> Vec<HourlyAggregate> {
    let mut hours: BTreeMap<NaiveDateTime, HourAccum> = BTreeMap::new();

    for reading in readings {
        let timestamp = match reading.timestamp {
            Some(ts) => ts,
            None => continue,
        };
        hours.entry(hour_floor(timestamp)).or_default().push(reading);
    }

    let table: Vec<HourlyAggregate> = hours
        .into_iter()
        .map(|(hour, accum)| accum.finish(hour))
        .collect();

    info!(
        "Aggregated {} readings into {} hourly rows",
        readings.len(),
        table.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(d: u32, h: u32, m: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2021, 6, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
    }

    fn reading(d: u32, h: u32, m: u32) -> Reading {
        Reading {
            timestamp: ts(d, h, m),
            ..Default::default()
        }
    }

    #[test]
    fn groups_by_hour_floor_in_order() {
        let readings = vec![
            Reading {
                air_temp_c: Some(20.0),
                ..reading(14, 11, 0)
            },
            Reading {
                air_temp_c: Some(10.0),
                ..reading(14, 10, 0)
            },
            Reading {
                air_temp_c: Some(20.0),
                ..reading(14, 10, 50)
            },
        ];
        let hourly = aggregate_hourly(&readings);
        assert_eq!(hourly.len(), 2);
        assert_eq!(hourly[0].hour, ts(14, 10, 0).unwrap());
        assert_eq!(hourly[0].reading_count, 2);
        assert_eq!(hourly[0].air_temp_c, Some(15.0));
        assert_eq!(hourly[1].hour, ts(14, 11, 0).unwrap());
        assert_eq!(hourly[1].reading_count, 1);
    }

    #[test]
    fn count_includes_all_null_rows() {
        let readings = vec![
            Reading {
                air_temp_c: Some(21.0),
                ..reading(14, 10, 0)
            },
            reading(14, 10, 10),
        ];
        let hourly = aggregate_hourly(&readings);
        assert_eq!(hourly[0].reading_count, 2);
        assert_eq!(hourly[0].air_temp_c, Some(21.0));
    }

    #[test]
    fn rows_without_timestamp_are_skipped() {
        let readings = vec![
            Reading {
                air_temp_c: Some(21.0),
                ..Default::default()
            },
            Reading {
                air_temp_c: Some(22.0),
                ..reading(14, 10, 0)
            },
        ];
        let hourly = aggregate_hourly(&readings);
        assert_eq!(hourly.len(), 1);
        assert_eq!(hourly[0].reading_count, 1);
    }

    #[test]
    fn direction_mean_across_north_wraps_to_zero() {
        let readings = vec![
            Reading {
                wind_dir_deg: Some(350.0),
                ..reading(14, 10, 0)
            },
            Reading {
                wind_dir_deg: Some(10.0),
                ..reading(14, 10, 10)
            },
        ];
        let hourly = aggregate_hourly(&readings);
        assert_eq!(hourly[0].wind_dir_deg, Some(0.0));
    }

    #[test]
    fn uniform_directions_yield_null() {
        let readings = [0.0, 90.0, 180.0, 270.0]
            .iter()
            .enumerate()
            .map(|(i, &dir)| Reading {
                wind_dir_deg: Some(dir),
                ..reading(14, 10, i as u32 * 10)
            })
            .collect::<Vec<_>>();
        let hourly = aggregate_hourly(&readings);
        assert_eq!(hourly[0].wind_dir_deg, None);
        assert_eq!(hourly[0].reading_count, 4);
    }

    #[test]
    fn rounded_direction_stays_below_360() {
        let readings = vec![Reading {
            wind_dir_deg: Some(359.999),
            ..reading(14, 10, 0)
        }];
        let hourly = aggregate_hourly(&readings);
        assert_eq!(hourly[0].wind_dir_deg, Some(0.0));
    }

    #[test]
    fn rain_is_summed_and_defaults_to_zero() {
        let readings = vec![
            Reading {
                rain_avg_mm: Some(0.2),
                rain_total_mm: None,
                ..reading(14, 10, 0)
            },
            Reading {
                rain_avg_mm: Some(0.3),
                rain_total_mm: None,
                ..reading(14, 10, 10)
            },
        ];
        let hourly = aggregate_hourly(&readings);
        assert_eq!(hourly[0].rain_avg_mm, 0.5);
        assert_eq!(hourly[0].rain_total_mm, 0.0);
    }

    #[test]
    fn means_are_rounded_to_two_decimals() {
        let readings = vec![
            Reading {
                wind_speed_ms: Some(1.111),
                ..reading(14, 10, 0)
            },
            Reading {
                wind_speed_ms: Some(2.222),
                ..reading(14, 10, 10)
            },
        ];
        let hourly = aggregate_hourly(&readings);
        // (1.111 + 2.222) / 2 = 1.6665
        assert_eq!(hourly[0].wind_speed_ms, Some(1.67));
    }

    #[test]
    fn one_reading_per_hour_reproduces_inputs() {
        let readings: Vec<Reading> = (0..24)
            .map(|h| Reading {
                wind_dir_deg: Some(181.4),
                wind_speed_ms: Some(1.5),
                air_temp_c: Some(22.1),
                rel_humidity_pct: Some(54.0),
                pressure_mbar: Some(968.3),
                rain_avg_mm: Some(0.2),
                rain_total_mm: Some(0.2),
                solar_kw_m2: Some(0.58),
                record_id: Some(h as i64),
                ..reading(14, h, 0)
            })
            .collect();
        let hourly = aggregate_hourly(&readings);
        assert_eq!(hourly.len(), 24);
        for row in &hourly {
            assert_eq!(row.reading_count, 1);
            assert_eq!(row.wind_dir_deg, Some(181.4));
            assert_eq!(row.wind_speed_ms, Some(1.5));
            assert_eq!(row.air_temp_c, Some(22.1));
            assert_eq!(row.rel_humidity_pct, Some(54.0));
            assert_eq!(row.pressure_mbar, Some(968.3));
            assert_eq!(row.rain_avg_mm, 0.2);
            assert_eq!(row.rain_total_mm, 0.2);
            assert_eq!(row.solar_kw_m2, Some(0.58));
        }
    }
}
