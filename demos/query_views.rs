//! demos/query_views.rs
//!
//! Builds an engine from a handful of in-memory readings and runs every view
//! for a day, a month and a year selection, printing each result as JSON.
//!
//! To run this example:
//! cargo run --example query_views

use chrono::NaiveDate;
use klimastation::{Klimastation, Month, PeriodSelector, Reading, ViewKind, Year};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let date = NaiveDate::from_ymd_opt(2021, 6, 14).unwrap();

    // Two readings either side of north, one rainy reading in July.
    let readings = vec![
        Reading {
            timestamp: date.and_hms_opt(10, 0, 0),
            record_id: Some(100),
            wind_dir_deg: Some(350.0),
            wind_speed_ms: Some(0.4),
            air_temp_c: Some(21.5),
            rel_humidity_pct: Some(54.0),
            pressure_mbar: Some(968.3),
            rain_avg_mm: Some(0.0),
            rain_total_mm: Some(0.0),
            solar_kw_m2: Some(0.58),
        },
        Reading {
            timestamp: date.and_hms_opt(10, 10, 0),
            record_id: Some(101),
            wind_dir_deg: Some(10.0),
            wind_speed_ms: Some(0.4),
            air_temp_c: Some(22.1),
            rel_humidity_pct: Some(53.0),
            pressure_mbar: Some(968.2),
            rain_avg_mm: Some(0.0),
            rain_total_mm: Some(0.0),
            solar_kw_m2: Some(0.61),
        },
        Reading {
            timestamp: NaiveDate::from_ymd_opt(2021, 7, 2)
                .unwrap()
                .and_hms_opt(12, 0, 0),
            record_id: Some(200),
            wind_dir_deg: Some(180.0),
            wind_speed_ms: Some(1.2),
            air_temp_c: Some(17.0),
            rel_humidity_pct: Some(91.0),
            pressure_mbar: Some(961.0),
            rain_avg_mm: Some(2.5),
            rain_total_mm: Some(2.5),
            solar_kw_m2: Some(0.12),
        },
    ];

    let engine = Klimastation::from_readings(readings, None);
    println!(
        "dataset spans {:?}, years {:?}",
        engine.time_range(),
        engine.years()
    );

    let selections = [
        PeriodSelector::Day(date),
        PeriodSelector::Month(Month::new(2021, 6)),
        PeriodSelector::Year(Year(2021)),
    ];
    let kinds = [
        ViewKind::WindRose,
        ViewKind::SolarPivot,
        ViewKind::HumidityRange,
        ViewKind::TempPrecip,
    ];

    for period in selections {
        println!("\n=== {period} ===");
        for kind in kinds {
            let view = engine.build_view(period, kind);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    // An empty selection is not an error; every view has a defined empty form.
    let empty = PeriodSelector::Day(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap());
    println!("\n=== {empty} (no data) ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&engine.build_view(empty, ViewKind::HumidityRange))?
    );

    Ok(())
}
