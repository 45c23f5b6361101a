//! demos/load_station_csv.rs
//!
//! Loads a real logger export from disk and prints the engine's summary plus
//! one wind rose.
//!
//! To run this example:
//! cargo run --example load_station_csv -- path/to/Klimadaten_middle.dat

use klimastation::{Klimastation, PeriodSelector, StationInfo, Year};
use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let path: PathBuf = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/Klimadaten_middle.dat".to_string())
        .into();

    let engine = Klimastation::from_csv()
        .path(path)
        .station(StationInfo::new(
            "Klimastation Tübingen",
            48.523669,
            9.054517,
        ))
        .call()?;

    println!(
        "loaded {} readings into {} hourly rows",
        engine.readings().len(),
        engine.hourly().len()
    );
    if let Some(conditions) = engine.latest_conditions() {
        println!("latest conditions: {conditions:?}");
    }

    let year = engine
        .years()
        .map(|range| *range.end())
        .unwrap_or(2021);
    let rose = engine.wind_rose(PeriodSelector::Year(Year(year)));
    println!("\nwind rose for {year} ({} hours counted):", rose.total());
    for (sector, counts) in rose.rows() {
        println!("{:>3}  {:?}", sector.label(), counts);
    }

    Ok(())
}
