//! Fixed schema of the station's logger export (Campbell CR300, TOA5 layout:
//! four metadata lines, then header-less data rows with thirteen columns).

pub const COL_TIMESTAMP: &str = "TIMESTAMP";
pub const COL_RECORD: &str = "RECORD";
pub const COL_WIND_DIR: &str = "WindDir";
pub const COL_WIND_SPEED: &str = "WS_ms_Avg";
pub const COL_AIR_TEMP: &str = "AirTC_Avg";
pub const COL_REL_HUMIDITY: &str = "RH_Avg";
pub const COL_PRESSURE: &str = "BP_mbar_Avg";
pub const COL_RAIN_AVG: &str = "Rain_mm_Avg";
pub const COL_HEAT_AMOUNT: &str = "HAmount_Avg";
pub const COL_RAIN_TOTAL: &str = "Rain_mm_2_Tot";
pub const COL_SOLAR: &str = "SlrkW_Avg";
pub const COL_SOLAR_ENERGY: &str = "SlrMJ_Tot";
pub const COL_QR_STATUS: &str = "QR_Avg";

/// Every column of the raw export, in file order.
pub const RAW_COLUMNS: [&str; 13] = [
    COL_TIMESTAMP,
    COL_RECORD,
    COL_WIND_DIR,
    COL_WIND_SPEED,
    COL_AIR_TEMP,
    COL_REL_HUMIDITY,
    COL_PRESSURE,
    COL_RAIN_AVG,
    COL_HEAT_AMOUNT,
    COL_RAIN_TOTAL,
    COL_SOLAR,
    COL_SOLAR_ENERGY,
    COL_QR_STATUS,
];

/// Columns the normalizer reads. A raw table missing any of these is
/// rejected; everything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    COL_TIMESTAMP,
    COL_RECORD,
    COL_WIND_DIR,
    COL_WIND_SPEED,
    COL_AIR_TEMP,
    COL_REL_HUMIDITY,
    COL_PRESSURE,
    COL_RAIN_AVG,
    COL_RAIN_TOTAL,
    COL_SOLAR,
];

/// Columns present in the export but unused by any view.
pub const DROPPED_COLUMNS: [&str; 3] = [COL_HEAT_AMOUNT, COL_SOLAR_ENERGY, COL_QR_STATUS];

/// Timestamp format written by the logger.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Metadata lines before the first data row in a TOA5 export.
pub const DEFAULT_HEADER_LINES: usize = 4;
