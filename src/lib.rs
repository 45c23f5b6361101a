mod aggregate;
mod engine;
mod error;
mod filtering;
mod station_data;
mod types;
mod views;

pub use engine::Klimastation;
pub use error::KlimastationError;

pub use aggregate::circular::circular_mean_deg;
pub use aggregate::hourly::aggregate_hourly;
pub use aggregate::resample::{resample_daily, resample_monthly};

pub use filtering::{HourlyTable, ReadingTable};

pub use station_data::error::StationDataError;
pub use station_data::loader::read_station_csv;
pub use station_data::normalize::normalize_frame;
pub use station_data::schema::*;

pub use types::hourly::HourlyAggregate;
pub use types::period::{Granularity, Month, PeriodSelector, Year};
pub use types::reading::Reading;
pub use types::resampled::PeriodAggregate;
pub use types::station::{CurrentConditions, StationInfo};

pub use views::humidity::HumidityRange;
pub use views::solar_pivot::{ColumnAxis, SolarPivot, SolarScale};
pub use views::temp_precip::{
    AxisRange, TempPrecipPoint, TempPrecipSeries, PRECIP_AXIS_DAY, PRECIP_AXIS_MONTH,
    PRECIP_AXIS_YEAR, TEMP_AXIS,
};
pub use views::wind_rose::{Sector, SpeedBand, WindRose, SPEED_BANDS};
pub use views::{DerivedView, ViewKind, ViewResult};
