pub mod hourly;
pub mod period;
pub mod reading;
pub mod resampled;
pub mod station;
