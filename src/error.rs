use crate::station_data::error::StationDataError;
use thiserror::Error;

/// Top-level error for engine construction.
///
/// Loading is the only fallible operation; queries over a built engine
/// always return a value or an explicit no-data marker.
#[derive(Debug, Error)]
pub enum KlimastationError {
    #[error(transparent)]
    StationData(#[from] StationDataError),
}
