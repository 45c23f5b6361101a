use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationDataError {
    #[error("Parsing error reading station export {0:?}")]
    CsvReadPolars(PathBuf, #[source] PolarsError),

    #[error(
        "CSV column count ({found}) does not match the station schema length ({expected}) in {path:?}"
    )]
    SchemaMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Failed to apply station schema column names")]
    ColumnRename(#[source] PolarsError),

    #[error("Required column '{0}' not found in raw station table")]
    ColumnNotFound(String, #[source] PolarsError),
}
