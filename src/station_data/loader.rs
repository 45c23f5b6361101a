//! Reads the raw logger export into a column-named [`DataFrame`].

use crate::station_data::error::StationDataError;
use crate::station_data::schema::RAW_COLUMNS;
use log::info;
use polars::frame::DataFrame;
use polars::prelude::*;
use std::path::Path;

/// Reads a station CSV export into a raw, string-typed [`DataFrame`].
///
/// The export has `skip_rows` metadata lines before the data (four in the
/// logger's TOA5 layout) and no usable header row, so columns are named
/// positionally from the fixed station schema. Every cell is read as a
/// string; decimal commas and `"NAN"` markers survive untouched until
/// normalization.
///
/// # Errors
///
/// Returns [`StationDataError::SchemaMismatch`] when the file does not carry
/// exactly the schema's column count, and [`StationDataError::CsvReadPolars`]
/// when the file cannot be read at all.
pub fn read_station_csv(path: &Path, skip_rows: usize) -> Result<DataFrame, StationDataError> {
    let mut df = CsvReadOptions::default()
        .with_has_header(false)
        .with_skip_rows(skip_rows)
        .with_infer_schema_length(Some(0))
        .with_raise_if_empty(false)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| StationDataError::CsvReadPolars(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| StationDataError::CsvReadPolars(path.to_path_buf(), e))?;

    if df.width() != RAW_COLUMNS.len() {
        return Err(StationDataError::SchemaMismatch {
            path: path.to_path_buf(),
            expected: RAW_COLUMNS.len(),
            found: df.width(),
        });
    }

    df.set_column_names(RAW_COLUMNS.iter().copied())
        .map_err(StationDataError::ColumnRename)?;

    info!("Read {} raw rows from {:?}", df.height(), path);
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station_data::schema::{COL_TIMESTAMP, COL_WIND_DIR, DEFAULT_HEADER_LINES};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_EXPORT: &str = "\
\"TOA5\",\"CR300Series\",\"CR300\",\"wlan\",\"Table1\"
\"TIMESTAMP\",\"RECORD\",\"WindDir\",\"WS_ms_Avg\",\"AirTC_Avg\",\"RH_Avg\",\"BP_mbar_Avg\",\"Rain_mm_Avg\",\"HAmount_Avg\",\"Rain_mm_2_Tot\",\"SlrkW_Avg\",\"SlrMJ_Tot\",\"QR_Avg\"
\"TS\",\"RN\",\"degrees\",\"m/s\",\"C\",\"%\",\"mbar\",\"mm\",\"\",\"mm\",\"kW/m^2\",\"MJ/m^2\",\"\"
\"\",\"\",\"WVc\",\"Avg\",\"Avg\",\"Avg\",\"Avg\",\"Avg\",\"Avg\",\"Tot\",\"Avg\",\"Tot\",\"Avg\"
\"2021-06-14 10:00:00\",100,\"181,4\",\"1,5\",\"22,1\",54,\"968,3\",0,0,0,\"0,58\",\"0,35\",1
\"2021-06-14 10:10:00\",101,\"190,0\",\"1,7\",\"22,4\",53,\"968,2\",0,0,0,\"0,61\",\"0,36\",1
";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_export_with_schema_names() {
        let file = write_temp(SAMPLE_EXPORT);
        let df = read_station_csv(file.path(), DEFAULT_HEADER_LINES).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), RAW_COLUMNS.len());
        assert!(df.column(COL_TIMESTAMP).is_ok());

        // Cells stay textual so the decimal comma is still visible here.
        let dir = df.column(COL_WIND_DIR).unwrap().str().unwrap();
        assert_eq!(dir.get(0), Some("181,4"));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let file = write_temp("skip\nskip\nskip\nskip\na,b,c\nd,e,f\n");
        let err = read_station_csv(file.path(), DEFAULT_HEADER_LINES).unwrap_err();
        assert!(matches!(
            err,
            StationDataError::SchemaMismatch {
                expected: 13,
                found: 3,
                ..
            }
        ));
    }
}
