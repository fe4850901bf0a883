//! Loading delimited text files into a polars [`DataFrame`]

use hypotest_core::{Error, Result};
use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Cell contents read as a missing value
pub const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// A source of tabular data
pub trait DataSource {
    /// Read the table at `path`, keeping only `columns` when given
    fn get_data(&self, path: &Path, columns: Option<&[&str]>) -> Result<DataFrame>;
}

/// CSV (or other single-byte delimited) file reader
///
/// The first row holds the column names. Column types are inferred by the
/// polars CSV reader; cells matching [`MISSING_MARKERS`] become nulls.
#[derive(Debug, Clone, Copy)]
pub struct Spreadsheet {
    delimiter: u8,
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl Spreadsheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a table held in memory
    pub fn read(&self, data: &[u8], columns: Option<&[&str]>) -> Result<DataFrame> {
        self.read_from(Cursor::new(data), columns)
    }

    fn read_from<R: MmapBytesReader>(
        &self,
        reader: R,
        columns: Option<&[&str]>,
    ) -> Result<DataFrame> {
        let null_values: Vec<PlSmallStr> =
            MISSING_MARKERS.iter().map(|m| PlSmallStr::from(*m)).collect();
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .map_parse_options(|options| {
                options
                    .with_separator(self.delimiter)
                    .with_null_values(Some(NullValues::AllColumns(null_values.clone())))
                    .with_missing_is_null(true)
            })
            .into_reader_with_file_handle(reader)
            .finish()?;

        for column in frame.get_columns() {
            debug!("column `{}` read as {}", column.name(), column.dtype());
        }

        match columns {
            Some(names) => select(&frame, names),
            None => Ok(frame),
        }
    }
}

impl DataSource for Spreadsheet {
    fn get_data(&self, path: &Path, columns: Option<&[&str]>) -> Result<DataFrame> {
        let file = std::fs::File::open(path)?;
        let frame = self.read_from(file, columns)?;
        info!(
            "Loaded {} rows and {} columns from {}",
            frame.height(),
            frame.width(),
            path.display()
        );
        Ok(frame)
    }
}

/// Keep `names`, in the requested order
fn select(frame: &DataFrame, names: &[&str]) -> Result<DataFrame> {
    if let Some(missing) = names.iter().find(|name| frame.column(name).is_err()) {
        return Err(Error::InvalidColumn(missing.to_string()));
    }
    Ok(frame.select(names.iter().copied())?)
}
