//! Reads delimited text files into [`Record`] sequences.

use crate::core::record::Record;
use csv::{ReaderBuilder, StringRecord, Trim};
use perfreport_core::{Config, ReportError, ReportResult};
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    pub delimiter: u8,
    pub trim: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl TryFrom<&Config> for LoaderOptions {
    type Error = ReportError;

    fn try_from(config: &Config) -> ReportResult<Self> {
        Ok(Self {
            delimiter: config.delimiter_byte()?,
            trim: config.input.trim,
        })
    }
}

/// Loads records from files whose first row is a header.
#[derive(Debug, Clone, Default)]
pub struct RecordLoader {
    options: LoaderOptions,
}

impl RecordLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Read every file in order and concatenate their rows.
    /// Fails on the first file that cannot be read; nothing is returned for the others.
    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> ReportResult<Vec<Record>> {
        let mut records = Vec::new();
        for path in paths {
            self.load_file(path.as_ref(), &mut records)?;
        }
        Ok(records)
    }

    fn load_file(&self, path: &Path, records: &mut Vec<Record>) -> ReportResult<()> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(true)
            .trim(if self.options.trim { Trim::All } else { Trim::None })
            .from_reader(file);

        let headers = reader.headers().map_err(|e| read_error(path, e))?.clone();

        let mut row = StringRecord::new();
        while reader.read_record(&mut row).map_err(|e| read_error(path, e))? {
            records.push(to_record(&headers, &row));
        }

        Ok(())
    }
}

/// Load with default options
pub fn read_records<P: AsRef<Path>>(paths: &[P]) -> ReportResult<Vec<Record>> {
    RecordLoader::default().load(paths)
}

fn to_record(headers: &StringRecord, row: &StringRecord) -> Record {
    headers.iter().zip(row.iter()).collect()
}

fn open_error(path: &Path, err: io::Error) -> ReportError {
    if err.kind() == io::ErrorKind::NotFound {
        ReportError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        read_error(path, err.into())
    }
}

fn read_error(path: &Path, err: csv::Error) -> ReportError {
    ReportError::Read {
        path: path.to_path_buf(),
        source: err,
    }
}
