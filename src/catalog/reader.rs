//! @ai:module:intent CSV reader yielding product rows one at a time
//! @ai:module:layer infrastructure
//! @ai:module:public_api CatalogReader
//! @ai:module:stateless false

use crate::catalog::row::{ProductRow, HEADER};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// @ai:intent Streams product rows from a CSV source with a header row
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
    headers: csv::StringRecord,
    next_number: usize,
}

impl CatalogReader<File> {
    /// @ai:intent Open a CSV file from disk
    /// @ai:pre path exists and is readable UTF-8
    /// @ai:effects fs:read
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> CatalogReader<R> {
    /// @ai:intent Wrap any reader; the first record is the header
    /// @ai:effects io
    pub fn from_reader(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();

        let unknown: Vec<&str> = headers
            .iter()
            .filter(|h| !HEADER.contains(h))
            .collect();

        if !unknown.is_empty() {
            tracing::debug!("Ignoring unknown CSV columns: {:?}", unknown);
        }

        Ok(Self {
            reader,
            headers,
            next_number: 1,
        })
    }

    /// @ai:intent Header names as they appear in the file
    /// @ai:effects pure
    pub fn headers(&self) -> Vec<&str> {
        self.headers.iter().collect()
    }

    /// @ai:intent Read the next row, or None at end of input
    /// @ai:effects io
    fn read_row(&mut self) -> Option<Result<ProductRow>> {
        let mut record = csv::StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                let number = self.next_number;
                self.next_number += 1;

                // Short records leave trailing columns absent rather than empty.
                let fields = self
                    .headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, v)| (h.to_string(), v.to_string()));

                Some(Ok(ProductRow::new(number, fields)))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

impl<R: Read> Iterator for CatalogReader<R> {
    type Item = Result<ProductRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row()
    }
}
