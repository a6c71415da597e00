use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{info, trace};

use super::format;
use super::iter::FloorIterator;
use super::types::error::{FloorError, Result};
use super::types::models::FileHeader;

/// The main reader for floor files.
///
/// Owns the input stream for the whole decode. The header is parsed and
/// validated on construction; floor records are then decoded lazily through
/// [`floors`](Self::floors). The stream only ever moves forward.
#[derive(Debug)]
pub struct FloorReader<R: Read> {
    reader: R,
    header: FileHeader,
}

impl FloorReader<BufReader<File>> {
    /// Open a floor file from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened
    /// - The header is truncated, has a wrong signature or an unsupported version
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening floor file: {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read> FloorReader<R> {
    /// Read and validate the header from a stream positioned at its start.
    pub fn new(mut reader: R) -> Result<Self> {
        let header = format::header::parse(&mut reader)?;
        Ok(Self { reader, header })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// The declared number of floors.
    ///
    /// # Errors
    /// `NegativeFloorCount` if the header holds a negative count.
    pub fn floor_count(&self) -> Result<usize> {
        usize::try_from(self.header.floor_count)
            .map_err(|_| FloorError::NegativeFloorCount(self.header.floor_count))
    }

    /// Returns an iterator decoding the declared floor records one at a time.
    pub fn floors(&mut self) -> Result<FloorIterator<'_, R>> {
        let count = self.floor_count()?;
        Ok(FloorIterator::new(&mut self.reader, count))
    }

    /// Consume the reader and return every byte left in the stream.
    ///
    /// Call after the floors have been iterated to collect trailing data.
    pub fn read_trailing(mut self) -> Result<Vec<u8>> {
        let mut rest = Vec::new();
        self.reader.read_to_end(&mut rest)?;
        trace!("Trailing data: {} bytes", rest.len());
        Ok(rest)
    }
}
