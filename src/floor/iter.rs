//! Lazy iteration over the floor records of a file.

use std::io::Read;
use std::iter::FusedIterator;

use super::format::record;
use super::types::error::Result;
use super::types::models::Floor;

/// Iterator over the floor records following the header.
///
/// Decodes one record per call to `next`, so at most one floor is held in
/// memory. Yields at most `count` items and stops for good after the first
/// error, leaving the stream positioned where the failed read ended.
///
/// Created by [`FloorReader::floors()`](crate::FloorReader::floors).
pub struct FloorIterator<'a, R: Read> {
    reader: &'a mut R,
    next_index: usize,
    count: usize,
    failed: bool,
}

impl<'a, R: Read> FloorIterator<'a, R> {
    pub(super) fn new(reader: &'a mut R, count: usize) -> Self {
        Self {
            reader,
            next_index: 1,
            count,
            failed: false,
        }
    }

    /// Number of records still expected, as declared by the header.
    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.count + 1 - self.next_index
        }
    }
}

impl<'a, R: Read> Iterator for FloorIterator<'a, R> {
    type Item = Result<Floor>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;

        match record::parse(&mut *self.reader, index) {
            Ok(floor) => Some(Ok(floor)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl<'a, R: Read> FusedIterator for FloorIterator<'a, R> {}
