//! Core floor file decoding module

pub mod format;
pub mod iter;
pub mod legend;
pub mod reader;
pub mod report;
pub mod types;
pub mod utils;

use std::io::{Read, Write};

use log::{debug, warn};

pub use reader::FloorReader;
pub use report::ReportOptions;
pub use types::error::{FloorError, Result};

/// Counters describing a finished dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub floors_decoded: usize,
    pub floors_suppressed: usize,
    pub trailing_bytes: usize,
}

/// Decode a whole floor file from `input` and write its report to `out`.
///
/// Header problems are reported before anything is written. Each floor is
/// written as soon as it is decoded, so a truncated record aborts the run
/// with the earlier floors already in `out`.
pub fn dump<R: Read, W: Write>(input: R, out: &mut W, options: &ReportOptions) -> Result<DumpSummary> {
    let mut reader = FloorReader::new(input)?;
    let floor_count = reader.floor_count()?;
    out.write_all(report::render_header(reader.header(), options).as_bytes())?;

    let mut summary = DumpSummary::default();
    for floor in reader.floors()? {
        let floor = floor?;
        if options.is_suppressed(&floor) {
            debug!(
                "Floor #{} suppressed (difficulty {} >= {})",
                floor.index, floor.difficulty, options.threshold
            );
            summary.floors_suppressed += 1;
        }
        out.write_all(report::render_floor(&floor, options).as_bytes())?;
        summary.floors_decoded += 1;
    }

    let trailing = reader.read_trailing()?;
    if !trailing.is_empty() {
        warn!(
            "{} unexpected bytes after the last of {} floors",
            trailing.len(),
            floor_count
        );
        out.write_all(report::render_trailer(&trailing).as_bytes())?;
    }
    summary.trailing_bytes = trailing.len();
    out.flush()?;

    debug!(
        "Dump finished: {} floors ({} suppressed), {} trailing bytes",
        summary.floors_decoded, summary.floors_suppressed, summary.trailing_bytes
    );
    Ok(summary)
}
