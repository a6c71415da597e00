//! Floor record decoding.

use std::io::Read;

use log::debug;

use crate::floor::legend;
use crate::floor::types::{
    error::Result,
    models::{Cell, Floor, MAP_H, MAP_SIZE, MAP_W},
};
use crate::floor::utils;

/// Reads and decodes the next 280-byte floor record.
///
/// `index` is the 1-based position of the record and is only used for the
/// error context and the returned [`Floor`].
pub fn parse<R: Read>(reader: &mut R, index: usize) -> Result<Floor> {
    let mut raw = [0u8; MAP_SIZE];
    utils::read_record(reader, &mut raw, format!("floor #{index}"))?;
    Ok(decode(&raw, index))
}

/// Maps a raw record through the legend and computes its difficulty.
///
/// Row-major: row 0 is the first `MAP_W` bytes. Unknown codes are accepted.
pub fn decode(raw: &[u8; MAP_SIZE], index: usize) -> Floor {
    let rows: [[Cell; MAP_W]; MAP_H] = std::array::from_fn(|r| {
        std::array::from_fn(|c| {
            let code = raw[r * MAP_W + c];
            Cell {
                code,
                tile: legend::lookup(code),
            }
        })
    });

    let difficulty = rows
        .iter()
        .flatten()
        .map(Cell::weight)
        .fold(0, i32::max);

    debug!("Decoded floor #{}: difficulty={}", index, difficulty);

    Floor {
        index,
        rows,
        difficulty,
    }
}
