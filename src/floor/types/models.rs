//! Data structures representing floor file components

use crate::floor::legend::{TileEntry, TileKind};

/// Number of columns in a floor grid.
pub const MAP_W: usize = 20;
/// Number of rows in a floor grid.
pub const MAP_H: usize = 14;
/// Size of one floor record in bytes (one byte per cell).
pub const MAP_SIZE: usize = MAP_W * MAP_H;

/// Magic bytes every floor file starts with.
pub const SIGNATURE: [u8; SIGNATURE_LEN] = *b"IceTower\r\n\x1a\0";
pub const SIGNATURE_LEN: usize = 12;
pub const COMMENT_LEN: usize = 108;
/// Size of the file header in bytes: signature, comment, version, floor count.
pub const HEADER_SIZE: usize = SIGNATURE_LEN + COMMENT_LEN + 4 + 4;

/// The only header version this crate understands.
pub const SUPPORTED_VERSION: i32 = 1;

/// Parsed floor file header.
///
/// The signature has already been validated by the time this value exists,
/// so only the informative fields are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Comment bytes with trailing zero padding stripped. Not guaranteed to
    /// be valid text in any encoding.
    pub comment: Vec<u8>,
    pub version: i32,
    /// Declared number of floor records; may be negative in malformed files.
    pub floor_count: i32,
}

/// One decoded grid cell: the raw tile code and its legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub code: u8,
    pub tile: &'static TileEntry,
}

impl Cell {
    pub fn glyph(&self) -> char {
        self.tile.glyph
    }

    pub fn weight(&self) -> i32 {
        self.tile.weight
    }

    pub fn kind(&self) -> TileKind {
        self.tile.kind
    }
}

/// A single decoded floor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    /// 1-based position of this record in the file.
    pub index: usize,
    /// Cells in row-major order, `MAP_H` rows of `MAP_W` cells.
    pub rows: [[Cell; MAP_W]; MAP_H],
    /// Maximum legend weight over all cells, never below 0.
    pub difficulty: i32,
}

impl Floor {
    /// Iterate over the glyphs of each row.
    pub fn glyph_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::glyph).collect())
    }

    /// Count the objects placed on this floor.
    pub fn inventory(&self) -> Inventory {
        let mut inventory = Inventory::default();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell.kind() {
                    TileKind::Empty => {}
                    TileKind::Wall => inventory.walls += 1,
                    TileKind::Ice => inventory.ice += 1,
                    TileKind::Fire => inventory.fire += 1,
                    TileKind::ArrowUp
                    | TileKind::ArrowDown
                    | TileKind::ArrowLeft
                    | TileKind::ArrowRight => inventory.arrows += 1,
                    TileKind::Dispenser => inventory.dispensers += 1,
                    TileKind::Recycler => inventory.recyclers += 1,
                    TileKind::GoldenIce => inventory.golden_ice += 1,
                    TileKind::Crystal => inventory.crystals += 1,
                    TileKind::Magician => {
                        if inventory.magician.is_none() {
                            inventory.magician = Some((r, c));
                        }
                    }
                    TileKind::Unknown => inventory.unknown += 1,
                }
            }
        }
        inventory
    }
}

/// Object counts for one floor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub walls: usize,
    pub ice: usize,
    pub golden_ice: usize,
    pub fire: usize,
    pub crystals: usize,
    pub dispensers: usize,
    pub recyclers: usize,
    pub arrows: usize,
    pub unknown: usize,
    /// Position (row, column) of the first magician marker, if any.
    pub magician: Option<(usize, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_is_128_bytes() {
        assert_eq!(HEADER_SIZE, 128);
        assert_eq!(SIGNATURE.len(), SIGNATURE_LEN);
        assert_eq!(MAP_SIZE, 280);
    }
}
