//! Tile legend: maps a one-byte tile code to its display glyph and weight.
//!
//! The table is built at compile time and never changes. The weight works as
//! a visibility gate for the report rather than a gameplay score: crystals,
//! the magician and unrecognized codes all weigh -1, so they never raise a
//! floor's difficulty on their own.

/// The kind of object a tile code stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Wall,
    Ice,
    Fire,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Dispenser,
    Recycler,
    GoldenIce,
    Crystal,
    Magician,
    Unknown,
}

/// One legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEntry {
    pub kind: TileKind,
    pub glyph: char,
    pub weight: i32,
}

impl TileEntry {
    const fn new(kind: TileKind, glyph: char, weight: i32) -> Self {
        Self { kind, glyph, weight }
    }
}

/// Entry used for every code without a legend row.
pub const UNKNOWN_TILE: TileEntry = TileEntry::new(TileKind::Unknown, '?', -1);

const KNOWN_TILES: [(u8, TileEntry); 13] = [
    (0, TileEntry::new(TileKind::Empty, ' ', 0)),
    (1, TileEntry::new(TileKind::Wall, '#', 0)),
    (2, TileEntry::new(TileKind::Ice, '%', 1)),
    (3, TileEntry::new(TileKind::Fire, '*', 1)),
    (4, TileEntry::new(TileKind::ArrowUp, '^', 4)),
    (5, TileEntry::new(TileKind::ArrowDown, 'v', 4)),
    (6, TileEntry::new(TileKind::ArrowLeft, '<', 4)),
    (7, TileEntry::new(TileKind::ArrowRight, '>', 4)),
    (8, TileEntry::new(TileKind::Dispenser, '+', 5)),
    (9, TileEntry::new(TileKind::Recycler, '-', 2)),
    (10, TileEntry::new(TileKind::GoldenIce, '$', 3)),
    (15, TileEntry::new(TileKind::Crystal, '!', -1)),
    (255, TileEntry::new(TileKind::Magician, '@', -1)),
];

const fn build_legend() -> [TileEntry; 256] {
    let mut table = [UNKNOWN_TILE; 256];
    let mut i = 0;
    while i < KNOWN_TILES.len() {
        let (code, entry) = KNOWN_TILES[i];
        table[code as usize] = entry;
        i += 1;
    }
    table
}

static LEGEND: [TileEntry; 256] = build_legend();

/// Resolve a tile code. Total: unknown codes map to [`UNKNOWN_TILE`].
#[inline]
pub fn lookup(code: u8) -> &'static TileEntry {
    &LEGEND[code as usize]
}
