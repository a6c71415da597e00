//! Text report formatting.
//!
//! Every function here is pure: it takes decoded values and returns the text
//! to emit. Writing the text out is left to the driver.

use encoding_rs::Encoding;

use super::types::models::{FileHeader, Floor, Inventory};
use super::utils::escape_bytes;

/// Floors whose difficulty reaches this value have their map omitted.
pub const DEFAULT_SUPPRESSION_THRESHOLD: i32 = 5;

/// Knobs controlling what the report shows.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Difficulty at or above which a floor's map is suppressed.
    pub threshold: i32,
    /// Print every map regardless of difficulty.
    pub show_all: bool,
    /// Encoding used to display the header comment.
    pub encoding: &'static Encoding,
    /// Append an object inventory line to each shown floor.
    pub inventory: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SUPPRESSION_THRESHOLD,
            show_all: false,
            encoding: encoding_rs::UTF_8,
            inventory: false,
        }
    }
}

impl ReportOptions {
    pub fn is_suppressed(&self, floor: &Floor) -> bool {
        !self.show_all && floor.difficulty >= self.threshold
    }
}

/// Header summary: version, comment and floor count.
pub fn render_header(header: &FileHeader, options: &ReportOptions) -> String {
    let (comment, _) = options
        .encoding
        .decode_without_bom_handling(&header.comment);
    format!(
        "Version: {}\nComment: {}\nFloor count: {}\n",
        header.version, comment, header.floor_count
    )
}

/// One floor section. Suppressed floors only get their label.
pub fn render_floor(floor: &Floor, options: &ReportOptions) -> String {
    let mut out = format!("---- Floor #{:3} ----\n\n", floor.index);
    if options.is_suppressed(floor) {
        return out;
    }

    for row in floor.glyph_rows() {
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(&format!("\nDifficulty = {}\n", floor.difficulty));
    if options.inventory {
        out.push_str(&render_inventory(&floor.inventory()));
    }
    out.push('\n');
    out
}

fn render_inventory(inv: &Inventory) -> String {
    let magician = match inv.magician {
        Some((row, col)) => format!("({row}, {col})"),
        None => "none".to_string(),
    };
    format!(
        "Objects: wall={} ice={} gold={} fire={} crystal={} dispenser={} recycler={} arrow={} unknown={} magician={}\n",
        inv.walls,
        inv.ice,
        inv.golden_ice,
        inv.fire,
        inv.crystals,
        inv.dispensers,
        inv.recyclers,
        inv.arrows,
        inv.unknown,
        magician
    )
}

/// Diagnostic for bytes left after the last declared floor. Empty if none.
pub fn render_trailer(remaining: &[u8]) -> String {
    if remaining.is_empty() {
        return String::new();
    }
    format!(
        "Trailing (?): {} bytes b\"{}\"\n",
        remaining.len(),
        escape_bytes(remaining)
    )
}
