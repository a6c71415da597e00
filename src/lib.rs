//! # icetower-dump
//!
//! A decoder for IceTower floor files. Reads the 128-byte header, then each
//! 20×14 floor record, and renders them as a text report with a derived
//! difficulty per floor.
pub mod floor;

// Re-export the main types for convenience
pub use floor::{
    dump,
    iter::FloorIterator,
    legend::{lookup, TileEntry, TileKind},
    report::{render_floor, render_header, render_trailer, ReportOptions},
    types::models::{Cell, FileHeader, Floor, Inventory},
    DumpSummary, FloorError, FloorReader, Result,
};
