//! Binary layout parsing for floor files.
//!
//! ```text
//! File Structure:
//! ┌──────────────────────┐
//! │  Header (128 bytes)  │ ← header::parse()
//! ├──────────────────────┤
//! │  Floor record × N    │ ← record::parse()
//! │  (280 bytes each)    │
//! ├──────────────────────┤
//! │  Trailing bytes      │   reported, never parsed
//! └──────────────────────┘
//! ```

pub mod header;
pub mod record;
