//! Floor file header parsing and validation.

use std::io::Read;

use byteorder::{ByteOrder, LittleEndian};
use log::{info, trace};

use crate::floor::types::{
    error::{FloorError, Result},
    models::{FileHeader, COMMENT_LEN, HEADER_SIZE, SIGNATURE, SIGNATURE_LEN, SUPPORTED_VERSION},
};
use crate::floor::utils;

const COMMENT_OFFSET: usize = SIGNATURE_LEN;
const VERSION_OFFSET: usize = COMMENT_OFFSET + COMMENT_LEN;
const FLOOR_COUNT_OFFSET: usize = VERSION_OFFSET + 4;

/// Parses the floor file header from the start of the stream.
///
/// # Header Structure
/// ```text
/// [12 bytes]  Signature "IceTower\r\n\x1a\0"
/// [108 bytes] Comment, zero padded
/// [4 bytes]   Version (little-endian i32)
/// [4 bytes]   Floor count (little-endian i32)
/// ```
///
/// Consumes exactly 128 bytes. A negative floor count is returned as-is.
pub fn parse<R: Read>(reader: &mut R) -> Result<FileHeader> {
    let mut raw = [0u8; HEADER_SIZE];
    utils::read_record(reader, &mut raw, "header")?;
    decode(&raw)
}

/// Decodes an already-read 128-byte header block.
pub fn decode(raw: &[u8; HEADER_SIZE]) -> Result<FileHeader> {
    let mut signature = [0u8; SIGNATURE_LEN];
    signature.copy_from_slice(&raw[..SIGNATURE_LEN]);
    if signature != SIGNATURE {
        return Err(FloorError::BadSignature(signature));
    }

    let version = LittleEndian::read_i32(&raw[VERSION_OFFSET..FLOOR_COUNT_OFFSET]);
    trace!("Header version field: {}", version);
    if version != SUPPORTED_VERSION {
        return Err(FloorError::UnsupportedVersion(version));
    }

    let floor_count = LittleEndian::read_i32(&raw[FLOOR_COUNT_OFFSET..HEADER_SIZE]);

    let comment_field = &raw[COMMENT_OFFSET..VERSION_OFFSET];
    let comment_len = comment_field
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    let comment = comment_field[..comment_len].to_vec();

    info!(
        "Header parsed: version={}, floor_count={}, comment={} bytes",
        version,
        floor_count,
        comment.len()
    );

    Ok(FileHeader {
        comment,
        version,
        floor_count,
    })
}
