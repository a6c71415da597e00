//! Low-level byte reading utilities

use std::io::{ErrorKind, Read};

use encoding_rs::Encoding;
use log::{trace, warn};

use super::types::error::{FloorError, Result};

/// Fill `buf` completely from `reader`.
///
/// Unlike `Read::read_exact`, a short read reports how many bytes were
/// actually available, so the caller can tell a truncated record apart from
/// an I/O failure.
pub fn read_record(reader: &mut impl Read, buf: &mut [u8], context: impl Into<String>) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    trace!("Read {} of {} bytes", filled, buf.len());

    if filled < buf.len() {
        return Err(FloorError::TruncatedInput {
            context: context.into(),
            expected: buf.len(),
            found: filled,
        });
    }
    Ok(())
}

/// Resolve an encoding label (e.g. `utf-8`, `shift_jis`, `gbk`).
///
/// GBK and GB2312 are widened to GB18030. Unknown labels fall back to UTF-8.
pub fn parse_encoding(label: &str) -> &'static Encoding {
    let label = label.trim();
    let normalized = if label.eq_ignore_ascii_case("GBK") || label.eq_ignore_ascii_case("GB2312") {
        "GB18030"
    } else {
        label
    };
    Encoding::for_label(normalized.as_bytes()).unwrap_or_else(|| {
        warn!("Unknown encoding label '{}', using UTF-8", label);
        encoding_rs::UTF_8
    })
}

/// Render raw bytes with ASCII escapes (`\x00`, `\n`, ...).
pub fn escape_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect()
}
