//! Loading EDID bytes from text dumps and binary files

use std::fs;
use std::path::Path;

use crate::error::EdidResult;

/// Decode a hex dump such as the output of `xxd -p` or `edid-decode`
///
/// All whitespace is dropped and a single leading `0x` is accepted.
pub fn decode_hex_text(text: &str) -> EdidResult<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);

    Ok(hex::decode(digits)?)
}

/// Whether `content` looks like a hex text dump rather than raw EDID bytes
pub fn is_hex_text(content: &[u8]) -> bool {
    let mut saw_digit = false;
    let mut body = content;
    if let Some(rest) = body.strip_prefix(b"0x").or_else(|| body.strip_prefix(b"0X")) {
        body = rest;
    }
    for &b in body {
        if b.is_ascii_hexdigit() {
            saw_digit = true;
        } else if !b.is_ascii_whitespace() {
            return false;
        }
    }
    saw_digit
}

/// Read EDID bytes from a file
///
/// Hex text dumps are decoded; anything else (e.g. a sysfs `edid` node) is
/// returned as raw bytes.
pub fn load_edid_file<P: AsRef<Path>>(path: P) -> EdidResult<Vec<u8>> {
    let path = path.as_ref();
    let content = fs::read(path)?;

    if is_hex_text(&content) {
        log::debug!("Reading {} as hex text", path.display());
        // is_hex_text only accepts ASCII
        let text = String::from_utf8_lossy(&content);
        decode_hex_text(&text)
    } else {
        log::debug!("Reading {} as raw bytes ({} bytes)", path.display(), content.len());
        Ok(content)
    }
}
