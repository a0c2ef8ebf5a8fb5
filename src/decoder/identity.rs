//! Vendor and product identification (bytes 0-19)

use bytes::Buf;
use serde::Serialize;

use super::EDID_HEADER;

/// Identity section of the base block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Raw header bytes, normally [`EDID_HEADER`]
    pub header: [u8; 8],
    /// Three letter PNP manufacturer code (e.g. "DEL")
    pub manufacturer_id: String,
    /// Manufacturer product code
    pub product_code: u16,
    /// Numeric serial number (0 when unused)
    pub serial_number: u32,
    /// Week of manufacture
    pub week_of_manufacture: u8,
    /// Year of manufacture, stored byte + 1990
    pub year_of_manufacture: u16,
    /// EDID structure version
    pub edid_version: u8,
    /// EDID structure revision
    pub edid_revision: u8,
}

impl Identity {
    /// Whether the header matches the fixed EDID pattern
    pub fn has_valid_header(&self) -> bool {
        self.header == EDID_HEADER
    }

    /// Header rendered as `0x00FFFFFFFFFFFF00`
    pub fn header_hex(&self) -> String {
        format!("0x{}", hex::encode_upper(self.header))
    }
}

/// Decode bytes 0-19 from the cursor
pub fn decode_identity<B: Buf>(buf: &mut B) -> Identity {
    let mut header = [0u8; 8];
    buf.copy_to_slice(&mut header);

    // The manufacturer ID is the one big-endian field in the block
    let manufacturer_id = decode_manufacturer_id(buf.get_u16());
    let product_code = buf.get_u16_le();
    let serial_number = buf.get_u32_le();
    let week_of_manufacture = buf.get_u8();
    let year_of_manufacture = u16::from(buf.get_u8()) + 1990;
    let edid_version = buf.get_u8();
    let edid_revision = buf.get_u8();

    Identity {
        header,
        manufacturer_id,
        product_code,
        serial_number,
        week_of_manufacture,
        year_of_manufacture,
        edid_version,
        edid_revision,
    }
}

/// Decode the 3-letter manufacturer code from its packed form
///
/// Format: [reserved:1 | first:5 | second:5 | third:5], where 1 is 'A'.
/// Codes outside 1..=26 wrap around the alphabet so every input yields a
/// letter.
pub fn decode_manufacturer_id(packed: u16) -> String {
    [10u16, 5, 0]
        .iter()
        .map(|&shift| {
            let code = ((packed >> shift) & 0x1F) as u8;
            char::from(b'A' + (code + 25) % 26)
        })
        .collect()
}
