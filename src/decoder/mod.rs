//! Binary decoder for the 128-byte EDID base block
//!
//! Every sub-decoder reads from a shared [`bytes::Buf`] cursor positioned on
//! its own byte range, so the block is walked exactly once from offset 0 to
//! 127. Only the length check can fail; once a full block is available each
//! field decode is a total function over its bytes.

mod chroma;
mod descriptor;
mod display;
mod identity;
mod timings;

pub use chroma::{decode_chromaticity, Chromaticity};
pub use descriptor::{
    classify_descriptor, decode_descriptors, Descriptor, DescriptorSet, DetailedTiming, RangeLimits,
};
pub use display::{
    decode_display_parameters, gamma_from_byte, DisplayParameters, PowerManagement, VideoInput,
};
pub use identity::{decode_identity, decode_manufacturer_id, Identity};
pub use timings::{
    decode_established_timings, decode_standard_timing, decode_standard_timings, EstablishedTimings,
    StandardTiming,
};

use crate::error::{EdidError, EdidResult};

/// Size of the EDID base block in bytes
pub const EDID_BLOCK_LEN: usize = 128;

/// Fixed pattern at the start of every base block
pub const EDID_HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Size of one descriptor block
pub const DESCRIPTOR_LEN: usize = 18;

/// Number of descriptor blocks in the base block
pub const DESCRIPTOR_COUNT: usize = 4;

/// Number of standard timing entries in the base block
pub const STANDARD_TIMING_COUNT: usize = 8;

/// Offset of the extension count byte
pub const EXTENSION_COUNT_OFFSET: usize = 126;

/// Borrow the base block out of `data`, failing if it is too short
///
/// Bytes past the first 128 are ignored.
pub fn base_block(data: &[u8]) -> EdidResult<&[u8; EDID_BLOCK_LEN]> {
    data.get(..EDID_BLOCK_LEN)
        .and_then(|block| block.try_into().ok())
        .ok_or(EdidError::InsufficientData {
            expected: EDID_BLOCK_LEN,
            actual: data.len(),
        })
}

/// Check that the base block bytes sum to zero modulo 256
pub fn checksum_valid(block: &[u8; EDID_BLOCK_LEN]) -> bool {
    block.iter().fold(0u8, |acc, &b| acc.wrapping_add(b)) == 0
}
