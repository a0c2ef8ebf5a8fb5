//! High-level API for EDID decoding

use crate::decoder::{
    self, base_block, checksum_valid, Chromaticity, DetailedTiming, DisplayParameters, Identity,
    RangeLimits, StandardTiming, EDID_BLOCK_LEN, EXTENSION_COUNT_OFFSET,
};
use crate::error::EdidResult;
use crate::mappings::EstablishedTiming;
use bytes::Buf;
use serde::Serialize;

/// Fully decoded EDID base block
///
/// Built in one pass by [`parse_edid`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdidRecord {
    /// Sum of the 128 block bytes is zero modulo 256
    pub checksum_valid: bool,
    /// Header, vendor, product and version
    pub identity: Identity,
    /// Input type, size, gamma, power management and color type
    pub display: DisplayParameters,
    /// Color primaries and white point
    pub chromaticity: Chromaticity,
    /// Raw established timing bytes 35-37
    pub established_bitmap: [u8; 3],
    /// Established modes in table scan order
    pub established_timings: Vec<EstablishedTiming>,
    /// All eight standard timing entries
    pub standard_timings: Vec<StandardTiming>,
    /// Detailed timing descriptors in block order
    pub detailed_timings: Vec<DetailedTiming>,
    /// Range limit descriptors in block order
    pub range_limits: Vec<RangeLimits>,
    /// Product name from a 0xFC descriptor
    pub monitor_name: Option<String>,
    /// Serial string from a 0xFF descriptor
    pub monitor_serial: Option<String>,
    /// Number of extension blocks that follow (not parsed)
    pub extension_count: u8,
}

impl EdidRecord {
    /// Whether the input is digital
    pub fn is_digital(&self) -> bool {
        self.display.video_input.is_digital()
    }

    /// Whether the header matches the fixed EDID pattern
    pub fn has_valid_header(&self) -> bool {
        self.identity.has_valid_header()
    }

    /// Preferred mode, i.e. the first detailed timing
    pub fn preferred_timing(&self) -> Option<&DetailedTiming> {
        self.detailed_timings.first()
    }
}

/// Decode an EDID base block
///
/// `data` must hold at least 128 bytes; anything after the base block is
/// ignored. A bad checksum or header is reported through the record, not as
/// an error.
///
/// # Example
///
/// ```
/// let mut block = [0u8; 128];
/// block[..8].copy_from_slice(&edidinfo::EDID_HEADER);
/// let record = edidinfo::parse_edid(&block)?;
/// assert!(record.has_valid_header());
/// assert_eq!(record.standard_timings.len(), 8);
/// # Ok::<(), edidinfo::EdidError>(())
/// ```
pub fn parse_edid(data: &[u8]) -> EdidResult<EdidRecord> {
    let block = base_block(data)?;

    let checksum_valid = checksum_valid(block);
    if !checksum_valid {
        log::warn!("EDID checksum mismatch, decoding anyway");
    }

    let mut cursor: &[u8] = block;
    let identity = decoder::decode_identity(&mut cursor);
    if !identity.has_valid_header() {
        log::warn!("Unexpected EDID header {}", identity.header_hex());
    }
    let display = decoder::decode_display_parameters(&mut cursor);
    let chromaticity = decoder::decode_chromaticity(&mut cursor);
    let established = decoder::decode_established_timings(&mut cursor);
    let standard_timings = decoder::decode_standard_timings(&mut cursor);
    let descriptors = decoder::decode_descriptors(&mut cursor);

    debug_assert_eq!(EDID_BLOCK_LEN - cursor.remaining(), EXTENSION_COUNT_OFFSET);
    let extension_count = cursor.get_u8();

    log::debug!(
        "Decoded EDID {} {:04X}: {} detailed timing(s), {} range limit(s), {} extension(s)",
        identity.manufacturer_id,
        identity.product_code,
        descriptors.detailed_timings.len(),
        descriptors.range_limits.len(),
        extension_count
    );

    Ok(EdidRecord {
        checksum_valid,
        identity,
        display,
        chromaticity,
        established_bitmap: established.bitmap,
        established_timings: established.modes,
        standard_timings,
        detailed_timings: descriptors.detailed_timings,
        range_limits: descriptors.range_limits,
        monitor_name: descriptors.monitor_name,
        monitor_serial: descriptors.monitor_serial,
        extension_count,
    })
}

/// Decode many independent EDID blobs in parallel
///
/// Results keep the order of `inputs`.
#[cfg(feature = "parallel")]
pub fn parse_edid_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<EdidResult<EdidRecord>> {
    use rayon::prelude::*;

    inputs.par_iter().map(|data| parse_edid(data.as_ref())).collect()
}
