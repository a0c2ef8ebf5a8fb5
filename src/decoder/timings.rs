//! Established (bytes 35-37) and standard (bytes 38-53) timings

use bytes::Buf;
use serde::Serialize;

use super::STANDARD_TIMING_COUNT;
use crate::mappings::established::scan_bitmap;
use crate::mappings::{
    AspectRatio, EstablishedTiming, ESTABLISHED_TIMINGS_I, ESTABLISHED_TIMINGS_II,
    MANUFACTURER_TIMING,
};

/// Established timing bitmaps and the modes they select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstablishedTimings {
    /// Raw bytes 35, 36 and 37
    pub bitmap: [u8; 3],
    /// Selected modes in table scan order
    pub modes: Vec<EstablishedTiming>,
}

/// One standard timing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardTiming {
    /// Horizontal resolution in pixels
    pub width: u16,
    /// Vertical resolution, derived from width and aspect ratio
    pub height: u16,
    /// Aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Vertical refresh in Hz
    pub refresh_hz: u8,
}

impl std::fmt::Display for StandardTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} {} @{}Hz",
            self.width, self.height, self.aspect_ratio, self.refresh_hz
        )
    }
}

/// Decode bytes 35-37 from the cursor
pub fn decode_established_timings<B: Buf>(buf: &mut B) -> EstablishedTimings {
    let mut bitmap = [0u8; 3];
    buf.copy_to_slice(&mut bitmap);

    let mut modes: Vec<EstablishedTiming> = scan_bitmap(bitmap[0], &ESTABLISHED_TIMINGS_I)
        .chain(scan_bitmap(bitmap[1], &ESTABLISHED_TIMINGS_II))
        .collect();
    if bitmap[2] & 0x80 != 0 {
        modes.push(MANUFACTURER_TIMING);
    }

    EstablishedTimings { bitmap, modes }
}

/// Decode one 2-byte standard timing entry
///
/// The 0x01 0x01 "unused" filler decodes like any other entry.
pub fn decode_standard_timing(resolution: u8, flags: u8) -> StandardTiming {
    let width = (u16::from(resolution) + 31) * 8;
    let aspect_ratio = AspectRatio::from_bits(flags >> 6);

    StandardTiming {
        width,
        height: aspect_ratio.height_for(width),
        aspect_ratio,
        refresh_hz: (flags & 0x3F) + 60,
    }
}

/// Decode all eight standard timing entries from the cursor
pub fn decode_standard_timings<B: Buf>(buf: &mut B) -> Vec<StandardTiming> {
    (0..STANDARD_TIMING_COUNT)
        .map(|_| {
            let resolution = buf.get_u8();
            decode_standard_timing(resolution, buf.get_u8())
        })
        .collect()
}
