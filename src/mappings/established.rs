//! Established timing tables
//!
//! Bytes 35 and 36 of the base block are bitmaps over the two tables below,
//! most significant bit first. Byte 37 only defines its top bit, the Apple
//! Macintosh II mode; the rest of that byte is manufacturer reserved.

use serde::Serialize;

/// One named established timing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstablishedTiming {
    /// Horizontal resolution in pixels
    pub width: u16,
    /// Vertical resolution in lines
    pub height: u16,
    /// Refresh rate in Hz
    pub refresh_hz: u8,
    /// Interlaced mode
    pub interlaced: bool,
    /// Display name as printed in reports
    pub name: &'static str,
}

impl std::fmt::Display for EstablishedTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Modes for byte 35, bit 7 first
#[rustfmt::skip]
pub const ESTABLISHED_TIMINGS_I: [EstablishedTiming; 8] = [
    EstablishedTiming { width: 720,  height: 400, refresh_hz: 70, interlaced: false, name: "720×400 @ 70 Hz" },
    EstablishedTiming { width: 720,  height: 400, refresh_hz: 88, interlaced: false, name: "720×400 @ 88 Hz" },
    EstablishedTiming { width: 640,  height: 480, refresh_hz: 60, interlaced: false, name: "640×480 @ 60 Hz" },
    EstablishedTiming { width: 640,  height: 480, refresh_hz: 67, interlaced: false, name: "640×480 @ 67 Hz" },
    EstablishedTiming { width: 640,  height: 480, refresh_hz: 72, interlaced: false, name: "640×480 @ 72 Hz" },
    EstablishedTiming { width: 640,  height: 480, refresh_hz: 75, interlaced: false, name: "640×480 @ 75 Hz" },
    EstablishedTiming { width: 800,  height: 600, refresh_hz: 56, interlaced: false, name: "800×600 @ 56 Hz" },
    EstablishedTiming { width: 800,  height: 600, refresh_hz: 60, interlaced: false, name: "800×600 @ 60 Hz" },
];

/// Modes for byte 36, bit 7 first
#[rustfmt::skip]
pub const ESTABLISHED_TIMINGS_II: [EstablishedTiming; 8] = [
    EstablishedTiming { width: 800,  height: 600,  refresh_hz: 72, interlaced: false, name: "800×600 @ 72 Hz" },
    EstablishedTiming { width: 800,  height: 600,  refresh_hz: 75, interlaced: false, name: "800×600 @ 75 Hz" },
    EstablishedTiming { width: 832,  height: 624,  refresh_hz: 75, interlaced: false, name: "832×624 @ 75 Hz" },
    EstablishedTiming { width: 1024, height: 768,  refresh_hz: 87, interlaced: true,  name: "1024×768 @ 87 Hz, interlaced (1024×768i)" },
    EstablishedTiming { width: 1024, height: 768,  refresh_hz: 60, interlaced: false, name: "1024×768 @ 60 Hz" },
    EstablishedTiming { width: 1024, height: 768,  refresh_hz: 72, interlaced: false, name: "1024×768 @ 72 Hz" },
    EstablishedTiming { width: 1024, height: 768,  refresh_hz: 75, interlaced: false, name: "1024×768 @ 75 Hz" },
    EstablishedTiming { width: 1280, height: 1024, refresh_hz: 75, interlaced: false, name: "1280×1024 @ 75 Hz" },
];

/// Mode for bit 7 of byte 37
pub const MANUFACTURER_TIMING: EstablishedTiming = EstablishedTiming {
    width: 1152,
    height: 870,
    refresh_hz: 75,
    interlaced: false,
    name: "1152x870 @ 75 Hz (Apple Macintosh II)",
};

/// Collect the modes whose bits are set, in table order
pub fn scan_bitmap(
    bitmap: u8,
    table: &[EstablishedTiming; 8],
) -> impl Iterator<Item = EstablishedTiming> + '_ {
    table
        .iter()
        .enumerate()
        .filter(move |(bit, _)| bitmap & (0x80 >> bit) != 0)
        .map(|(_, timing)| *timing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_bitmap_msb_first() {
        let names: Vec<_> = scan_bitmap(0x81, &ESTABLISHED_TIMINGS_I).map(|t| t.name).collect();
        assert_eq!(names, vec!["720×400 @ 70 Hz", "800×600 @ 60 Hz"]);
    }

    #[test]
    fn test_scan_bitmap_empty() {
        assert_eq!(scan_bitmap(0, &ESTABLISHED_TIMINGS_II).count(), 0);
        assert_eq!(scan_bitmap(0xFF, &ESTABLISHED_TIMINGS_II).count(), 8);
    }

    #[test]
    fn test_only_interlaced_entry() {
        let interlaced: Vec<_> = ESTABLISHED_TIMINGS_I
            .iter()
            .chain(ESTABLISHED_TIMINGS_II.iter())
            .filter(|t| t.interlaced)
            .collect();
        assert_eq!(interlaced.len(), 1);
        assert_eq!(interlaced[0].refresh_hz, 87);
    }
}
