//! 18-byte descriptor blocks (bytes 54-125)
//!
//! A block with a non-zero pixel clock is a detailed timing. Otherwise byte 3
//! selects the kind of display descriptor; only the product name (0xFC),
//! serial string (0xFF) and range limits (0xFD) are kept.

use bytes::Buf;
use serde::Serialize;

use super::{DESCRIPTOR_COUNT, DESCRIPTOR_LEN};
use crate::mappings::{StereoMode, SyncType};

const TAG_SERIAL: u8 = 0xFF;
const TAG_NAME: u8 = 0xFC;
const TAG_RANGE_LIMITS: u8 = 0xFD;

/// Detailed timing descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailedTiming {
    /// Pixel clock in kHz
    pub pixel_clock_khz: u32,
    /// Horizontal addressable pixels
    pub horizontal_active: u16,
    /// Horizontal blanking pixels
    pub horizontal_blanking: u16,
    /// Vertical addressable lines
    pub vertical_active: u16,
    /// Vertical blanking lines
    pub vertical_blanking: u16,
    /// Horizontal front porch in pixels
    pub horizontal_sync_offset: u16,
    /// Horizontal sync pulse width in pixels
    pub horizontal_sync_pulse_width: u16,
    /// Vertical front porch in lines
    pub vertical_sync_offset: u16,
    /// Vertical sync pulse width in lines
    pub vertical_sync_pulse_width: u16,
    /// Horizontal image size in mm
    pub horizontal_image_size_mm: u16,
    /// Vertical image size in mm
    pub vertical_image_size_mm: u16,
    /// Horizontal border pixels on each side
    pub horizontal_border: u8,
    /// Vertical border lines on each side
    pub vertical_border: u8,
    /// Interlaced signal
    pub interlaced: bool,
    /// Stereo mode
    pub stereo: StereoMode,
    /// Sync type, with polarities for digital separate sync
    pub sync: SyncType,
}

/// Display range limits descriptor (tag 0xFD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeLimits {
    /// Minimum vertical field rate in Hz
    pub min_vertical_hz: u8,
    /// Maximum vertical field rate in Hz
    pub max_vertical_hz: u8,
    /// Minimum horizontal line rate in kHz
    pub min_horizontal_khz: u8,
    /// Maximum horizontal line rate in kHz
    pub max_horizontal_khz: u8,
    /// Maximum pixel clock in MHz (stored in units of 10 MHz)
    pub max_pixel_clock_mhz: u16,
}

/// A descriptor block that carries data worth keeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Descriptor {
    /// Detailed timing
    DetailedTiming(DetailedTiming),
    /// Range limits
    RangeLimits(RangeLimits),
    /// Product name, newline stripped and trimmed
    MonitorName(String),
    /// Serial number string, untouched
    MonitorSerial(String),
}

/// Descriptor blocks gathered by kind, in block order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescriptorSet {
    /// Every detailed timing block
    pub detailed_timings: Vec<DetailedTiming>,
    /// Every range limits block
    pub range_limits: Vec<RangeLimits>,
    /// Last product name block
    pub monitor_name: Option<String>,
    /// Last serial string block
    pub monitor_serial: Option<String>,
}

impl DescriptorSet {
    fn push(&mut self, descriptor: Descriptor) {
        match descriptor {
            Descriptor::DetailedTiming(timing) => self.detailed_timings.push(timing),
            Descriptor::RangeLimits(limits) => self.range_limits.push(limits),
            Descriptor::MonitorName(name) => self.monitor_name = Some(name),
            Descriptor::MonitorSerial(serial) => self.monitor_serial = Some(serial),
        }
    }
}

/// Classify one block and decode the parts that apply to it
///
/// Returns `None` for display descriptors this crate does not keep.
pub fn classify_descriptor(block: &[u8; DESCRIPTOR_LEN]) -> Option<Descriptor> {
    let pixel_clock = u16::from_le_bytes([block[0], block[1]]);
    if pixel_clock != 0 {
        return Some(Descriptor::DetailedTiming(decode_detailed_timing(
            block,
            u32::from(pixel_clock) * 10,
        )));
    }

    match block[3] {
        TAG_SERIAL => Some(Descriptor::MonitorSerial(descriptor_text(block))),
        TAG_NAME => {
            let name = descriptor_text(block).replace('\n', "");
            Some(Descriptor::MonitorName(name.trim().to_string()))
        }
        TAG_RANGE_LIMITS => Some(Descriptor::RangeLimits(RangeLimits {
            min_vertical_hz: block[5],
            max_vertical_hz: block[6],
            min_horizontal_khz: block[7],
            max_horizontal_khz: block[8],
            max_pixel_clock_mhz: u16::from(block[9]) * 10,
        })),
        tag => {
            log::debug!("Skipping display descriptor with tag 0x{:02X}", tag);
            None
        }
    }
}

/// Decode all four descriptor blocks from the cursor
pub fn decode_descriptors<B: Buf>(buf: &mut B) -> DescriptorSet {
    let mut set = DescriptorSet::default();
    for slot in 0..DESCRIPTOR_COUNT {
        let mut block = [0u8; DESCRIPTOR_LEN];
        buf.copy_to_slice(&mut block);
        log::trace!("Descriptor {}: {:02X?}", slot + 1, block);

        if let Some(descriptor) = classify_descriptor(&block) {
            set.push(descriptor);
        }
    }
    set
}

/// Text payload of a display descriptor, bytes 5-17
fn descriptor_text(block: &[u8; DESCRIPTOR_LEN]) -> String {
    String::from_utf8_lossy(&block[5..]).into_owned()
}

/// Low byte plus the 4 bits of `high` selected by `mask`, shifted to bit 8
fn join_nibble(low: u8, high: u8, mask: u8, shift: u8) -> u16 {
    (u16::from((high & mask) >> shift) << 8) | u16::from(low)
}

fn decode_detailed_timing(block: &[u8; DESCRIPTOR_LEN], pixel_clock_khz: u32) -> DetailedTiming {
    let sync_high = block[11];
    let flags = block[17];

    DetailedTiming {
        pixel_clock_khz,
        horizontal_active: join_nibble(block[2], block[4], 0xF0, 4),
        horizontal_blanking: join_nibble(block[3], block[4], 0x0F, 0),
        vertical_active: join_nibble(block[5], block[7], 0xF0, 4),
        vertical_blanking: join_nibble(block[6], block[7], 0x0F, 0),
        horizontal_sync_offset: (u16::from(sync_high & 0xC0) << 2) | u16::from(block[8]),
        horizontal_sync_pulse_width: (u16::from(sync_high & 0x30) << 4) | u16::from(block[9]),
        vertical_sync_offset: (u16::from(sync_high & 0x0C) << 2) | u16::from(block[10] >> 4),
        vertical_sync_pulse_width: (u16::from(sync_high & 0x03) << 4) | u16::from(block[10] & 0x0F),
        horizontal_image_size_mm: join_nibble(block[12], block[14], 0xF0, 4),
        vertical_image_size_mm: join_nibble(block[13], block[14], 0x0F, 0),
        horizontal_border: block[15],
        vertical_border: block[16],
        interlaced: flags & 0x80 != 0,
        stereo: StereoMode::decode((flags >> 5) & 0x3, flags & 0x01 != 0),
        sync: SyncType::decode(flags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_descriptor(tag: u8, payload: &[u8]) -> [u8; DESCRIPTOR_LEN] {
        let mut block = [0u8; DESCRIPTOR_LEN];
        block[3] = tag;
        block[5..5 + payload.len()].copy_from_slice(payload);
        block
    }

    const DTD_1920X1200: [u8; DESCRIPTOR_LEN] = [
        0x28, 0x3C, 0x80, 0xA0, 0x70, 0xB0, 0x23, 0x40, 0x30, 0x20, 0x36, 0x00, 0x06, 0x44, 0x21,
        0x00, 0x00, 0x1A,
    ];

    #[test]
    fn test_detailed_timing() {
        let Some(Descriptor::DetailedTiming(dtd)) = classify_descriptor(&DTD_1920X1200) else {
            panic!("expected a detailed timing");
        };

        assert_eq!(dtd.pixel_clock_khz, 154_000);
        assert_eq!((dtd.horizontal_active, dtd.horizontal_blanking), (1920, 160));
        assert_eq!((dtd.vertical_active, dtd.vertical_blanking), (1200, 35));
        assert_eq!((dtd.horizontal_sync_offset, dtd.horizontal_sync_pulse_width), (48, 32));
        assert_eq!((dtd.vertical_sync_offset, dtd.vertical_sync_pulse_width), (3, 6));
        assert_eq!((dtd.horizontal_image_size_mm, dtd.vertical_image_size_mm), (518, 324));
        assert_eq!((dtd.horizontal_border, dtd.vertical_border), (0, 0));
        assert!(!dtd.interlaced);
        assert_eq!(dtd.stereo, StereoMode::None);
        assert_eq!(
            dtd.sync,
            SyncType::DigitalSeparate { vsync_positive: false, hsync_positive: true }
        );
    }

    #[test]
    fn test_detailed_timing_high_bits() {
        let mut block = [0u8; DESCRIPTOR_LEN];
        block[0] = 0x01;
        block[4] = 0xAB;
        block[7] = 0xCD;
        block[11] = 0b1110_0100;
        block[14] = 0x98;
        block[17] = 0xE0;
        let Some(Descriptor::DetailedTiming(dtd)) = classify_descriptor(&block) else {
            panic!("expected a detailed timing");
        };

        assert_eq!(dtd.pixel_clock_khz, 10);
        assert_eq!(dtd.horizontal_active, 0xA00);
        assert_eq!(dtd.horizontal_blanking, 0xB00);
        assert_eq!(dtd.vertical_active, 0xC00);
        assert_eq!(dtd.vertical_blanking, 0xD00);
        assert_eq!(dtd.horizontal_sync_offset, 0x300);
        assert_eq!(dtd.horizontal_sync_pulse_width, 0x200);
        assert_eq!(dtd.vertical_sync_offset, 0x10);
        assert_eq!(dtd.vertical_sync_pulse_width, 0x00);
        assert_eq!(dtd.horizontal_image_size_mm, 0x900);
        assert_eq!(dtd.vertical_image_size_mm, 0x800);
        assert!(dtd.interlaced);
        assert_eq!(dtd.stereo, StereoMode::FourWayInterleaved);
        assert_eq!(dtd.sync, SyncType::AnalogComposite);
    }

    #[test]
    fn test_monitor_name_trimmed() {
        let block = display_descriptor(TAG_NAME, b"ACME Display\n");
        assert_eq!(
            classify_descriptor(&block),
            Some(Descriptor::MonitorName("ACME Display".to_string()))
        );

        let block = display_descriptor(TAG_NAME, b"DELL U2410\n  ");
        assert_eq!(
            classify_descriptor(&block),
            Some(Descriptor::MonitorName("DELL U2410".to_string()))
        );
    }

    #[test]
    fn test_monitor_serial_untouched() {
        let block = display_descriptor(TAG_SERIAL, b"C592M9B95JJL\n");
        assert_eq!(
            classify_descriptor(&block),
            Some(Descriptor::MonitorSerial("C592M9B95JJL\n".to_string()))
        );
    }

    #[test]
    fn test_range_limits() {
        let block = display_descriptor(TAG_RANGE_LIMITS, &[50, 70, 30, 160, 100]);
        assert_eq!(
            classify_descriptor(&block),
            Some(Descriptor::RangeLimits(RangeLimits {
                min_vertical_hz: 50,
                max_vertical_hz: 70,
                min_horizontal_khz: 30,
                max_horizontal_khz: 160,
                max_pixel_clock_mhz: 1000,
            }))
        );
    }

    #[test]
    fn test_unknown_tags_dropped() {
        for tag in [0xFE, 0xFB, 0xFA, 0x10, 0x00] {
            assert_eq!(classify_descriptor(&display_descriptor(tag, b"whatever")), None);
        }
    }

    #[test]
    fn test_decode_descriptors_collects_by_kind() {
        let mut bytes = Vec::with_capacity(DESCRIPTOR_LEN * DESCRIPTOR_COUNT);
        bytes.extend_from_slice(&display_descriptor(TAG_RANGE_LIMITS, &[56, 76, 30, 81, 17]));
        bytes.extend_from_slice(&DTD_1920X1200);
        bytes.extend_from_slice(&display_descriptor(0xFE, b"dummy"));
        bytes.extend_from_slice(&display_descriptor(TAG_RANGE_LIMITS, &[48, 61, 15, 90, 25]));

        let mut buf = &bytes[..];
        let set = decode_descriptors(&mut buf);

        assert!(buf.is_empty());
        assert_eq!(set.detailed_timings.len(), 1);
        assert_eq!(set.range_limits.len(), 2);
        assert_eq!(set.range_limits[0].max_pixel_clock_mhz, 170);
        assert_eq!(set.range_limits[1].max_pixel_clock_mhz, 250);
        assert_eq!(set.monitor_name, None);
        assert_eq!(set.monitor_serial, None);
    }
}
