//! Lookup tables and enumerations used to name decoded EDID fields

pub mod established;

// Re-exports for convenient usage
pub use established::{
    EstablishedTiming,
    ESTABLISHED_TIMINGS_I,
    ESTABLISHED_TIMINGS_II,
    MANUFACTURER_TIMING,
};

use serde::Serialize;

/// Color type of the display, from bits 4-3 of the feature byte
///
/// The same two bits mean different things for analog and digital inputs,
/// so the variant can only be picked once the input type is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayType {
    /// Analog: monochrome or grayscale
    Monochrome,
    /// Analog: RGB color
    RgbColor,
    /// Analog: non-RGB color
    NonRgbColor,
    /// Analog: undefined
    Undefined,
    /// Digital: RGB 4:4:4
    Rgb444,
    /// Digital: RGB 4:4:4 + YCrCb 4:4:4
    Rgb444YCrCb444,
    /// Digital: RGB 4:4:4 + YCrCb 4:2:2
    Rgb444YCrCb422,
    /// Digital: RGB 4:4:4 + YCrCb 4:4:4 + YCrCb 4:2:2
    Rgb444YCrCb444YCrCb422,
}

impl DisplayType {
    /// Resolve the two display type bits against an already decoded input type
    pub fn decode(is_digital: bool, bits: u8) -> Self {
        match (is_digital, bits & 0x3) {
            (true, 0) => DisplayType::Rgb444,
            (true, 1) => DisplayType::Rgb444YCrCb444,
            (true, 2) => DisplayType::Rgb444YCrCb422,
            (true, _) => DisplayType::Rgb444YCrCb444YCrCb422,
            (false, 0) => DisplayType::Monochrome,
            (false, 1) => DisplayType::RgbColor,
            (false, 2) => DisplayType::NonRgbColor,
            (false, _) => DisplayType::Undefined,
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            DisplayType::Monochrome => "Monochrome/Grayscale",
            DisplayType::RgbColor => "RGB color",
            DisplayType::NonRgbColor => "Non-RGB color",
            DisplayType::Undefined => "Undefined",
            DisplayType::Rgb444 => "RGB 4:4:4",
            DisplayType::Rgb444YCrCb444 => "RGB 4:4:4 + YCrCb 4:4:4",
            DisplayType::Rgb444YCrCb422 => "RGB 4:4:4 + YCrCb 4:2:2",
            DisplayType::Rgb444YCrCb444YCrCb422 => "RGB 4:4:4 + YCrCb 4:4:4 + YCrCb 4:2:2",
        }
    }
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Aspect ratio of a standard timing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectRatio {
    /// 16:10
    Ratio16x10,
    /// 4:3
    Ratio4x3,
    /// 5:4
    Ratio5x4,
    /// 16:9
    Ratio16x9,
}

/// Aspect ratios indexed by the top two bits of a standard timing's second byte
pub const ASPECT_RATIOS: [AspectRatio; 4] = [
    AspectRatio::Ratio16x10,
    AspectRatio::Ratio4x3,
    AspectRatio::Ratio5x4,
    AspectRatio::Ratio16x9,
];

impl AspectRatio {
    /// Look up the ratio selected by a 2-bit code
    pub fn from_bits(bits: u8) -> Self {
        ASPECT_RATIOS[(bits & 0x3) as usize]
    }

    /// Width and height terms of the ratio, e.g. `(16, 10)`
    pub fn terms(&self) -> (u16, u16) {
        match self {
            AspectRatio::Ratio16x10 => (16, 10),
            AspectRatio::Ratio4x3 => (4, 3),
            AspectRatio::Ratio5x4 => (5, 4),
            AspectRatio::Ratio16x9 => (16, 9),
        }
    }

    /// Height matching `width` under this ratio, truncated
    pub fn height_for(&self, width: u16) -> u16 {
        let (w, h) = self.terms();
        // widths top out at 2288, so the product stays inside u32
        (u32::from(width) * u32::from(h) / u32::from(w)) as u16
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.terms();
        write!(f, "{}:{}", w, h)
    }
}

/// Stereo viewing support of a detailed timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StereoMode {
    /// Normal display, no stereo
    None,
    /// Field sequential stereo, right image when stereo sync = 1
    FieldSequentialRight,
    /// Field sequential stereo, left image when stereo sync = 1
    ///
    /// Reported as "Field sequential, sync=1 during left", not the terse
    /// "similar, sync=1 during left" other decoders print after the right-eye
    /// line.
    FieldSequentialLeft,
    /// 2-way interleaved stereo, right image on even lines
    InterleavedRightEven,
    /// 2-way interleaved stereo, left image on even lines
    InterleavedLeftEven,
    /// 4-way interleaved stereo
    FourWayInterleaved,
    /// Side-by-side interleaved stereo
    SideBySide,
}

impl StereoMode {
    /// Combine the 2-bit stereo field with the low flag bit
    ///
    /// A zero stereo field is "no stereo" whatever the low bit says.
    pub fn decode(stereo_bits: u8, low_bit: bool) -> Self {
        match (stereo_bits & 0x3, low_bit) {
            (0, _) => StereoMode::None,
            (1, true) => StereoMode::InterleavedRightEven,
            (2, true) => StereoMode::InterleavedLeftEven,
            (_, true) => StereoMode::SideBySide,
            (1, false) => StereoMode::FieldSequentialRight,
            (2, false) => StereoMode::FieldSequentialLeft,
            (_, false) => StereoMode::FourWayInterleaved,
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            StereoMode::None => "No Stereo",
            StereoMode::FieldSequentialRight => "Field sequential, sync=1 during right",
            StereoMode::FieldSequentialLeft => "Field sequential, sync=1 during left",
            StereoMode::InterleavedRightEven => {
                "2-way interleaved stereo - Right image on even lines"
            }
            StereoMode::InterleavedLeftEven => {
                "2-way interleaved stereo - Left image on even lines"
            }
            StereoMode::FourWayInterleaved => "4-way interleaved stereo",
            StereoMode::SideBySide => "2-way interleaved stereo - side-by-side",
        }
    }
}

impl std::fmt::Display for StereoMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sync signal type of a detailed timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyncType {
    /// Analog composite sync
    AnalogComposite,
    /// Bipolar analog composite sync
    BipolarAnalogComposite,
    /// Digital composite sync, carried on HSync
    DigitalComposite,
    /// Digital separate sync, the only type that reports polarities
    DigitalSeparate {
        /// Vertical sync is positive
        vsync_positive: bool,
        /// Horizontal sync is positive
        hsync_positive: bool,
    },
}

impl SyncType {
    /// Decode bits 4-1 of the detailed timing flags byte
    pub fn decode(flags: u8) -> Self {
        match (flags >> 3) & 0x3 {
            0 => SyncType::AnalogComposite,
            1 => SyncType::BipolarAnalogComposite,
            2 => SyncType::DigitalComposite,
            _ => SyncType::DigitalSeparate {
                vsync_positive: flags & 0x04 != 0,
                hsync_positive: flags & 0x02 != 0,
            },
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            SyncType::AnalogComposite => "Analog composite",
            SyncType::BipolarAnalogComposite => "Bipolar analog composite",
            SyncType::DigitalComposite => "Digital composite (on HSync)",
            SyncType::DigitalSeparate { .. } => "Digital separate",
        }
    }
}

impl std::fmt::Display for SyncType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
