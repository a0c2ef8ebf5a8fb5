//! Basic display parameters and features (bytes 20-24)

use bytes::Buf;
use serde::Serialize;

use crate::mappings::DisplayType;

/// Video input definition, byte 20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VideoInput {
    /// Digital input
    Digital {
        /// VESA DFP 1.x compatible
        vesa_dfp_compatible: bool,
    },
    /// Analog input
    Analog {
        /// Composite sync on HSync supported
        composite_sync: bool,
        /// Sync on green supported
        sync_on_green: bool,
    },
}

impl VideoInput {
    /// Decode the video input definition byte
    pub fn decode(byte: u8) -> Self {
        if byte & 0x80 != 0 {
            VideoInput::Digital {
                vesa_dfp_compatible: byte & 0x01 != 0,
            }
        } else {
            VideoInput::Analog {
                composite_sync: byte & 0x04 != 0,
                sync_on_green: byte & 0x02 != 0,
            }
        }
    }

    /// `true` for digital inputs
    pub fn is_digital(&self) -> bool {
        matches!(self, VideoInput::Digital { .. })
    }
}

/// DPMS support flags from the feature byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PowerManagement {
    /// DPMS standby
    pub standby: bool,
    /// DPMS suspend
    pub suspend: bool,
    /// DPMS active-off
    pub active_off: bool,
}

/// Basic display parameters section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayParameters {
    /// Input signal type and its type specific flags
    pub video_input: VideoInput,
    /// Maximum horizontal image size in cm
    pub max_horizontal_size_cm: u8,
    /// Maximum vertical image size in cm
    pub max_vertical_size_cm: u8,
    /// Display gamma, 1.00 to 3.55
    pub gamma: f32,
    /// Power management support
    pub dpms: PowerManagement,
    /// Color type, interpreted against `video_input`
    pub display_type: DisplayType,
}

/// Gamma stored as `(gamma * 100) - 100`
pub fn gamma_from_byte(byte: u8) -> f32 {
    f32::from(byte) / 100.0 + 1.0
}

/// Decode bytes 20-24 from the cursor
pub fn decode_display_parameters<B: Buf>(buf: &mut B) -> DisplayParameters {
    let video_input = VideoInput::decode(buf.get_u8());
    let max_horizontal_size_cm = buf.get_u8();
    let max_vertical_size_cm = buf.get_u8();
    let gamma = gamma_from_byte(buf.get_u8());

    let features = buf.get_u8();
    let dpms = PowerManagement {
        standby: features & 0x80 != 0,
        suspend: features & 0x40 != 0,
        active_off: features & 0x20 != 0,
    };
    // bits 4-3 only mean something once the input type is known
    let display_type = DisplayType::decode(video_input.is_digital(), (features >> 3) & 0x3);

    DisplayParameters {
        video_input,
        max_horizontal_size_cm,
        max_vertical_size_cm,
        gamma,
        dpms,
        display_type,
    }
}
