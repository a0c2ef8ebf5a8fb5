//! # EDIDINFO - EDID decoding for display metadata
//!
//! A lightweight Rust library that turns the 128-byte EDID base block a
//! display reports into a structured, typed record.
//!
//! ## Features
//!
//! - **Vendor identity**: PNP manufacturer code, product, serial, date, version
//! - **Display parameters**: input type, size, gamma, DPMS and color type
//! - **Chromaticity** at full 10-bit precision
//! - **Established, standard and detailed timings**
//! - **Monitor name, serial string and range limits** descriptors
//! - **Lenient decoding** – bad checksums and headers are reported, not fatal
//! - **Text and JSON reports** for the decoded record
//! - **Parallel batch decoding** with the `parallel` feature
//!
//! Extension blocks (CEA-861, DisplayID, ...) are counted but not parsed.
//!
//! ## Quick Start
//!
//! ```rust
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = edidinfo::input::decode_hex_text(
//!         "00FFFFFFFFFFFF0010AC6BA0534A3730 1513010380342078EAEE91A3544C9926
//!          0F5054A54B00714F8180A940D100D140 010101010101283C80A070B023403020
//!          360006442100001A000000FF00433539 324D394239354A4A4C0A000000FC0044
//!          454C4C2055323431300A2020000000FD 00384C1E5111000A20202020202001A0",
//!     )?;
//!     let edid = edidinfo::parse_edid(&bytes)?;
//!     println!("{} {:?}", edid.identity.manufacturer_id, edid.monitor_name);
//!     assert!(edid.checksum_valid);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod decoder;
pub mod error;
pub mod input;
pub mod mappings;
pub mod report;

// Re-export main API for easy access
pub use api::{parse_edid, EdidRecord};
#[cfg(feature = "parallel")]
pub use api::parse_edid_batch;
pub use decoder::{
    checksum_valid, Chromaticity, Descriptor, DetailedTiming, DisplayParameters, Identity,
    RangeLimits, StandardTiming, VideoInput, EDID_BLOCK_LEN, EDID_HEADER,
};
pub use error::{EdidError, EdidResult};
pub use mappings::{AspectRatio, DisplayType, EstablishedTiming, StereoMode, SyncType};
pub use report::{render_text, DecodeReport, ReportConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a file (hex text or raw bytes) and decode it
///
/// # Example
///
/// ```no_run
/// let edid = edidinfo::parse_edid_file("/sys/class/drm/card0-HDMI-A-1/edid")?;
/// println!("{}", edid.identity.manufacturer_id);
/// # Ok::<(), edidinfo::EdidError>(())
/// ```
pub fn parse_edid_file<P: AsRef<std::path::Path>>(path: P) -> EdidResult<EdidRecord> {
    let bytes = input::load_edid_file(path)?;
    parse_edid(&bytes)
}

/// Get library information
///
/// # Example
///
/// ```
/// println!("Using edidinfo v{}", edidinfo::version());
/// ```
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(version(), VERSION);
    }

    #[test]
    fn test_parse_edid_file_too_short() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "00FFFFFFFFFFFF00").unwrap();
        let err = parse_edid_file(file.path()).unwrap_err();
        assert!(err.is_insufficient_data());
    }
}

/// Prelude module for convenient imports
///
/// # Example
///
/// ```
/// use edidinfo::prelude::*;
///
/// let record = parse_edid(&[0u8; 128])?;
/// assert!(!record.has_valid_header());
/// # Ok::<(), EdidError>(())
/// ```
pub mod prelude {
    pub use crate::api::{parse_edid, EdidRecord};
    pub use crate::error::{EdidError, EdidResult};
    pub use crate::mappings::{AspectRatio, DisplayType, StereoMode, SyncType};
    pub use crate::report::{render_text, ReportConfig};
    pub use crate::{parse_edid_file, version};
}
