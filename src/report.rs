//! Human readable and JSON reports for decoded EDID records

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::EdidRecord;
use crate::decoder::VideoInput;
use crate::error::EdidResult;
use crate::mappings::SyncType;

/// Report rendering options
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Prefix the report with a hex dump of the input
    pub hex_dump: bool,
    /// Decimal places for chromaticity coordinates
    pub chroma_precision: usize,
    /// Width of the label column, labels are padded with '-'
    ///
    /// Zero disables padding.
    pub label_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            hex_dump: false,
            chroma_precision: 3,
            label_width: 34,
        }
    }
}

impl ReportConfig {
    /// Narrow labels, no dump
    pub fn compact() -> Self {
        Self {
            hex_dump: false,
            chroma_precision: 3,
            label_width: 0,
        }
    }

    /// Hex dump and full precision coordinates
    pub fn detailed() -> Self {
        Self {
            hex_dump: true,
            chroma_precision: 4,
            label_width: 34,
        }
    }
}

/// JSON envelope written by `edidinfo-bin show --format json`
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport<'a> {
    /// Library version that produced the report
    pub tool_version: &'static str,
    /// When the record was decoded
    pub decoded_at: DateTime<Utc>,
    /// Where the bytes came from
    pub source: String,
    /// Copy of the checksum flag for quick filtering
    pub checksum_valid: bool,
    /// The decoded record
    pub edid: &'a EdidRecord,
}

impl<'a> DecodeReport<'a> {
    /// Wrap a record, stamping it with the current time
    pub fn new(source: impl Into<String>, edid: &'a EdidRecord) -> Self {
        Self {
            tool_version: crate::VERSION,
            decoded_at: Utc::now(),
            source: source.into(),
            checksum_valid: edid.checksum_valid,
            edid,
        }
    }

    /// Pretty printed JSON
    pub fn to_json(&self) -> EdidResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Dump bytes as hex, 16 per row
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3 + bytes.len() / 16);
    for row in bytes.chunks(16) {
        for b in row {
            let _ = write!(out, "{:02X} ", b);
        }
        out.push('\n');
    }
    out
}

struct Section<'c> {
    out: String,
    config: &'c ReportConfig,
}

impl<'c> Section<'c> {
    fn field(&mut self, indent: &str, label: &str, value: impl std::fmt::Display) {
        let label = format!("{}{}:", indent, label);
        let _ = writeln!(self.out, "{:-<width$} {}", label, value, width = self.config.label_width);
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{}", text);
    }
}

const INDENT: &str = "    ";

/// Render a record as a sectioned text report
///
/// `raw` is only used for the optional hex dump.
pub fn render_text(record: &EdidRecord, raw: Option<&[u8]>, config: &ReportConfig) -> String {
    let mut s = Section { out: String::new(), config };

    if config.hex_dump {
        if let Some(bytes) = raw {
            s.line("EDID dump");
            s.out.push_str(&hex_dump(bytes));
            s.line("");
        }
    }

    let id = &record.identity;
    s.field("", "Valid Checksum", record.checksum_valid);
    s.field("", "Header", id.header_hex());
    s.field("", "Monitor Name", record.monitor_name.as_deref().unwrap_or(""));
    s.field("", "Monitor Serial Number", record.monitor_serial.as_deref().unwrap_or(""));
    s.field("", "Manufacturer Name", &id.manufacturer_id);
    s.field("", "Product Code", id.product_code);
    s.field("", "Serial Number", id.serial_number);
    s.field("", "Week of Manufacture", id.week_of_manufacture);
    s.field("", "Year of Manufacture", id.year_of_manufacture);
    s.field("", "EDID Version", id.edid_version);
    s.field("", "EDID Revision", id.edid_revision);

    let display = &record.display;
    s.line("\nBasic display parameters:");
    match display.video_input {
        VideoInput::Digital { vesa_dfp_compatible } => {
            s.field(INDENT, "Video Input Definition", "Digital");
            s.field(INDENT, "VESA DFP Compatibility", vesa_dfp_compatible);
        }
        VideoInput::Analog { composite_sync, sync_on_green } => {
            s.field(INDENT, "Video Input Definition", "Analog");
            s.field(INDENT, "Composite Sync Supported", composite_sync);
            s.field(INDENT, "Sync on Green Supported", sync_on_green);
        }
    }
    s.field(INDENT, "Max Horizontal Image Size", format!("{} cm", display.max_horizontal_size_cm));
    s.field(INDENT, "Max Vertical Image Size", format!("{} cm", display.max_vertical_size_cm));
    s.field(INDENT, "Display Gamma", format!("{:.2}", display.gamma));

    s.line("\nPower Management:");
    s.field(INDENT, "DPMS Standby Supported", display.dpms.standby);
    s.field(INDENT, "DPMS Suspend Supported", display.dpms.suspend);
    s.field(INDENT, "DPMS Active Off Supported", display.dpms.active_off);
    s.field(INDENT, "Display Type", display.display_type);

    s.line("\nChroma Information:");
    for (label, value) in record.chromaticity.labeled() {
        s.field(INDENT, label, format!("{:.*}", config.chroma_precision, value));
    }

    s.line("\nTimings Bitmaps:");
    for mode in &record.established_timings {
        s.line(format_args!("{}{}", INDENT, mode));
    }

    s.line("\nStandard Timing Identification:");
    for timing in &record.standard_timings {
        s.line(format_args!("{}{}", INDENT, timing));
    }

    for (index, dtd) in record.detailed_timings.iter().enumerate() {
        s.line(format_args!("\nDetailed Timing/Descriptor block {}", index + 1));
        s.field(INDENT, "Pixel Clock", format!("{} kHz", dtd.pixel_clock_khz));
        s.field(INDENT, "Horizontal Active", format!("{} pixels", dtd.horizontal_active));
        s.field(INDENT, "Horizontal Blanking", format!("{} pixels", dtd.horizontal_blanking));
        s.field(INDENT, "Vertical Active", format!("{} pixels", dtd.vertical_active));
        s.field(INDENT, "Vertical Blanking", format!("{} pixels", dtd.vertical_blanking));
        s.field(INDENT, "Horizontal Sync Offset", format!("{} pixels", dtd.horizontal_sync_offset));
        s.field(
            INDENT,
            "Horizontal Sync Pulse Width",
            format!("{} pixels", dtd.horizontal_sync_pulse_width),
        );
        s.field(INDENT, "Vertical Sync Offset", format!("{} lines", dtd.vertical_sync_offset));
        s.field(
            INDENT,
            "Vertical Sync Pulse Width",
            format!("{} lines", dtd.vertical_sync_pulse_width),
        );
        s.field(INDENT, "Horizontal Image Size", format!("{} mm", dtd.horizontal_image_size_mm));
        s.field(INDENT, "Vertical Image Size", format!("{} mm", dtd.vertical_image_size_mm));
        s.field(INDENT, "Horizontal Border", format!("{} px each side", dtd.horizontal_border));
        s.field(INDENT, "Vertical Border", format!("{} px each side", dtd.vertical_border));
        s.field(INDENT, "Interlaced", dtd.interlaced);
        s.field(INDENT, "Stereo Mode", dtd.stereo);
        s.field(INDENT, "Sync Type", dtd.sync);
        if let SyncType::DigitalSeparate { vsync_positive, hsync_positive } = dtd.sync {
            s.field(INDENT, "Vertical Sync Polarity", vsync_positive);
            s.field(INDENT, "Horizontal Sync Polarity", hsync_positive);
        }
    }

    for (index, limits) in record.range_limits.iter().enumerate() {
        s.line(format_args!("\nMonitor range limits descriptor block {}", index + 1));
        s.field(INDENT, "Minimum Vertical Field Rate", format!("{} Hz", limits.min_vertical_hz));
        s.field(INDENT, "Maximum Vertical Field Rate", format!("{} Hz", limits.max_vertical_hz));
        s.field(
            INDENT,
            "Minimum Horizontal Line Rate",
            format!("{} kHz", limits.min_horizontal_khz),
        );
        s.field(
            INDENT,
            "Maximum Horizontal Line Rate",
            format!("{} kHz", limits.max_horizontal_khz),
        );
        s.field(INDENT, "Maximum Pixel Clock Rate", format!("{} MHz", limits.max_pixel_clock_mhz));
    }

    s.line("");
    s.field("", "Total Number of Extensions", format!("{} (not parsed)", record.extension_count));

    s.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse_edid;
    use rstest::rstest;

    fn analog_block() -> Vec<u8> {
        let mut block = vec![0u8; 128];
        block[..8].copy_from_slice(&crate::EDID_HEADER);
        block[20] = 0x04; // analog, composite sync
        block
    }

    /// Analog block with a 1920x1200 detailed timing in the first slot
    fn block_with_timing(flags: u8) -> Vec<u8> {
        let mut block = analog_block();
        block[54..72].copy_from_slice(&[
            0x28, 0x3C, 0x80, 0xA0, 0x70, 0xB0, 0x23, 0x40, 0x30, 0x20, 0x36, 0x00, 0x06, 0x44,
            0x21, 0x00, 0x00, flags,
        ]);
        block
    }

    #[rstest]
    #[case(0x00, "Analog composite")]
    #[case(0x08, "Bipolar analog composite")]
    #[case(0x10, "Digital composite (on HSync)")]
    #[case(0x16, "Digital composite (on HSync)")]
    fn test_no_polarity_without_separate_sync(#[case] flags: u8, #[case] label: &str) {
        let record = parse_edid(&block_with_timing(flags)).unwrap();
        let text = render_text(&record, None, &ReportConfig::compact());

        let expected = format!("{}Sync Type: {}", INDENT, label);
        assert!(text.lines().any(|line| line == expected), "missing {:?} in\n{}", expected, text);
        assert!(!text.contains("Sync Polarity"), "polarity printed for flags {:#04x}", flags);
    }

    #[test]
    fn test_polarity_lines_for_separate_sync() {
        let record = parse_edid(&block_with_timing(0x1C)).unwrap();
        let text = render_text(&record, None, &ReportConfig::compact());

        assert!(text.contains("    Sync Type: Digital separate\n"));
        assert!(text.contains("    Vertical Sync Polarity: true\n"));
        assert!(text.contains("    Horizontal Sync Polarity: false\n"));
    }

    #[test]
    fn test_hex_dump_rows() {
        let dump = hex_dump(&(0u8..20).collect::<Vec<_>>());
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F ");
        assert_eq!(rows[1], "10 11 12 13 ");
    }

    #[test]
    fn test_analog_fields_only_for_analog() {
        let record = parse_edid(&analog_block()).unwrap();
        let text = render_text(&record, None, &ReportConfig::compact());

        assert!(text.contains("Video Input Definition: Analog"));
        assert!(text.contains("Composite Sync Supported: true"));
        assert!(!text.contains("VESA DFP"));
        assert!(!text.contains("Detailed Timing/Descriptor block"));
        assert!(text.contains("Total Number of Extensions: 0 (not parsed)"));
    }

    #[test]
    fn test_label_padding() {
        let record = parse_edid(&analog_block()).unwrap();
        let text = render_text(&record, None, &ReportConfig::default());
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("Valid Checksum:----"));
        assert!(first.ends_with(" false"));
    }

    #[test]
    fn test_hex_dump_only_when_configured() {
        let block = analog_block();
        let record = parse_edid(&block).unwrap();

        let plain = render_text(&record, Some(&block), &ReportConfig::default());
        assert!(!plain.contains("EDID dump"));

        let detailed = render_text(&record, Some(&block), &ReportConfig::detailed());
        let first_row = "00 FF FF FF FF FF FF 00 00 00 00 00 00 00 00 00 \n";
        assert!(detailed.starts_with(&format!("EDID dump\n{}", first_row)));
    }

    #[test]
    fn test_json_report() {
        let record = parse_edid(&analog_block()).unwrap();
        let json = DecodeReport::new("unit-test", &record).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "unit-test");
        assert_eq!(value["checksum_valid"], false);
        assert_eq!(value["edid"]["identity"]["year_of_manufacture"], 1990);
        assert_eq!(value["edid"]["standard_timings"].as_array().unwrap().len(), 8);
    }
}
