//! Simple example decoding an EDID file given on the command line
//!
//! ```text
//! cargo run --example simple_decode -- /sys/class/drm/card0-HDMI-A-1/edid
//! ```

use edidinfo;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🖥  edidinfo EDID Decoding Example");
    println!("==================================\n");

    let Some(path) = std::env::args().nth(1) else {
        println!("Usage: simple_decode <edid file>");
        return Ok(());
    };

    match edidinfo::parse_edid_file(&path) {
        Ok(edid) => {
            if !edid.checksum_valid {
                println!("⚠️  Checksum mismatch, values may be garbage");
            }
            println!("✅ Display decoded!");
            println!("  Manufacturer: {}", edid.identity.manufacturer_id);
            println!("  Product Code: {:04X}", edid.identity.product_code);

            if let Some(name) = &edid.monitor_name {
                println!("  Name: {}", name);
            }

            println!(
                "  Made: week {} of {}",
                edid.identity.week_of_manufacture, edid.identity.year_of_manufacture
            );

            if let Some(dtd) = edid.preferred_timing() {
                println!("  Native Mode: {}x{}", dtd.horizontal_active, dtd.vertical_active);
            }

            println!("  Standard Timings: {}", edid.standard_timings.len());
        }
        Err(e) if e.is_insufficient_data() => {
            println!("❌ Not a full EDID block: {}", e);
        }
        Err(e) => {
            println!("❌ Error: {}", e);
        }
    }

    Ok(())
}
