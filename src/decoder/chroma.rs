//! Chromaticity coordinates (bytes 25-34)

use bytes::Buf;
use serde::Serialize;

/// CIE x,y coordinates of the color primaries and white point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chromaticity {
    /// Red x
    pub red_x: f64,
    /// Red y
    pub red_y: f64,
    /// Green x
    pub green_x: f64,
    /// Green y
    pub green_y: f64,
    /// Blue x
    pub blue_x: f64,
    /// Blue y
    pub blue_y: f64,
    /// White point x
    pub white_x: f64,
    /// White point y
    pub white_y: f64,
}

/// Where each coordinate keeps its two low bits: (LSB byte index, shift)
///
/// Order matches the eight MSB bytes: red x/y, green x/y, blue x/y, white x/y.
const LOW_BITS: [(usize, u8); 8] = [
    (0, 6),
    (0, 4),
    (0, 2),
    (0, 0),
    (1, 6),
    (1, 4),
    (1, 2),
    (1, 0),
];

impl Chromaticity {
    /// Build from the eight 10-bit numerators
    pub fn from_raw(raw: [u16; 8]) -> Self {
        let v = raw.map(|n| f64::from(n & 0x3FF) / 1024.0);
        Self {
            red_x: v[0],
            red_y: v[1],
            green_x: v[2],
            green_y: v[3],
            blue_x: v[4],
            blue_y: v[5],
            white_x: v[6],
            white_y: v[7],
        }
    }

    /// Labeled coordinates in storage order
    pub fn labeled(&self) -> [(&'static str, f64); 8] {
        [
            ("Red X", self.red_x),
            ("Red Y", self.red_y),
            ("Green X", self.green_x),
            ("Green Y", self.green_y),
            ("Blue X", self.blue_x),
            ("Blue Y", self.blue_y),
            ("White X", self.white_x),
            ("White Y", self.white_y),
        ]
    }
}

/// Decode bytes 25-34 from the cursor
pub fn decode_chromaticity<B: Buf>(buf: &mut B) -> Chromaticity {
    let mut lsb = [0u8; 2];
    buf.copy_to_slice(&mut lsb);
    let mut msb = [0u8; 8];
    buf.copy_to_slice(&mut msb);

    let raw = std::array::from_fn(|i| {
        let (src, shift) = LOW_BITS[i];
        (u16::from(msb[i]) << 2) | u16::from((lsb[src] >> shift) & 0x3)
    });

    Chromaticity::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_chromaticity() {
        let bytes: [u8; 10] = [0xEE, 0x91, 0xA3, 0x54, 0x4C, 0x99, 0x26, 0x0F, 0x50, 0x54];
        let c = decode_chromaticity(&mut &bytes[..]);

        assert_eq!(c.red_x, 655.0 / 1024.0);
        assert_eq!(c.red_y, 338.0 / 1024.0);
        assert_eq!(c.green_x, 307.0 / 1024.0);
        assert_eq!(c.green_y, 614.0 / 1024.0);
        assert_eq!(c.blue_x, 154.0 / 1024.0);
        assert_eq!(c.blue_y, 61.0 / 1024.0);
        assert_eq!(c.white_x, 320.0 / 1024.0);
        assert_eq!(c.white_y, 337.0 / 1024.0);
    }

    #[test]
    fn test_each_low_bit_pair_lands_once() {
        // one set pair per coordinate, walking the shift table
        for (i, &(src, shift)) in LOW_BITS.iter().enumerate() {
            let mut bytes = [0u8; 10];
            bytes[src] = 0x3 << shift;
            let c = decode_chromaticity(&mut &bytes[..]);
            let values = c.labeled();
            for (j, (_, v)) in values.iter().enumerate() {
                let expected = if i == j { 3.0 / 1024.0 } else { 0.0 };
                assert_eq!(*v, expected, "coordinate {} for pair {}", j, i);
            }
        }
    }

    #[test]
    fn test_bounds() {
        let c = decode_chromaticity(&mut &[0xFFu8; 10][..]);
        for (_, v) in c.labeled() {
            assert_eq!(v, 1023.0 / 1024.0);
        }
        let c = decode_chromaticity(&mut &[0u8; 10][..]);
        assert!(c.labeled().iter().all(|(_, v)| *v == 0.0));
    }
}
