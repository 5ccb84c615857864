//! `pHYs` payload: intended pixel size or aspect ratio.

use iccembed_codec::be;

use crate::{Error, Result};

/// Inches per meter, as used to convert pixels per meter into DPI.
pub const INCHES_PER_METER: f32 = 39.370113;

pub const UNIT_UNKNOWN: u8 = 0;
pub const UNIT_METER: u8 = 1;

const PHYS_DATA_SIZE: usize = 9;

/// Decoded `pHYs` chunk data.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PhysicalDimensions {
    pub pixels_per_unit_x: u32,
    pub pixels_per_unit_y: u32,
    pub unit: u8,
}

impl PhysicalDimensions {
    pub fn from_dpi(dpi_x: f32, dpi_y: f32) -> Self {
        Self {
            pixels_per_unit_x: (dpi_x * INCHES_PER_METER).round() as u32,
            pixels_per_unit_y: (dpi_y * INCHES_PER_METER).round() as u32,
            unit: UNIT_METER,
        }
    }

    pub fn parse(data: &[u8]) -> Result<Self> {
        let &[x0, x1, x2, x3, y0, y1, y2, y3, unit] = data else {
            return Err(Error::InvalidPhysicalData { length: data.len() });
        };
        Ok(Self {
            pixels_per_unit_x: be::decode_be32([x0, x1, x2, x3]),
            pixels_per_unit_y: be::decode_be32([y0, y1, y2, y3]),
            unit,
        })
    }

    pub fn to_bytes(self) -> [u8; PHYS_DATA_SIZE] {
        let mut out = [0u8; PHYS_DATA_SIZE];
        out[..4].copy_from_slice(&be::encode_be32(self.pixels_per_unit_x));
        out[4..8].copy_from_slice(&be::encode_be32(self.pixels_per_unit_y));
        out[8] = self.unit;
        out
    }

    /// Converts to dots per inch. Only the meter unit carries an absolute size.
    pub fn dpi(self) -> Result<(f32, f32)> {
        if self.unit != UNIT_METER {
            return Err(Error::InvalidPhysicalUnit { unit: self.unit });
        }
        Ok((
            self.pixels_per_unit_x as f32 / INCHES_PER_METER,
            self.pixels_per_unit_y as f32 / INCHES_PER_METER,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ninety_six_dpi() {
        let dims =
            PhysicalDimensions::parse(&[0x00, 0x00, 0x0e, 0xc4, 0x00, 0x00, 0x0e, 0xc4, 0x01])
                .unwrap();
        assert_eq!(dims.pixels_per_unit_x, 3780);
        let (x, y) = dims.dpi().unwrap();
        assert!((x - 96.0).abs() < 0.05, "{x}");
        assert!((y - 96.0).abs() < 0.05, "{y}");
    }

    #[test]
    fn anisotropic() {
        let dims = PhysicalDimensions {
            pixels_per_unit_x: 11811,
            pixels_per_unit_y: 5906,
            unit: UNIT_METER,
        };
        let (x, y) = PhysicalDimensions::parse(&dims.to_bytes())
            .unwrap()
            .dpi()
            .unwrap();
        assert!((x - 300.0).abs() < 0.05, "{x}");
        assert!((y - 150.0).abs() < 0.05, "{y}");
    }

    #[test]
    fn from_dpi_rounds() {
        let dims = PhysicalDimensions::from_dpi(72.0, 72.0);
        assert_eq!(dims.pixels_per_unit_x, 2835);
        assert_eq!(dims.unit, UNIT_METER);
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let dims = PhysicalDimensions {
            pixels_per_unit_x: 1,
            pixels_per_unit_y: 2,
            unit: UNIT_UNKNOWN,
        };
        assert!(matches!(
            dims.dpi(),
            Err(Error::InvalidPhysicalUnit { unit: 0 })
        ));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            PhysicalDimensions::parse(&[0; 8]),
            Err(Error::InvalidPhysicalData { length: 8 })
        ));
        assert!(matches!(
            PhysicalDimensions::parse(&[0; 10]),
            Err(Error::InvalidPhysicalData { length: 10 })
        ));
    }
}
