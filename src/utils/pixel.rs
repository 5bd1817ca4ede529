use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::DitherError;

/// 8-bit sRGB color triple. Alpha never takes part in quantization.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    #[inline]
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Rgb::new(rgb[0], rgb[1], rgb[2])
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Read the first three channels of an RGBA pixel.
    #[inline]
    pub fn from_rgba(pixel: &[u8]) -> Self {
        Rgb::new(pixel[0], pixel[1], pixel[2])
    }

    /// Squared euclidean distance in RGB space.
    #[inline]
    pub const fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Signed per-channel difference `self - other`.
    #[inline]
    pub const fn error_to(self, other: Rgb) -> [i32; 3] {
        [
            self.r as i32 - other.r as i32,
            self.g as i32 - other.g as i32,
            self.b as i32 - other.b as i32,
        ]
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> crate::error::Result<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(DitherError::InvalidHexColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| DitherError::InvalidHexColor(hex.to_string()))
        };

        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s.trim())
    }
}

impl TryFrom<String> for Rgb {
    type Error = DitherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::from_array(value)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Store a channel value the way an 8-bit clamped buffer does:
/// clamp to `[0, 255]`, then round half to even.
#[inline]
pub fn store_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_sq() {
        assert_eq!(Rgb::BLACK.distance_sq(Rgb::WHITE), 3 * 255 * 255);
        assert_eq!(Rgb::new(10, 20, 30).distance_sq(Rgb::new(13, 16, 30)), 9 + 16);
        assert_eq!(Rgb::new(1, 2, 3).distance_sq(Rgb::new(1, 2, 3)), 0);
    }

    #[test]
    fn test_error_to_is_signed() {
        assert_eq!(
            Rgb::new(10, 200, 0).error_to(Rgb::new(0, 255, 0)),
            [10, -55, 0]
        );
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("0f380f").unwrap(), Rgb::new(15, 56, 15));
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("#GG0000").is_err());
        assert!(Rgb::from_hex("#+1+1+1").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_to_hex_is_zero_padded() {
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Rgb::new(15, 56, 15).to_string(), "#0F380F");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 60)).unwrap();
        assert_eq!(json, "\"#FF003C\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(255, 0, 60));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }

    #[test]
    fn test_store_channel_clamps_and_rounds_half_to_even() {
        assert_eq!(store_channel(-12.0), 0);
        assert_eq!(store_channel(300.7), 255);
        assert_eq!(store_channel(182.5625), 183);
        assert_eq!(store_channel(0.5), 0);
        assert_eq!(store_channel(1.5), 2);
        assert_eq!(store_channel(2.5), 2);
        assert_eq!(store_channel(254.5), 254);
    }
}
