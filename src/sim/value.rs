//! Power-of-two values and the display attributes derived from them

use std::fmt;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::consts::{HEAD_MAX_RADIUS, SEGMENT_MAX_RADIUS};

/// A tile value. Always a power of two (1, 2, 4, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Value(u64);

impl Value {
    pub const TWO: Value = Value(2);

    /// Largest representable value; doubling saturates here
    pub const MAX: Value = Value(1 << 63);

    /// Wrap a raw number, rejecting anything that is not a power of two
    pub fn new(raw: u64) -> Option<Self> {
        raw.is_power_of_two().then_some(Self(raw))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// Merge result of two equal values
    #[inline]
    pub fn doubled(self) -> Self {
        if self == Self::MAX { self } else { Self(self.0 << 1) }
    }

    /// Exponent: 2 -> 1, 4 -> 2, 2048 -> 11
    #[inline]
    pub fn log2(self) -> u32 {
        self.0.trailing_zeros()
    }
}

impl TryFrom<u64> for Value {
    type Error = String;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Value::new(raw).ok_or_else(|| format!("{raw} is not a power of two"))
    }
}

impl From<Value> for u64 {
    fn from(v: Value) -> u64 {
        v.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Head grows slowly with its value
pub fn head_radius(value: Value) -> f32 {
    (20.0 + value.log2() as f32).min(HEAD_MAX_RADIUS)
}

/// Body segments grow a little faster than the head but cap wider
pub fn segment_radius(value: Value) -> f32 {
    (18.0 + value.log2() as f32 * 1.5).min(SEGMENT_MAX_RADIUS)
}

/// 24-bit RGB display color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(pub u32);

impl Color {
    /// Color for values outside the table
    pub const FALLBACK: Color = Color(0x6b7280);

    /// Normalized RGBA for GPU consumers
    pub fn to_vec4(self) -> Vec4 {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        Vec4::new(r, g, b, 1.0)
    }

    pub fn parse_hex(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ffff)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&s).ok_or_else(|| format!("invalid color '{s}'"))
    }
}

/// Head and segment color lookup, with a fallback for unbounded values
pub fn color_for_value(value: Value) -> Color {
    match value.get() {
        2 => Color(0x22c55e),
        4 => Color(0xf59e0b),
        8 => Color(0xef4444),
        16 => Color(0x8b5cf6),
        32 => Color(0x06b6d4),
        64 => Color(0xf97316),
        128 => Color(0xec4899),
        256 => Color(0x10b981),
        512 => Color(0x6366f1),
        1024 => Color(0x84cc16),
        2048 => Color(0xfbbf24),
        _ => Color::FALLBACK,
    }
}

/// Pickups use their own three-tone palette
pub fn pickup_color(value: Value) -> Color {
    match value.get() {
        2 => Color(0x10b981),
        4 => Color(0xf59e0b),
        _ => Color(0xef4444),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_rejects_non_powers() {
        assert!(Value::new(0).is_none());
        assert!(Value::new(6).is_none());
        assert_eq!(Value::new(8).map(Value::get), Some(8));
    }

    #[test]
    fn test_doubling_saturates() {
        assert_eq!(Value::TWO.doubled().get(), 4);
        assert_eq!(Value::MAX.doubled(), Value::MAX);
    }

    #[test]
    fn test_radius_caps() {
        let v = |n| Value::new(n).unwrap();
        assert_eq!(head_radius(v(2)), 21.0);
        assert_eq!(head_radius(v(1 << 20)), HEAD_MAX_RADIUS);
        assert_eq!(segment_radius(v(2)), 19.5);
        assert_eq!(segment_radius(v(1 << 20)), SEGMENT_MAX_RADIUS);
    }

    #[test]
    fn test_color_fallback_for_large_values() {
        assert_eq!(color_for_value(Value::new(2048).unwrap()), Color(0xfbbf24));
        assert_eq!(color_for_value(Value::new(4096).unwrap()), Color::FALLBACK);
        assert_eq!(color_for_value(Value::MAX), Color::FALLBACK);
        assert_eq!(color_for_value(Value::new(1).unwrap()), Color::FALLBACK);
    }

    #[test]
    fn test_color_hex_round_trip() {
        let c = Color(0x06b6d4);
        assert_eq!(c.to_string(), "#06b6d4");
        assert_eq!(Color::parse_hex("#06b6d4"), Some(c));
        assert!(Color::parse_hex("06b6d4").is_none());
        let rgba = Color(0xff0000).to_vec4();
        assert_eq!(rgba, Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_value_serde() {
        let v: Value = serde_json::from_str("16").unwrap();
        assert_eq!(v.get(), 16);
        assert!(serde_json::from_str::<Value>("12").is_err());
    }
}
