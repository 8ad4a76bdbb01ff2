//! Colors carried by node styles
//!
//! Channels are stored as sRGB fractions; converting to the render target's
//! color space is the host's job.

/// Non-premultiplied sRGB color, channels in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from channel fractions
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn transparent() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }
    }

    /// Color from 8-bit channels
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`, the leading `#` being optional
    pub fn hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        let alpha = if digits.len() == 8 { channel(6)? } else { u8::MAX };
        Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// Theme colors of the default controls
pub mod palette {
    use super::Color;

    pub const PRIMARY: Color = Color::from_rgba8(0x20, 0x89, 0xdc, 0xff);
    pub const SUCCESS: Color = Color::from_rgba8(0x52, 0xc4, 0x1a, 0xff);
    pub const WARNING: Color = Color::from_rgba8(0xfa, 0xad, 0x14, 0xff);
    pub const ERROR: Color = Color::from_rgba8(0xff, 0x19, 0x0c, 0xff);
    pub const GREY3: Color = Color::from_rgba8(0x86, 0x93, 0x9e, 0xff);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
}
