use std::str::FromStr;

use palette::{FromColor, Hsl, Mix, ShiftHue, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::validate::{RGB_RE, is_valid_hex};

/// Red, green and blue channels plus the alpha carried by an 8 digit HEX color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbComponents {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

/// A parsed color value.
///
/// Channels are kept as normalized sRGB floats so that chained
/// rotate/saturate/mix calls only round once, on output. `alpha` is `None`
/// when the source text did not specify one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgb: Srgb,
    alpha: Option<f32>,
}

impl Color {
    pub fn from_rgb8(r: u8, g: u8, b: u8, alpha: Option<f32>) -> Self {
        Self {
            rgb: Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0),
            alpha,
        }
    }

    pub fn white() -> Self {
        Self::from_rgb8(255, 255, 255, None)
    }

    pub fn black() -> Self {
        Self::from_rgb8(0, 0, 0, None)
    }

    /// Rotates the hue by `degrees`, wrapping around the color wheel.
    pub fn rotate(self, degrees: f32) -> Self {
        let hsl: Hsl = Hsl::from_color(self.rgb);
        let rgb: Srgb = Srgb::from_color(hsl.shift_hue(degrees));
        Self { rgb, ..self }
    }

    /// Scales HSL saturation by `1 + fraction`; negative fractions desaturate.
    pub fn saturate(self, fraction: f32) -> Self {
        let mut hsl: Hsl = Hsl::from_color(self.rgb);
        hsl.saturation = (hsl.saturation * (1.0 + fraction)).clamp(0.0, 1.0);
        let rgb: Srgb = Srgb::from_color(hsl);
        Self { rgb, ..self }
    }

    /// Blends toward `other`: 0 leaves the color unchanged, 1 yields `other`.
    pub fn mix(self, other: Color, fraction: f32) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        let alpha = match (self.alpha, other.alpha) {
            (None, None) => None,
            (a, b) => {
                let (a, b) = (a.unwrap_or(1.0), b.unwrap_or(1.0));
                Some(a + (b - a) * fraction)
            }
        };
        Self {
            rgb: self.rgb.mix(other.rgb, fraction),
            alpha,
        }
    }

    pub fn to_hex_string(&self) -> String {
        let [r, g, b] = self.channels();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    pub fn to_rgb_string(&self) -> String {
        let [r, g, b] = self.channels();
        match self.alpha {
            Some(a) if a < 1.0 => format!("rgba({}, {}, {}, {})", r, g, b, round2(a)),
            _ => format!("rgb({}, {}, {})", r, g, b),
        }
    }

    /// YIQ luma classification.
    pub fn is_light(&self) -> bool {
        let [r, g, b] = self.channels().map(u32::from);
        (r * 2126 + g * 7152 + b * 722) / 10000 >= 128
    }

    pub fn to_rgb_components(&self) -> RgbComponents {
        let [r, g, b] = self.channels();
        RgbComponents {
            r,
            g,
            b,
            alpha: self.alpha,
        }
    }

    fn channels(&self) -> [u8; 3] {
        let (r, g, b) = self.rgb.into_components();
        [r, g, b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        if is_valid_hex(s) {
            return parse_hex(s);
        }
        if s.starts_with("rgb") {
            return parse_rgb(s);
        }
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Self::white()),
            "black" => Ok(Self::black()),
            "transparent" => Ok(Self::from_rgb8(0, 0, 0, Some(0.0))),
            _ => Err(ColorError::Unrecognized(s.to_string())),
        }
    }
}

fn parse_hex(input: &str) -> Result<Color> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    // #RGB -> #RRGGBB
    let hex: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidHex(input.to_string()))
    };
    let alpha = if hex.len() == 8 {
        Some(round2(channel(6)? as f32 / 255.0))
    } else {
        None
    };
    Ok(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?, alpha))
}

fn parse_rgb(input: &str) -> Result<Color> {
    let caps = RGB_RE
        .captures(input)
        .ok_or_else(|| ColorError::InvalidRgb(input.to_string()))?;
    let channel = |i: usize| -> Result<u8> {
        let raw = &caps[i];
        let value = match raw.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().map(|p| (p * 2.55).round()),
            None => raw.parse::<f32>(),
        }
        .map_err(|_| ColorError::InvalidRgb(input.to_string()))?;
        // out of range components are clamped, not rejected
        Ok(value.min(255.0) as u8)
    };
    let alpha = match caps.get(4) {
        Some(a) => Some(
            a.as_str()
                .parse::<f32>()
                .map_err(|_| ColorError::InvalidRgb(input.to_string()))?,
        ),
        None => None,
    };
    Ok(Color::from_rgb8(channel(1)?, channel(2)?, channel(3)?, alpha))
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
