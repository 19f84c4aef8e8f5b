use log::{debug, warn};

use crate::color::Color;
use crate::config::{DARK_FONT_COLOR, LIGHT_FONT_COLOR, OutputFormat, PaletteRequest};
use crate::error::Result;
use crate::validate::is_valid_hex;

/// Resolved stepping parameters shared by every list producer.
struct Walk {
    base: Color,
    count: usize,
    total_shift_percent: f32,
    rotate_degrees: f32,
    saturation_percent: f32,
    format: OutputFormat,
}

impl Walk {
    // NaN parameters collapse every channel to 0 further down.
    fn checked(self) -> Self {
        for (name, value) in [
            ("total shift", self.total_shift_percent),
            ("rotation", self.rotate_degrees),
            ("saturation", self.saturation_percent),
        ] {
            if !value.is_finite() {
                warn!(
                    "Non-finite {} '{}' for base color {}",
                    name,
                    value,
                    self.base.to_hex_string()
                );
            }
        }
        self
    }

    fn fraction(&self, step: usize) -> f32 {
        (step + 1) as f32 / self.count as f32
    }

    // Each step starts again from the untouched base color.
    fn color_at(&self, step: usize, mix_color: Color) -> String {
        let fraction = self.fraction(step);
        let color = self
            .base
            .rotate(fraction * -self.rotate_degrees)
            .saturate(fraction * self.saturation_percent / 100.0)
            .mix(mix_color, fraction * self.total_shift_percent / 100.0);
        match self.format {
            OutputFormat::Hex => color.to_hex_string(),
            OutputFormat::Rgb => color.to_rgb_string(),
        }
    }
}

fn valid_base(input: &str) -> Option<Color> {
    if !is_valid_hex(input) {
        warn!("Ignoring invalid base color '{}'", input);
        return None;
    }
    input.parse().ok()
}

fn shade_walk(base: Color, count: usize, total_shift_percent: f32, format: OutputFormat) -> Walk {
    Walk {
        base,
        count,
        total_shift_percent,
        rotate_degrees: 0.0,
        saturation_percent: 0.0,
        format,
    }
    .checked()
}

/// Builds `request.count` colors stepping from the base color toward the mix
/// color, with rotation and saturation interpolated alongside.
///
/// An invalid base color yields an empty list. An unparsable mix color is an
/// error.
pub fn color_palette(request: &PaletteRequest) -> Result<Vec<String>> {
    let Some(base) = valid_base(&request.base_color) else {
        return Ok(Vec::new());
    };
    let mix_color: Color = request.mix_color.parse()?;
    let walk = Walk {
        base,
        count: request.count,
        total_shift_percent: request.total_shift_percent,
        rotate_degrees: request.rotate_degrees,
        saturation_percent: request.saturation_percent,
        format: request.format(),
    }
    .checked();
    debug!(
        "Building {} palette colors from '{}' toward '{}'",
        request.count, request.base_color, request.mix_color
    );
    Ok((0..walk.count).map(|step| walk.color_at(step, mix_color)).collect())
}

/// A dark to light ladder: the first half of the steps mix toward black, the
/// rest toward white.
pub fn hues(
    base_color: &str,
    count: usize,
    total_shift_percent: f32,
    format: OutputFormat,
) -> Vec<String> {
    let Some(base) = valid_base(base_color) else {
        return Vec::new();
    };
    let walk = shade_walk(base, count, total_shift_percent, format);
    let split = count.div_ceil(2);
    let mut colors: Vec<String> = (0..split)
        .map(|step| walk.color_at(step, Color::black()))
        .collect();
    // darkest first
    colors.reverse();
    colors.extend((split..count).map(|step| walk.color_at(step, Color::white())));
    debug!("Built {} hues from '{}'", colors.len(), base_color);
    colors
}

/// Shades mixed toward black, most shifted first.
pub fn dark_hues(
    base_color: &str,
    count: usize,
    total_shift_percent: f32,
    format: OutputFormat,
) -> Vec<String> {
    let Some(base) = valid_base(base_color) else {
        return Vec::new();
    };
    let walk = shade_walk(base, count, total_shift_percent, format);
    let mut colors: Vec<String> = (0..count)
        .map(|step| walk.color_at(step, Color::black()))
        .collect();
    colors.reverse();
    colors
}

/// Tints mixed toward white, least shifted first.
pub fn light_hues(
    base_color: &str,
    count: usize,
    total_shift_percent: f32,
    format: OutputFormat,
) -> Vec<String> {
    let Some(base) = valid_base(base_color) else {
        return Vec::new();
    };
    let walk = shade_walk(base, count, total_shift_percent, format);
    (0..count).map(|step| walk.color_at(step, Color::white())).collect()
}

/// Picks a readable font color for `background_color`.
pub fn font_color(background_color: &str) -> Result<&'static str> {
    let background: Color = background_color.parse()?;
    Ok(if background.is_light() {
        DARK_FONT_COLOR
    } else {
        LIGHT_FONT_COLOR
    })
}
