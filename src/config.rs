use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_MIX_COLOR: &str = "white";
/// Font color used on backgrounds classified as light.
pub const DARK_FONT_COLOR: &str = "#444";
/// Font color used on backgrounds classified as dark.
pub const LIGHT_FONT_COLOR: &str = "#FFF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Hex,
    Rgb,
}

impl From<bool> for OutputFormat {
    fn from(as_hex: bool) -> Self {
        if as_hex { Self::Hex } else { Self::Rgb }
    }
}

/// Options for [`color_palette`](crate::color_palette).
///
/// Deserializes from the option record used by UI callers
/// (`inputColor`, `numberColors`, `shiftAmount`, `mixColor`, `rotate`,
/// `saturation`, `asHex`); only the first three are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaletteRequest {
    #[serde(rename = "inputColor")]
    pub base_color: String,
    #[serde(rename = "numberColors")]
    pub count: usize,
    #[serde(rename = "shiftAmount")]
    pub total_shift_percent: f32,
    #[serde(rename = "mixColor", default = "default_mix_color")]
    pub mix_color: String,
    #[serde(rename = "rotate", default)]
    pub rotate_degrees: f32,
    #[serde(rename = "saturation", default)]
    pub saturation_percent: f32,
    #[serde(rename = "asHex", default = "default_as_hex")]
    pub as_hex: bool,
}

fn default_mix_color() -> String {
    DEFAULT_MIX_COLOR.to_string()
}

fn default_as_hex() -> bool {
    true
}

impl PaletteRequest {
    pub fn new(base_color: impl Into<String>, count: usize, total_shift_percent: f32) -> Self {
        Self {
            base_color: base_color.into(),
            count,
            total_shift_percent,
            mix_color: default_mix_color(),
            rotate_degrees: 0.0,
            saturation_percent: 0.0,
            as_hex: default_as_hex(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_mix_color(mut self, mix_color: impl Into<String>) -> Self {
        self.mix_color = mix_color.into();
        self
    }

    pub fn with_rotate(mut self, degrees: f32) -> Self {
        self.rotate_degrees = degrees;
        self
    }

    pub fn with_saturation(mut self, percent: f32) -> Self {
        self.saturation_percent = percent;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.as_hex = format == OutputFormat::Hex;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.as_hex.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_once() {
        let req = PaletteRequest::new("#3498DB", 5, 73.0);
        assert_eq!(req.mix_color, "white");
        assert_eq!(req.rotate_degrees, 0.0);
        assert_eq!(req.saturation_percent, 0.0);
        assert_eq!(req.format(), OutputFormat::Hex);
    }

    #[test]
    fn json_defaults_match_builder() {
        let req = PaletteRequest::from_json(
            r##"{"inputColor": "#3498DB", "numberColors": 5, "shiftAmount": 73}"##,
        )
        .unwrap();
        assert_eq!(req, PaletteRequest::new("#3498DB", 5, 73.0));
    }

    #[test]
    fn json_overrides() {
        let req = PaletteRequest::from_json(
            r##"{"inputColor": "#fff", "numberColors": 3, "shiftAmount": 10,
                "mixColor": "#000", "rotate": 45, "saturation": -20, "asHex": false}"##,
        )
        .unwrap();
        let expected = PaletteRequest::new("#fff", 3, 10.0)
            .with_mix_color("#000")
            .with_rotate(45.0)
            .with_saturation(-20.0)
            .with_format(OutputFormat::Rgb);
        assert_eq!(req, expected);
    }

    #[test]
    fn json_missing_required_field() {
        assert!(PaletteRequest::from_json(r##"{"inputColor": "#fff"}"##).is_err());
        assert!(
            PaletteRequest::from_json(
                r##"{"inputColor": "#fff", "numberColors": -1, "shiftAmount": 1}"##
            )
            .is_err()
        );
    }
}
