use crate::color::{Color, RgbComponents};
use crate::validate::{is_valid_hex, is_valid_rgb};

/// Converts `rgb(...)`/`rgba(...)` text to `#RRGGBB`. Alpha is dropped.
pub fn as_hex(rgb: &str) -> Option<String> {
    if !is_valid_rgb(rgb) {
        return None;
    }
    rgb.parse::<Color>().ok().map(|c| c.to_hex_string())
}

/// Splits a HEX color into its components; `alpha` is only set for the
/// 8 digit form.
pub fn as_rgb(hex: &str) -> Option<RgbComponents> {
    if !is_valid_hex(hex) {
        return None;
    }
    hex.parse::<Color>().ok().map(|c| c.to_rgb_components())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_from_rgb() {
        assert_eq!(as_hex("rgb(255,255,255)").as_deref(), Some("#FFFFFF"));
        assert_eq!(as_hex("rgb(0,255,0,0.3)").as_deref(), Some("#00FF00"));
        assert_eq!(as_hex("rgba(97, 54, 171, 1)").as_deref(), Some("#6136AB"));
        assert_eq!(as_hex("rgb(aaa,255,255)"), None);
        assert_eq!(as_hex("#FFFFFF"), None);
        assert_eq!(as_hex("rgba(0, 0, 0, 1.0)").as_deref(), Some("#000000"));
        assert_eq!(as_hex("rgba(255,0,0,0.50)").as_deref(), Some("#FF0000"));
        assert_eq!(as_hex("rgb(\u{0661}\u{0662},0,0)"), None);
    }

    #[test]
    fn every_valid_rgb_converts() {
        for rgb in [
            "rgb(97,54,171)",
            "rgba(255,255,255,0)",
            "rgba(1,2,3,.25)",
            "rgba(0,0,0,1.00)",
            "rgb(50%, 10%, 100%)",
            "rgb(999,0,0)",
        ] {
            assert!(is_valid_rgb(rgb));
            assert!(as_hex(rgb).is_some(), "{}", rgb);
        }
    }

    #[test]
    fn rgb_from_hex() {
        assert_eq!(
            as_rgb("#6136AB"),
            Some(RgbComponents { r: 97, g: 54, b: 171, alpha: None })
        );
        assert_eq!(
            as_rgb("#fff"),
            Some(RgbComponents { r: 255, g: 255, b: 255, alpha: None })
        );
        assert_eq!(
            as_rgb("#FFFFFF00"),
            Some(RgbComponents { r: 255, g: 255, b: 255, alpha: Some(0.0) })
        );
        assert_eq!(as_rgb("sdvvsa"), None);
        assert_eq!(as_rgb("white"), None);
    }
}
