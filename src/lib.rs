//! Color validation and palette derivation.
//!
//! Validates HEX and `rgb()`/`rgba()` color strings and derives related
//! colors from a base color: tint/shade ladders, rotated palettes and a
//! readable font color. Every function is pure.

pub mod color;
pub mod config;
pub mod convert;
pub mod error;
pub mod shades;
pub mod validate;

pub use color::{Color, RgbComponents};
pub use config::{OutputFormat, PaletteRequest};
pub use convert::{as_hex, as_rgb};
pub use error::{ColorError, Result};
pub use shades::{color_palette, dark_hues, font_color, hues, light_hues};
pub use validate::{is_valid_hex, is_valid_rgb};
