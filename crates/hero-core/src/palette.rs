//! Colour stops for the blob gradient and the flat materials.
//!
//! Colours are authored as sRGB hex strings and converted to linear RGB before
//! they reach the GPU, so blending in the shader happens in linear space and
//! the sRGB swapchain re-encodes on write.

use crate::constants::*;
use crate::error::{Result, SceneError};

/// Parse `#rrggbb` (leading `#` optional) into sRGB components in [0, 1].
pub fn parse_hex(hex: &str) -> Result<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(SceneError::BadColor(hex.to_string()));
    }
    let mut out = [0.0f32; 3];
    for (i, c) in out.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| SceneError::BadColor(hex.to_string()))?;
        *c = byte as f32 / 255.0;
    }
    Ok(out)
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Parse a hex colour straight into linear RGB.
pub fn linear_from_hex(hex: &str) -> Result<[f32; 3]> {
    let [r, g, b] = parse_hex(hex)?;
    Ok([srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)])
}

/// The four linear-space stops used by the blob surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobPalette {
    pub color1: [f32; 3],
    pub color2: [f32; 3],
    pub color3: [f32; 3],
    pub accent: [f32; 3],
}

impl BlobPalette {
    pub fn from_hex(c1: &str, c2: &str, c3: &str, accent: &str) -> Result<Self> {
        Ok(Self {
            color1: linear_from_hex(c1)?,
            color2: linear_from_hex(c2)?,
            color3: linear_from_hex(c3)?,
            accent: linear_from_hex(accent)?,
        })
    }

    /// Every stop must be a finite colour in [0, 1].
    pub fn validate(&self) -> Result<()> {
        let stops = [
            ("color1", self.color1),
            ("color2", self.color2),
            ("color3", self.color3),
            ("accent", self.accent),
        ];
        for (name, rgb) in stops {
            if !rgb.iter().all(|c| c.is_finite() && (0.0..=1.0).contains(c)) {
                return Err(SceneError::BadPaletteStop(name));
            }
        }
        Ok(())
    }
}

impl Default for BlobPalette {
    fn default() -> Self {
        Self::from_hex(BLOB_COLOR_1, BLOB_COLOR_2, BLOB_COLOR_3, BLOB_COLOR_ACCENT).unwrap_or(
            Self {
                color1: [0.0; 3],
                color2: [0.0; 3],
                color3: [0.0; 3],
                accent: [0.0; 3],
            },
        )
    }
}
