use image::{ColorType, DynamicImage};

use crate::error::{FixImageError, Result};

/// True for the 8-bit RGB + alpha mode.
pub fn is_alpha_mode(color: ColorType) -> bool {
    color == ColorType::Rgba8
}

/// Re-convert an alpha-mode image into the alpha mode.
///
/// The target mode equals the source mode, so pixel data and mode come out
/// unchanged. Every other mode is passed through untouched.
pub fn normalize_color_mode(image: DynamicImage) -> DynamicImage {
    if is_alpha_mode(image.color()) {
        DynamicImage::ImageRgba8(image.to_rgba8())
    } else {
        image
    }
}

/// Checks that the PNG encoder can write `color` as-is.
pub fn ensure_png_compatible(color: ColorType) -> Result<()> {
    match color {
        ColorType::L8
        | ColorType::La8
        | ColorType::Rgb8
        | ColorType::Rgba8
        | ColorType::L16
        | ColorType::La16
        | ColorType::Rgb16
        | ColorType::Rgba16 => Ok(()),
        other => Err(FixImageError::UnsupportedColorMode(other)),
    }
}
