use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;
use std::fs;
use std::path::Path;

use crate::error::{FixImageError, Result};

/// Load image from bytes (supports PNG, JPEG, BMP, etc.)
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(FixImageError::Decode)
}

/// Read and decode the image at `path`, also returning the file size in bytes.
pub fn load_image(path: &Path) -> Result<(DynamicImage, u64)> {
    let bytes = fs::read(path).map_err(|source| FixImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let img = load_image_from_bytes(&bytes)?;
    Ok((img, bytes.len() as u64))
}

/// Encode to PNG with the optimize flag on: best zlib effort and adaptive
/// per-row filter selection.
pub fn encode_png_optimized(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(FixImageError::Encode)?;
    Ok(buf)
}

/// Encode `image` and write it to `path`, replacing any existing file.
/// Missing parent directories are an error; they are never created.
pub fn save_png_optimized(image: &DynamicImage, path: &Path) -> Result<Vec<u8>> {
    let bytes = encode_png_optimized(image)?;
    fs::write(path, &bytes).map_err(|source| FixImageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes)
}
