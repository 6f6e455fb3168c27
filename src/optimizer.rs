//! The single conversion routine: decode, normalize the color mode, re-encode
//! as optimized PNG.

use image::ColorType;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::OptimizerPaths;
use crate::error::Result;
use crate::image_handler;
use crate::utils::convert::{ensure_png_compatible, is_alpha_mode, normalize_color_mode};
use crate::utils::digest::sha256_hex;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeReport {
    pub destination: PathBuf,
    pub width: u32,
    pub height: u32,
    pub color: ColorType,
    pub source_bytes: u64,
    pub output_bytes: u64,
    pub sha256: String,
}

/// Public entry point: produce a compressed PNG copy of `paths.source` at
/// `paths.destination`.
///
/// Nothing is retried and a failed write is not cleaned up.
pub fn optimize(paths: &OptimizerPaths) -> Result<OptimizeReport> {
    // 1. Decode.
    let (image, source_bytes) = image_handler::load_image(&paths.source)?;
    debug!(
        source = %paths.source.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded source image"
    );

    // 2. Normalize the color mode.
    if is_alpha_mode(image.color()) {
        debug!("alpha channel present, re-converting to RGBA");
    }
    let image = normalize_color_mode(image);
    ensure_png_compatible(image.color())?;

    // 3. Encode and persist.
    let written = image_handler::save_png_optimized(&image, &paths.destination)?;

    let report = OptimizeReport {
        destination: paths.destination.clone(),
        width: image.width(),
        height: image.height(),
        color: image.color(),
        source_bytes,
        output_bytes: written.len() as u64,
        sha256: sha256_hex(&written),
    };
    info!(
        destination = %report.destination.display(),
        source_bytes = report.source_bytes,
        output_bytes = report.output_bytes,
        sha256 = %report.sha256,
        "wrote optimized PNG"
    );

    Ok(report)
}
