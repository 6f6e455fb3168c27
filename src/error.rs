use image::ColorType;
use std::path::PathBuf;
use thiserror::Error;

/// The central error type for the image fixing pipeline.
#[derive(Error, Debug)]
pub enum FixImageError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image decode error: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Color mode {0:?} cannot be written as PNG")]
    UnsupportedColorMode(ColorType),

    #[error("Image encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Variants wrapping foreign errors only compare by variant (and path).
impl PartialEq for FixImageError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FixImageError::Read { path: p1, .. }, FixImageError::Read { path: p2, .. }) => {
                p1 == p2
            }
            (FixImageError::Write { path: p1, .. }, FixImageError::Write { path: p2, .. }) => {
                p1 == p2
            }
            (FixImageError::Decode(_), FixImageError::Decode(_)) => true,
            (FixImageError::Encode(_), FixImageError::Encode(_)) => true,
            (FixImageError::UnsupportedColorMode(c1), FixImageError::UnsupportedColorMode(c2)) => {
                c1 == c2
            }
            _ => false,
        }
    }
}

/// A centralized result type for the library.
pub type Result<T> = std::result::Result<T, FixImageError>;
