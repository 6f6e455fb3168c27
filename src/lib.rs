pub mod config;
pub mod error;
pub mod image_handler;
pub mod optimizer;
pub mod utils;

pub use config::{OUTPUT_PATH, OptimizerPaths, SOURCE_PATH};
pub use error::{FixImageError, Result};
pub use optimizer::{OptimizeReport, optimize};
