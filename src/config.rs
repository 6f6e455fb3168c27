//! Fixed locations the optimizer works on.
//!
//! Both paths are relative to the working directory of the process. They are
//! not configurable; `OptimizerPaths` exists so the library can be driven
//! against other locations from tests.

use std::path::PathBuf;

/// Image read by the optimizer.
pub const SOURCE_PATH: &str = "app/src/main/res/drawable/tulsi.png";

/// Destination of the re-encoded PNG. Its parent directory must already exist.
pub const OUTPUT_PATH: &str = "temp/tulsi_fixed.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerPaths {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl OptimizerPaths {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl Default for OptimizerPaths {
    fn default() -> Self {
        Self::new(SOURCE_PATH, OUTPUT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_are_the_fixed_locations() {
        let paths = OptimizerPaths::default();
        assert_eq!(
            paths.source,
            PathBuf::from("app/src/main/res/drawable/tulsi.png")
        );
        assert_eq!(paths.destination, PathBuf::from("temp/tulsi_fixed.png"));
        assert!(paths.source.is_relative());
        assert!(paths.destination.is_relative());
    }
}
