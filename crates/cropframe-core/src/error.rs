//! Error types for the region editor.

use thiserror::Error;

/// Errors raised by the region editor.
///
/// Most out-of-range conditions during a drag are absorbed by clamping and
/// never surface here. Only invalid inputs at the edges of the editor
/// (image/container sizes, configuration) and internal logic errors do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// An image or container dimension was zero, negative or not finite.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// An editor configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A rectangle reached the region model without satisfying its invariants.
    ///
    /// The boundary clamp runs before every update, so this indicates a bug.
    #[error("Region invariant violated: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_error_display() {
        let err = RegionError::InvalidDimensions {
            width: 0.0,
            height: 480.0,
        };
        assert_eq!(err.to_string(), "Invalid dimensions: 0x480");

        let err = RegionError::InvalidConfig("min_size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: min_size must be positive"
        );
    }
}
