//! Editor configuration.

use crate::error::RegionError;
use serde::{Deserialize, Serialize};

/// Default minimum crop box edge length in display units.
pub const DEFAULT_MIN_SIZE: f64 = 40.0;

/// Default diameter of the circular corner handle touch targets.
pub const DEFAULT_HANDLE_SIZE: f64 = 30.0;

/// Tunable parameters for a region editing session.
///
/// Missing fields fall back to their defaults when deserialized, so a UI
/// layer only needs to send the values it wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum width and height of the crop box (display units)
    pub min_size: f64,
    /// Initial crop box width as a fraction of the displayed image width (0 to 1]
    pub initial_width_fraction: f64,
    /// Initial crop box height as a fraction of the displayed image height (0 to 1]
    pub initial_height_fraction: f64,
    /// Diameter of the corner handle hit targets (display units)
    pub handle_size: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            initial_width_fraction: 0.6,
            initial_height_fraction: 0.3,
            handle_size: DEFAULT_HANDLE_SIZE,
        }
    }
}

impl EditorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), RegionError> {
        positive("min_size", self.min_size)?;
        positive("handle_size", self.handle_size)?;
        fraction("initial_width_fraction", self.initial_width_fraction)?;
        fraction("initial_height_fraction", self.initial_height_fraction)?;
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), RegionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RegionError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn fraction(name: &str, value: f64) -> Result<(), RegionError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(RegionError::InvalidConfig(format!(
            "{name} must be in (0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EditorConfig::new();
        assert_eq!(config.min_size, 40.0);
        assert_eq!(config.initial_width_fraction, 0.6);
        assert_eq!(config.initial_height_fraction, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_min_size() {
        let mut config = EditorConfig::default();
        config.min_size = 0.0;
        assert!(matches!(
            config.validate(),
            Err(RegionError::InvalidConfig(_))
        ));

        config.min_size = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_fraction_out_of_range() {
        let mut config = EditorConfig::default();
        config.initial_width_fraction = 1.5;
        assert!(config.validate().is_err());

        config.initial_width_fraction = 1.0;
        assert!(config.validate().is_ok());

        config.initial_height_fraction = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_map_uses_defaults() {
        use serde::de::value::{Error, MapDeserializer};

        let entries = vec![("min_size", 80.0f64)];
        let de = MapDeserializer::<_, Error>::new(entries.into_iter());
        let config = EditorConfig::deserialize(de).unwrap();

        assert_eq!(config.min_size, 80.0);
        assert_eq!(config.handle_size, DEFAULT_HANDLE_SIZE);
        assert_eq!(config.initial_width_fraction, 0.6);
    }
}
