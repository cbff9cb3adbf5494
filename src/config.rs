use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::InsetSide;
use crate::operations::offset::DEFAULT_SPACING_MULTIPLIER;

/// Estimation settings: which radii to evaluate and how offset lines are laid out.
///
/// Loaded from TOML; missing keys fall back to [`InfillConfig::default`]:
///
/// ```toml
/// radii = [2.0, 4.0]
/// spacing_multiplier = 2.0
/// inset_side = "left"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfillConfig {
    pub radii: Vec<f64>,
    pub spacing_multiplier: f64,
    pub inset_side: InsetSide,
}

impl Default for InfillConfig {
    fn default() -> Self {
        Self {
            radii: vec![2.0, 4.0],
            spacing_multiplier: DEFAULT_SPACING_MULTIPLIER,
            inset_side: InsetSide::Left,
        }
    }
}

impl InfillConfig {
    /// Parses and validates a TOML config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` for malformed TOML, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`InfillConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks that every radius and the spacing multiplier are positive and
    /// finite, and that the step `radius * spacing_multiplier` advances each radius.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        if let Some(r) = self.radii.iter().find(|r| !is_positive_finite(**r)) {
            return Err(ConfigError::InvalidValue {
                key: "radii",
                reason: format!("radius must be positive and finite, got {r}"),
            }
            .into());
        }
        if !is_positive_finite(self.spacing_multiplier) {
            return Err(ConfigError::InvalidValue {
                key: "spacing_multiplier",
                reason: format!(
                    "must be positive and finite, got {}",
                    self.spacing_multiplier
                ),
            }
            .into());
        }
        if let Some(r) = self
            .radii
            .iter()
            .find(|r| **r + **r * self.spacing_multiplier <= **r)
        {
            return Err(ConfigError::InvalidValue {
                key: "spacing_multiplier",
                reason: format!(
                    "step {} is lost to rounding against radius {r}",
                    r * self.spacing_multiplier
                ),
            }
            .into());
        }
        Ok(())
    }
}

fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
