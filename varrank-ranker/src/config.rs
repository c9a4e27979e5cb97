use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use varrank_core::models::WeightFields;

use crate::consts::{DEFAULT_BLOWUP_THRESHOLD, DEFAULT_WINDOW_RADIUS};
use crate::errors::{RankError, RankResult};

///
/// Tunables of a ranking run. Every field has a default, so a TOML file only needs
/// to list what it changes.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    /// half-width of the window around each variant, in bp (the maximum read length)
    pub window_radius: u32,
    /// cap on variants considered per window by the hybrid strategy; defaults to `window_radius`
    pub max_variants_per_window: Option<usize>,
    /// decay base of the blowup penalty, in (0, 1)
    pub blowup_threshold: f64,
    pub weight_fields: WeightFields,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            window_radius: DEFAULT_WINDOW_RADIUS,
            max_variants_per_window: None,
            blowup_threshold: DEFAULT_BLOWUP_THRESHOLD,
            weight_fields: WeightFields::default(),
        }
    }
}

impl RankerConfig {
    pub fn max_variants(&self) -> usize {
        self.max_variants_per_window
            .unwrap_or(self.window_radius as usize)
    }

    pub fn validate(&self) -> RankResult<()> {
        if self.window_radius == 0 {
            return Err(RankError::InvalidConfiguration(
                "window radius must be greater than 0".to_string(),
            ));
        }
        if self.max_variants() == 0 {
            return Err(RankError::InvalidConfiguration(
                "max variants per window must be greater than 0".to_string(),
            ));
        }
        let t = self.blowup_threshold;
        if !(t > 0.0 && t < 1.0) {
            return Err(RankError::InvalidConfiguration(format!(
                "blowup threshold must be between 0 and 1 (exclusive), got {}",
                t
            )));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for RankerConfig {
    type Error = RankError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: RankerConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
