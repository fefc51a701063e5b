//! Configuration management for mvplan.

use serde::{Deserialize, Serialize};
#[cfg(feature = "toml")]
use std::path::Path;

use crate::error::{CoreError, Result};

/// Default edge length of a grid cell in meters
pub const DEFAULT_CELL_WIDTH_M: f64 = 20.0;

/// Default upper bound on the cells of one decomposition
pub const DEFAULT_MAX_CELLS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningConfig {
    #[serde(default)]
    pub decomposition: DecompositionConfig,
}

/// Grid decomposition parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionConfig {
    /// Fixed cell edge length in meters; also the column spacing
    pub cell_width_m: f64,
    /// Decompositions needing more cells than this are refused
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,
}

fn default_max_cells() -> usize {
    DEFAULT_MAX_CELLS
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            cell_width_m: DEFAULT_CELL_WIDTH_M,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl DecompositionConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.cell_width_m.is_finite() || self.cell_width_m <= 0.0 {
            return Err(CoreError::Config(format!(
                "cell_width_m must be a positive finite number, got {}",
                self.cell_width_m
            )));
        }
        if self.max_cells == 0 {
            return Err(CoreError::Config(
                "max_cells must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl PlanningConfig {
    #[cfg(feature = "toml")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            decomposition: DecompositionConfig::default(),
        }
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.decomposition.validate()
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
