//! Configuration loading for an LPA* core
//!
//! ```toml
//! height = 20
//! width = 30
//! heuristic = "euclidean"   # optional, defaults to "manhattan"
//!
//! [goal]
//! x = 29
//! y = 19
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::{PlanningError, Result};
use crate::matrix::Matrix;

/// Grid extents, goal, and heuristic for one planner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of rows
    pub height: usize,

    /// Number of columns
    pub width: usize,

    /// Target cell
    pub goal: Coordinate,

    /// Registry name of the heuristic (default: "manhattan")
    #[serde(default = "default_heuristic")]
    pub heuristic: String,
}

fn default_heuristic() -> String {
    "manhattan".to_string()
}

impl SearchConfig {
    /// Parses and validates a TOML document
    ///
    /// # Errors
    /// Returns [`PlanningError::Config`] on malformed TOML, a zero-sized grid,
    /// or a grid too large to address.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file
    ///
    /// # Errors
    /// Returns [`PlanningError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded search config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(PlanningError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Matrix::check_extents(self.height, self.width)
            .map_err(|e| PlanningError::Config(e.to_string()))?;
        Ok(())
    }
}
