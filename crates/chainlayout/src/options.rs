//! Layout configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default bound on crossing-reduction iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Upper bound on crossing-reduction iterations; each iteration is two sweeps.
    pub max_iterations: usize,
    /// Record crossing counts before and after reduction in the returned stats.
    pub count_crossings: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            count_crossings: true,
        }
    }
}

impl LayoutOptions {
    /// Parses a JSON options object. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
