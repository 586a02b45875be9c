//! Report output configuration.

use serde::{Deserialize, Serialize};

/// Configuration for report rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: `console` or `json`. Default: `console`.
    pub format: Option<String>,
    /// ANSI colors in console output. Default: true.
    pub color: Option<bool>,
}

impl OutputConfig {
    /// Returns the effective format, defaulting to `console`.
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or("console")
    }

    /// Returns whether console output is colored, defaulting to true.
    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
