use serde::{Deserialize, Serialize};

use super::container::Orientation;

/// Configuration from rack.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wrappers: WrapperConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Orientation stamped onto rows and containers the engine synthesizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperConfig {
    #[serde(default)]
    pub row_orientation: Orientation,
    #[serde(default)]
    pub container_orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Cells per block label in text output; longer labels are truncated.
    #[serde(default = "default_block_width")]
    pub block_width: usize,
    #[serde(default)]
    pub show_ids: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            block_width: default_block_width(),
            show_ids: false,
        }
    }
}

fn default_block_width() -> usize {
    12
}
