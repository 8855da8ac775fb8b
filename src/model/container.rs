use serde::{Deserialize, Serialize};

use super::block::Block;

/// Layout direction of a container or row. Purely presentational: the engine
/// never looks at it except to stamp it onto new wrappers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// An ordered group of blocks. Owns its blocks exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: u64,
    #[serde(default)]
    pub orientation: Orientation,
    pub blocks: Vec<Block>,
}

impl Container {
    pub fn new(id: u64, orientation: Orientation, blocks: Vec<Block>) -> Self {
        Container {
            id,
            orientation,
            blocks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
