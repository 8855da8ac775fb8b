use serde::{Deserialize, Serialize};

use super::container::{Container, Orientation};

/// An ordered group of containers. Owns its containers exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: u64,
    #[serde(default)]
    pub orientation: Orientation,
    pub containers: Vec<Container>,
}

impl Row {
    pub fn new(id: u64, orientation: Orientation, containers: Vec<Container>) -> Self {
        Row {
            id,
            orientation,
            containers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Number of blocks across every container in this row
    pub fn block_count(&self) -> usize {
        self.containers.iter().map(|c| c.blocks.len()).sum()
    }
}
