use serde::{Deserialize, Serialize};

use super::block::Block;
use super::container::Container;
use super::row::Row;

/// The whole hierarchy: an ordered sequence of rows.
///
/// Serializes as a bare array of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    pub rows: Vec<Row>,
}

/// Element counts for a layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    pub rows: usize,
    pub containers: usize,
    pub blocks: usize,
}

impl Layout {
    pub fn new(rows: Vec<Row>) -> Self {
        Layout { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn container(&self, row: usize, container: usize) -> Option<&Container> {
        self.row(row)?.containers.get(container)
    }

    pub fn block(&self, row: usize, container: usize, block: usize) -> Option<&Block> {
        self.container(row, container)?.blocks.get(block)
    }

    /// Total number of blocks in the layout
    pub fn block_count(&self) -> usize {
        self.rows.iter().map(Row::block_count).sum()
    }

    pub fn stats(&self) -> LayoutStats {
        LayoutStats {
            rows: self.rows.len(),
            containers: self.rows.iter().map(|r| r.containers.len()).sum(),
            blocks: self.block_count(),
        }
    }

    /// Highest id of any row, container or block, if the layout has any.
    pub fn max_id(&self) -> Option<u64> {
        let mut max: Option<u64> = None;
        let mut bump = |id: u64| {
            if max.is_none_or(|m| id > m) {
                max = Some(id);
            }
        };
        for row in &self.rows {
            bump(row.id);
            for container in &row.containers {
                bump(container.id);
                for block in &container.blocks {
                    bump(block.id);
                }
            }
        }
        max
    }

    /// Iterate every block in presentation order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.rows
            .iter()
            .flat_map(|r| r.containers.iter())
            .flat_map(|c| c.blocks.iter())
    }
}
