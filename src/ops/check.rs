use std::collections::HashMap;

use serde::Serialize;

use crate::model::address::Address;
use crate::model::layout::Layout;

/// Structured result from `rk check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A broken invariant. Moves assume none of these are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    #[serde(rename = "empty_container")]
    EmptyContainer { address: Address, id: u64 },
    #[serde(rename = "empty_row")]
    EmptyRow { address: Address, id: u64 },
    #[serde(rename = "duplicate_row_id")]
    DuplicateRowId { id: u64, addresses: Vec<Address> },
    #[serde(rename = "duplicate_container_id")]
    DuplicateContainerId { id: u64, addresses: Vec<Address> },
    #[serde(rename = "duplicate_block_id")]
    DuplicateBlockId { id: u64, addresses: Vec<Address> },
}

/// Something odd but harmless
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    #[serde(rename = "blank_block")]
    BlankBlock { address: Address, id: u64 },
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |addresses: &[Address]| {
            addresses
                .iter()
                .map(Address::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            CheckError::EmptyContainer { address, id } => {
                write!(f, "container #{} at {} has no blocks", id, address)
            }
            CheckError::EmptyRow { address, id } => {
                write!(f, "row #{} at {} has no containers", id, address)
            }
            CheckError::DuplicateRowId { id, addresses } => {
                write!(f, "row id {} is used at {}", id, join(addresses))
            }
            CheckError::DuplicateContainerId { id, addresses } => {
                write!(f, "container id {} is used at {}", id, join(addresses))
            }
            CheckError::DuplicateBlockId { id, addresses } => {
                write!(f, "block id {} is used at {}", id, join(addresses))
            }
        }
    }
}

impl std::fmt::Display for CheckWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckWarning::BlankBlock { address, id } => {
                write!(f, "block #{} at {} has no text", id, address)
            }
        }
    }
}

/// Validate a layout against the structural invariants.
///
/// Checks performed:
/// 1. Every container has at least one block
/// 2. Every row has at least one container
/// 3. Row, container and block ids are each unique
/// 4. Warnings for blocks with blank text
pub fn check_layout(layout: &Layout) -> CheckResult {
    let mut result = CheckResult::default();
    let mut row_ids: HashMap<u64, Vec<Address>> = HashMap::new();
    let mut container_ids: HashMap<u64, Vec<Address>> = HashMap::new();
    let mut block_ids: HashMap<u64, Vec<Address>> = HashMap::new();

    for (r, row) in layout.rows.iter().enumerate() {
        let address = Address::row(r);
        row_ids.entry(row.id).or_default().push(address);
        if row.is_empty() {
            result.errors.push(CheckError::EmptyRow {
                address,
                id: row.id,
            });
        }

        for (c, container) in row.containers.iter().enumerate() {
            let address = Address::container(r, c);
            container_ids.entry(container.id).or_default().push(address);
            if container.is_empty() {
                result.errors.push(CheckError::EmptyContainer {
                    address,
                    id: container.id,
                });
            }

            for (b, block) in container.blocks.iter().enumerate() {
                let address = Address::block(r, c, b);
                block_ids.entry(block.id).or_default().push(address);
                if block.text.trim().is_empty() {
                    result.warnings.push(CheckWarning::BlankBlock {
                        address,
                        id: block.id,
                    });
                }
            }
        }
    }

    for (id, addresses) in duplicates(row_ids) {
        result.errors.push(CheckError::DuplicateRowId { id, addresses });
    }
    for (id, addresses) in duplicates(container_ids) {
        result.errors.push(CheckError::DuplicateContainerId { id, addresses });
    }
    for (id, addresses) in duplicates(block_ids) {
        result.errors.push(CheckError::DuplicateBlockId { id, addresses });
    }

    result.valid = result.errors.is_empty();
    result
}

/// Ids seen more than once, sorted by id for stable output.
fn duplicates(seen: HashMap<u64, Vec<Address>>) -> Vec<(u64, Vec<Address>)> {
    let mut dups: Vec<_> = seen
        .into_iter()
        .filter(|(_, addresses)| addresses.len() > 1)
        .collect();
    dups.sort_by_key(|(id, _)| *id);
    dups
}
