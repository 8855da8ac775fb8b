use serde::Serialize;
use tracing::debug;

use crate::model::address::{Address, DragKind, SlotKind};
use crate::model::block::Block;
use crate::model::config::WrapperConfig;
use crate::model::container::Container;
use crate::model::layout::Layout;
use crate::model::row::Row;
use crate::ops::ids::IdAllocator;
use crate::ops::prune::prune;

/// Which end of a move an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRole {
    Source,
    Destination,
}

impl std::fmt::Display for AddressRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressRole::Source => write!(f, "source"),
            AddressRole::Destination => write!(f, "destination"),
        }
    }
}

/// What exactly is wrong with an address
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressFault {
    #[error("row {index} out of bounds ({len} rows)")]
    RowOutOfBounds { index: usize, len: usize },
    #[error("container {index} out of bounds in row {row} ({len} containers)")]
    ContainerOutOfBounds { row: usize, index: usize, len: usize },
    #[error("block {index} out of bounds in container {row}/{container} ({len} blocks)")]
    BlockOutOfBounds {
        row: usize,
        container: usize,
        index: usize,
        len: usize,
    },
    #[error("a {kind} is addressed by a {expected}, not a {found}")]
    KindMismatch {
        kind: DragKind,
        expected: SlotKind,
        found: SlotKind,
    },
}

/// Error type for move operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid {role} address {address}: {fault}")]
    InvalidAddress {
        role: AddressRole,
        address: Address,
        fault: AddressFault,
    },
    #[error("no unused ids left for the {needed} wrapper(s) this move creates")]
    IdsExhausted { needed: usize },
}

/// A request to relocate one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    pub kind: DragKind,
    pub from: Address,
    pub to: Address,
}

impl MoveRequest {
    pub fn new(kind: DragKind, from: Address, to: Address) -> Self {
        MoveRequest { kind, from, to }
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "move {} {} -> {} ({})",
            self.kind,
            self.from,
            self.to,
            self.to.kind()
        )
    }
}

/// The transformation applied for a (dragged kind, destination depth) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRule {
    /// Wrap the block in a new container inside a new row
    BlockToNewRow,
    /// Wrap the block in a new container inside an existing row
    BlockToNewContainer,
    /// Insert the block into an existing container
    BlockIntoContainer,
    /// Wrap the container in a new row
    ContainerToNewRow,
    /// Insert the container as-is into an existing row
    ContainerIntoRow,
    /// Pour the container's blocks into another container
    FlattenContainer,
    /// Move the whole row
    RelocateRow,
    /// Pour the row's containers into another row
    UnwrapRow,
    /// Pour every block of the row into one container
    FlattenRow,
}

impl MoveRule {
    /// How many new rows and containers the rule synthesizes
    pub fn new_ids(self) -> usize {
        match self {
            MoveRule::BlockToNewRow => 2,
            MoveRule::BlockToNewContainer | MoveRule::ContainerToNewRow => 1,
            _ => 0,
        }
    }

    pub fn select(kind: DragKind, target: SlotKind) -> MoveRule {
        match (kind, target) {
            (DragKind::Block, SlotKind::Row) => MoveRule::BlockToNewRow,
            (DragKind::Block, SlotKind::Container) => MoveRule::BlockToNewContainer,
            (DragKind::Block, SlotKind::Block) => MoveRule::BlockIntoContainer,
            (DragKind::Container, SlotKind::Row) => MoveRule::ContainerToNewRow,
            (DragKind::Container, SlotKind::Container) => MoveRule::ContainerIntoRow,
            (DragKind::Container, SlotKind::Block) => MoveRule::FlattenContainer,
            (DragKind::Row, SlotKind::Row) => MoveRule::RelocateRow,
            (DragKind::Row, SlotKind::Container) => MoveRule::UnwrapRow,
            (DragKind::Row, SlotKind::Block) => MoveRule::FlattenRow,
        }
    }
}

impl std::fmt::Display for MoveRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoveRule::BlockToNewRow => "block to new row",
            MoveRule::BlockToNewContainer => "block to new container",
            MoveRule::BlockIntoContainer => "block into container",
            MoveRule::ContainerToNewRow => "container to new row",
            MoveRule::ContainerIntoRow => "container into row",
            MoveRule::FlattenContainer => "flatten container",
            MoveRule::RelocateRow => "relocate row",
            MoveRule::UnwrapRow => "unwrap row",
            MoveRule::FlattenRow => "flatten row",
        };
        f.write_str(name)
    }
}

/// Outcome of classifying a valid move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "plan", content = "rule", rename_all = "lowercase")]
pub enum MovePlan {
    /// The layout would come out identical
    Noop,
    Apply(MoveRule),
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate a move against `layout` and decide what it would do.
pub fn plan_move(layout: &Layout, request: &MoveRequest) -> Result<MovePlan, MoveError> {
    let expected = request.kind.home_level();
    if request.from.kind() != expected {
        return Err(MoveError::InvalidAddress {
            role: AddressRole::Source,
            address: request.from,
            fault: AddressFault::KindMismatch {
                kind: request.kind,
                expected,
                found: request.from.kind(),
            },
        });
    }
    check_bounds(layout, &request.from, false).map_err(|fault| MoveError::InvalidAddress {
        role: AddressRole::Source,
        address: request.from,
        fault,
    })?;
    check_bounds(layout, &request.to, true).map_err(|fault| MoveError::InvalidAddress {
        role: AddressRole::Destination,
        address: request.to,
        fault,
    })?;

    if is_noop(&request.from, &request.to) {
        return Ok(MovePlan::Noop);
    }
    Ok(MovePlan::Apply(MoveRule::select(request.kind, request.to.kind())))
}

/// Apply one move, returning the next layout. New wrappers get horizontal
/// orientation.
pub fn apply_move(
    layout: &Layout,
    request: &MoveRequest,
    ids: &mut IdAllocator,
) -> Result<Layout, MoveError> {
    apply_move_with(layout, request, ids, &WrapperConfig::default())
}

/// Apply one move, stamping `wrappers` orientations onto any row or container
/// the move has to create.
///
/// `layout` is never modified: on error the caller still holds the previous
/// layout, and on success the returned layout replaces it.
pub fn apply_move_with(
    layout: &Layout,
    request: &MoveRequest,
    ids: &mut IdAllocator,
    wrappers: &WrapperConfig,
) -> Result<Layout, MoveError> {
    let plan = plan_move(layout, request)?;
    execute(layout, request, plan, ids, wrappers)
}

/// Carry out an already-validated plan. Fails without touching `ids` when
/// the allocator cannot cover every wrapper the rule needs.
pub(crate) fn execute(
    layout: &Layout,
    request: &MoveRequest,
    plan: MovePlan,
    ids: &mut IdAllocator,
    wrappers: &WrapperConfig,
) -> Result<Layout, MoveError> {
    let rule = match plan {
        MovePlan::Noop => {
            debug!(%request, "no-op move");
            return Ok(layout.clone());
        }
        MovePlan::Apply(rule) => rule,
    };
    let needed = rule.new_ids();
    if !ids.can_issue(needed) {
        return Err(MoveError::IdsExhausted { needed });
    }
    debug!(%request, %rule, "applying move");

    let mut rows = layout.rows.clone();
    let mut splice = Splice {
        rows: &mut rows,
        ids,
        wrappers,
    };
    splice.run(request.from, request.to)?;
    Ok(Layout::new(rows))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check every index in `address`. With `slot`, the last index may equal the
/// length of its sequence (an append position); parents must always exist.
fn check_bounds(layout: &Layout, address: &Address, slot: bool) -> Result<(), AddressFault> {
    let fits = |index: usize, len: usize, last: bool| {
        if last && slot { index <= len } else { index < len }
    };

    let rows = &layout.rows;
    let row = address.row_index();
    let row_is_last = address.container_index().is_none();
    if !fits(row, rows.len(), row_is_last) {
        return Err(AddressFault::RowOutOfBounds {
            index: row,
            len: rows.len(),
        });
    }
    let Some(container) = address.container_index() else {
        return Ok(());
    };

    let containers = &rows[row].containers;
    let container_is_last = address.block_index().is_none();
    if !fits(container, containers.len(), container_is_last) {
        return Err(AddressFault::ContainerOutOfBounds {
            row,
            index: container,
            len: containers.len(),
        });
    }
    let Some(block) = address.block_index() else {
        return Ok(());
    };

    let blocks = &containers[container].blocks;
    if !fits(block, blocks.len(), true) {
        return Err(AddressFault::BlockOutOfBounds {
            row,
            container,
            index: block,
            len: blocks.len(),
        });
    }
    Ok(())
}

/// A move whose result is the layout it started from: dropping an element in
/// the gap just before or just after itself, or inside itself.
fn is_noop(from: &Address, to: &Address) -> bool {
    let own_gap = |to: usize, from: usize| to == from || to == from + 1;
    match (*from, *to) {
        (
            Address::Block {
                row,
                container,
                block,
            },
            Address::Block {
                row: to_row,
                container: to_container,
                block: to_block,
            },
        ) => row == to_row && container == to_container && own_gap(to_block, block),
        (
            Address::Container { row, container },
            Address::Container {
                row: to_row,
                container: to_container,
            },
        ) => row == to_row && own_gap(to_container, container),
        (
            Address::Container { row, container },
            Address::Block {
                row: to_row,
                container: to_container,
                ..
            },
        ) => row == to_row && container == to_container,
        (Address::Row { row }, Address::Row { row: to_row }) => own_gap(to_row, row),
        (Address::Row { row }, to) => to.row_index() == row,
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Shift correction
// ---------------------------------------------------------------------------

/// Where an insertion slot ends up once the element at `removed` has been
/// taken out of the same sequence.
fn slot_after_removal(slot: usize, removed: usize) -> usize {
    if slot > removed { slot - 1 } else { slot }
}

/// Where an existing element ends up once something has been inserted at
/// `inserted` in the same sequence.
fn index_after_insertion(index: usize, inserted: usize) -> usize {
    if inserted <= index { index + 1 } else { index }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Working state for one move. Every rule runs the same three steps: take the
/// dragged element out of its parent, place it at the destination (slot
/// corrected for the removal), then prune the old parents (indices corrected
/// for the insertion).
struct Splice<'a> {
    rows: &'a mut Vec<Row>,
    ids: &'a mut IdAllocator,
    wrappers: &'a WrapperConfig,
}

impl Splice<'_> {
    fn run(&mut self, from: Address, to: Address) -> Result<(), MoveError> {
        match (from, to) {
            (
                Address::Block {
                    row,
                    container,
                    block,
                },
                to,
            ) => self.move_block(row, container, block, to),
            (Address::Container { row, container }, to) => self.move_container(row, container, to),
            (Address::Row { row }, to) => {
                self.move_row(row, to);
                Ok(())
            }
        }
    }

    fn fresh_id(&mut self) -> Result<u64, MoveError> {
        self.ids
            .next_id()
            .ok_or(MoveError::IdsExhausted { needed: 1 })
    }

    fn wrap_in_container(&mut self, blocks: Vec<Block>) -> Result<Container, MoveError> {
        Ok(Container::new(
            self.fresh_id()?,
            self.wrappers.container_orientation,
            blocks,
        ))
    }

    fn move_block(
        &mut self,
        row: usize,
        container: usize,
        block: usize,
        to: Address,
    ) -> Result<(), MoveError> {
        let moving = self.rows[row].containers[container].blocks.remove(block);

        let (row, container) = match to {
            Address::Row { row: to_row } => {
                let row_id = self.fresh_id()?;
                let wrapper = self.wrap_in_container(vec![moving])?;
                let new_row = Row::new(row_id, self.wrappers.row_orientation, vec![wrapper]);
                self.rows.insert(to_row, new_row);
                (index_after_insertion(row, to_row), container)
            }
            Address::Container {
                row: to_row,
                container: to_container,
            } => {
                let wrapper = self.wrap_in_container(vec![moving])?;
                self.rows[to_row].containers.insert(to_container, wrapper);
                let container = if to_row == row {
                    index_after_insertion(container, to_container)
                } else {
                    container
                };
                (row, container)
            }
            Address::Block {
                row: to_row,
                container: to_container,
                block: to_block,
            } => {
                let slot = if (to_row, to_container) == (row, container) {
                    slot_after_removal(to_block, block)
                } else {
                    to_block
                };
                self.rows[to_row].containers[to_container]
                    .blocks
                    .insert(slot, moving);
                (row, container)
            }
        };

        prune(self.rows, row, Some(container));
        Ok(())
    }

    fn move_container(&mut self, row: usize, container: usize, to: Address) -> Result<(), MoveError> {
        let moving = self.rows[row].containers.remove(container);

        let row = match to {
            Address::Row { row: to_row } => {
                let new_row = Row::new(
                    self.fresh_id()?,
                    self.wrappers.row_orientation,
                    vec![moving],
                );
                self.rows.insert(to_row, new_row);
                index_after_insertion(row, to_row)
            }
            Address::Container {
                row: to_row,
                container: to_container,
            } => {
                let slot = if to_row == row {
                    slot_after_removal(to_container, container)
                } else {
                    to_container
                };
                self.rows[to_row].containers.insert(slot, moving);
                row
            }
            Address::Block {
                row: to_row,
                container: to_container,
                block: to_block,
            } => {
                let target = if to_row == row {
                    slot_after_removal(to_container, container)
                } else {
                    to_container
                };
                let blocks = &mut self.rows[to_row].containers[target].blocks;
                blocks.splice(to_block..to_block, moving.blocks);
                row
            }
        };

        prune(self.rows, row, None);
        Ok(())
    }

    fn move_row(&mut self, row: usize, to: Address) {
        let moving = self.rows.remove(row);
        let to_row = slot_after_removal(to.row_index(), row);

        match to {
            Address::Row { .. } => self.rows.insert(to_row, moving),
            Address::Container {
                container: to_container,
                ..
            } => {
                let containers = &mut self.rows[to_row].containers;
                containers.splice(to_container..to_container, moving.containers);
            }
            Address::Block {
                container: to_container,
                block: to_block,
                ..
            } => {
                let blocks = &mut self.rows[to_row].containers[to_container].blocks;
                let mut offset = to_block;
                for source in moving.containers {
                    let count = source.blocks.len();
                    blocks.splice(offset..offset, source.blocks);
                    offset += count;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_layout;
    use crate::model::Orientation;
    use pretty_assertions::assert_eq;

    /// Build a layout from block ids. Rows get ids 100.., containers 200..
    fn grid(rows: &[&[&[u64]]]) -> Layout {
        let mut container_id = 200;
        Layout::new(
            rows.iter()
                .enumerate()
                .map(|(r, containers)| {
                    let containers = containers
                        .iter()
                        .map(|blocks| {
                            container_id += 1;
                            Container::new(
                                container_id - 1,
                                Orientation::Horizontal,
                                blocks.iter().map(|&b| Block::new(b, b.to_string())).collect(),
                            )
                        })
                        .collect();
                    Row::new(100 + r as u64, Orientation::Horizontal, containers)
                })
                .collect(),
        )
    }

    /// Block ids per container per row
    fn shape(layout: &Layout) -> Vec<Vec<Vec<u64>>> {
        layout
            .rows
            .iter()
            .map(|r| {
                r.containers
                    .iter()
                    .map(|c| c.blocks.iter().map(|b| b.id).collect())
                    .collect()
            })
            .collect()
    }

    fn row_ids(layout: &Layout) -> Vec<u64> {
        layout.rows.iter().map(|r| r.id).collect()
    }

    fn container_ids(layout: &Layout, row: usize) -> Vec<u64> {
        layout.rows[row].containers.iter().map(|c| c.id).collect()
    }

    fn mv(layout: &Layout, kind: DragKind, from: Address, to: Address) -> Layout {
        let mut ids = IdAllocator::seeded_from(layout);
        apply_move(layout, &MoveRequest::new(kind, from, to), &mut ids).unwrap()
    }

    // --- Block moves ---

    #[test]
    fn block_swaps_within_container() {
        let layout = grid(&[&[&[0, 1, 2]]]);
        let next = mv(
            &layout,
            DragKind::Block,
            Address::block(0, 0, 1),
            Address::block(0, 0, 0),
        );
        assert_eq!(shape(&next), vec![vec![vec![1, 0, 2]]]);
        assert_eq!(next.rows[0].containers[0].id, 200);
    }

    #[test]
    fn block_moves_forward_within_container() {
        let layout = grid(&[&[&[0, 1, 2]]]);
        let next = mv(
            &layout,
            DragKind::Block,
            Address::block(0, 0, 0),
            Address::block(0, 0, 3),
        );
        assert_eq!(shape(&next), vec![vec![vec![1, 2, 0]]]);
    }

    #[test]
    fn block_into_other_row_container() {
        let next = mv(
            &sample_layout(),
            DragKind::Block,
            Address::block(1, 1, 0),
            Address::block(0, 0, 3),
        );
        assert_eq!(
            shape(&next),
            vec![
                vec![vec![0, 1, 2, 9], vec![3, 4, 5]],
                vec![vec![6, 7, 8], vec![10, 11]],
            ]
        );
    }

    #[test]
    fn block_to_new_row_after_last() {
        let layout = grid(&[&[&[0, 1, 2]]]);
        let mut ids = IdAllocator::seeded_from(&layout);
        let request = MoveRequest::new(DragKind::Block, Address::block(0, 0, 0), Address::row(1));
        let next = apply_move(&layout, &request, &mut ids).unwrap();

        assert_eq!(shape(&next), vec![vec![vec![1, 2]], vec![vec![0]]]);
        // Row id is allocated before its container
        assert_eq!(row_ids(&next), vec![100, 201]);
        assert_eq!(container_ids(&next, 1), vec![202]);
        assert_eq!(container_ids(&next, 0), vec![200]);
        assert_eq!(ids.peek(), Some(203));
    }

    #[test]
    fn block_to_new_row_before_its_own_prunes_source() {
        let layout = grid(&[&[&[0]], &[&[1]]]);
        let next = mv(&layout, DragKind::Block, Address::block(0, 0, 0), Address::row(0));
        assert_eq!(shape(&next), vec![vec![vec![0]], vec![vec![1]]]);
        // The old row and container were replaced by fresh wrappers
        assert_eq!(row_ids(&next), vec![202, 101]);
        assert_eq!(container_ids(&next, 0), vec![203]);
    }

    #[test]
    fn last_block_out_prunes_container_and_row() {
        let layout = grid(&[&[&[0]], &[&[1, 2]]]);
        let next = mv(
            &layout,
            DragKind::Block,
            Address::block(0, 0, 0),
            Address::block(1, 0, 1),
        );
        assert_eq!(shape(&next), vec![vec![vec![1, 0, 2]]]);
        assert_eq!(row_ids(&next), vec![101]);
    }

    #[test]
    fn last_block_out_keeps_row_with_other_containers() {
        let layout = grid(&[&[&[0], &[1]], &[&[2]]]);
        let next = mv(
            &layout,
            DragKind::Block,
            Address::block(0, 0, 0),
            Address::block(1, 0, 0),
        );
        assert_eq!(shape(&next), vec![vec![vec![1]], vec![vec![0, 2]]]);
        assert_eq!(container_ids(&next, 0), vec![201]);
    }

    #[test]
    fn block_to_new_container_before_its_own() {
        let layout = sample_layout();
        let mut ids = IdAllocator::seeded_from(&layout);
        let request = MoveRequest::new(
            DragKind::Block,
            Address::block(0, 1, 0),
            Address::container(0, 0),
        );
        let next = apply_move(&layout, &request, &mut ids).unwrap();
        assert_eq!(
            shape(&next)[0],
            vec![vec![3], vec![0, 1, 2], vec![4, 5]]
        );
        assert_eq!(container_ids(&next, 0), vec![12, 0, 1]);
        assert_eq!(ids.peek(), Some(13));
    }

    #[test]
    fn block_to_new_container_after_its_own() {
        let next = mv(
            &sample_layout(),
            DragKind::Block,
            Address::block(0, 0, 2),
            Address::container(0, 2),
        );
        assert_eq!(shape(&next)[0], vec![vec![0, 1], vec![3, 4, 5], vec![2]]);
    }

    #[test]
    fn block_to_new_container_in_other_row() {
        let next = mv(
            &sample_layout(),
            DragKind::Block,
            Address::block(0, 0, 0),
            Address::container(1, 1),
        );
        assert_eq!(
            shape(&next),
            vec![
                vec![vec![1, 2], vec![3, 4, 5]],
                vec![vec![6, 7, 8], vec![0], vec![9, 10, 11]],
            ]
        );
    }

    #[test]
    fn lone_block_rewrapped_in_place() {
        let layout = grid(&[&[&[0]]]);
        let next = mv(
            &layout,
            DragKind::Block,
            Address::block(0, 0, 0),
            Address::container(0, 0),
        );
        assert_eq!(shape(&next), vec![vec![vec![0]]]);
        assert_eq!(row_ids(&next), vec![100]);
        assert_eq!(container_ids(&next, 0), vec![201]);
    }

    #[test]
    fn block_noop_own_slot_and_next() {
        let layout = sample_layout();
        let mut ids = IdAllocator::seeded_from(&layout);
        for to in [Address::block(0, 0, 1), Address::block(0, 0, 2)] {
            let request = MoveRequest::new(DragKind::Block, Address::block(0, 0, 1), to);
            assert_eq!(plan_move(&layout, &request), Ok(MovePlan::Noop));
            let next = apply_move(&layout, &request, &mut ids).unwrap();
            assert_eq!(next, layout);
        }
        assert_eq!(ids.peek(), Some(12));
    }

    // --- Container moves ---

    #[test]
    fn container_to_new_row() {
        let layout = sample_layout();
        let mut ids = IdAllocator::seeded_from(&layout);
        let request = MoveRequest::new(
            DragKind::Container,
            Address::container(1, 0),
            Address::row(0),
        );
        let next = apply_move(&layout, &request, &mut ids).unwrap();
        assert_eq!(
            shape(&next),
            vec![
                vec![vec![6, 7, 8]],
                vec![vec![0, 1, 2], vec![3, 4, 5]],
                vec![vec![9, 10, 11]],
            ]
        );
        assert_eq!(row_ids(&next), vec![12, 0, 1]);
        // The container keeps its identity and orientation
        assert_eq!(next.rows[0].containers[0], layout.rows[1].containers[0]);
    }

    #[test]
    fn lone_container_to_new_row_prunes_old_row() {
        let layout = grid(&[&[&[0, 1]], &[&[2]]]);
        let next = mv(
            &layout,
            DragKind::Container,
            Address::container(0, 0),
            Address::row(2),
        );
        assert_eq!(shape(&next), vec![vec![vec![2]], vec![vec![0, 1]]]);
        assert_eq!(row_ids(&next), vec![101, 202]);
    }

    #[test]
    fn container_reorders_within_row() {
        let next = mv(
            &sample_layout(),
            DragKind::Container,
            Address::container(0, 0),
            Address::container(0, 2),
        );
        assert_eq!(container_ids(&next, 0), vec![1, 0]);
    }

    #[test]
    fn container_into_other_row_prunes_source_row() {
        let layout = grid(&[&[&[0, 1]], &[&[2]]]);
        let next = mv(
            &layout,
            DragKind::Container,
            Address::container(0, 0),
            Address::container(1, 1),
        );
        assert_eq!(shape(&next), vec![vec![vec![2], vec![0, 1]]]);
        assert_eq!(row_ids(&next), vec![101]);
        assert_eq!(container_ids(&next, 0), vec![201, 200]);
    }

    #[test]
    fn container_flattens_into_other_container() {
        let layout = sample_layout();
        let next = mv(
            &layout,
            DragKind::Container,
            Address::container(0, 1),
            Address::block(1, 1, 1),
        );
        assert_eq!(
            shape(&next),
            vec![vec![vec![0, 1, 2]], vec![vec![6, 7, 8], vec![9, 3, 4, 5, 10, 11]]]
        );
        assert_eq!(next.rows[1].containers[1].id, 4);
    }

    #[test]
    fn container_flattens_into_later_sibling() {
        let next = mv(
            &sample_layout(),
            DragKind::Container,
            Address::container(0, 0),
            Address::block(0, 1, 0),
        );
        assert_eq!(shape(&next)[0], vec![vec![0, 1, 2, 3, 4, 5]]);
        assert_eq!(container_ids(&next, 0), vec![1]);
    }

    #[test]
    fn container_noops() {
        let layout = sample_layout();
        for to in [
            Address::container(0, 0),
            Address::container(0, 1),
            Address::block(0, 0, 0),
            Address::block(0, 0, 3),
        ] {
            let request = MoveRequest::new(DragKind::Container, Address::container(0, 0), to);
            assert_eq!(plan_move(&layout, &request), Ok(MovePlan::Noop), "to {}", to);
        }
    }

    // --- Row moves ---

    #[test]
    fn row_relocates() {
        let layout = sample_layout();
        let down = mv(&layout, DragKind::Row, Address::row(0), Address::row(2));
        assert_eq!(row_ids(&down), vec![1, 0]);
        let up = mv(&layout, DragKind::Row, Address::row(1), Address::row(0));
        assert_eq!(row_ids(&up), vec![1, 0]);
        assert_eq!(down, up);
    }

    #[test]
    fn row_unwraps_into_later_row() {
        let next = mv(
            &sample_layout(),
            DragKind::Row,
            Address::row(0),
            Address::container(1, 1),
        );
        assert_eq!(row_ids(&next), vec![1]);
        assert_eq!(container_ids(&next, 0), vec![3, 0, 1, 4]);
    }

    #[test]
    fn row_unwraps_into_earlier_row() {
        let next = mv(
            &sample_layout(),
            DragKind::Row,
            Address::row(1),
            Address::container(0, 0),
        );
        assert_eq!(row_ids(&next), vec![0]);
        assert_eq!(container_ids(&next, 0), vec![3, 4, 0, 1]);
    }

    #[test]
    fn row_flattens_into_container() {
        let layout = grid(&[&[&[0, 1, 2], &[3, 4, 5]], &[&[6, 7]]]);
        let next = mv(
            &layout,
            DragKind::Row,
            Address::row(0),
            Address::block(1, 0, 1),
        );
        assert_eq!(shape(&next), vec![vec![vec![6, 0, 1, 2, 3, 4, 5, 7]]]);
        assert_eq!(row_ids(&next), vec![101]);
    }

    #[test]
    fn row_noops() {
        let layout = sample_layout();
        for to in [
            Address::row(0),
            Address::row(1),
            Address::container(0, 2),
            Address::block(0, 1, 3),
        ] {
            let request = MoveRequest::new(DragKind::Row, Address::row(0), to);
            assert_eq!(plan_move(&layout, &request), Ok(MovePlan::Noop), "to {}", to);
        }
        // Dropping into the next row's containers is a real unwrap
        let request = MoveRequest::new(DragKind::Row, Address::row(0), Address::container(1, 0));
        assert_eq!(
            plan_move(&layout, &request),
            Ok(MovePlan::Apply(MoveRule::UnwrapRow))
        );
    }

    // --- Classification ---

    #[test]
    fn plan_selects_rule_by_kind_and_depth() {
        let layout = sample_layout();
        let cases = [
            (DragKind::Block, Address::block(0, 0, 0), Address::row(2), MoveRule::BlockToNewRow),
            (DragKind::Block, Address::block(0, 0, 0), Address::container(1, 0), MoveRule::BlockToNewContainer),
            (DragKind::Block, Address::block(0, 0, 0), Address::block(1, 0, 0), MoveRule::BlockIntoContainer),
            (DragKind::Container, Address::container(0, 0), Address::row(2), MoveRule::ContainerToNewRow),
            (DragKind::Container, Address::container(0, 0), Address::container(1, 0), MoveRule::ContainerIntoRow),
            (DragKind::Container, Address::container(0, 0), Address::block(1, 0, 0), MoveRule::FlattenContainer),
            (DragKind::Row, Address::row(0), Address::row(2), MoveRule::RelocateRow),
            (DragKind::Row, Address::row(0), Address::container(1, 0), MoveRule::UnwrapRow),
            (DragKind::Row, Address::row(0), Address::block(1, 0, 0), MoveRule::FlattenRow),
        ];
        for (kind, from, to, rule) in cases {
            let request = MoveRequest::new(kind, from, to);
            assert_eq!(plan_move(&layout, &request), Ok(MovePlan::Apply(rule)));
        }
    }

    // --- Errors ---

    #[test]
    fn source_out_of_bounds() {
        let layout = sample_layout();
        let mut ids = IdAllocator::seeded_from(&layout);
        let request = MoveRequest::new(
            DragKind::Block,
            Address::block(0, 0, 3),
            Address::block(0, 0, 0),
        );
        let err = apply_move(&layout, &request, &mut ids).unwrap_err();
        assert_eq!(
            err,
            MoveError::InvalidAddress {
                role: AddressRole::Source,
                address: Address::block(0, 0, 3),
                fault: AddressFault::BlockOutOfBounds {
                    row: 0,
                    container: 0,
                    index: 3,
                    len: 3,
                },
            }
        );
        assert_eq!(ids.peek(), Some(12));
    }

    #[test]
    fn destination_bounds_allow_append_only() {
        let layout = sample_layout();
        let block = Address::block(0, 0, 0);

        let ok = MoveRequest::new(DragKind::Block, block, Address::row(2));
        assert!(plan_move(&layout, &ok).is_ok());

        let err = plan_move(&layout, &MoveRequest::new(DragKind::Block, block, Address::row(3)))
            .unwrap_err();
        assert!(matches!(
            err,
            MoveError::InvalidAddress {
                role: AddressRole::Destination,
                fault: AddressFault::RowOutOfBounds { index: 3, len: 2 },
                ..
            }
        ));

        let err = plan_move(
            &layout,
            &MoveRequest::new(DragKind::Block, block, Address::container(2, 0)),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MoveError::InvalidAddress {
                fault: AddressFault::RowOutOfBounds { index: 2, len: 2 },
                ..
            }
        ));

        let err = plan_move(
            &layout,
            &MoveRequest::new(DragKind::Block, block, Address::block(0, 2, 0)),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MoveError::InvalidAddress {
                fault: AddressFault::ContainerOutOfBounds { row: 0, index: 2, len: 2 },
                ..
            }
        ));
    }

    #[test]
    fn kind_must_match_source_depth() {
        let layout = sample_layout();
        let request = MoveRequest::new(
            DragKind::Container,
            Address::block(0, 0, 0),
            Address::row(0),
        );
        let err = plan_move(&layout, &request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid source address 0/0/0: a container is addressed by a container slot, not a block slot"
        );
    }

    #[test]
    fn wrappers_use_configured_orientation() {
        let layout = grid(&[&[&[0, 1]]]);
        let mut ids = IdAllocator::seeded_from(&layout);
        let wrappers = WrapperConfig {
            row_orientation: Orientation::Vertical,
            container_orientation: Orientation::Vertical,
        };
        let request = MoveRequest::new(DragKind::Block, Address::block(0, 0, 1), Address::row(0));
        let next = apply_move_with(&layout, &request, &mut ids, &wrappers).unwrap();
        assert_eq!(next.rows[0].orientation, Orientation::Vertical);
        assert_eq!(next.rows[0].containers[0].orientation, Orientation::Vertical);
    }

    #[test]
    fn promotion_needs_unused_ids() {
        let layout = grid(&[&[&[u64::MAX - 1, u64::MAX]]]);
        let mut ids = IdAllocator::seeded_from(&layout);
        assert_eq!(ids.peek(), None);

        let to_container = MoveRequest::new(
            DragKind::Block,
            Address::block(0, 0, 0),
            Address::container(0, 1),
        );
        assert_eq!(
            apply_move(&layout, &to_container, &mut ids),
            Err(MoveError::IdsExhausted { needed: 1 })
        );

        let swap = MoveRequest::new(DragKind::Block, Address::block(0, 0, 1), Address::block(0, 0, 0));
        let swapped = apply_move(&layout, &swap, &mut ids).unwrap();
        assert_eq!(shape(&swapped), vec![vec![vec![u64::MAX, u64::MAX - 1]]]);
    }

    #[test]
    fn new_row_needs_two_ids_or_none_are_used() {
        let layout = grid(&[&[&[1, 2]]]);
        let mut ids = IdAllocator::starting_at(u64::MAX);
        let to_row = MoveRequest::new(DragKind::Block, Address::block(0, 0, 0), Address::row(1));
        assert_eq!(
            apply_move(&layout, &to_row, &mut ids),
            Err(MoveError::IdsExhausted { needed: 2 })
        );
        assert_eq!(ids.peek(), Some(u64::MAX));

        let to_container = MoveRequest::new(
            DragKind::Block,
            Address::block(0, 0, 0),
            Address::container(0, 1),
        );
        let moved = apply_move(&layout, &to_container, &mut ids).unwrap();
        assert_eq!(container_ids(&moved, 0), vec![200, u64::MAX]);
        assert_eq!(ids.peek(), None);
    }

    #[test]
    fn request_description() {
        let request = MoveRequest::new(
            DragKind::Block,
            Address::block(0, 0, 1),
            Address::block(0, 0, 0),
        );
        assert_eq!(request.to_string(), "move block 0/0/1 -> 0/0/0 (block slot)");
    }
}
