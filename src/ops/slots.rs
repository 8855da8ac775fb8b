use serde::Serialize;

use crate::model::address::{Address, DragKind};
use crate::model::layout::Layout;

/// A place a dragged element can be dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropTarget {
    pub address: Address,
    pub accepts: Vec<DragKind>,
}

/// An element that can be picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Draggable {
    pub kind: DragKind,
    pub address: Address,
}

fn target(address: Address) -> DropTarget {
    // Every depth accepts every kind; the engine promotes or flattens as needed.
    DropTarget {
        address,
        accepts: DragKind::ALL.to_vec(),
    }
}

/// Every insertion slot in presentation order: each row is preceded by its
/// row slot, each container by its container slot and followed by its block
/// slots, and each sequence ends with an append slot.
pub fn drop_targets(layout: &Layout) -> Vec<DropTarget> {
    let mut targets = Vec::new();
    for (r, row) in layout.rows.iter().enumerate() {
        targets.push(target(Address::row(r)));
        for (c, container) in row.containers.iter().enumerate() {
            targets.push(target(Address::container(r, c)));
            for b in 0..=container.blocks.len() {
                targets.push(target(Address::block(r, c, b)));
            }
        }
        targets.push(target(Address::container(r, row.containers.len())));
    }
    targets.push(target(Address::row(layout.rows.len())));
    targets
}

/// Every existing row, container and block, outermost first.
pub fn draggables(layout: &Layout) -> Vec<Draggable> {
    let mut items = Vec::new();
    for (r, row) in layout.rows.iter().enumerate() {
        items.push(Draggable {
            kind: DragKind::Row,
            address: Address::row(r),
        });
        for (c, container) in row.containers.iter().enumerate() {
            items.push(Draggable {
                kind: DragKind::Container,
                address: Address::container(r, c),
            });
            for b in 0..container.blocks.len() {
                items.push(Draggable {
                    kind: DragKind::Block,
                    address: Address::block(r, c, b),
                });
            }
        }
    }
    items
}
