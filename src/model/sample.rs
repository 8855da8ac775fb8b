use super::block::Block;
use super::container::{Container, Orientation};
use super::layout::Layout;
use super::row::Row;

/// The seed layout: two rows of two containers, twelve blocks.
pub fn sample_layout() -> Layout {
    let container = |id: u64, orientation: Orientation, first: u64, texts: [&str; 3]| {
        let blocks = texts
            .iter()
            .zip(first..)
            .map(|(text, id)| Block::new(id, *text))
            .collect();
        Container::new(id, orientation, blocks)
    };

    Layout::new(vec![
        Row::new(
            0,
            Orientation::Horizontal,
            vec![
                container(0, Orientation::Horizontal, 0, ["One", "Two", "Three"]),
                container(1, Orientation::Vertical, 3, ["Four", "Five", "Six"]),
            ],
        ),
        Row::new(
            1,
            Orientation::Horizontal,
            vec![
                container(3, Orientation::Vertical, 6, ["Seven", "Eight", "Nine"]),
                container(4, Orientation::Horizontal, 9, ["Ten", "Eleven", "Twelve"]),
            ],
        ),
    ])
}
