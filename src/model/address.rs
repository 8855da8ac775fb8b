use serde::{Serialize, Serializer};

/// Which kind of element is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Block,
    Container,
    Row,
}

impl DragKind {
    pub const ALL: [DragKind; 3] = [DragKind::Block, DragKind::Container, DragKind::Row];

    /// The depth at which an element of this kind lives, and therefore the
    /// kind of address that names it as a move source.
    pub fn home_level(self) -> SlotKind {
        match self {
            DragKind::Block => SlotKind::Block,
            DragKind::Container => SlotKind::Container,
            DragKind::Row => SlotKind::Row,
        }
    }
}

impl std::fmt::Display for DragKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragKind::Block => write!(f, "block"),
            DragKind::Container => write!(f, "container"),
            DragKind::Row => write!(f, "row"),
        }
    }
}

/// Depth of a slot in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// A position among rows
    Row,
    /// A position among the containers of one row
    Container,
    /// A position among the blocks of one container
    Block,
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotKind::Row => write!(f, "row slot"),
            SlotKind::Container => write!(f, "container slot"),
            SlotKind::Block => write!(f, "block slot"),
        }
    }
}

/// Locates either an existing element or an insertion slot.
///
/// As a source, an address names the element at that position. As a
/// destination, it names the gap *before* that position, so an index equal to
/// the sequence length means "append".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    Row {
        row: usize,
    },
    Container {
        row: usize,
        container: usize,
    },
    Block {
        row: usize,
        container: usize,
        block: usize,
    },
}

impl Address {
    pub fn row(row: usize) -> Self {
        Address::Row { row }
    }

    pub fn container(row: usize, container: usize) -> Self {
        Address::Container { row, container }
    }

    pub fn block(row: usize, container: usize, block: usize) -> Self {
        Address::Block {
            row,
            container,
            block,
        }
    }

    /// Build an address from the optional-field encoding used by drop-zone
    /// coordinates. A block index without a container index has no meaning.
    pub fn from_parts(row: usize, container: Option<usize>, block: Option<usize>) -> Option<Self> {
        match (container, block) {
            (None, None) => Some(Address::row(row)),
            (Some(container), None) => Some(Address::container(row, container)),
            (Some(container), Some(block)) => Some(Address::block(row, container, block)),
            (None, Some(_)) => None,
        }
    }

    /// Classify the slot depth this address points at
    pub fn kind(&self) -> SlotKind {
        match self {
            Address::Row { .. } => SlotKind::Row,
            Address::Container { .. } => SlotKind::Container,
            Address::Block { .. } => SlotKind::Block,
        }
    }

    pub fn row_index(&self) -> usize {
        match *self {
            Address::Row { row } | Address::Container { row, .. } | Address::Block { row, .. } => {
                row
            }
        }
    }

    pub fn container_index(&self) -> Option<usize> {
        match *self {
            Address::Row { .. } => None,
            Address::Container { container, .. } | Address::Block { container, .. } => {
                Some(container)
            }
        }
    }

    pub fn block_index(&self) -> Option<usize> {
        match *self {
            Address::Block { block, .. } => Some(block),
            _ => None,
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Address::Row { row } => write!(f, "{}", row),
            Address::Container { row, container } => write!(f, "{}/{}", row, container),
            Address::Block {
                row,
                container,
                block,
            } => write!(f, "{}/{}/{}", row, container, block),
        }
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
