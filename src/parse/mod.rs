pub mod address_parser;
pub mod script_parser;

pub use address_parser::{parse_address, parse_drag_kind};
pub use script_parser::{ScriptMove, parse_move, parse_script};

/// Error type for text parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty address")]
    EmptyAddress,
    #[error("invalid address '{0}': expected row, row/container or row/container/block")]
    MalformedAddress(String),
    #[error("invalid index '{index}' in address '{address}'")]
    BadIndex { address: String, index: String },
    #[error("unknown element kind '{0}' (expected block, container or row)")]
    UnknownKind(String),
    #[error("expected '<kind> <from> <to>', found {found} fields")]
    FieldCount { found: usize },
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        source: Box<ParseError>,
    },
}
