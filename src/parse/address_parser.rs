use std::str::FromStr;

use crate::model::address::{Address, DragKind};

use super::ParseError;

/// Parse `row`, `row/container` or `row/container/block`. Whitespace around
/// the separators is ignored.
pub fn parse_address(text: &str) -> Result<Address, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyAddress);
    }

    let mut indices = Vec::with_capacity(3);
    for part in trimmed.split('/') {
        let part = part.trim();
        let index = part.parse::<usize>().map_err(|_| ParseError::BadIndex {
            address: trimmed.to_string(),
            index: part.to_string(),
        })?;
        indices.push(index);
    }

    match indices[..] {
        [row] => Ok(Address::row(row)),
        [row, container] => Ok(Address::container(row, container)),
        [row, container, block] => Ok(Address::block(row, container, block)),
        _ => Err(ParseError::MalformedAddress(trimmed.to_string())),
    }
}

/// Parse `block`, `container` or `row`, case-insensitively.
pub fn parse_drag_kind(text: &str) -> Result<DragKind, ParseError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "block" => Ok(DragKind::Block),
        "container" => Ok(DragKind::Container),
        "row" => Ok(DragKind::Row),
        _ => Err(ParseError::UnknownKind(text.trim().to_string())),
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl FromStr for DragKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_drag_kind(s)
    }
}
