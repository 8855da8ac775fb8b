use crate::ops::reorder::MoveRequest;

use super::ParseError;
use super::address_parser::{parse_address, parse_drag_kind};

/// One move read from a script, with its 1-based source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptMove {
    pub line: usize,
    pub request: MoveRequest,
}

/// Parse a move script: one `<kind> <from> <to>` per line. Blank lines and
/// lines starting with `#` are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptMove>, ParseError> {
    let mut moves = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let request = parse_move(trimmed).map_err(|e| ParseError::AtLine {
            line,
            source: Box::new(e),
        })?;
        moves.push(ScriptMove { line, request });
    }
    Ok(moves)
}

/// Parse a single `<kind> <from> <to>` move.
pub fn parse_move(text: &str) -> Result<MoveRequest, ParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [kind, from, to] = fields[..] else {
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    };
    Ok(MoveRequest::new(
        parse_drag_kind(kind)?,
        parse_address(from)?,
        parse_address(to)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, DragKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_comments_and_blank_lines() {
        let script = "\
# reshuffle the first row

block 0/0/1 0/0/0
  container 0/1 1
row 1 0/0/2
";
        let moves = parse_script(script).unwrap();
        assert_eq!(
            moves,
            vec![
                ScriptMove {
                    line: 3,
                    request: MoveRequest::new(
                        DragKind::Block,
                        Address::block(0, 0, 1),
                        Address::block(0, 0, 0),
                    ),
                },
                ScriptMove {
                    line: 4,
                    request: MoveRequest::new(
                        DragKind::Container,
                        Address::container(0, 1),
                        Address::row(1),
                    ),
                },
                ScriptMove {
                    line: 5,
                    request: MoveRequest::new(
                        DragKind::Row,
                        Address::row(1),
                        Address::block(0, 0, 2),
                    ),
                },
            ]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse_script("block 0/0/0 1\nblock 0/0/0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: expected '<kind> <from> <to>', found 2 fields"
        );

        let err = parse_script("\n\nshelf 0 1\n").unwrap_err();
        assert!(matches!(err, ParseError::AtLine { line: 3, .. }));
    }

    #[test]
    fn empty_script() {
        assert_eq!(parse_script("").unwrap(), vec![]);
        assert_eq!(parse_script("# nothing\n\n").unwrap(), vec![]);
    }
}
