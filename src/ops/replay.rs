use tracing::info;

use crate::ops::board::Board;
use crate::ops::reorder::{MoveError, MovePlan};
use crate::parse::ScriptMove;

/// A script move that could not be applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ReplayError {
    pub line: usize,
    pub source: MoveError,
}

/// Counts from a successful replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReplaySummary {
    pub applied: usize,
    pub noops: usize,
}

/// Apply `moves` in order. Either every move is accepted and `board` holds
/// the final layout, or the first failure is returned and `board` is left
/// as it was before the call.
pub fn replay(board: &mut Board, moves: &[ScriptMove]) -> Result<ReplaySummary, ReplayError> {
    let mut working = board.clone();
    let mut summary = ReplaySummary::default();
    for mv in moves {
        let plan = working.apply(&mv.request).map_err(|source| ReplayError {
            line: mv.line,
            source,
        })?;
        match plan {
            MovePlan::Noop => summary.noops += 1,
            MovePlan::Apply(_) => summary.applied += 1,
        }
    }
    info!(applied = summary.applied, noops = summary.noops, "replayed script");
    *board = working;
    Ok(summary)
}
