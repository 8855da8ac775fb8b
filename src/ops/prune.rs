use crate::model::row::Row;

/// Ids of the nodes removed by one pruning pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pruned {
    pub container: Option<u64>,
    pub row: Option<u64>,
}

/// Drop the container at `container` in `rows[row]` if it has no blocks left,
/// then drop the row itself if it has no containers left.
///
/// Only the one container and one row named are ever considered, and a node
/// that still has children is never removed.
pub fn prune(rows: &mut Vec<Row>, row: usize, container: Option<usize>) -> Pruned {
    let mut pruned = Pruned::default();
    let Some(target) = rows.get_mut(row) else {
        return pruned;
    };

    if let Some(c) = container
        && target.containers.get(c).is_some_and(|c| c.is_empty())
    {
        let removed = target.containers.remove(c);
        tracing::trace!(row, container = c, id = removed.id, "pruned empty container");
        pruned.container = Some(removed.id);
    }

    if target.is_empty() {
        let removed = rows.remove(row);
        tracing::trace!(row, id = removed.id, "pruned empty row");
        pruned.row = Some(removed.id);
    }

    pruned
}
