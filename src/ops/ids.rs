use crate::model::layout::Layout;

/// Issues ids for rows and containers created when a move promotes an
/// element. Ids are handed out in increasing order and never reused; once
/// `u64::MAX` has been issued (or is already taken) the allocator is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl IdAllocator {
    /// Start issuing at exactly `next`.
    pub fn starting_at(next: u64) -> Self {
        IdAllocator { next: Some(next) }
    }

    /// Start above every id already present in `layout`. A layout that
    /// already uses `u64::MAX` gets a spent allocator.
    pub fn seeded_from(layout: &Layout) -> Self {
        let next = match layout.max_id() {
            None => Some(0),
            Some(max) => max.checked_add(1),
        };
        IdAllocator { next }
    }

    /// The id the next call to [`IdAllocator::next_id`] will return.
    pub fn peek(&self) -> Option<u64> {
        self.next
    }

    /// Whether `count` more ids can be issued.
    pub fn can_issue(&self, count: usize) -> bool {
        match count {
            0 => true,
            n => self
                .next
                .is_some_and(|next| next.checked_add(n as u64 - 1).is_some()),
        }
    }

    /// Issue the next id, or `None` when every id has been used.
    pub fn next_id(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        tracing::trace!(id, "allocated wrapper id");
        Some(id)
    }
}
