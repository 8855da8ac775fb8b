use crate::model::config::WrapperConfig;
use crate::model::layout::Layout;
use crate::ops::ids::IdAllocator;
use crate::ops::reorder::{self, MoveError, MovePlan, MoveRequest};

/// The caller-side state between moves: the current layout plus the id
/// allocator and wrapper settings every move needs.
///
/// A failed move leaves the board exactly as it was.
#[derive(Debug, Clone)]
pub struct Board {
    layout: Layout,
    ids: IdAllocator,
    wrappers: WrapperConfig,
    last_move: Option<String>,
}

impl Board {
    /// Start from `layout` with an allocator seeded above its ids.
    pub fn new(layout: Layout) -> Self {
        let ids = IdAllocator::seeded_from(&layout);
        Board {
            layout,
            ids,
            wrappers: WrapperConfig::default(),
            last_move: None,
        }
    }

    pub fn with_wrappers(mut self, wrappers: WrapperConfig) -> Self {
        self.wrappers = wrappers;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn into_layout(self) -> Layout {
        self.layout
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Description of the last move that was accepted
    pub fn last_move(&self) -> Option<&str> {
        self.last_move.as_deref()
    }

    pub fn apply(&mut self, request: &MoveRequest) -> Result<MovePlan, MoveError> {
        let plan = reorder::plan_move(&self.layout, request)?;
        self.layout = reorder::execute(&self.layout, request, plan, &mut self.ids, &self.wrappers)?;
        self.last_move = Some(request.to_string());
        Ok(plan)
    }
}
