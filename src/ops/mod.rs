pub mod board;
pub mod check;
pub mod ids;
pub mod prune;
pub mod reorder;
pub mod replay;
pub mod slots;
