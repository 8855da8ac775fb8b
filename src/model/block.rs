use serde::{Deserialize, Serialize};

/// A leaf content unit. Identity is the id; the text never changes once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: u64,
    pub text: String,
}

impl Block {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Block {
            id,
            text: text.into(),
        }
    }
}
