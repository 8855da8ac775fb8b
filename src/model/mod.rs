pub mod address;
pub mod block;
pub mod config;
pub mod container;
pub mod layout;
pub mod row;
pub mod sample;

pub use address::*;
pub use block::*;
pub use config::*;
pub use container::*;
pub use layout::*;
pub use row::*;
pub use sample::*;
