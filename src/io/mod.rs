pub mod config_io;
pub mod layout_io;

pub use config_io::{discover_config, load_config, read_config};
pub use layout_io::{LoadError, atomic_write, read_layout, write_layout};
