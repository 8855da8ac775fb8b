use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::model::address::{Address, DragKind};

#[derive(Parser)]
#[command(name = "rk", about = concat!("[=] rack v", env!("CARGO_PKG_VERSION"), " - rows, containers, blocks"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of searching for rack.toml
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the sample layout as JSON
    Sample,
    /// Render a layout
    Show(LayoutArgs),
    /// Apply one move
    Mv(MvArgs),
    /// Apply a script of moves
    Replay(ReplayArgs),
    /// List drop targets and draggable elements
    Slots(LayoutArgs),
    /// Validate a layout
    Check(LayoutArgs),
    /// Count rows, containers and blocks
    Stats(LayoutArgs),
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Layout JSON file
    pub layout: PathBuf,
}

#[derive(Args)]
pub struct MvArgs {
    /// Layout JSON file
    pub layout: PathBuf,
    /// What is dragged: block, container or row
    pub kind: DragKind,
    /// Address of the dragged element (row, row/container, row/container/block)
    pub from: Address,
    /// Destination slot address
    pub to: Address,
    /// Write the resulting layout here instead of printing it
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Layout JSON file
    pub layout: PathBuf,
    /// Move script, one `<kind> <from> <to>` per line
    pub script: PathBuf,
    /// Write the resulting layout here instead of printing it
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}
