use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, layout_io};
use crate::model::config::Config;
use crate::model::layout::Layout;
use crate::model::sample::sample_layout;
use crate::ops::board::Board;
use crate::ops::reorder::{MovePlan, MoveRequest};
use crate::ops::{check, replay, slots};
use crate::parse::parse_script;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Sample => cmd_sample(),
        Commands::Show(args) => cmd_show(args, config, json),
        Commands::Mv(args) => cmd_mv(args, config, json),
        Commands::Replay(args) => cmd_replay(args, config, json),
        Commands::Slots(args) => cmd_slots(args, json),
        Commands::Check(args) => cmd_check(args, json),
        Commands::Stats(args) => cmd_stats(args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The `-c` file if given, else the nearest `rack.toml`, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    Ok(config_io::load_config(explicit, &cwd)?)
}

/// Print the layout, or write it as JSON when an output path was given.
fn emit_layout(layout: &Layout, output: Option<&Path>, config: &Config, json: bool) -> CmdResult {
    match output {
        Some(path) => {
            layout_io::write_layout(path, layout)?;
            info!(path = %path.display(), "wrote layout");
        }
        None if json => print!("{}", layout_io::layout_to_json(layout)?),
        None => println!("{}", render_layout(layout, &config.render)),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_sample() -> CmdResult {
    print!("{}", layout_io::layout_to_json(&sample_layout())?);
    Ok(())
}

fn cmd_show(args: LayoutArgs, config: Option<&Path>, json: bool) -> CmdResult {
    let config = load_config(config)?;
    let layout = layout_io::read_layout(&args.layout)?;
    emit_layout(&layout, None, &config, json)
}

fn cmd_mv(args: MvArgs, config: Option<&Path>, json: bool) -> CmdResult {
    let config = load_config(config)?;
    let layout = layout_io::read_layout(&args.layout)?;
    let mut board = Board::new(layout).with_wrappers(config.wrappers);
    let request = MoveRequest::new(args.kind, args.from, args.to);

    match board.apply(&request)? {
        MovePlan::Noop => eprintln!("no-op: {}", request),
        MovePlan::Apply(rule) => eprintln!("{} [{}]", request, rule),
    }
    emit_layout(board.layout(), args.output.as_deref(), &config, json)
}

fn cmd_replay(args: ReplayArgs, config: Option<&Path>, json: bool) -> CmdResult {
    let config = load_config(config)?;
    let layout = layout_io::read_layout(&args.layout)?;
    let script = fs::read_to_string(&args.script).map_err(|e| layout_io::LoadError::ReadError {
        path: args.script.clone(),
        source: e,
    })?;
    let moves = parse_script(&script)?;

    let mut board = Board::new(layout).with_wrappers(config.wrappers);
    let summary = replay::replay(&mut board, &moves)?;
    eprintln!(
        "replayed {} moves ({} applied, {} no-op)",
        moves.len(),
        summary.applied,
        summary.noops
    );
    if let Some(last) = board.last_move() {
        eprintln!("last: {}", last);
    }
    emit_layout(board.layout(), args.output.as_deref(), &config, json)
}

fn cmd_slots(args: LayoutArgs, json: bool) -> CmdResult {
    let layout = layout_io::read_layout(&args.layout)?;
    let targets = slots::drop_targets(&layout);
    let items = slots::draggables(&layout);
    if json {
        let output = SlotsJson {
            drop_targets: &targets,
            draggables: &items,
        };
        println!("{}", to_json(&output)?);
    } else {
        println!("{}", render_slots(&targets, &items));
    }
    Ok(())
}

fn cmd_check(args: LayoutArgs, json: bool) -> CmdResult {
    let layout = layout_io::read_layout(&args.layout)?;
    let result = check::check_layout(&layout);
    if json {
        println!("{}", to_json(&result)?);
    } else {
        println!("{}", render_check(&result));
    }
    if result.valid {
        Ok(())
    } else {
        Err(format!("{} problem(s) found", result.errors.len()).into())
    }
}

fn cmd_stats(args: LayoutArgs, json: bool) -> CmdResult {
    let layout = layout_io::read_layout(&args.layout)?;
    let stats = layout.stats();
    if json {
        println!("{}", to_json(&stats)?);
    } else {
        println!("{}", render_stats(&stats));
    }
    Ok(())
}
