use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use swipedots_core::*;

use command::Command;
use render::{Board, Summary};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Level descriptor to play, TOML or JSON by extension
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Drag distance that covers one cell
    #[arg(short, long)]
    pitch: Option<f32>,

    /// Force a seed for the dot tints instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// How long a cleared board stays up before it resets
    #[arg(long, default_value_t = 1000)]
    reset_delay_ms: u64,

    /// Print snapshots as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn load_level(path: &Path) -> anyhow::Result<Level> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read level {}", path.display()))?;

    let level = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Level::from_json(&text)?,
        _ => {
            let level: Level = toml::from_str(&text)
                .with_context(|| format!("Could not parse level {}", path.display()))?;
            level.validate()?;
            level
        }
    };
    Ok(level)
}

fn show(grid: &Grid, json: bool) {
    let snapshot = GridSnapshot::from_grid(grid);
    if json {
        println!("{}", snapshot.to_json());
    } else {
        println!("{}", Board(&snapshot));
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let level = match &args.level {
        Some(path) => load_level(path)?,
        None => Level::default(),
    };
    let pitch = args.pitch.map(CellPitch::new).transpose()?.unwrap_or_default();
    let options = GridOptions {
        pitch,
        seed: args.seed,
    };
    let mut grid = Grid::with_options(level, options)?;
    let reset_delay = Duration::from_millis(args.reset_delay_ms);
    log::debug!("seed: {:?}, pitch: {}", args.seed, pitch.get());

    show(&grid, args.json);
    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err:#}");
                continue;
            }
        };

        let walk = match command {
            Command::Drag(translation) => grid.drag(translation),
            Command::Walk(stroke) => grid.walk(stroke),
            Command::Reset => {
                grid.reset_grid();
                show(&grid, args.json);
                continue;
            }
            Command::Show => {
                show(&grid, args.json);
                continue;
            }
            Command::Quit => break,
        };

        println!("{}", Summary(&walk));
        if walk.outcome.has_update() {
            show(&grid, args.json);
        }
        if walk.outcome.is_won() {
            println!("Level cleared!");
            thread::sleep(reset_delay);
            grid.reset_grid();
            show(&grid, args.json);
        }
    }

    Ok(())
}
