use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use sweeper_core::{CellCount, Coord, Game};

mod command;
mod config;
mod render;
mod session;

use config::{ConfigFile, Overrides, Settings, WindowSize};
use session::{Output, Session};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board width in tiles
    #[arg(long)]
    width: Option<Coord>,

    /// Board height in tiles
    #[arg(long)]
    height: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// TOML file with [board] and [window] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window size in pixels, as WIDTHxHEIGHT
    #[arg(long, value_parser = config::parse_window)]
    window: Option<WindowSize>,

    /// Print every frame as a JSON snapshot
    #[arg(long)]
    json: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            height: self.height,
            mines: self.mines,
            window: self.window,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let settings = Settings::resolve(args.overrides(), file);
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("seed: {}", seed);

    let mut game = Game::new(settings.board, seed).with_context(|| {
        format!(
            "starting a {}x{} game with {} mines",
            settings.board.width, settings.board.height, settings.board.mines
        )
    })?;
    game.resize(settings.window.viewport());

    let output = if args.json { Output::Json } else { Output::Text };
    let mut session = Session::new(game, io::stdin().lock(), io::stdout().lock(), output);
    session.run()
}
