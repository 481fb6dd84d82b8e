use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mapsketch::Config;
use mapsketch::draw::GraphicsPresentation;
use mapsketch::input::InputState;
use mapsketch::input::events::is_blank_or_comment;
use mapsketch::sketch::DrawMode;
use mapsketch::ui;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mapsketch")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MAPSKETCH_GIT_HASH"), ")"),
    about = "Interactive map sketching: draw, undo, and commit geometries as graphics"
)]
struct Cli {
    /// Use this config file instead of ~/.config/mapsketch/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Draw mode to start in (point, multipoint, polyline, polygon,
    /// freehand-polyline, freehand-polygon)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<DrawMode>,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut state = InputState::from_config(&config)?;
    state.controller.watch_history(Box::new(|history| {
        log::debug!(
            "History changed: undo={} redo={}",
            history.can_undo,
            history.can_redo
        );
    }));

    if let Some(mode) = cli.mode {
        state.controller.select_mode(mode);
    }

    if state.show_help {
        for line in state.help_lines() {
            println!("{line}");
        }
    }

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    run(&mut state, reader)?;

    log::info!(
        "Session ended with {} graphic(s) on the map",
        state.controller.presentation().len()
    );
    Ok(())
}

/// Feeds input lines to the state until input ends or exit is requested.
fn run(state: &mut InputState, reader: Box<dyn BufRead>) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if is_blank_or_comment(&line) {
            continue;
        }

        match state.on_line(&line) {
            Ok(output) => {
                for text in output {
                    println!("{text}");
                }
            }
            Err(err) => println!("error: {err}"),
        }

        if state.should_exit {
            break;
        }
        if state.show_status_bar {
            println!("{}", ui::status_line(&state.controller));
        }
    }
    Ok(())
}
