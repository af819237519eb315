use anyhow::Context;
use boopadoop::config::Config;
use boopadoop::export::{save_png, write_png};
use boopadoop::playback::{Player, Script};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BOOPADOOP_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "boopadoop")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Raster sketchpad with undoable strokes, stickers and PNG export"
)]
struct Cli {
    /// Write the documented example config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Config file to use instead of ~/.config/boopadoop/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a JSON input script and export the drawing as PNG
    Play {
        /// Script to replay
        script: PathBuf,

        /// PNG path to write (default: timestamped file in the export directory)
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,

        /// Export resolution multiplier (overrides [export] scale)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16))]
        scale: Option<u32>,

        /// Playback frame rate (overrides [playback] fps)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
        fps: Option<u32>,

        /// Apply frames back to back instead of pacing them on a timer
        #[arg(long, action = ArgAction::SetTrue)]
        unpaced: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => {
                Config::create_default_file_at(path)?;
                path.clone()
            }
            None => Config::create_default_file()?,
        };
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    match cli.command {
        Some(Commands::Play {
            script,
            output,
            scale,
            fps,
            unpaced,
        }) => {
            let config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            play(&config, &script, output.as_deref(), scale, fps, unpaced)?;
        }
        None => {
            println!("boopadoop: Raster sketchpad with undoable strokes, stickers and PNG export");
            println!();
            println!("Usage:");
            println!("  boopadoop play <SCRIPT> [--output PATH]   Replay a script and export PNG");
            println!("  boopadoop --init-config                   Write the example config");
            println!("  boopadoop --help                          Show help");
        }
    }

    Ok(())
}

fn play(
    config: &Config,
    script_path: &Path,
    output: Option<&Path>,
    scale: Option<u32>,
    fps: Option<u32>,
    unpaced: bool,
) -> anyhow::Result<()> {
    let script = Script::load(script_path)?;
    let scale = scale.unwrap_or(config.export.scale);
    let player = Player::new(script, config, scale)?;

    let report = if unpaced {
        player.run_unpaced()?
    } else {
        player.run(fps.unwrap_or(config.playback.fps))?
    };
    log::info!(
        "Playback finished after {} frames with {} commands",
        report.frames,
        report.commands
    );

    let final_path = match output {
        Some(path) => write_png(&report.final_png, path),
        None => save_png(&report.final_png, &config.export),
    }
    .context("Failed to save export")?;

    for (index, png) in report.snapshots.iter().enumerate() {
        let path = numbered_path(&final_path, index + 1);
        write_png(png, &path)
            .with_context(|| format!("Failed to save snapshot {}", path.display()))?;
        println!("{}", path.display());
    }

    println!("{}", final_path.display());
    Ok(())
}

/// `out/sketch.png` -> `out/sketch-2.png`
fn numbered_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sketch".to_string());
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}-{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{index}"),
    };
    path.with_file_name(file_name)
}
