use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gridsketch::config::Config;
use gridsketch::draw::render_svg;
use gridsketch::input::{InteractionMode, ModeStore};
use gridsketch::session::{self, InputEvent, Session};
use gridsketch::viewport::SurfaceLayout;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// SVG document (grid, segments, in-progress segment)
    Svg,
    /// JSON scene snapshot
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "gridsketch")]
#[command(version, about = "Replay recorded input through the grid-snapped line editor")]
struct Cli {
    /// Event script to replay (TOML with [[event]] tables)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Config file to use instead of ~/.config/gridsketch/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial surface width in pixels
    #[arg(long, default_value_t = 1500.0)]
    width: f64,

    /// Initial surface height in pixels
    #[arg(long, default_value_t = 1500.0)]
    height: f64,

    /// Start in drag mode instead of draw mode
    #[arg(long)]
    drag_mode: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write output here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let initial_mode = if cli.drag_mode || config.editor.start_in_drag_mode {
        InteractionMode::Drag
    } else {
        InteractionMode::Draw
    };

    let mut session = Session::new(&config, ModeStore::new(initial_mode))?;
    session.dispatch(InputEvent::Resize(SurfaceLayout::sized(cli.width, cli.height)));

    let events = session::load_script(&cli.script)?;
    log::info!("Replaying {} event(s)", events.len());
    session.replay(events);

    let scene = session.scene();
    log::info!(
        "Scene has {} segment(s), view box {}",
        scene.segments.len(),
        scene.view_box
    );

    let rendered = match cli.format {
        OutputFormat::Svg => render_svg(&scene),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&scene).context("Failed to serialize scene")?;
            json.push('\n');
            json
        }
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
