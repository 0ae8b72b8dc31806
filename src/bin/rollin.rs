use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rollin::{Direction, RenderConfig, config};

#[derive(Parser, Debug)]
#[command(
    name = "rollin",
    version,
    about = "Generate a looping rotating GIF from a still image."
)]
struct Cli {
    /// Source image (any format the `image` crate can decode).
    filename: PathBuf,

    /// Output dimensions as `W,H`. Defaults to the source image size.
    #[arg(long, value_parser = config::parse_size)]
    size: Option<(u32, u32)>,

    /// Frames per second. Values above 50 are clamped for playback compatibility.
    #[arg(long, default_value_t = 50.0)]
    fps: f64,

    /// Animation duration in seconds.
    #[arg(long, alias = "dur", default_value_t = 1.2)]
    duration: f64,

    /// 1 rotates clockwise, any other integer anticlockwise.
    #[arg(long, alias = "direction", default_value_t = 1)]
    clockwise: i64,

    /// Output path. Defaults to the input filename with a `.gif` extension.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let out_path = match &cli.output {
        Some(p) => config::coerce_gif_extension(p),
        None => config::default_output_path(&cli.filename),
    };

    let src = rollin::load_source(&cli.filename)?;
    let cfg = RenderConfig {
        size: cli.size,
        fps: cli.fps,
        duration_secs: cli.duration,
        direction: Direction::from_flag(cli.clockwise),
        out_path,
    };
    let frames = rollin::render_to_gif(&src, &cfg)?;

    eprintln!("wrote {} ({frames} frames)", cfg.out_path.display());
    Ok(())
}
