use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use heatfield::{Heatmap, HeatmapConfig};

#[derive(Parser, Debug)]
#[command(
    name = "heatfield",
    version,
    about = "Render a density heatmap PNG from a list of points"
)]
struct Cli {
    /// Input points JSON: an array of [x, y] integer pairs.
    #[arg(long = "points")]
    points_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width (ignored when a background image is given).
    #[arg(long, default_value_t = 100)]
    width: u32,

    /// Canvas height (ignored when a background image is given).
    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Optional background image; its dimensions override --width/--height.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Point mark radius in pixels.
    #[arg(long, default_value_t = 15)]
    radius: u32,

    /// Five 6-digit hex keyframe colours, low to high intensity.
    #[arg(long = "colour", num_args = 5)]
    colours: Option<Vec<String>>,

    /// PNG compression level (0 = fastest/largest, 9 = smallest/slowest).
    #[arg(long, default_value_t = 0)]
    quality: u8,

    /// Gradient cache directory (defaults to the system temp dir).
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.points_path)
        .with_context(|| format!("read points file '{}'", cli.points_path.display()))?;
    let points: Vec<(i32, i32)> =
        serde_json::from_str(&text).context("points file must be a JSON array of [x, y] pairs")?;

    let mut config = HeatmapConfig {
        width: cli.width,
        height: cli.height,
        background_img: cli.background,
        radius: cli.radius,
        quality: cli.quality,
        ..Default::default()
    };
    if let Some(colours) = cli.colours {
        config.gradient_colours = colours;
    }
    if let Some(dir) = cli.cache_dir {
        config.cache_dir = dir;
    }

    let mut heatmap = Heatmap::new(config)?;
    for (x, y) in points {
        heatmap.add_point(x, y);
    }
    heatmap.save(&cli.out)?;

    println!("Wrote: {}", cli.out.display());
    Ok(())
}
