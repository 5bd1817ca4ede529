use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use pixeldither::{
    color_palette::Palette,
    config::ProcessConfig,
    dithering::DitheringType,
    run,
    utils::image::{read_image, write_image},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pixeldither")]
#[command(about = "Pixelate and dither images against a retro palette", long_about = None)]
struct Cli {
    /// Image to read
    #[arg(required_unless_present = "list_palettes")]
    input: Option<PathBuf>,

    /// Where to write the result, format follows the extension
    #[arg(required_unless_present = "list_palettes")]
    output: Option<PathBuf>,

    /// JSON processing config, flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// none, floyd, atkinson, stucki, burkes, sierra or jarvis
    #[arg(short, long)]
    algorithm: Option<DitheringType>,

    /// Built-in palette name
    #[arg(short, long)]
    palette: Option<String>,

    /// Pixelation factor between 1 and 5
    #[arg(short = 's', long)]
    pixel_size: Option<f32>,

    /// Keep the working resolution instead of scaling back up
    #[arg(long)]
    no_upscale: bool,

    /// Print the built-in palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

impl Cli {
    fn process_config(&self) -> Result<ProcessConfig> {
        let mut config = match &self.config {
            Some(path) => ProcessConfig::read_config(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => ProcessConfig::default(),
        };

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(palette) = &self.palette {
            config.palette = palette.clone();
            config.colors = None;
        }
        if let Some(pixel_size) = self.pixel_size {
            config = config.with_pixel_size(pixel_size);
        }
        if self.no_upscale {
            config.upscale = false;
        }
        Ok(config)
    }
}

fn list_palettes() {
    for name in Palette::names() {
        let palette = Palette::resolve(name);
        let colors: Vec<String> = palette.colors().iter().map(|c| c.to_hex()).collect();
        println!("{name:<10} {}", colors.join(" "));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "pixeldither=info".into()),
        )
        .with(fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    if cli.list_palettes {
        list_palettes();
        return Ok(());
    }

    let (Some(input), Some(output)) = (&cli.input, &cli.output) else {
        bail!("INPUT and OUTPUT are required");
    };

    let config = cli.process_config()?;
    let image =
        read_image(input).with_context(|| format!("failed to read image {}", input.display()))?;
    let processed = run(&config, image).context("processing failed")?;
    write_image(&processed, output)
        .with_context(|| format!("failed to write image {}", output.display()))?;

    info!(output = %output.display(), "Done");
    Ok(())
}
