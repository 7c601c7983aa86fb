use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cistercian::{arabic_to_cistercian, Arabic, StrokeMapping};
use cistercian_training_data::render::to_gray_image;
use cistercian_training_data::{CistercianImageGenerator, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "cistercian_training_data")]
struct Args {
    /// json file overriding the default generator config
    #[arg(long)]
    config: Option<PathBuf>,

    /// batch to build
    #[arg(long, default_value_t = 0)]
    batch: usize,

    /// also save this number as an image (black strokes on white)
    #[arg(long, requires = "preview_out")]
    preview: Option<String>,

    #[arg(long)]
    preview_out: Option<PathBuf>,

    #[arg(long, default_value_t = 17)]
    preview_height: usize,

    #[arg(long, default_value_t = 15)]
    preview_width: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let mut generator = CistercianImageGenerator::new(config)?;
    println!("{} samples in {} batches", generator.total_length(), generator.len());

    let batch = generator.batch(args.batch)?;
    info!(batch = args.batch, shape = ?batch.images.dims(), "built batch");
    println!("batch {}: images {:?}, labels {:?}", args.batch, batch.images.dims(), batch.labels);

    if let (Some(number), Some(out)) = (&args.preview, &args.preview_out) {
        let mapping = StrokeMapping::new(args.preview_height, args.preview_width)?;
        let cistercian = arabic_to_cistercian(number.parse::<Arabic>()?, &mapping)?;
        to_gray_image(cistercian.canvas(), true).save(out)?;
        println!("saved {} to {}", cistercian, out.display());
    }
    Ok(())
}
