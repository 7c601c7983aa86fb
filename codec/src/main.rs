use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cistercian::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use cistercian::{arabic_to_cistercian, build_mapping, Arabic, Board};

/// Print Cistercian numerals; with no numbers, print every stroke of the mapping.
#[derive(Parser, Debug)]
#[command(name = "cistercian")]
struct Args {
    /// height of symbols in pixels
    #[arg(long, short = 'H', default_value_t = DISPLAY_HEIGHT)]
    height: usize,

    /// width of symbols in pixels
    #[arg(long, short = 'W', default_value_t = DISPLAY_WIDTH)]
    width: usize,

    /// build every stroke up front instead of on first use
    #[arg(long)]
    full: bool,

    /// numbers to convert, each in [0, 9999]
    numbers: Vec<String>,
}

fn separator(width: usize) {
    println!("{}", "-".repeat(2 * width - 1));
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mapping = build_mapping(args.height, args.width, args.full)?;

    if args.numbers.is_empty() {
        let strokes = mapping.full_strokes()?;
        print!("{} symbols\n\n", strokes.len());
        for stroke in strokes {
            println!("{}", stroke.value());
            stroke.print();
            separator(args.width);
        }
        return Ok(());
    }

    for number in &args.numbers {
        let arabic: Arabic = number.parse()?;
        let cistercian = arabic_to_cistercian(arabic, &mapping)?;
        println!("Cistercian representation of {}", arabic);
        cistercian.print();
        separator(args.width);
    }
    Ok(())
}
