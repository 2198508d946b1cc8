mod core;
mod decoder;
mod error;
mod output;
mod shared;
mod utils;

use anyhow::Result;
use clap::Parser;

use crate::decoder::VideoDecoder;
use crate::output::{FrameDisplay, NullDisplay};
use crate::shared::constants;

/// Compute the per-pixel mean frame of a video and save it as an image.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input video file
    video_path: String,

    /// Show the mean frame in a window after saving (requires the `display` feature)
    #[arg(short, long, default_value_t = false)]
    show: bool,
}

fn main() {
    utils::logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        utils::logger::error(&format!("{}", e));
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut source = VideoDecoder::open(&cli.video_path)?;
    println!(
        "Opened {} ({}x{} @ {:.2} fps)",
        cli.video_path,
        source.frame_width(),
        source.frame_height(),
        source.fps()
    );

    let mean = crate::core::compute_mean(&mut source)?;
    drop(source);
    println!("Averaged {} frames", mean.frame_count);

    output::write_image(constants::OUTPUT_FILE, &mean.frame)?;
    println!("Mean frame saved as {}", constants::OUTPUT_FILE);

    if let Err(e) = make_display(cli.show).show(&mean.frame) {
        utils::logger::error(&format!("Display failed: {}", e));
        eprintln!("Warning: could not display the mean frame: {}", e);
    }

    Ok(())
}

#[cfg(feature = "display")]
fn make_display(show: bool) -> Box<dyn FrameDisplay> {
    if show {
        Box::new(output::display::WindowDisplay)
    } else {
        Box::new(NullDisplay)
    }
}

#[cfg(not(feature = "display"))]
fn make_display(show: bool) -> Box<dyn FrameDisplay> {
    if show {
        println!("Display support not compiled in; rebuild with --features display to use --show.");
    }
    Box::new(NullDisplay)
}
