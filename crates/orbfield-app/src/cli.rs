use std::path::PathBuf;

use clap::Parser;

/// orbfield: headless particle-sphere renderer.
///
/// Mounts a hero sphere, two logo glyphs and the live favicon, plays a
/// scripted pointer/visibility sequence on a simulated frame clock, and
/// writes the final frames as PNG.
#[derive(Parser, Debug)]
#[command(name = "orbfield", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a full filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of frames to simulate.
    #[arg(short = 'n', long, default_value_t = 240)]
    pub frames: u32,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Device pixel ratio reported by the simulated page.
    #[arg(long, default_value_t = 2.0)]
    pub dpr: f64,

    /// Hero container width in CSS px (height is three quarters of it).
    #[arg(long, default_value_t = 360.0)]
    pub hero_width: f64,

    /// Output directory for PNG frames and the favicon data URL.
    #[arg(short = 'o', long, default_value = "orbfield-out")]
    pub out_dir: PathBuf,

    /// Seed override for particle attributes and noise.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Turn a bare level name into an `orbfield=<level>` directive.
pub fn log_directive(level: &str) -> String {
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            format!("orbfield={}", level.to_ascii_lowercase())
        }
        "warning" => "orbfield=warn".to_string(),
        _ => level.to_string(),
    }
}
