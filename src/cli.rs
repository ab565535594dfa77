use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Verbosity passed to `--debug-level`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Error => LevelFilter::Error,
            Verbosity::Warn => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Renders a JSON scene of spheres with Phong shading")]
pub struct Args {
    /// JSON scene file
    #[arg(default_value = "scenes/three_spheres.json")]
    pub scene: PathBuf,

    /// Output file path (.ppm for plain-text PPM, anything else is encoded as PNG)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Horizontal resolution, replacing the scene's
    #[arg(long)]
    pub width: Option<usize>,

    #[arg(long)]
    pub height: Option<usize>,

    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: Verbosity,
}

#[test]
fn defaults_render_the_bundled_scene_to_ppm() {
    let args = Args::try_parse_from(["lumen"]).unwrap();
    assert_eq!(PathBuf::from("scenes/three_spheres.json"), args.scene);
    assert_eq!(PathBuf::from("output.ppm"), args.output);
    assert!(args.width.is_none() && args.height.is_none());
    assert_eq!(LevelFilter::Info, LevelFilter::from(args.debug_level));
}

#[test]
fn resolution_and_verbosity_overrides() {
    let args = Args::try_parse_from([
        "lumen",
        "room.json",
        "-o",
        "room.png",
        "--width",
        "64",
        "--height",
        "32",
        "--debug-level",
        "trace",
    ])
    .unwrap();
    assert_eq!(PathBuf::from("room.json"), args.scene);
    assert_eq!(PathBuf::from("room.png"), args.output);
    assert_eq!((Some(64), Some(32)), (args.width, args.height));
    assert_eq!(LevelFilter::Trace, LevelFilter::from(args.debug_level));
    assert!(Args::try_parse_from(["lumen", "--debug-level", "loud"]).is_err());
}
