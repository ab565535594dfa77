use std::error::Error;

use clap::Parser;

use lumen::{Camera, Scene};

mod cli;
mod logger;

use crate::cli::Args;
use crate::logger::init_logger;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    let mut scene = Scene::load(&args.scene)?;

    if args.width.is_some() || args.height.is_some() {
        let width = args.width.unwrap_or_else(|| scene.camera.hsize());
        let height = args.height.unwrap_or_else(|| scene.camera.vsize());
        let mut camera = Camera::new(width, height, scene.camera.field_of_view());
        camera.set_transform(*scene.camera.transform())?;
        scene.camera = camera;
    }

    let canvas = lumen::render(&scene.camera, &scene.world);
    canvas.save(&args.output)?;

    Ok(())
}
