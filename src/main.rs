//! Headless demo: renders a few frames of a rotating model to PNG files.
//!
//! ```text
//! rasty-demo [model.obj] [output-dir]
//! ```
//!
//! Without a model path the built-in cube is used.

use std::env;
use std::f32::consts::TAU;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use rasty::prelude::*;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 640;
const FRAMES: u32 = 12;

fn run() -> rasty::Result<()> {
    let mut args = env::args().skip(1);
    let model = match args.next() {
        Some(path) => Model::from_obj(&path)?,
        None => Model::cube(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    // Keep the whole model in view regardless of its size.
    let distance = model.radius() * 3.0 + 1.0;
    let instance = Instance::new(Arc::new(model), Vec3::new(0.0, 0.0, distance))
        .with_color(0xFF3399FF)
        .with_specular(50.0);

    let mut scene = Scene::new(Camera::default())
        .with_instance(instance)
        .with_light(Light::ambient(0.2))
        .with_light(Light::directional(0.2, Vec3::new(-1.0, 4.0, -4.0)))
        .with_light(Light::point(0.6, Vec3::new(-2.0, 1.0, 0.0)));

    let config = RenderConfig::new(WIDTH, HEIGHT).with_render_mode(RenderMode::FilledWireframe);
    let engine = Engine::new(config);
    let mut buffer = engine.create_frame_buffer();

    let step = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), TAU / FRAMES as f32);
    for frame in 0..FRAMES {
        let stats = engine.render_frame(&scene, &mut buffer);
        let path = out_dir.join(format!("frame_{:03}.png", frame));
        buffer.save_png(&path)?;
        println!(
            "{}: {} triangles, {} instances culled",
            path.display(),
            stats.triangles_drawn,
            stats.instances_culled
        );

        for instance in &mut scene.instances {
            instance.rotate(step);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
