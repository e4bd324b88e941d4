use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rasty::prelude::*;
use rasty::render::{draw_visible_triangle, Shading};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn small_triangle() -> [Vec2; 3] {
    [
        Vec2::new(-10.0, -10.0),
        Vec2::new(10.0, -10.0),
        Vec2::new(0.0, 10.0),
    ]
}

fn medium_triangle() -> [Vec2; 3] {
    [
        Vec2::new(-100.0, -100.0),
        Vec2::new(100.0, -100.0),
        Vec2::new(0.0, 100.0),
    ]
}

fn large_triangle() -> [Vec2; 3] {
    [
        Vec2::new(-350.0, -250.0),
        Vec2::new(350.0, -200.0),
        Vec2::new(0.0, 250.0),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let projection = Projection::new(Viewport::default(), BUFFER_WIDTH, BUFFER_HEIGHT);
    let view = Mat4::identity();
    let lights = [
        Light::ambient(0.2),
        Light::point(0.6, Vec3::new(2.0, 1.0, 0.0)),
        Light::directional(0.2, Vec3::new(1.0, 4.0, -4.0)),
    ];
    let shading = Shading {
        lights: &lights,
        projection: &projection,
        camera_position: Vec3::ZERO,
        view: &view,
        specular: 50.0,
    };

    for (name, points) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &points, |b, points| {
            let mut buffer = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                buffer.clear(colors::BACKGROUND);
                draw_visible_triangle(
                    &mut buffer,
                    black_box(*points),
                    [3.0, 4.0, 5.0],
                    colors::WHITE,
                    &shading,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let engine = Engine::new(RenderConfig::new(BUFFER_WIDTH, BUFFER_HEIGHT));
    let cube = Arc::new(Model::cube());
    let lights = [Light::ambient(0.2), Light::point(0.8, Vec3::new(2.0, 1.0, 0.0))];

    let single = Scene::new(Camera::default())
        .with_instance(Instance::new(cube.clone(), Vec3::new(0.0, 0.0, 5.0)).with_specular(50.0))
        .with_light(lights[0])
        .with_light(lights[1]);

    // Grid of cubes, some cut by the side planes.
    let mut grid = Scene::new(Camera::default());
    grid.lights.extend(lights);
    for row in 0..10 {
        for col in 0..10 {
            let position = Vec3::new(col as f32 * 3.0 - 13.5, row as f32 * 3.0 - 13.5, 20.0);
            let rotation = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), (row * 10 + col) as f32);
            grid.instances
                .push(Instance::new(cube.clone(), position).with_rotation(rotation));
        }
    }

    for (name, scene) in [("cube", &single), ("cube_grid_100", &grid)] {
        group.bench_with_input(BenchmarkId::new("render_frame", name), scene, |b, scene| {
            let mut buffer = engine.create_frame_buffer();
            b.iter(|| engine.render_frame(black_box(scene), &mut buffer));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_frames);
criterion_main!(benches);
