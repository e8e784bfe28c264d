//! Criterion benchmarks for the camera rig.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec2, Vec3};
use tether::camera::{CameraRig, RigState};
use tether::input::FrameInput;
use tether::options::RigOptions;
use tether::physics::{Collider, ColliderSet, NoObstacles};
use tether::util::frame_clock::FrameTime;
use tether::util::interpolation::slerp_position;

fn slerp_benchmark(c: &mut Criterion) {
    let a = Vec3::new(3.0, 4.0, 2.0);
    let b = Vec3::new(0.0, 1.0, 5.0);
    c.bench_function("slerp_position", |bench| {
        bench.iter(|| black_box(slerp_position(black_box(a), black_box(b), 0.1)))
    });
}

fn rig_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rig_tick");
    let input = FrameInput::new(Vec2::new(0.3, -0.1), 0.05);
    let time = FrameTime::new(1.0 / 60.0);

    let mut rig = CameraRig::builder()
        .initial_transform(Vec3::new(0.0, 3.0, 8.0), Quat::IDENTITY)
        .follow(Vec3::Y)
        .build()
        .unwrap();
    group.bench_function("no_obstacles", |bench| {
        bench.iter(|| rig.tick(black_box(input), time, &NoObstacles))
    });

    for count in [10, 100, 1000].iter() {
        let scene = (0..*count).fold(ColliderSet::new(), |set, i| {
            let angle = i as f32 * 0.37;
            let center = Vec3::new(angle.cos() * 6.0, 1.0, angle.sin() * 6.0);
            set.with(Collider::sphere(center, 0.5, 0))
        });
        group.bench_function(format!("{}_colliders", count), |bench| {
            bench.iter(|| rig.tick(black_box(input), time, &scene))
        });
    }
    group.finish();
}

fn pure_advance_benchmark(c: &mut Criterion) {
    let options = RigOptions::default();
    let state = RigState::new(&options, Vec3::new(0.0, 3.0, 8.0), Quat::IDENTITY);
    let input = FrameInput::new(Vec2::new(0.3, -0.1), 0.05);
    c.bench_function("rig_state_advance", |bench| {
        bench.iter(|| {
            black_box(state.advance(
                &options,
                Vec3::Y,
                black_box(input),
                FrameTime::new(1.0 / 60.0),
                &NoObstacles,
            ))
        })
    });
}

criterion_group!(benches, slerp_benchmark, rig_tick_benchmark, pure_advance_benchmark);
criterion_main!(benches);
