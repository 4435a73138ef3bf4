use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ijk::interpolation::{catmull_rom, ArcLengthTable};
use ijk::math::{Mat3d, Mat4d, Mat4f, Quatd, Vec3d, Vec3f};
use ijk::{ReparamConfig, RotationOrder, TrigTable, TrigTableConfig};

fn bench_matrix_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix4_inverse");
    let m = Mat4d::from_euler_deg(RotationOrder::ZYX, Vec3d::new(10.0, 20.0, 30.0))
        * Mat4d::from_translation(Vec3d::new(1.0, -2.0, 3.0));

    group.bench_function("inverse_safe_f64", |b| b.iter(|| black_box(m).inverse_safe()));
    group.bench_function("rotation_translation_quick_f64", |b| {
        b.iter(|| black_box(m).quick_inverse_rotation_translation())
    });

    let mf = Mat4f::from_scale(Vec3f::new(2.0, 3.0, 4.0));
    group.bench_function("inverse_safe_f32", |b| b.iter(|| black_box(mf).inverse_safe()));
    group.finish();
}

fn bench_quaternion(c: &mut Criterion) {
    let a = Quatd::from_axis_angle_deg(Vec3d::unit_z(), 15.0);
    let q = Quatd::from_axis_angle_deg(Vec3d::new(1.0, 1.0, 0.0).normalize(), 170.0);

    c.bench_function("quaternion_slerp", |b| b.iter(|| black_box(a).slerp(&black_box(q), 0.3)));
    c.bench_function("quaternion_rotate_matrix_round_trip", |b| {
        b.iter(|| Quatd::from_rotation_matrix(&black_box(q).to_matrix3()))
    });
}

fn bench_euler_decomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler_decomposition");
    let angles = Vec3d::new(25.0, -40.0, 75.0);
    for order in [RotationOrder::XYZ, RotationOrder::YXZ] {
        let m = Mat3d::from_euler_deg(order, angles);
        group.bench_with_input(BenchmarkId::from_parameter(order), &m, |b, m| {
            b.iter(|| black_box(m).to_euler_deg(order))
        });
    }
    group.finish();
}

fn bench_trig_table(c: &mut Criterion) {
    let table = match TrigTable::<f64>::new(&TrigTableConfig::default()) {
        Ok(table) => table,
        Err(err) => panic!("default trig table config rejected: {}", err),
    };
    let mut group = c.benchmark_group("sine_37_5_deg");
    group.bench_function("table", |b| b.iter(|| table.sind(black_box(37.5))));
    group.bench_function("library", |b| b.iter(|| ijk::trig::sind(black_box(37.5f64))));
    group.bench_function("taylor", |b| b.iter(|| ijk::trig::sind_taylor(black_box(37.5f64))));
    group.finish();
}

fn bench_reparam(c: &mut Criterion) {
    let p = [
        Vec3d::new(0.0, 0.0, 0.0),
        Vec3d::new(1.0, 2.0, 0.0),
        Vec3d::new(3.0, 2.0, 1.0),
        Vec3d::new(4.0, 0.0, 1.0),
    ];
    let mut group = c.benchmark_group("arc_length_table");
    for samples in [16usize, 64, 256] {
        let config = ReparamConfig::new(samples, true);
        group.bench_with_input(BenchmarkId::from_parameter(samples), &config, |b, config| {
            b.iter(|| {
                ArcLengthTable::from_curve(|t| catmull_rom(p[0], p[1], p[2], p[3], t), config)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_matrix_inverse,
    bench_quaternion,
    bench_euler_decomposition,
    bench_trig_table,
    bench_reparam
);
criterion_main!(benches);
