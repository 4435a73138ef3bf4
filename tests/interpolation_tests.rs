use ijk::error::MathError;
use ijk::interpolation::{
    bezier, bezier0, bezier1, bezier2, bezier3, bi_catmull_rom, bi_cubic_hermite, bi_nearest,
    bilerp, catmull_rom, cubic_hermite, cubic_hermite_handles, lerp, nearest, remap, remap_safe,
    sample_table_decreasing, sample_table_increasing, smootherstep, smoothstep, unlerp, unlerp_safe,
    ArcLengthTable,
};
use ijk::math::{Quatd, Vec2d, Vec3d, Vector2, Vector3};
use ijk::ReparamConfig;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_lerp_endpoints_and_affinity() {
    let v0 = Vector3::new(1.0, -2.0, 5.0);
    let v1 = Vector3::new(-3.0, 4.0, 0.5);

    assert_eq!(lerp(v0, v1, 0.0), v0);
    assert_eq!(lerp(v0, v1, 1.0), v1);

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let a: f64 = rng.gen_range(-2.0..2.0);
        let b: f64 = rng.gen_range(-2.0..2.0);
        let w: f64 = rng.gen_range(0.0..1.0);

        // lerp is affine in t
        let blended = lerp(v0, v1, a * (1.0 - w) + b * w);
        let combined = lerp(v0, v1, a) * (1.0 - w) + lerp(v0, v1, b) * w;
        assert_relative_eq!(blended, combined, epsilon = 1e-12);
    }
}

#[test]
fn test_unlerp_inverts_lerp() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..100 {
        let x0: f64 = rng.gen_range(-10.0..10.0);
        let x1 = x0 + rng.gen_range(0.5..10.0);
        let t: f64 = rng.gen_range(-1.0..2.0);
        assert_relative_eq!(unlerp(x0, x1, lerp(x0, x1, t)), t, epsilon = 1e-10);
    }

    assert!(unlerp(1.0f64, 1.0, 2.0).is_infinite());
    assert_eq!(unlerp_safe(1.0f64, 1.0, 2.0), 0.0);
}

#[test]
fn test_remap() {
    assert_relative_eq!(remap(0.0, 10.0, 100.0, 200.0, 2.5f64), 125.0);
    let v = remap(0.0, 2.0, Vec2d::zero(), Vector2::new(4.0, -4.0), 1.0);
    assert_relative_eq!(v, Vector2::new(2.0, -2.0));
    assert_eq!(remap_safe(3.0, 3.0, 7.0, 9.0, 5.0f64), 7.0);
}

#[test]
fn test_nearest_and_bilinear_on_grid() {
    let (v00, v01, v10, v11) = (0.0f64, 1.0, 2.0, 3.0);
    assert_eq!(bi_nearest(v00, v01, v10, v11, 0.2, 0.7), v10);
    assert_eq!(nearest(v00, v01, 0.75), v01);
    assert_relative_eq!(bilerp(v00, v01, v10, v11, 0.5, 0.5), 1.5);
    assert_relative_eq!(bilerp(v00, v01, v10, v11, 1.0, 0.25), 1.5);
}

#[test]
fn test_smoothstep_is_unclamped_polynomial() {
    assert_eq!(smoothstep(0.0f64), 0.0);
    assert_eq!(smoothstep(1.0f64), 1.0);
    assert_eq!(smoothstep(0.5f64), 0.5);

    // Outside [0, 1] the cubic keeps going instead of clamping
    assert_relative_eq!(smoothstep(-1.0f64), 5.0);
    assert_relative_eq!(smoothstep(2.0f64), -4.0);

    assert_eq!(smootherstep(0.0f64), 0.0);
    assert_eq!(smootherstep(1.0f64), 1.0);
    assert_relative_eq!(smootherstep(0.5f64), 0.5);
    assert_relative_eq!(smootherstep(-1.0f64), -31.0);
    assert_relative_eq!(smootherstep(2.0f64), 32.0);
}

#[test]
fn test_bezier_low_orders() {
    let p = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 2.0),
        Vector2::new(3.0, 3.0),
        Vector2::new(4.0, 0.0),
    ];

    for i in 0..=8 {
        let t = i as f64 / 8.0;

        // Order 0 is constant and order 1 is lerp
        assert_eq!(bezier0(p[2], t), p[2]);
        assert_eq!(bezier(&p[..1], t), Some(p[0]));
        assert_eq!(bezier1(p[0], p[1], t), lerp(p[0], p[1], t));
        assert_eq!(bezier(&p[..2], t), Some(lerp(p[0], p[1], t)));

        // Closed forms agree with de Casteljau
        let quadratic = bezier(&p[..3], t).unwrap();
        assert_relative_eq!(bezier2(p[0], p[1], p[2], t), quadratic, epsilon = 1e-12);
        let cubic = bezier(&p, t).unwrap();
        assert_relative_eq!(bezier3(p[0], p[1], p[2], p[3], t), cubic, epsilon = 1e-12);
    }

    assert_eq!(bezier::<f64, Vec2d>(&[], 0.5), None);
}

#[test]
fn test_bezier_high_order_endpoints() {
    let controls: Vec<f64> = (0..9).map(|i| (i * i) as f64).collect();
    assert_relative_eq!(bezier(&controls, 0.0).unwrap(), 0.0);
    assert_relative_eq!(bezier(&controls, 1.0).unwrap(), 64.0);

    // Control values on a line reproduce the line
    let line: Vec<f64> = (0..7).map(|i| i as f64).collect();
    assert_relative_eq!(bezier(&line, 0.25).unwrap(), 1.5, epsilon = 1e-12);
}

#[test]
fn test_cubic_hermite_endpoints_and_tangents() {
    let v0 = Vector3::new(0.0, 0.0, 0.0);
    let v1 = Vector3::new(1.0, 1.0, 0.0);
    let dv0 = Vector3::new(1.0, 0.0, 0.0);
    let dv1 = Vector3::new(0.0, 1.0, 0.0);

    assert_eq!(cubic_hermite(v0, dv0, v1, dv1, 0.0), v0);
    assert_eq!(cubic_hermite(v0, dv0, v1, dv1, 1.0), v1);

    // Numerical derivative at the start matches the tangent
    let h = 1e-6;
    let slope = (cubic_hermite(v0, dv0, v1, dv1, h) - v0) / h;
    assert_relative_eq!(slope, dv0, epsilon = 1e-5);

    // Handle form is the tangent form with handles at value + tangent
    for t in [0.1, 0.5, 0.9] {
        assert_relative_eq!(
            cubic_hermite_handles(v0, v0 + dv0, v1, v1 + dv1, t),
            cubic_hermite(v0, dv0, v1, dv1, t),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_catmull_rom_passes_through_points() {
    let (vp, v0, v1, vn) = (0.0f64, 1.0, 4.0, 9.0);
    assert_eq!(catmull_rom(vp, v0, v1, vn, 0.0), v0);
    assert_eq!(catmull_rom(vp, v0, v1, vn, 1.0), v1);

    // Evenly spaced collinear points give a straight line
    let p = |x: f64| Vector2::new(x, 2.0 * x);
    for t in [0.25, 0.5, 0.75] {
        assert_relative_eq!(catmull_rom(p(0.0), p(1.0), p(2.0), p(3.0), t), p(1.0 + t), epsilon = 1e-12);
    }
}

#[test]
fn test_bicubic_patches() {
    // f(x, y) = x + 10 y sampled on an integer grid is reproduced exactly
    let mut grid = [[0.0f64; 4]; 4];
    for (row, values) in grid.iter_mut().enumerate() {
        for (col, v) in values.iter_mut().enumerate() {
            *v = col as f64 + 10.0 * row as f64;
        }
    }
    assert_relative_eq!(bi_catmull_rom(&grid, 0.5, 0.25), 1.5 + 12.5, epsilon = 1e-12);

    // Hermite rows: start values, start tangents, end values, end tangents
    let rows = [
        [0.0f64, 1.0, 1.0, 1.0],
        [0.0, 0.0, 0.0, 0.0],
        [10.0, 1.0, 11.0, 1.0],
        [0.0, 0.0, 0.0, 0.0],
    ];
    assert_relative_eq!(bi_cubic_hermite(&rows, 0.0, 0.0), 0.0);
    assert_relative_eq!(bi_cubic_hermite(&rows, 1.0, 1.0), 11.0);
    assert_relative_eq!(bi_cubic_hermite(&rows, 0.5, 0.0), 0.5, epsilon = 1e-12);
}

#[test]
fn test_quaternion_lerp_through_generic_interpolation() {
    let a = Quatd::identity();
    let b = Quatd::new(0.0, 0.0, 1.0, 0.0);
    let mid = lerp(a, b, 0.5);
    assert_relative_eq!(mid, Quatd::new(0.0, 0.0, 0.5, 0.5));
    assert_relative_eq!(mid.normalize(), a.nlerp(&b, 0.5));
}

#[test]
fn test_reparam_straight_hermite_segment() {
    let v0 = Vec3d::zero();
    let v1: Vec3d = Vector3::new(3.0, 4.0, 0.0);
    // Tangents along the chord with length equal to the chord keep the speed constant
    let d = v1 - v0;

    let config = ReparamConfig::new(16, false);
    let table = ArcLengthTable::reparam_cubic_hermite(v0, d, v1, d, &config).unwrap();

    assert_eq!(table.len(), 17);
    assert_eq!(table.params()[0], 0.0);
    assert_eq!(table.params()[16], 1.0);
    assert_relative_eq!(table.total_length(), 5.0, epsilon = 1e-12);
    assert_eq!(table.values()[16], v1);
    assert!(!table.is_normalized());

    // Arc lengths are non-decreasing
    assert!(table.arc_lengths().windows(2).all(|w| w[0] <= w[1]));

    assert_relative_eq!(table.value_at_arc_length(2.5).unwrap(), Vector3::new(1.5, 2.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(table.parameter_at_arc_length(2.5).unwrap(), 0.5, epsilon = 1e-12);

    // Out-of-range queries clamp
    assert_eq!(table.value_at_arc_length(-1.0).unwrap(), v0);
    assert_eq!(table.value_at_arc_length(99.0).unwrap(), v1);
}

#[test]
fn test_reparam_catmull_rom_normalized() {
    let config = ReparamConfig::new(64, true);
    let table = ArcLengthTable::reparam_catmull_rom(
        Vector2::new(-1.0, 0.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(2.0, 1.0),
        &config,
    )
    .unwrap();

    let lengths = table.arc_lengths();
    assert_eq!(lengths[0], 0.0);
    assert_relative_eq!(lengths[lengths.len() - 1], 1.0, epsilon = 1e-12);
    assert!(table.total_length() > 2.0f64.sqrt());
    assert!(table.is_normalized());

    let halfway: Vec2d = table.value_at_arc_length(0.5).unwrap();
    assert_relative_eq!(halfway, Vector2::new(0.5, 0.5), epsilon = 1e-3);
}

#[test]
fn test_reparam_rejects_zero_samples() {
    let config = ReparamConfig::new(0, false);
    let result = ArcLengthTable::<f64, f64>::reparam_cubic_hermite(0.0, 1.0, 1.0, 1.0, &config);
    assert!(matches!(result, Err(MathError::InvalidParameter(_))));
}

#[test]
fn test_table_sampling_increasing_and_decreasing() {
    let keys = [0.0f64, 1.0, 2.0, 4.0, 8.0];
    let values = [Vec3d::zero(), Vec3d::one(), Vec3d::splat(2.0), Vec3d::splat(4.0), Vec3d::splat(8.0)];

    for step in 1..=5 {
        let v = sample_table_increasing(&keys, &values, 6.0, step).unwrap();
        assert_relative_eq!(v, Vec3d::splat(6.0));
        let exact = sample_table_increasing(&keys, &values, 2.0, step).unwrap();
        assert_relative_eq!(exact, Vec3d::splat(2.0));
    }
    assert_eq!(sample_table_increasing(&keys, &values, -5.0, 1).unwrap(), values[0]);
    assert_eq!(sample_table_increasing(&keys, &values, 50.0, 2).unwrap(), values[4]);

    // Mirrored contract on a decreasing table
    let down = [8.0f64, 4.0, 2.0, 1.0, 0.0];
    let down_values = [80.0f64, 40.0, 20.0, 10.0, 0.0];
    for step in 1..=5 {
        let v = sample_table_decreasing(&down, &down_values, 3.0, step).unwrap();
        assert_abs_diff_eq!(v, 30.0, epsilon = 1e-12);
    }
    assert_eq!(sample_table_decreasing(&down, &down_values, 9.0, 1).unwrap(), 80.0);
    assert_eq!(sample_table_decreasing(&down, &down_values, -1.0, 1).unwrap(), 0.0);
}

#[test]
fn test_table_sampling_errors() {
    let keys = [0.0f64, 1.0, 2.0];
    assert_eq!(
        sample_table_increasing(&keys, &[1.0f64, 2.0], 0.5, 1),
        Err(MathError::LengthMismatch { expected: 3, found: 2 })
    );
    assert_eq!(
        sample_table_decreasing(&[1.0f64], &[1.0f64], 0.5, 1),
        Err(MathError::TableTooShort { min: 2, found: 1 })
    );
    assert!(matches!(
        sample_table_increasing(&keys, &[1.0f64, 2.0, 3.0], 0.5, 0),
        Err(MathError::InvalidParameter(_))
    ));
}
