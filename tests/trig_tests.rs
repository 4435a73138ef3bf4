use ijk::trig::{
    acosd, acot, acotd, acscd, asec, asecd, asind, atan2d, atand, cos_taylor, cosd, cosd_taylor,
    cot, cotd, csc, cscd, edge_to_point_ratio, face_to_point_ratio, point_to_edge_ratio,
    point_to_face_ratio, sec, secd, sin_taylor, sind, sind_taylor, tan_taylor, tand, tand_taylor,
    valid_deg, valid_rad, valid_reciprocal_unit, valid_unit, TrigTable,
};
use ijk::error::MathError;
use ijk::TrigTableConfig;
use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[test]
fn test_degree_functions_at_exact_angles() {
    assert_relative_eq!(sind(30.0f64), 0.5, epsilon = 1e-12);
    assert_relative_eq!(cosd(60.0f64), 0.5, epsilon = 1e-12);
    assert_relative_eq!(tand(45.0f64), 1.0, epsilon = 1e-12);
    assert_relative_eq!(cscd(30.0f64), 2.0, epsilon = 1e-12);
    assert_relative_eq!(secd(60.0f64), 2.0, epsilon = 1e-12);
    assert_relative_eq!(cotd(45.0f64), 1.0, epsilon = 1e-12);
    assert_relative_eq!(cotd(90.0f64), 0.0, epsilon = 1e-12);

    assert_relative_eq!(sind(90.0f32), 1.0);
    assert_relative_eq!(cosd(180.0f32), -1.0);
}

#[test]
fn test_inverse_degree_functions() {
    assert_relative_eq!(asind(0.5f64), 30.0, epsilon = 1e-10);
    assert_relative_eq!(acosd(0.5f64), 60.0, epsilon = 1e-10);
    assert_relative_eq!(atand(1.0f64), 45.0, epsilon = 1e-10);
    assert_relative_eq!(acscd(2.0f64), 30.0, epsilon = 1e-10);
    assert_relative_eq!(asecd(2.0f64), 60.0, epsilon = 1e-10);
    assert_relative_eq!(acotd(1.0f64), 45.0, epsilon = 1e-10);
    assert_relative_eq!(acotd(0.0f64), 90.0, epsilon = 1e-10);

    assert_relative_eq!(atan2d(1.0f64, -1.0), 135.0, epsilon = 1e-10);
    assert_relative_eq!(atan2d(-1.0f64, 0.0), -90.0, epsilon = 1e-10);

    // Round trip through the forward function
    for deg in [-80.0f64, -45.0, 0.0, 10.0, 89.0] {
        assert_relative_eq!(asind(sind(deg)), deg, epsilon = 1e-9);
        assert_relative_eq!(atand(tand(deg)), deg, epsilon = 1e-9);
    }
}

#[test]
fn test_radian_reciprocals() {
    assert_relative_eq!(csc(FRAC_PI_2), 1.0, epsilon = 1e-12);
    assert_relative_eq!(sec(0.0f64), 1.0);
    assert_relative_eq!(cot(FRAC_PI_4), 1.0, epsilon = 1e-12);
    assert_relative_eq!(asec(1.0f64), 0.0);
    assert_relative_eq!(acot(1.0f64), FRAC_PI_4, epsilon = 1e-12);

    // Out-of-domain inputs follow IEEE semantics
    assert!(csc(0.0f64).is_infinite());
    assert!(asind(2.0f64).is_nan());
}

#[test]
fn test_validation_helpers() {
    assert_relative_eq!(valid_deg(450.0f64), 90.0);
    assert_relative_eq!(valid_deg(-450.0f64), -90.0);
    assert_relative_eq!(valid_deg(360.0f64), 0.0);
    assert_relative_eq!(valid_deg(-30.0f64), -30.0);

    assert_relative_eq!(valid_rad(5.0 * PI), PI, epsilon = 1e-12);
    assert_relative_eq!(valid_rad(-1.0f64), -1.0);

    assert_eq!(valid_unit(1.5f64), 1.0);
    assert_eq!(valid_unit(-7.0f64), -1.0);
    assert_eq!(valid_unit(0.25f64), 0.25);

    assert_eq!(valid_reciprocal_unit(0.5f64), 1.0);
    assert_eq!(valid_reciprocal_unit(-0.5f64), -1.0);
    assert_eq!(valid_reciprocal_unit(0.0f64), 1.0);
    assert_eq!(valid_reciprocal_unit(-3.0f64), -3.0);

    // Validated inputs keep the inverse functions finite
    assert!(asind(valid_unit(1.0000001f64)).is_finite());
    assert!(acscd(valid_reciprocal_unit(0.2f64)).is_finite());
}

#[test]
fn test_taylor_series_accuracy() {
    let mut deg = -720.0f64;
    while deg <= 720.0 {
        assert_relative_eq!(sind_taylor(deg), sind(deg), epsilon = 1e-6);
        assert_relative_eq!(cosd_taylor(deg), cosd(deg), epsilon = 1e-6);
        deg += 7.5;
    }

    for x in [-1.2f64, -0.3, 0.0, 0.4, 1.1] {
        assert_relative_eq!(tan_taylor(x), x.tan(), epsilon = 1e-5);
    }
    assert_relative_eq!(tand_taylor(45.0f64), 1.0, epsilon = 1e-6);

    // Exact at the reduction boundaries
    assert_relative_eq!(sin_taylor(FRAC_PI_2), 1.0, epsilon = 1e-6);
    assert_relative_eq!(cos_taylor(PI), -1.0, epsilon = 1e-6);
    assert_eq!(sin_taylor(0.0f64), 0.0);
    assert_eq!(cos_taylor(0.0f64), 1.0);
}

#[test]
fn test_trig_table_lookups() {
    let table = TrigTable::<f64>::new(&TrigTableConfig::default()).unwrap();

    let mut deg = -400.0;
    while deg <= 400.0 {
        assert_relative_eq!(table.sind(deg), sind(deg), epsilon = 1e-5);
        assert_relative_eq!(table.cosd(deg), cosd(deg), epsilon = 1e-5);
        deg += 3.3;
    }
    assert_relative_eq!(table.tand(30.0), tand(30.0), epsilon = 1e-5);

    for x in [-0.9, -0.5, 0.0, 0.3, 0.75] {
        assert_relative_eq!(table.asind(x), asind(x), epsilon = 1e-3);
        assert_relative_eq!(table.acosd(x), acosd(x), epsilon = 1e-3);
    }

    // Inverse inputs are clamped
    assert_relative_eq!(table.asind(3.0), 90.0, epsilon = 1e-9);
    assert_eq!(table.config().samples_per_degree, 4);
}

#[test]
fn test_trig_table_shared_across_threads() {
    let table = TrigTable::<f32>::new(&TrigTableConfig { samples_per_degree: 2, inverse_samples: 64 }).unwrap();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let table = &table;
            scope.spawn(move || {
                let deg = 30.0 * i as f32;
                assert!((table.sind(deg) - sind(deg)).abs() < 1e-4);
            });
        }
    });
}

#[test]
fn test_trig_table_rejects_empty_config() {
    let config = TrigTableConfig { samples_per_degree: 0, inverse_samples: 16 };
    assert!(matches!(TrigTable::<f64>::new(&config), Err(MathError::InvalidParameter(_))));
    assert!(TrigTableConfig { samples_per_degree: 1, inverse_samples: 0 }.validate().is_err());
    assert_eq!(TrigTableConfig::default().forward_len(), 1441);
}

#[test]
fn test_discrete_ratios() {
    // A square inscribed in the unit circle has edge midpoints at cos(45°)
    assert_relative_eq!(point_to_edge_ratio::<f64>(4), FRAC_PI_4.cos(), epsilon = 1e-12);
    assert_relative_eq!(
        point_to_edge_ratio::<f64>(6) * edge_to_point_ratio::<f64>(6),
        1.0,
        epsilon = 1e-12
    );

    // Finer meshes approach the true circle
    assert!(point_to_edge_ratio::<f64>(64) > point_to_edge_ratio::<f64>(8));
    assert!(edge_to_point_ratio::<f64>(3) > edge_to_point_ratio::<f64>(30));

    let ratio = point_to_face_ratio::<f64>(8, 4);
    assert_relative_eq!(ratio, (PI / 8.0).cos() * (PI / 8.0).cos(), epsilon = 1e-12);
    assert_relative_eq!(ratio * face_to_point_ratio::<f64>(8, 4), 1.0, epsilon = 1e-12);
}
