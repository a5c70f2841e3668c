use super::*;

fn cfg() -> WaveConfig {
    WaveConfig {
        bones: 3,
        amplitude: 100.0,
        speed: 0.15,
        height: 94.0,
        ..WaveConfig::default()
    }
}

#[test]
fn phase_zero_scenario_is_flat_at_baseline_for_first_point() {
    let pts = sample_points(0.0, &cfg(), 300.0).unwrap();
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 100.0, 200.0, 300.0]);
    assert_eq!(pts[0].y, 94.0);
}

#[test]
fn y_follows_squared_sine_formula() {
    let c = cfg();
    let phase = 1.7;
    let pts = sample_points(phase, &c, 300.0).unwrap();
    for (i, p) in pts.iter().enumerate() {
        let i = i as f64;
        let seed = (phase + (i + i % 3.0)) * c.speed * 100.0;
        let s = (seed / 100.0).sin();
        let expected = s * s * c.amplitude + c.height;
        assert!((p.y - expected).abs() < 1e-9, "point {i}: {} vs {expected}", p.y);
    }
}

#[test]
fn returns_bones_plus_one_points_spanning_width() {
    for bones in 1..=12 {
        let c = WaveConfig {
            bones,
            ..cfg()
        };
        let width = 417.25;
        let pts = sample_points(3.3, &c, width).unwrap();
        assert_eq!(pts.len(), bones as usize + 1);
        assert_eq!(pts[0].x, 0.0);
        assert!((pts[bones as usize].x - width).abs() < 1e-9);
        assert!(pts.iter().all(|p| (0.0..=width + 1e-9).contains(&p.x)));
        assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
    }
}

#[test]
fn sampling_is_deterministic() {
    let a = sample_points(12.34, &cfg(), 640.0).unwrap();
    let b = sample_points(12.34, &cfg(), 640.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_bone_pins_both_ends_to_the_same_seed_offset() {
    let c = WaveConfig {
        bones: 1,
        ..cfg()
    };
    let pts = sample_points(0.0, &c, 100.0).unwrap();
    assert_eq!(pts.len(), 2);
    assert_eq!(pts[1].x, 100.0);
    assert!(pts.iter().all(|p| p.y.is_finite()));
}

#[test]
fn zero_bones_is_a_configuration_error_not_nan() {
    let c = WaveConfig {
        bones: 0,
        ..cfg()
    };
    assert!(sample_points(0.0, &c, 300.0).unwrap_err().is_configuration());
}
