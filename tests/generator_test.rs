// tests/generator_test.rs
use brownian_sim::walk::{Dimensions, WalkConfig, WalkGenerator};

#[test]
fn test_timestamps_and_shape_for_all_dimensionalities() {
    for (dimensions, axes) in [(Dimensions::One, 1), (Dimensions::Three, 3)] {
        let cfg = WalkConfig {
            time_step: 0.25,
            step_count: 80,
            path_count: 4,
            dimensions,
            seed: Some(9),
            ..Default::default()
        };
        let mut generator = WalkGenerator::new(cfg).expect("valid configuration");
        let trajectory = generator.generate().expect("generation is infallible");

        assert_eq!(trajectory.timestamps().len(), 80);
        for (i, &t) in trajectory.timestamps().iter().enumerate() {
            assert_eq!(t, i as f64 * 0.25);
        }
        assert_eq!(trajectory.shape(), (80, 4 * axes));
    }
}

#[test]
fn test_seeded_generators_are_bit_identical() {
    let cfg = WalkConfig {
        time_step: 0.1,
        step_count: 100,
        path_count: 8,
        dimensions: Dimensions::Three,
        seed: Some(1234),
        ..Default::default()
    };

    let mut gen_a = WalkGenerator::new(cfg.clone()).expect("valid configuration");
    let mut gen_b = WalkGenerator::new(cfg).expect("valid configuration");

    let traj_a = gen_a.generate().expect("generation is infallible");
    let traj_b = gen_b.generate().expect("generation is infallible");

    assert_eq!(traj_a.timestamps(), traj_b.timestamps());
    assert_eq!(traj_a.positions(), traj_b.positions());
}

#[test]
fn test_unseeded_generators_differ() {
    let cfg = WalkConfig {
        step_count: 50,
        path_count: 2,
        seed: None,
        ..Default::default()
    };

    let mut gen_a = WalkGenerator::new(cfg.clone()).expect("valid configuration");
    let mut gen_b = WalkGenerator::new(cfg).expect("valid configuration");

    let traj_a = gen_a.generate().expect("generation is infallible").clone();
    let traj_b = gen_b.generate().expect("generation is infallible");

    // 100 independent doubles colliding would indicate a broken entropy source.
    assert_ne!(traj_a.positions(), traj_b.positions());
}

#[test]
fn test_scenario_fifty_steps_five_paths() {
    let cfg = WalkConfig {
        time_step: 0.5,
        step_count: 50,
        path_count: 5,
        seed: Some(42),
        ..Default::default()
    };
    let mut generator = WalkGenerator::new(cfg).expect("valid configuration");
    let first = generator.generate().expect("generation is infallible").clone();

    let expected: Vec<f64> = (0..50).map(|i| i as f64 * 0.5).collect();
    assert_eq!(first.timestamps().to_vec(), expected);
    assert_eq!(first.timestamps()[49], 24.5);
    assert_eq!(first.shape(), (50, 5));

    // Same generator, same seed: regeneration reproduces the identical table.
    let second = generator.generate().expect("generation is infallible");
    assert_eq!(first.positions(), second.positions());
}

#[test]
fn test_physical_scenario_magnitude() {
    // dt = 1e-6 s, 300 steps, D = k_B * 300 / 1e-6 for a 1 µm particle.
    let cfg = WalkConfig::physical(1e-6, 300, Some(42)).expect("valid physical constants");
    let mut generator = WalkGenerator::new(cfg).expect("valid configuration");
    let trajectory = generator.generate().expect("generation is infallible");

    assert_eq!(trajectory.shape(), (300, 3));

    // Increment scale is sqrt(2 * 1e-6 * 4.14e-15) ≈ 9.1e-11 m, so after 300
    // steps displacements sit in the nanometer range.
    let max_abs = trajectory
        .positions()
        .iter()
        .fold(0.0f64, |acc, &v| acc.max(v.abs()));
    assert!(
        max_abs > 1e-10 && max_abs < 1e-7,
        "displacement magnitude {} outside the physical diffusion scale",
        max_abs
    );
}

#[test]
fn test_configure_rejects_invalid_parameters() {
    let bad = WalkConfig {
        time_step: 0.0,
        ..Default::default()
    };
    assert!(WalkGenerator::new(bad).is_err());

    let bad = WalkConfig {
        step_count: 0,
        ..Default::default()
    };
    assert!(WalkGenerator::new(bad).is_err());

    let bad = WalkConfig {
        path_count: 0,
        ..Default::default()
    };
    assert!(WalkGenerator::new(bad).is_err());
}
