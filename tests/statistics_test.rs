// tests/statistics_test.rs
use brownian_sim::stats::{ensemble_variance, mean_squared_displacement};
use brownian_sim::walk::{Dimensions, WalkConfig, WalkGenerator};

#[test]
fn test_variance_grows_linearly_in_time() {
    // Var(X(t)) = 2 * D * t per axis; with 10k paths the sample variance
    // has a relative standard error of about 1.4%, so 10% is a wide margin.
    let time_step = 0.01;
    let diffusion = 0.5;
    let cfg = WalkConfig {
        time_step,
        step_count: 200,
        path_count: 10_000,
        diffusion_coefficient: diffusion,
        seed: Some(7),
        ..Default::default()
    };
    let mut generator = WalkGenerator::new(cfg).expect("valid configuration");
    let trajectory = generator.generate().expect("generation is infallible");

    for step in [50usize, 100, 199] {
        let t = trajectory.timestamps()[step];
        let expected = 2.0 * diffusion * t;
        let measured = ensemble_variance(trajectory, step).expect("in range");
        let rel_error = (measured - expected).abs() / expected;
        assert!(
            rel_error < 0.10,
            "variance at step {}: measured {}, expected {}, relative error {}",
            step,
            measured,
            expected,
            rel_error
        );
    }
}

#[test]
fn test_mean_squared_displacement_in_three_dimensions() {
    // MSD over all three axes: E|X(t)|^2 = 2 * D * 3 * t.
    let diffusion = 1.0;
    let cfg = WalkConfig {
        time_step: 0.1,
        step_count: 100,
        path_count: 2_000,
        dimensions: Dimensions::Three,
        diffusion_coefficient: diffusion,
        seed: Some(11),
        ..Default::default()
    };
    let mut generator = WalkGenerator::new(cfg).expect("valid configuration");
    let trajectory = generator.generate().expect("generation is infallible");

    let step = 99;
    let t = trajectory.timestamps()[step];
    let expected = 2.0 * diffusion * 3.0 * t;
    let measured = mean_squared_displacement(trajectory, step).expect("in range");
    let rel_error = (measured - expected).abs() / expected;
    assert!(
        rel_error < 0.10,
        "MSD: measured {}, expected {}, relative error {}",
        measured,
        expected,
        rel_error
    );
}

#[test]
fn test_default_diffusion_matches_plain_walk_scaling() {
    // With the default D = 0.5 the increments are N(0, dt), so the variance
    // at step i is i * dt.
    let cfg = WalkConfig {
        time_step: 0.5,
        step_count: 100,
        path_count: 10_000,
        seed: Some(3),
        ..Default::default()
    };
    let mut generator = WalkGenerator::new(cfg).expect("valid configuration");
    let trajectory = generator.generate().expect("generation is infallible");

    let step = 80;
    let expected = trajectory.timestamps()[step]; // 2 * 0.5 * t
    let measured = ensemble_variance(trajectory, step).expect("in range");
    let rel_error = (measured - expected).abs() / expected;
    assert!(rel_error < 0.10, "relative error {}", rel_error);
}
