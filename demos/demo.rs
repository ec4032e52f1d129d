// demos/demo.rs
use brownian_sim::render::{AnimationRenderer, Renderer, StaticPlotRenderer};
use brownian_sim::stats::{ensemble_variance, mean_squared_displacement, Timer};
use brownian_sim::walk::{WalkConfig, WalkGenerator};
use std::io::{self, Write};

fn main() {
    println!("brownian-sim demo");
    println!("=================\n");
    println!("  1) 1D random walks (static figure)");
    println!("  2) 3D Brownian motion (static figure)");
    println!("  3) 3D Brownian motion (animated figure)");
    print!("\nSelect a demo [1-3]: ");
    io::stdout().flush().expect("stdout is writable");

    let mut choice = String::new();
    io::stdin()
        .read_line(&mut choice)
        .expect("stdin is readable");

    std::fs::create_dir_all("results").expect("results directory is creatable");

    match choice.trim() {
        "2" => run_brownian_static(),
        "3" => run_brownian_animated(),
        "1" => run_random_walks(),
        other => {
            println!("Unrecognized choice '{}', running demo 1.\n", other);
            run_random_walks();
        }
    }
}

fn run_random_walks() {
    println!("\n--- 1D Random Walks ---");

    let config = WalkConfig {
        time_step: 0.5,
        step_count: 200,
        path_count: 50,
        seed: Some(42),
        ..Default::default()
    };
    let d = config.diffusion_coefficient;
    let mut generator = WalkGenerator::new(config).expect("valid configuration");

    let mut timer = Timer::new();
    timer.start();
    let trajectory = generator.generate().expect("generation is infallible");
    println!(
        "Generated {} paths x {} steps in {:.2} ms",
        trajectory.path_count(),
        trajectory.step_count(),
        timer.elapsed_ms()
    );

    let last = trajectory.step_count() - 1;
    let t_last = trajectory.timestamps()[last];
    let measured = ensemble_variance(trajectory, last).expect("multi-path ensemble");
    println!(
        "Ensemble variance at t = {}: {:.4} (theory 2*D*t = {:.4})",
        t_last,
        measured,
        2.0 * d * t_last
    );

    let figure = StaticPlotRenderer::new()
        .render(trajectory)
        .expect("renderable trajectory");
    figure.write_html("results/random_walks.html");
    println!("Figure written to results/random_walks.html");
}

fn run_brownian_static() {
    println!("\n--- 3D Brownian Motion ---");

    let config = WalkConfig::physical(1e-6, 300, Some(42)).expect("valid physical constants");
    let d = config.diffusion_coefficient;
    println!("Diffusion coefficient D = {:.3e} m^2/s", d);

    let mut generator = WalkGenerator::new(config).expect("valid configuration");

    let mut timer = Timer::new();
    timer.start();
    let trajectory = generator.generate().expect("generation is infallible");
    println!(
        "Generated {} steps in {:.2} ms",
        trajectory.step_count(),
        timer.elapsed_ms()
    );

    let last = trajectory.step_count() - 1;
    let msd = mean_squared_displacement(trajectory, last).expect("in range");
    println!(
        "Squared displacement at t = {:.1e} s: {:.3e} m^2 (theory 6*D*t = {:.3e})",
        trajectory.timestamps()[last],
        msd,
        6.0 * d * trajectory.timestamps()[last]
    );

    let figure = StaticPlotRenderer::new()
        .render(trajectory)
        .expect("renderable trajectory");
    figure.write_html("results/brownian_motion.html");
    println!("Figure written to results/brownian_motion.html");
}

fn run_brownian_animated() {
    println!("\n--- 3D Brownian Motion (animated) ---");

    let config = WalkConfig::physical(1e-6, 300, Some(42)).expect("valid physical constants");
    let mut generator = WalkGenerator::new(config).expect("valid configuration");
    generator.generate().expect("generation is infallible");

    let mut timer = Timer::new();
    timer.start();
    let animation = AnimationRenderer::new(30)
        .with_output_target("results/brownian_animation.html")
        .render(generator.trajectory().expect("just generated"))
        .expect("renderable trajectory");
    println!(
        "Assembled {} frames in {:.2} ms",
        animation.frame_count(),
        timer.elapsed_ms()
    );
    println!("Animation written to results/brownian_animation.html");
}
