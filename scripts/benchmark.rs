// scripts/benchmark.rs
use brownian_sim::stats::Timer;
use brownian_sim::walk::{Dimensions, WalkConfig, WalkGenerator};
use serde::Serialize;
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;

#[derive(Debug, Serialize)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        let os = env::consts::OS.to_string();
        let cpu_model = Self::get_cpu_model();
        let cpu_cores = num_cpus::get();
        let rust_version = Self::get_rust_version();
        let rustc_flags = env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string());
        let rayon_threads = rayon::current_num_threads();

        Self {
            os,
            cpu_model,
            cpu_cores,
            rust_version,
            rustc_flags,
            rayon_threads,
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(not(target_os = "linux"))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

#[derive(Debug, Serialize)]
struct BenchmarkRecord {
    scenario: String,
    dimensions: Dimensions,
    path_count: usize,
    step_count: usize,
    elapsed_ms: f64,
    paths_per_sec: f64,
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    generated_at: String,
    system: SystemInfo,
    results: Vec<BenchmarkRecord>,
}

fn run_scenario(scenario: &str, config: WalkConfig) -> BenchmarkRecord {
    let path_count = config.path_count;
    let step_count = config.step_count;
    let dimensions = config.dimensions;

    let mut generator = WalkGenerator::new(config).expect("valid configuration");

    // Warm-up pass so thread-pool spin-up does not land in the timing.
    generator.generate().expect("generation is infallible");

    let mut timer = Timer::new();
    timer.start();
    generator.generate().expect("generation is infallible");
    let elapsed_ms = timer.elapsed_ms();
    let paths_per_sec = path_count as f64 / (elapsed_ms / 1000.0);

    println!(
        "{:<28} {:>9} paths x {:>6} steps: {:>10.2} ms ({:>12.0} paths/sec)",
        scenario, path_count, step_count, elapsed_ms, paths_per_sec
    );

    BenchmarkRecord {
        scenario: scenario.to_string(),
        dimensions,
        path_count,
        step_count,
        elapsed_ms,
        paths_per_sec,
    }
}

fn main() {
    println!("brownian-sim generation benchmark");
    println!("=================================\n");

    let system = SystemInfo::gather();
    println!("OS: {}", system.os);
    println!("CPU: {} ({} cores)", system.cpu_model, system.cpu_cores);
    println!("Rayon threads: {}", system.rayon_threads);
    println!("Rust: {}\n", system.rust_version);

    let mut results = Vec::new();

    for &paths in &[100usize, 1_000, 10_000, 100_000] {
        results.push(run_scenario(
            "1D walk",
            WalkConfig {
                time_step: 0.01,
                step_count: 1_000,
                path_count: paths,
                seed: Some(42),
                ..Default::default()
            },
        ));
    }

    for &paths in &[100usize, 1_000, 10_000] {
        results.push(run_scenario(
            "3D physical brownian",
            WalkConfig {
                path_count: paths,
                ..WalkConfig::physical(1e-6, 300, Some(42)).expect("valid physical constants")
            },
        ));
    }

    let report = BenchmarkReport {
        generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        system,
        results,
    };

    std::fs::create_dir_all("bench").expect("bench directory is creatable");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let csv_path = format!("bench/generation_{}.csv", timestamp);
    let mut csv = File::create(&csv_path).expect("could not create CSV file");
    writeln!(
        csv,
        "scenario,dimensions,path_count,step_count,elapsed_ms,paths_per_sec"
    )
    .expect("could not write header");
    for r in &report.results {
        writeln!(
            csv,
            "{},{:?},{},{},{:.4},{:.2}",
            r.scenario, r.dimensions, r.path_count, r.step_count, r.elapsed_ms, r.paths_per_sec
        )
        .expect("could not write record");
    }

    let json_path = format!("bench/generation_{}.json", timestamp);
    let json = serde_json::to_string_pretty(&report).expect("report is serializable");
    std::fs::write(&json_path, json).expect("could not write JSON report");

    println!("\nResults written to {} and {}", csv_path, json_path);
}
