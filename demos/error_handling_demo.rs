// demos/error_handling_demo.rs
use brownian_sim::physics;
use brownian_sim::walk::{WalkConfig, WalkGenerator};

fn main() {
    println!("Error Handling Demo for brownian-sim");
    println!("====================================\n");

    // Test 1: Non-positive time step
    println!("1. Testing non-positive time step...");

    let invalid_dt = WalkConfig {
        time_step: -0.5,
        ..Default::default()
    };

    match WalkGenerator::new(invalid_dt) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero step count
    println!("\n2. Testing zero step count...");

    let invalid_steps = WalkConfig {
        step_count: 0,
        ..Default::default()
    };

    match WalkGenerator::new(invalid_steps) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Zero paths
    println!("\n3. Testing zero path count...");

    let invalid_paths = WalkConfig {
        path_count: 0,
        ..Default::default()
    };

    match WalkGenerator::new(invalid_paths) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Reading a trajectory before generating one
    println!("\n4. Testing use before generate()...");

    let generator = WalkGenerator::new(WalkConfig::default()).expect("valid configuration");
    match generator.trajectory() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Invalid physical inputs
    println!("\n5. Testing invalid physical inputs...");

    match physics::diffusion_coefficient(-300.0, 1e-6) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: A valid configuration generates cleanly
    println!("\n6. Testing a valid configuration...");

    let mut generator = WalkGenerator::new(WalkConfig {
        step_count: 100,
        path_count: 10,
        seed: Some(7),
        ..Default::default()
    })
    .expect("valid configuration");

    match generator.generate() {
        Ok(trajectory) => println!(
            "   ✓ Generated a {:?} position table",
            trajectory.shape()
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\nDone.");
}
