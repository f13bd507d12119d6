//! # Headless Swarm
//!
//! Drives the simulation core without a window: build a `Swarm`, tick it at
//! a fixed 60 Hz, and inspect the segment path the renderer would draw.
//!
//! ## What This Demonstrates
//!
//! - The `Tick` trait decouples the core from winit; any clock can host it
//! - Programmatic pointer input via `pointer_mut()` - here a synthetic
//!   left-button drag sweeping across the viewport
//! - `Swarm::path()` as the render-facing output
//!
//! Run with: `cargo run --example headless`

use wisp::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    let bounds = Vec2::new(800.0, 600.0);
    let config = SwarmConfig {
        particle_count: Some(500),
        ..SwarmConfig::default()
    };
    let mut swarm = Swarm::with_seed(config, bounds, Some(42));

    swarm.pointer_mut().press(PointerButton::Left);

    for frame in 0..600u32 {
        let now = frame as f64 / 60.0;

        // Sweep the synthetic cursor left to right across the viewport.
        let t = frame as f32 / 600.0;
        swarm
            .pointer_mut()
            .move_to(Vec2::new(t * bounds.x, bounds.y * 0.5));

        swarm.tick(now);

        if frame % 120 == 0 {
            let lead = swarm.particles()[0].position();
            tracing::info!(
                frame,
                segments = swarm.path().len() / 2,
                lead_x = lead.x,
                lead_y = lead.y,
                "tick"
            );
        }
    }

    let centroid = swarm
        .particles()
        .iter()
        .map(|p| p.position())
        .sum::<Vec2>()
        / swarm.particles().len() as f32;
    println!(
        "after 600 ticks of left-button drag the swarm centroid is ({:.1}, {:.1})",
        centroid.x, centroid.y
    );
}
