//! # Ember
//!
//! A warm, sparser variant: orange strokes, faster trail decay, and a more
//! violent right-button scatter.
//!
//! ## What This Demonstrates
//!
//! - `.with_hue(...)` to recolor the swarm without touching motion
//! - `.with_visuals(|v| ...)` for the rest of the appearance knobs
//! - `.with_config(...)` to change force constants
//!
//! ## Try This
//!
//! - Push `stroke_alpha` up to 0.5 and watch overlaps bloom
//! - Set `repel_radius` to 400.0 to clear half the window per click
//!
//! Run with: `cargo run --example ember`

use wisp::{Simulation, SwarmConfig};

fn main() {
    tracing_subscriber::fmt::init();

    let config = SwarmConfig {
        particle_count: Some(1600),
        repel_strength: 0.03,
        ..SwarmConfig::default()
    };

    Simulation::new()
        .with_config(config)
        .with_hue(25.0)
        .with_visuals(|v| {
            v.saturation = 0.85;
            v.trail_fade_alpha = 0.28;
        })
        .run()
        .expect("swarm failed to start");
}
