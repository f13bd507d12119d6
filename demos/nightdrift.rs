//! # Night Drift
//!
//! The stock configuration: a deep blue swarm drifting over a near-black
//! background, tuned for use behind page content.
//!
//! ## What This Demonstrates
//!
//! - `Simulation::new()` with defaults - the particle count adapts to the
//!   window width at startup
//! - `.with_seed(n)` for a swarm that looks identical every launch
//!
//! ## Interaction
//!
//! - Hold the **left** mouse button to pull the swarm toward the cursor
//! - Hold the **right** mouse button to scatter particles within 200 px
//! - **Escape** closes the window
//!
//! ## Try This
//!
//! - Drop the seed to get a different flow every run
//! - Lower `trail_fade_alpha` toward 0.05 for long comet ghosts
//!
//! Run with: `cargo run --example nightdrift`

use wisp::Simulation;

fn main() {
    tracing_subscriber::fmt::init();

    Simulation::new()
        .with_seed(1337)
        .run()
        .expect("swarm failed to start");
}
