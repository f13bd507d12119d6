//! Simulation builder and runner.
//!
//! # Example
//!
//! ```ignore
//! use wisp::Simulation;
//!
//! Simulation::new()
//!     .with_particle_count(1800)
//!     .with_visuals(|v| v.hue = 310.0)
//!     .run()
//!     .expect("swarm failed to start");
//! ```

use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::SwarmConfig;
use crate::error::SimulationError;
use crate::visuals::VisualConfig;
use crate::window::App;

/// A windowed swarm simulation builder.
///
/// Use method chaining to configure, then call `.run()` to start. The loop
/// runs at display refresh until the window closes.
pub struct Simulation {
    config: SwarmConfig,
    seed: Option<u32>,
}

impl Simulation {
    /// Create a simulation with default settings.
    pub fn new() -> Self {
        Self {
            config: SwarmConfig::default(),
            seed: None,
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SwarmConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the particle count instead of deriving it from the viewport width.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.config.particle_count = Some(count);
        self
    }

    /// Seed the PRNG for a reproducible swarm.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the stroke hue in degrees.
    pub fn with_hue(mut self, hue: f32) -> Self {
        self.config.visuals.hue = hue;
        self
    }

    /// Adjust the visual configuration in place.
    pub fn with_visuals<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut VisualConfig),
    {
        f(&mut self.config.visuals);
        self
    }

    /// Run the simulation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config, self.seed);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
