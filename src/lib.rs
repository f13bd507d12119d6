//! # Wisp - ambient interactive particle swarm backgrounds
//!
//! A couple thousand particles drift through a slowly evolving noise field,
//! leaving glowing trails that fade as the canvas is repeatedly washed with
//! a translucent background fill. The pointer steers the swarm: hold the
//! left button to pull particles toward the cursor, the right button to
//! scatter the ones nearby.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wisp::Simulation;
//!
//! fn main() {
//!     Simulation::new()
//!         .with_hue(205.0)
//!         .run()
//!         .expect("swarm failed to start");
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Swarm
//!
//! The [`Swarm`] owns the particles and all shared simulation state: a
//! seeded [`SmallPrng`], an immutable [`NoiseField`], the [`Pointer`]
//! tracker and the viewport bounds. It advances through the [`Tick`] trait,
//! so any driver with a clock can host it - the built-in window loop, a
//! test, or a bench.
//!
//! ### Particles
//!
//! Each [`Particle`] lives for a random number of ticks, then respawns at a
//! fresh random position. Per tick it picks up uniform jitter plus a
//! coherent-noise drift, applies pointer forces, integrates with damping
//! and wraps toroidally at the viewport edges.
//!
//! ### Trails
//!
//! Particles only append line segments to a shared path. The renderer
//! composites the path with two blend modes: a low-alpha background fill
//! that decays old trails, then an additive stroke that makes fresh,
//! overlapping trails glow.
//!
//! ### Configuration
//!
//! Motion constants live in [`SwarmConfig`], appearance in [`VisualConfig`];
//! both have sensible defaults and builder hooks on [`Simulation`].
//!
//! ## Headless Use
//!
//! The simulation core has no window dependency. Build a [`Swarm`] directly
//! and drive [`Tick::tick`] yourself; [`Swarm::path`] exposes the segments
//! the renderer would draw.

pub mod config;
pub mod error;
mod gpu;
pub mod noise;
pub mod particle;
pub mod pointer;
pub mod rng;
pub mod shader;
mod simulation;
pub mod swarm;
pub mod time;
pub mod visuals;
mod window;

pub use config::{particle_count_for_width, SwarmConfig};
pub use error::{GpuError, SimulationError};
pub use glam::{Vec2, Vec3, Vec4};
pub use noise::NoiseField;
pub use particle::{Particle, StepEnv};
pub use pointer::{ButtonState, Pointer, PointerButton};
pub use rng::SmallPrng;
pub use shader::LineVertex;
pub use simulation::Simulation;
pub use swarm::{Swarm, Tick};
pub use time::Time;
pub use visuals::VisualConfig;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use wisp::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::SwarmConfig;
    pub use crate::pointer::{Pointer, PointerButton};
    pub use crate::simulation::Simulation;
    pub use crate::swarm::{Swarm, Tick};
    pub use crate::time::Time;
    pub use crate::visuals::VisualConfig;
    pub use crate::{Vec2, Vec3, Vec4};
}
