//! The swarm: particle collection, shared state, and the per-tick advance.
//!
//! A [`Swarm`] owns everything the simulation needs - the PRNG, the noise
//! field, the pointer tracker, the bounds extent, the particles and the
//! shared segment path. It has no idea how frames are scheduled: a host
//! driver (the window loop, a test, a bench) calls [`Tick::tick`] with the
//! elapsed time and then reads [`Swarm::path`] to draw.
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec2;
//! use wisp::{Swarm, SwarmConfig, Tick};
//!
//! let mut swarm = Swarm::with_seed(SwarmConfig::default(), Vec2::new(800.0, 600.0), Some(42));
//! swarm.tick(0.016);
//! assert_eq!(swarm.path().len(), swarm.particles().len() * 2);
//! ```

use glam::Vec2;

use crate::config::{particle_count_for_width, SwarmConfig};
use crate::noise::NoiseField;
use crate::particle::{Particle, StepEnv};
use crate::pointer::Pointer;
use crate::rng::SmallPrng;
use crate::shader::LineVertex;

/// Frame-driven advance, decoupled from any timing primitive.
///
/// The host owns the clock; `now` is seconds since the simulation started.
pub trait Tick {
    fn tick(&mut self, now: f64);
}

/// The full particle swarm and its shared state.
pub struct Swarm {
    config: SwarmConfig,
    bounds: Vec2,
    rng: SmallPrng,
    noise: NoiseField,
    pointer: Pointer,
    particles: Vec<Particle>,
    path: Vec<LineVertex>,
}

impl Swarm {
    /// Build a swarm with an entropy seed.
    pub fn new(config: SwarmConfig, bounds: Vec2) -> Self {
        Self::with_seed(config, bounds, None)
    }

    /// Build a swarm, optionally with an explicit seed for reproducible runs.
    ///
    /// The particle count comes from the config, or from the viewport-width
    /// heuristic when unset; it is fixed for the lifetime of the swarm.
    pub fn with_seed(config: SwarmConfig, bounds: Vec2, seed: Option<u32>) -> Self {
        let mut rng = match seed {
            Some(seed) => SmallPrng::new(seed),
            None => SmallPrng::from_entropy(),
        };
        let noise = NoiseField::build(|| rng.next_in_range(0, 255) as u8);
        let pointer = Pointer::new();

        let count = config
            .particle_count
            .unwrap_or_else(|| particle_count_for_width(bounds.x as u32))
            as usize;

        let mut particles = Vec::with_capacity(count);
        {
            let mut env = StepEnv {
                rng: &mut rng,
                noise: &noise,
                pointer: &pointer,
                bounds,
                config: &config,
                now: 0.0,
            };
            for _ in 0..count {
                particles.push(Particle::spawn(&mut env));
            }
        }

        let path = Vec::with_capacity(count * 2);
        Self {
            config,
            bounds,
            rng,
            noise,
            pointer,
            particles,
            path,
        }
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Update the bounds after a viewport resize. The particle count is not
    /// re-derived; out-of-bounds particles wrap back in on their next tick.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut Pointer {
        &mut self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The segment path built by the last tick: two vertices per particle.
    pub fn path(&self) -> &[LineVertex] {
        &self.path
    }
}

impl Tick for Swarm {
    fn tick(&mut self, now: f64) {
        self.path.clear();
        let mut env = StepEnv {
            rng: &mut self.rng,
            noise: &self.noise,
            pointer: &self.pointer,
            bounds: self.bounds,
            config: &self.config,
            now,
        };
        for particle in self.particles.iter_mut() {
            particle.step(&mut env);
            particle.render(&mut self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(count: u32) -> SwarmConfig {
        SwarmConfig {
            particle_count: Some(count),
            ..SwarmConfig::default()
        }
    }

    #[test]
    fn test_count_defaults_from_viewport_width() {
        let narrow = Swarm::with_seed(SwarmConfig::default(), Vec2::new(400.0, 800.0), Some(1));
        assert_eq!(narrow.particles().len(), 1200);

        let wide = Swarm::with_seed(SwarmConfig::default(), Vec2::new(1920.0, 1080.0), Some(1));
        assert_eq!(wide.particles().len(), 2500);
    }

    #[test]
    fn test_explicit_count_wins_over_heuristic() {
        let swarm = Swarm::with_seed(small_config(64), Vec2::new(1920.0, 1080.0), Some(1));
        assert_eq!(swarm.particles().len(), 64);
    }

    #[test]
    fn test_spawns_land_inside_bounds() {
        let bounds = Vec2::new(800.0, 600.0);
        let swarm = Swarm::with_seed(small_config(200), bounds, Some(9));
        for particle in swarm.particles() {
            let p = particle.position();
            assert!(p.x >= 0.0 && p.x <= bounds.x);
            assert!(p.y >= 0.0 && p.y <= bounds.y);
        }
    }

    #[test]
    fn test_tick_rebuilds_the_path() {
        let mut swarm = Swarm::with_seed(small_config(50), Vec2::new(800.0, 600.0), Some(3));
        assert!(swarm.path().is_empty());
        swarm.tick(0.016);
        assert_eq!(swarm.path().len(), 100);
        swarm.tick(0.033);
        assert_eq!(swarm.path().len(), 100);
    }

    #[test]
    fn test_same_seed_means_same_path() {
        let mut a = Swarm::with_seed(small_config(80), Vec2::new(800.0, 600.0), Some(42));
        let mut b = Swarm::with_seed(small_config(80), Vec2::new(800.0, 600.0), Some(42));
        for frame in 0..50 {
            let now = frame as f64 / 60.0;
            a.tick(now);
            b.tick(now);
            assert_eq!(a.path(), b.path());
        }
    }

    #[test]
    fn test_particles_stay_in_bounds_over_many_ticks() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut swarm = Swarm::with_seed(small_config(100), bounds, Some(5));
        for frame in 0..500 {
            swarm.tick(frame as f64 / 60.0);
        }
        for particle in swarm.particles() {
            let p = particle.position();
            // One axis may still be pending its wrap; allow a single tick of
            // drift past the edge.
            assert!(p.x >= -5.0 && p.x <= bounds.x + 5.0);
            assert!(p.y >= -5.0 && p.y <= bounds.y + 5.0);
        }
    }

    #[test]
    fn test_resize_keeps_the_population() {
        let mut swarm = Swarm::with_seed(SwarmConfig::default(), Vec2::new(1920.0, 1080.0), Some(2));
        let before = swarm.particles().len();
        swarm.set_bounds(Vec2::new(400.0, 300.0));
        swarm.tick(0.016);
        assert_eq!(swarm.particles().len(), before);
        assert_eq!(swarm.bounds(), Vec2::new(400.0, 300.0));
    }
}
