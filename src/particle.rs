//! A single swarm member.
//!
//! Each particle owns its position, the trail-start point (where it was at
//! the beginning of the tick), a velocity, and a lifetime counter. Every tick
//! it perturbs its velocity from the noise field and the PRNG, applies
//! pointer forces, integrates with damping, and wraps toroidally inside the
//! bounds. When its tick counter outlives its lifetime it respawns in place
//! at a fresh random position.
//!
//! Rendering is split off deliberately: [`Particle::render`] only appends one
//! line segment to the shared path; stroking and fading are the compositor's
//! job.

use glam::Vec2;

use crate::config::SwarmConfig;
use crate::noise::NoiseField;
use crate::pointer::Pointer;
use crate::rng::SmallPrng;
use crate::shader::LineVertex;

/// Everything a particle reads or mutates during one tick.
///
/// Built by the swarm once per tick and threaded through every particle, so
/// no particle holds references into shared state between frames.
pub struct StepEnv<'a> {
    pub rng: &'a mut SmallPrng,
    pub noise: &'a NoiseField,
    pub pointer: &'a Pointer,
    /// Viewport extent in pixels.
    pub bounds: Vec2,
    pub config: &'a SwarmConfig,
    /// Seconds since the simulation started.
    pub now: f64,
}

/// One particle of the swarm.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec2,
    trail: Vec2,
    velocity: Vec2,
    life: i32,
    iter: i32,
}

impl Particle {
    /// Spawn a particle at a random position within the bounds.
    pub(crate) fn spawn(env: &mut StepEnv<'_>) -> Self {
        let mut particle = Self {
            position: Vec2::ZERO,
            trail: Vec2::ZERO,
            velocity: Vec2::ZERO,
            life: 0,
            iter: 0,
        };
        particle.respawn(env);
        particle
    }

    /// Reset to a fresh random state: new position (trail-start follows),
    /// the fixed unit-diagonal velocity, a new lifetime, tick counter zeroed.
    fn respawn(&mut self, env: &mut StepEnv<'_>) {
        let x = env.rng.next_f64() as f32 * env.bounds.x;
        let y = env.rng.next_f64() as f32 * env.bounds.y;
        self.position = Vec2::new(x, y);
        self.trail = self.position;
        self.velocity = Vec2::ONE;
        self.life = env
            .rng
            .next_in_range(*env.config.life_range.start(), *env.config.life_range.end());
        self.iter = 0;
    }

    /// Advance one tick.
    pub fn step(&mut self, env: &mut StepEnv<'_>) {
        self.iter += 1;
        if self.iter > self.life {
            // Respawn and keep going with the fresh state this same tick.
            self.respawn(env);
        }

        let cfg = env.config;
        let nx = (self.position.x / cfg.noise_scale) as f64;
        let ny = (self.position.y / cfg.noise_scale) as f64;
        let nt = env.now / cfg.time_scale;

        // Uniform jitter plus the coherent flow. The y axis samples with the
        // time coordinate negated so the two axes stay decorrelated.
        self.velocity.x += (env.rng.next_f64() as f32 - 0.5) * cfg.jitter
            + env.noise.sample(nx, ny, nt) as f32 * cfg.noise_strength;
        self.velocity.y += (env.rng.next_f64() as f32 - 0.5) * cfg.jitter
            + env.noise.sample(nx, ny, -nt) as f32 * cfg.noise_strength;

        let buttons = env.pointer.buttons();
        if buttons.left {
            self.velocity += (env.pointer.position() - self.position) * cfg.attract_strength;
        }
        if buttons.right && self.position.distance(env.pointer.position()) < cfg.repel_radius {
            self.velocity += (self.position - env.pointer.position()) * cfg.repel_strength;
        }

        self.trail = self.position;
        self.velocity *= cfg.damping;
        self.position += self.velocity;

        wrap(&mut self.position, env.bounds);
    }

    /// Append this tick's trail segment to the shared path.
    pub fn render(&self, path: &mut Vec<LineVertex>) {
        path.push(LineVertex {
            position: self.trail.to_array(),
        });
        path.push(LineVertex {
            position: self.position.to_array(),
        });
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Where the particle stood at the start of the tick.
    pub fn trail(&self) -> Vec2 {
        self.trail
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Ticks until this particle is forced to respawn.
    pub fn life(&self) -> i32 {
        self.life
    }

    /// Ticks elapsed since the last respawn.
    pub fn iter(&self) -> i32 {
        self.iter
    }
}

/// Toroidal wrap against a bounds extent.
///
/// At most one axis is corrected per call, x checked before y; a particle out
/// on both axes is fixed up over two consecutive ticks, which is fine for a
/// per-frame caller. Returns whether a wrap occurred - callers currently
/// ignore the signal.
pub fn wrap(v: &mut Vec2, bounds: Vec2) -> bool {
    if v.x > bounds.x {
        v.x = 0.0;
        return true;
    }
    if v.x < 0.0 {
        v.x = bounds.x;
        return true;
    }
    if v.y > bounds.y {
        v.y = 0.0;
        return true;
    }
    if v.y < 0.0 {
        v.y = bounds.y;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    /// A config with jitter and noise silenced, for kinematics-only checks.
    fn quiet_config() -> SwarmConfig {
        SwarmConfig {
            jitter: 0.0,
            noise_strength: 0.0,
            ..SwarmConfig::default()
        }
    }

    fn particle_at(position: Vec2, life: i32, iter: i32) -> Particle {
        Particle {
            position,
            trail: position,
            velocity: Vec2::ONE,
            life,
            iter,
        }
    }

    #[test]
    fn test_wrap_resets_exceeded_axis_to_zero() {
        let mut v = Vec2::new(801.0, 300.0);
        assert!(wrap(&mut v, BOUNDS));
        assert_eq!(v, Vec2::new(0.0, 300.0));

        let mut v = Vec2::new(400.0, -1.0);
        assert!(wrap(&mut v, BOUNDS));
        assert_eq!(v, Vec2::new(400.0, 600.0));
    }

    #[test]
    fn test_wrap_corrects_one_axis_per_call() {
        let mut v = Vec2::new(-3.0, 700.0);
        assert!(wrap(&mut v, BOUNDS));
        assert_eq!(v, Vec2::new(800.0, 700.0));
        // Second call picks up the y violation.
        assert!(wrap(&mut v, BOUNDS));
        assert_eq!(v, Vec2::new(800.0, 0.0));
    }

    #[test]
    fn test_wrap_is_idempotent_in_bounds() {
        let mut v = Vec2::new(400.0, 300.0);
        assert!(!wrap(&mut v, BOUNDS));
        assert_eq!(v, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_expired_particle_respawns_on_step() {
        let config = SwarmConfig::default();
        let noise = NoiseField::default();
        let pointer = Pointer::new();
        let mut rng = SmallPrng::new(42);
        let mut env = StepEnv {
            rng: &mut rng,
            noise: &noise,
            pointer: &pointer,
            bounds: BOUNDS,
            config: &config,
            now: 0.0,
        };

        let mut particle = particle_at(Vec2::new(10.0, 10.0), 1000, 1001);
        particle.step(&mut env);

        assert_eq!(particle.iter(), 0);
        assert!((1000..=5000).contains(&particle.life()));
        assert!(particle.position().x >= 0.0 && particle.position().x <= BOUNDS.x);
        assert!(particle.position().y >= 0.0 && particle.position().y <= BOUNDS.y);
    }

    #[test]
    fn test_step_records_trail_and_stays_in_bounds() {
        // Pointer parked exactly on the particle: attraction contributes
        // nothing, so the segment comes purely from jitter + drift.
        let config = SwarmConfig::default();
        let noise = NoiseField::default();
        let mut pointer = Pointer::new();
        pointer.move_to(Vec2::new(400.0, 300.0));
        pointer.press(crate::pointer::PointerButton::Left);
        let mut rng = SmallPrng::new(42);
        let mut env = StepEnv {
            rng: &mut rng,
            noise: &noise,
            pointer: &pointer,
            bounds: BOUNDS,
            config: &config,
            now: 0.0,
        };

        let mut particle = particle_at(Vec2::new(400.0, 300.0), 1000, 0);
        particle.step(&mut env);

        assert_eq!(particle.trail(), Vec2::new(400.0, 300.0));
        assert!(particle.position().x >= 0.0 && particle.position().x <= BOUNDS.x);
        assert!(particle.position().y >= 0.0 && particle.position().y <= BOUNDS.y);
        assert_eq!(particle.iter(), 1);
    }

    #[test]
    fn test_damping_bleeds_velocity() {
        let config = quiet_config();
        let noise = NoiseField::default();
        let pointer = Pointer::new();
        let mut rng = SmallPrng::new(1);
        let mut env = StepEnv {
            rng: &mut rng,
            noise: &noise,
            pointer: &pointer,
            bounds: BOUNDS,
            config: &config,
            now: 0.0,
        };

        let mut particle = particle_at(Vec2::new(400.0, 300.0), 1000, 0);
        particle.step(&mut env);

        assert_eq!(particle.velocity(), Vec2::splat(0.96));
        assert!((particle.position() - Vec2::new(400.96, 300.96))
            .abs()
            .max_element()
            < 1e-4);
    }

    #[test]
    fn test_left_button_pulls_toward_pointer() {
        // Two identically seeded runs; the only difference is the button.
        // The velocity delta must be exactly the attraction term.
        let config = SwarmConfig::default();
        let noise = NoiseField::default();
        let start = Vec2::new(100.0, 300.0);
        let cursor = Vec2::new(500.0, 300.0);

        let run = |held: bool| {
            let mut pointer = Pointer::new();
            pointer.move_to(cursor);
            if held {
                pointer.press(crate::pointer::PointerButton::Left);
            }
            let mut rng = SmallPrng::new(77);
            let mut env = StepEnv {
                rng: &mut rng,
                noise: &noise,
                pointer: &pointer,
                bounds: BOUNDS,
                config: &config,
                now: 0.0,
            };
            let mut particle = particle_at(start, 1000, 0);
            particle.step(&mut env);
            particle.velocity()
        };

        let pulled = run(true);
        let free = run(false);
        let expected = (cursor - start) * config.attract_strength * config.damping;
        assert!((pulled - free - expected).abs().max_element() < 1e-6);
        assert!(pulled.x > free.x);
    }

    #[test]
    fn test_right_button_pushes_only_within_radius() {
        let config = SwarmConfig::default();
        let noise = NoiseField::default();
        let cursor = Vec2::new(500.0, 300.0);

        let run = |start: Vec2| {
            let mut pointer = Pointer::new();
            pointer.move_to(cursor);
            pointer.press(crate::pointer::PointerButton::Right);
            let mut rng = SmallPrng::new(77);
            let mut env = StepEnv {
                rng: &mut rng,
                noise: &noise,
                pointer: &pointer,
                bounds: BOUNDS,
                config: &config,
                now: 0.0,
            };
            let mut particle = particle_at(start, 1000, 0);
            particle.step(&mut env);
            particle.velocity()
        };
        let run_free = |start: Vec2| {
            let mut pointer = Pointer::new();
            pointer.move_to(cursor);
            let mut rng = SmallPrng::new(77);
            let mut env = StepEnv {
                rng: &mut rng,
                noise: &noise,
                pointer: &pointer,
                bounds: BOUNDS,
                config: &config,
                now: 0.0,
            };
            let mut particle = particle_at(start, 1000, 0);
            particle.step(&mut env);
            particle.velocity()
        };

        // Inside the radius the push points away from the cursor.
        let near = Vec2::new(400.0, 300.0);
        let delta = run(near) - run_free(near);
        let expected = (near - cursor) * config.repel_strength * config.damping;
        assert!((delta - expected).abs().max_element() < 1e-6);

        // Outside the radius the button has no effect.
        let far = Vec2::new(100.0, 300.0);
        assert_eq!(run(far), run_free(far));
    }

    #[test]
    fn test_render_appends_one_segment() {
        let particle = particle_at(Vec2::new(10.0, 20.0), 1000, 0);
        let mut path = Vec::new();
        particle.render(&mut path);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].position, [10.0, 20.0]);
        assert_eq!(path[1].position, [10.0, 20.0]);
    }
}
