//! Swarm behavior configuration.
//!
//! Every tuning constant of the simulation lives here with its default, so a
//! host can adjust the feel of the effect without touching particle code.
//! Appearance settings are nested as [`VisualConfig`].

use std::ops::RangeInclusive;

use crate::visuals::VisualConfig;

/// Breakpoint below which the swarm is thinned out for narrow viewports.
const NARROW_VIEWPORT_WIDTH: u32 = 768;

/// Motion and population settings for a [`Swarm`](crate::swarm::Swarm).
#[derive(Debug, Clone)]
pub struct SwarmConfig {
    /// Number of particles. `None` derives a count from the viewport width
    /// at startup via [`particle_count_for_width`]; the count is never
    /// re-derived on resize.
    pub particle_count: Option<u32>,
    /// Velocity retention per tick, slightly below 1 so speed bleeds off
    /// as implicit drag.
    pub damping: f32,
    /// Pull toward the pointer while the left button is held. Applied at any
    /// distance - the attraction has no radius.
    pub attract_strength: f32,
    /// Push radius around the pointer while the right button is held, in
    /// pixels.
    pub repel_radius: f32,
    /// Push strength inside [`repel_radius`](Self::repel_radius).
    pub repel_strength: f32,
    /// Divisor mapping pixel positions to noise-field coordinates.
    pub noise_scale: f32,
    /// Divisor mapping elapsed seconds to the noise time coordinate.
    pub time_scale: f64,
    /// Amplitude of the uniform per-tick velocity jitter.
    pub jitter: f32,
    /// Amplitude of the noise-field contribution to velocity.
    pub noise_strength: f32,
    /// Lifetime drawn uniformly for each spawn, in ticks.
    pub life_range: RangeInclusive<i32>,
    /// Colors and trail decay.
    pub visuals: VisualConfig,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            particle_count: None,
            damping: 0.96,
            attract_strength: 0.0002,
            repel_radius: 200.0,
            repel_strength: 0.01,
            noise_scale: 300.0,
            time_scale: 8.0,
            jitter: 0.2,
            noise_strength: 0.1,
            life_range: 1000..=5000,
            visuals: VisualConfig::default(),
        }
    }
}

/// Default particle count for a viewport width: a coarse heuristic, not a
/// density curve.
pub fn particle_count_for_width(width: u32) -> u32 {
    if width < NARROW_VIEWPORT_WIDTH {
        1200
    } else {
        2500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_heuristic_breakpoint() {
        assert_eq!(particle_count_for_width(320), 1200);
        assert_eq!(particle_count_for_width(767), 1200);
        assert_eq!(particle_count_for_width(768), 2500);
        assert_eq!(particle_count_for_width(3840), 2500);
    }

    #[test]
    fn test_defaults_are_sane() {
        let config = SwarmConfig::default();
        assert!(config.damping < 1.0 && config.damping > 0.9);
        assert!(config.repel_strength > config.attract_strength);
        assert!(*config.life_range.start() >= 1);
        assert!(config.life_range.start() <= config.life_range.end());
    }
}
