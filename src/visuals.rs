//! Visual parameters for trail rendering.
//!
//! Appearance is kept separate from motion: everything here feeds the
//! compositor (fade fill and stroke colors), nothing here changes how
//! particles move.
//!
//! # Usage
//!
//! ```ignore
//! Simulation::new()
//!     .with_visuals(|v| {
//!         v.hue = 25.0;             // ember orange instead of the default blue
//!         v.trail_fade_alpha = 0.3; // shorter trails
//!     })
//!     .run();
//! ```

use glam::{Vec3, Vec4};

/// Colors and trail-decay settings for the compositor.
///
/// All colors are sRGB; conversion to linear happens at the GPU boundary.
#[derive(Debug, Clone)]
pub struct VisualConfig {
    /// Stroke hue in degrees.
    pub hue: f32,
    /// Stroke saturation, `0..=1`.
    pub saturation: f32,
    /// Stroke lightness, `0..=1`.
    pub lightness: f32,
    /// Stroke alpha. Strokes blend additively, so this controls glow
    /// buildup where trails overlap.
    pub stroke_alpha: f32,
    /// Alpha of the per-frame background fill. Higher values erase trails
    /// faster; lower values leave long ghosts.
    pub trail_fade_alpha: f32,
    /// Background color, also used to wipe the canvas on resize.
    pub background: Vec3,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            hue: 205.0,
            saturation: 0.75,
            lightness: 0.45,
            stroke_alpha: 0.25,
            trail_fade_alpha: 0.18,
            background: Vec3::splat(5.0 / 255.0),
        }
    }
}

impl VisualConfig {
    /// Stroke color as sRGB + alpha.
    pub fn stroke_color(&self) -> Vec4 {
        hsl_to_rgb(self.hue, self.saturation, self.lightness).extend(self.stroke_alpha)
    }

    /// Fade fill color as sRGB + alpha.
    pub fn fade_color(&self) -> Vec4 {
        self.background.extend(self.trail_fade_alpha)
    }
}

/// Convert an HSL color (hue in degrees) to sRGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Vec3::new(r + m, g + m, b + m)
}

/// One sRGB channel to linear, the standard piecewise transfer curve.
pub(crate) fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
