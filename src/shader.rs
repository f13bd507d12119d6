//! WGSL sources and the data layouts shared with them.

use bytemuck::{Pod, Zeroable};

use crate::visuals::{srgb_to_linear, VisualConfig};

pub const COMPOSITE_SOURCE: &str = include_str!("composite.wgsl");
pub const BLIT_SOURCE: &str = include_str!("blit.wgsl");

/// One endpoint of a trail segment, in surface pixel coordinates.
///
/// The swarm emits two of these per particle per tick; the stroke pass draws
/// them as a line list.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
}

/// Uniform block shared by the fade and stroke passes.
///
/// Layout must match `Uniforms` in `composite.wgsl`: the vec2 is padded out
/// to 16 bytes so the vec4s stay aligned.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
    pub stroke_color: [f32; 4],
    pub fade_color: [f32; 4],
}

impl Uniforms {
    /// Bake the visual config into GPU form. Colors convert sRGB to linear
    /// here; alphas pass through untouched.
    pub fn new(width: u32, height: u32, visuals: &VisualConfig) -> Self {
        let stroke = visuals.stroke_color();
        let fade = visuals.fade_color();
        Self {
            resolution: [width as f32, height as f32],
            _pad: [0.0; 2],
            stroke_color: [
                srgb_to_linear(stroke.x),
                srgb_to_linear(stroke.y),
                srgb_to_linear(stroke.z),
                stroke.w,
            ],
            fade_color: [
                srgb_to_linear(fade.x),
                srgb_to_linear(fade.y),
                srgb_to_linear(fade.z),
                fade.w,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_source_parses() {
        naga::front::wgsl::parse_str(COMPOSITE_SOURCE).expect("composite shader must parse");
    }

    #[test]
    fn test_blit_source_parses() {
        naga::front::wgsl::parse_str(BLIT_SOURCE).expect("blit shader must parse");
    }

    #[test]
    fn test_uniform_layout_matches_wgsl() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 48);
        assert_eq!(std::mem::size_of::<LineVertex>(), 8);
    }

    #[test]
    fn test_uniforms_keep_alphas_untouched() {
        let visuals = VisualConfig::default();
        let u = Uniforms::new(800, 600, &visuals);
        assert_eq!(u.resolution, [800.0, 600.0]);
        assert_eq!(u.stroke_color[3], visuals.stroke_alpha);
        assert_eq!(u.fade_color[3], visuals.trail_fade_alpha);
    }
}
