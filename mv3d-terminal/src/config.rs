//! Viewer settings resolved from the command line

use crate::args::Args;
use crate::projection::Projection;
use crate::style::RenderStyle;

/// Default rotation per key press, in degrees
pub const DEFAULT_ROTATE_STEP_DEGREES: f32 = 5.0;

/// Default distance moved per key press
pub const DEFAULT_TRANSLATE_STEP: f32 = 0.1;

/// Default zoom factor per key press
pub const DEFAULT_SCALE_STEP: f32 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub projection: Projection,
    pub style: RenderStyle,
    /// Rotation per key press, in radians
    pub rotate_step: f32,
    pub translate_step: f32,
    /// Always positive; the inverse step is `1 / scale_step`
    pub scale_step: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            projection: Projection::Central,
            style: RenderStyle::default(),
            rotate_step: DEFAULT_ROTATE_STEP_DEGREES.to_radians(),
            translate_step: DEFAULT_TRANSLATE_STEP,
            scale_step: DEFAULT_SCALE_STEP,
        }
    }
}

impl From<&Args> for ViewerConfig {
    fn from(args: &Args) -> Self {
        Self {
            projection: args.projection,
            style: RenderStyle {
                vertices: args.vertices,
                lines: args.lines,
            },
            rotate_step: args.rotate_step.to_radians(),
            translate_step: args.translate_step,
            scale_step: args.scale_step,
        }
    }
}
