use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_ROTATE_STEP_DEGREES, DEFAULT_SCALE_STEP, DEFAULT_TRANSLATE_STEP};
use crate::projection::Projection;
use crate::style::{LineStyle, VertexStyle};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Mesh to open (.obj). Shows a cube when omitted.
    pub path: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Projection::Central)]
    pub projection: Projection,

    /// Marker drawn at every vertex
    #[arg(long, value_enum, default_value_t = VertexStyle::None)]
    pub vertices: VertexStyle,

    /// Stroke used for edges
    #[arg(long, value_enum, default_value_t = LineStyle::Solid)]
    pub lines: LineStyle,

    /// Rotation per key press, in degrees
    #[arg(long, default_value_t = DEFAULT_ROTATE_STEP_DEGREES)]
    pub rotate_step: f32,

    /// Distance moved per key press
    #[arg(long, default_value_t = DEFAULT_TRANSLATE_STEP)]
    pub translate_step: f32,

    /// Zoom factor per key press
    #[arg(long, default_value_t = DEFAULT_SCALE_STEP, value_parser = positive_factor)]
    pub scale_step: f32,
}

fn positive_factor(s: &str) -> Result<f32, String> {
    let factor: f32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(format!("scale step must be a positive number, got {s}"))
    }
}
