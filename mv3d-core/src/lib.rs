//! MV3D Core Library - mesh loading and in-place transforms
//!
//! This library provides the viewer-independent part of MV3D: an extensible
//! parser chain that turns `.obj` files into flat vertex/edge buffers, and the
//! rotate/scale/translate edits applied to those buffers.

pub mod error;
pub mod geometry;
pub mod model;
pub mod parser;
pub mod session;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{Bounds, GeometryBuffer};
pub use model::MeshModel;
pub use parser::{parse_obj_str, FormatParser, ObjParser, ParserChain};
pub use session::Session;
pub use transform::{Axis, Transform};
