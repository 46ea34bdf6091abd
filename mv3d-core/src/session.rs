//! Single entry point for viewers: load a file, edit the mesh, read buffers back
use std::path::Path;

use crate::error::Result;
use crate::geometry::GeometryBuffer;
use crate::model::MeshModel;
use crate::parser::ParserChain;
use crate::transform::{Axis, Transform};

/// The mesh a viewer is showing.
///
/// A viewer owns one `Session` and hands out `&mut` to whatever drives it.
/// Sharing it across threads needs an outer `Mutex`.
#[derive(Debug, Default)]
pub struct Session {
    model: MeshModel,
    file_name: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(chain: ParserChain) -> Self {
        Self {
            model: MeshModel::with_chain(chain),
            file_name: None,
        }
    }

    /// Start from an in-memory mesh instead of a file
    pub fn from_geometry(geometry: GeometryBuffer) -> Self {
        Self {
            model: MeshModel::from_geometry(geometry),
            file_name: None,
        }
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.file_name = None;
        self.model.load(path)?;
        self.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(())
    }

    pub fn rotate(&mut self, angle: f32, axis: Axis) {
        match axis {
            Axis::X => self.model.rotate_x(angle),
            Axis::Y => self.model.rotate_y(angle),
            Axis::Z => self.model.rotate_z(angle),
        }
    }

    pub fn scale(&mut self, factor: f32) {
        self.model.scale(factor);
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.model.translate(dx, Axis::X);
        self.model.translate(dy, Axis::Y);
        self.model.translate(dz, Axis::Z);
    }

    pub fn apply(&mut self, t: Transform) {
        self.model.apply(t);
    }

    pub fn vertex_count(&self) -> usize {
        self.model.vertex_count()
    }

    pub fn edge_count(&self) -> u64 {
        self.model.edge_count()
    }

    pub fn face_index_count(&self) -> usize {
        self.model.face_index_count()
    }

    pub fn vertices(&self) -> &[f32] {
        self.model.vertices()
    }

    pub fn edges(&self) -> &[u32] {
        self.model.edges()
    }

    pub fn geometry(&self) -> &GeometryBuffer {
        self.model.geometry()
    }

    /// File name of the last successful load
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}
