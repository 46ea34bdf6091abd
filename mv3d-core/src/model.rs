//! The currently loaded mesh and the edits applied to it
use std::path::Path;

use log::{info, trace, warn};

use crate::error::Result;
use crate::geometry::GeometryBuffer;
use crate::parser::ParserChain;
use crate::transform::{Axis, Transform};

/// Owns one mesh and the parser chain used to replace it.
///
/// A failed [`load`](Self::load) leaves the model empty, not holding the
/// previous mesh.
#[derive(Debug, Default)]
pub struct MeshModel {
    geometry: GeometryBuffer,
    chain: ParserChain,
}

impl MeshModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(chain: ParserChain) -> Self {
        Self {
            geometry: GeometryBuffer::new(),
            chain,
        }
    }

    pub fn from_geometry(geometry: GeometryBuffer) -> Self {
        Self {
            geometry,
            chain: ParserChain::default(),
        }
    }

    /// Parser chain, for appending links before the first load
    pub fn chain_mut(&mut self) -> &mut ParserChain {
        &mut self.chain
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.geometry.clear();

        match self.chain.parse(path) {
            Ok(geometry) => {
                info!(
                    "loaded {} ({} vertices, {} edges)",
                    path.display(),
                    geometry.vertex_count(),
                    geometry.edge_count()
                );
                self.geometry = geometry;
                Ok(())
            }
            Err(err) => {
                warn!("failed to load {}: {}", path.display(), err);
                Err(err)
            }
        }
    }

    pub fn apply(&mut self, t: Transform) {
        trace!("{:?} over {} vertices", t, self.geometry.vertex_count());
        t.apply(self.geometry.vertices_mut());
    }

    pub fn rotate_x(&mut self, angle: f32) {
        self.apply(Transform::Rotate {
            axis: Axis::X,
            angle,
        });
    }

    pub fn rotate_y(&mut self, angle: f32) {
        self.apply(Transform::Rotate {
            axis: Axis::Y,
            angle,
        });
    }

    pub fn rotate_z(&mut self, angle: f32) {
        self.apply(Transform::Rotate {
            axis: Axis::Z,
            angle,
        });
    }

    pub fn scale(&mut self, factor: f32) {
        self.apply(Transform::Scale(factor));
    }

    pub fn translate(&mut self, amount: f32, axis: Axis) {
        self.apply(Transform::Translate { axis, amount });
    }

    pub fn geometry(&self) -> &GeometryBuffer {
        &self.geometry
    }

    pub fn vertices(&self) -> &[f32] {
        self.geometry.vertices()
    }

    pub fn edges(&self) -> &[u32] {
        self.geometry.edges()
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    pub fn edge_count(&self) -> u64 {
        self.geometry.edge_count()
    }

    pub fn face_index_count(&self) -> usize {
        self.geometry.face_index_count()
    }
}
