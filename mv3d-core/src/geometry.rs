//! Flat vertex and edge storage shared by the parser, the model and renderers
use nalgebra::Point3;

use crate::error::{Error, Result};

/// Axis-aligned bounding box of a vertex buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Bounds {
    /// Largest absolute coordinate on the X and Y axes
    pub fn planar_extent(&self) -> f32 {
        let x = self.min.x.abs().max(self.max.x.abs());
        let y = self.min.y.abs().max(self.max.y.abs());
        x.max(y)
    }

    /// Largest absolute coordinate on any axis
    pub fn radius(&self) -> f32 {
        self.planar_extent()
            .max(self.min.z.abs())
            .max(self.max.z.abs())
    }
}

/// A loaded mesh: vertex positions, line-segment indices and the derived edge count.
///
/// `vertices` holds `x, y, z` triples back to back, so vertex `i` lives at
/// `3 * i..3 * i + 3`. `edges` holds pairs of 0-based vertex indices, one pair
/// per line segment. Edges shared by two faces appear once per face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    vertices: Vec<f32>,
    edges: Vec<u32>,
    edge_count: u64,
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a buffer, checking that the parts fit together.
    ///
    /// `vertices.len()` must be a multiple of 3, `edges.len()` must be even and
    /// every edge index must address an existing vertex. This is the
    /// constructor for parsers living outside this crate.
    pub fn from_parts(vertices: Vec<f32>, edges: Vec<u32>, edge_count: u64) -> Result<Self> {
        if vertices.len() % 3 != 0 {
            return Err(Error::InvalidBuffer(format!(
                "{} coordinates is not a whole number of vertices",
                vertices.len()
            )));
        }
        if edges.len() % 2 != 0 {
            return Err(Error::InvalidBuffer(format!(
                "{} edge indices do not pair up",
                edges.len()
            )));
        }
        let vertex_count = vertices.len() / 3;
        if let Some(&index) = edges.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(Error::InvalidBuffer(format!(
                "edge index {index} with {vertex_count} vertices"
            )));
        }
        Ok(Self::from_raw(vertices, edges, edge_count))
    }

    /// Assemble a buffer from parts this crate has already validated
    pub(crate) fn from_raw(vertices: Vec<f32>, edges: Vec<u32>, edge_count: u64) -> Self {
        debug_assert_eq!(vertices.len() % 3, 0);
        debug_assert_eq!(edges.len() % 2, 0);
        debug_assert!(edges.iter().all(|&i| (i as usize) < vertices.len() / 3));
        Self {
            vertices,
            edges,
            edge_count,
        }
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [f32] {
        &mut self.vertices
    }

    pub fn edges(&self) -> &[u32] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Topological edge estimate, `V + F - 2`, or zero when no faces were read
    pub fn edge_count(&self) -> u64 {
        self.edge_count
    }

    /// Number of entries in the edge-list (twice the number of drawn segments)
    pub fn face_index_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.edge_count = 0;
    }

    pub fn vertex(&self, index: usize) -> Option<Point3<f32>> {
        let v = self.vertices.get(3 * index..3 * index + 3)?;
        Some(Point3::new(v[0], v[1], v[2]))
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3<f32>> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|v| Point3::new(v[0], v[1], v[2]))
    }

    /// Bounding box of all vertices, `None` for an empty buffer
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.positions();
        let first = positions.next()?;
        let bounds = positions.fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, p| Bounds {
                min: Point3::new(b.min.x.min(p.x), b.min.y.min(p.y), b.min.z.min(p.z)),
                max: Point3::new(b.max.x.max(p.x), b.max.y.max(p.y), b.max.z.max(p.z)),
            },
        );
        Some(bounds)
    }

    /// Create a cube centered on the origin, built from six quads
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        #[rustfmt::skip]
        let vertices = vec![
            -h, -h, -h,
             h, -h, -h,
             h,  h, -h,
            -h,  h, -h,
            -h, -h,  h,
             h, -h,  h,
             h,  h,  h,
            -h,  h,  h,
        ];
        let faces: [[u32; 4]; 6] = [
            [0, 3, 2, 1], // back
            [4, 5, 6, 7], // front
            [0, 1, 5, 4], // bottom
            [3, 7, 6, 2], // top
            [0, 4, 7, 3], // left
            [1, 2, 6, 5], // right
        ];

        let mut edges = Vec::with_capacity(faces.len() * 8);
        for face in &faces {
            push_closed_loop(&mut edges, face);
        }
        let edge_count = (vertices.len() / 3 + faces.len()) as u64 - 2;

        Self::from_raw(vertices, edges, edge_count)
    }
}

/// Expand a face's vertex loop into line-segment pairs, closing back to the first vertex.
///
/// `[a, b, c]` becomes `[a, b, b, c, c, a]`.
pub(crate) fn push_closed_loop<T: Copy>(out: &mut Vec<T>, face: &[T]) {
    let Some((&first, rest)) = face.split_first() else {
        return;
    };
    out.push(first);
    for &index in rest {
        out.push(index);
        out.push(index);
    }
    out.push(first);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_loop() {
        let mut out = Vec::new();
        push_closed_loop(&mut out, &[0u32, 1, 2]);
        assert_eq!(out, vec![0, 1, 1, 2, 2, 0]);

        push_closed_loop(&mut out, &[]);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_cube() {
        let cube = GeometryBuffer::cube(2.0);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edge_count(), 12);
        // 6 quads, 4 segments each, shared edges kept
        assert_eq!(cube.face_index_count(), 48);
        assert!(cube.edges().iter().all(|&i| i < 8));

        let bounds = cube.bounds().unwrap();
        assert_eq!(bounds.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(bounds.radius(), 1.0);
    }

    #[test]
    fn test_from_parts_checks_shape() {
        let ok = GeometryBuffer::from_parts(vec![0.0; 6], vec![0, 1, 1, 0], 1).unwrap();
        assert_eq!(ok.vertex_count(), 2);

        for (vertices, edges) in [
            (vec![0.0; 5], vec![]),
            (vec![0.0; 6], vec![0, 1, 1]),
            (vec![0.0; 6], vec![0, 2]),
        ] {
            let err = GeometryBuffer::from_parts(vertices, edges, 0).unwrap_err();
            assert!(matches!(err, Error::InvalidBuffer(_)), "{err}");
        }
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = GeometryBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.vertex_count(), 0);
        assert_eq!(buffer.edge_count(), 0);
        assert!(buffer.bounds().is_none());
        assert!(buffer.vertex(0).is_none());
    }

    #[test]
    fn test_vertex_access_and_clear() {
        let mut buffer = GeometryBuffer::from_raw(vec![1.0, 2.0, 3.0, -4.0, 5.0, 0.5], vec![0, 1], 0);
        assert_eq!(buffer.vertex(1), Some(Point3::new(-4.0, 5.0, 0.5)));
        assert_eq!(buffer.vertex(2), None);

        let bounds = buffer.bounds().unwrap();
        assert_eq!(bounds.planar_extent(), 5.0);
        assert_eq!(bounds.radius(), 5.0);

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.edges().is_empty());
    }
}
