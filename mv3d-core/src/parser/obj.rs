//! Wavefront-style `.obj` parser: `v` and `f` lines only
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use nom::{
    character::complete::{i64 as signed_integer, multispace0, multispace1},
    number::complete::float,
    IResult,
};

use super::FormatParser;
use crate::error::{Error, Result};
use crate::geometry::{push_closed_loop, GeometryBuffer};

const EXTENSION: &str = ".obj";

/// Parser for text meshes made of `v x y z` and `f i j k ...` lines.
///
/// Face indices are 1-based, or negative to count back from the last vertex
/// of the file. Every other line (comments, normals, texture coordinates,
/// groups) is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjParser;

impl FormatParser for ObjParser {
    fn name(&self) -> &str {
        "obj"
    }

    fn claims(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(EXTENSION)
    }

    fn parse(&self, path: &Path) -> Result<GeometryBuffer> {
        let read_failure = |source: io::Error| Error::ReadFailure {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_failure)?;
        let mut builder = ObjBuilder::default();
        for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line = line.map_err(read_failure)?;
            builder.feed(index + 1, &String::from_utf8_lossy(&line))?;
        }
        let mesh = builder.finish()?;

        debug!(
            "parsed {}: {} vertices, {} edge indices, {} edges",
            path.display(),
            mesh.vertex_count(),
            mesh.face_index_count(),
            mesh.edge_count()
        );
        Ok(mesh)
    }
}

/// Parse `.obj` content that is already in memory
pub fn parse_obj_str(input: &str) -> Result<GeometryBuffer> {
    let mut builder = ObjBuilder::default();
    for (index, line) in input.lines().enumerate() {
        builder.feed(index + 1, line)?;
    }
    builder.finish()
}

/// A face index as written in the file, before resolution
#[derive(Debug, Clone, Copy)]
struct RawIndex {
    line: usize,
    value: i64,
}

/// Scratch state for one parse. Nothing escapes until `finish` succeeds.
#[derive(Default)]
struct ObjBuilder {
    vertices: Vec<f32>,
    raw_edges: Vec<RawIndex>,
    faces: usize,
}

impl ObjBuilder {
    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        let mut chars = line.chars();
        match chars.next() {
            Some('v') => self.vertex(line_no, chars.as_str()),
            Some('f') => self.face(line_no, chars.as_str()),
            _ => Ok(()),
        }
    }

    fn vertex(&mut self, line_no: usize, rest: &str) -> Result<()> {
        // `vt`, `vn`, `vp` and a bare `v` are not vertex lines
        if !starts_with_whitespace(rest) {
            return Ok(());
        }
        let (_, (x, y, z)) = parse_vector3(rest)
            .map_err(|_| Error::malformed(line_no, "expected three numeric vertex coordinates"))?;
        if ![x, y, z].iter().all(|c| c.is_finite()) {
            return Err(Error::malformed(line_no, "vertex coordinate is not a finite number"));
        }
        self.vertices.extend_from_slice(&[x, y, z]);
        Ok(())
    }

    fn face(&mut self, line_no: usize, rest: &str) -> Result<()> {
        if !starts_with_whitespace(rest) {
            return Err(Error::malformed(line_no, "expected whitespace after 'f'"));
        }
        let face: Vec<RawIndex> = rest
            .split_whitespace()
            .filter_map(face_index)
            .map(|value| RawIndex {
                line: line_no,
                value,
            })
            .collect();
        if face.is_empty() {
            return Err(Error::malformed(line_no, "face has no vertex indices"));
        }

        push_closed_loop(&mut self.raw_edges, &face);
        self.faces += 1;
        Ok(())
    }

    fn finish(self) -> Result<GeometryBuffer> {
        let vertex_count = self.vertices.len() / 3;
        let edges = self
            .raw_edges
            .iter()
            .map(|&raw| resolve_index(raw, vertex_count))
            .collect::<Result<Vec<u32>>>()?;

        // Euler's formula for a closed genus-0 polyhedron. Not checked against the topology.
        let edge_count = if self.faces == 0 {
            0
        } else {
            (vertex_count + self.faces).saturating_sub(2) as u64
        };

        Ok(GeometryBuffer::from_raw(self.vertices, edges, edge_count))
    }
}

fn starts_with_whitespace(s: &str) -> bool {
    s.starts_with(char::is_whitespace)
}

fn parse_vector3(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}

/// Leading integer of one face token such as `7`, `-2` or `7/1/3`.
///
/// Characters before the first digit or `-` are skipped. Tokens without one
/// carry no index. A sign with no digits reads as 0, which never resolves.
fn face_index(token: &str) -> Option<i64> {
    let start = token.find(|c: char| c.is_ascii_digit() || c == '-')?;
    let parsed: IResult<&str, i64> = signed_integer(&token[start..]);
    Some(parsed.map_or(0, |(_, value)| value))
}

/// Map a 1-based or negative (from the end) index onto a 0-based one
fn resolve_index(raw: RawIndex, vertex_count: usize) -> Result<u32> {
    let count = vertex_count as i64;
    let resolved = match raw.value {
        0 => None,
        v if v > 0 => Some(v - 1),
        v => Some(count + v),
    };
    resolved
        .filter(|i| (0..count).contains(i))
        .and_then(|i| u32::try_from(i).ok())
        .ok_or(Error::InvalidFaceIndex {
            line: raw.line,
            index: raw.value,
            vertex_count,
        })
}
