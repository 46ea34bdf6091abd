//! In-place rigid transforms over a flat `x, y, z` vertex buffer
//!
//! All angles are in radians. The X and Y rotations turn the opposite way to
//! the Z rotation for a positive angle; existing consumers depend on that.

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Offset of this axis inside one vertex
    pub fn offset(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A single edit applied to every vertex of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Rotate { axis: Axis, angle: f32 },
    Scale(f32),
    Translate { axis: Axis, amount: f32 },
}

impl Transform {
    pub fn apply(&self, vertices: &mut [f32]) {
        match *self {
            Transform::Rotate { axis: Axis::X, angle } => rotate_x(vertices, angle),
            Transform::Rotate { axis: Axis::Y, angle } => rotate_y(vertices, angle),
            Transform::Rotate { axis: Axis::Z, angle } => rotate_z(vertices, angle),
            Transform::Scale(factor) => scale(vertices, factor),
            Transform::Translate { axis, amount } => translate(vertices, amount, axis),
        }
    }

    /// The transform that undoes this one (up to float rounding for rotations)
    pub fn inverse(&self) -> Transform {
        match *self {
            Transform::Rotate { axis, angle } => Transform::Rotate {
                axis,
                angle: -angle,
            },
            Transform::Scale(factor) => Transform::Scale(1.0 / factor),
            Transform::Translate { axis, amount } => Transform::Translate {
                axis,
                amount: -amount,
            },
        }
    }
}

pub fn rotate_x(vertices: &mut [f32], angle: f32) {
    let (sin, cos) = angle.sin_cos();
    for v in vertices.chunks_exact_mut(3) {
        let (y, z) = (v[1], v[2]);
        v[1] = cos * y + sin * z;
        v[2] = -sin * y + cos * z;
    }
}

pub fn rotate_y(vertices: &mut [f32], angle: f32) {
    let (sin, cos) = angle.sin_cos();
    for v in vertices.chunks_exact_mut(3) {
        let (x, z) = (v[0], v[2]);
        v[0] = cos * x + sin * z;
        v[2] = -sin * x + cos * z;
    }
}

pub fn rotate_z(vertices: &mut [f32], angle: f32) {
    let (sin, cos) = angle.sin_cos();
    for v in vertices.chunks_exact_mut(3) {
        let (x, y) = (v[0], v[1]);
        v[0] = cos * x - sin * y;
        v[1] = sin * x + cos * y;
    }
}

/// Multiply every coordinate by `factor`. Zero collapses the mesh, negatives mirror it.
pub fn scale(vertices: &mut [f32], factor: f32) {
    for c in vertices.iter_mut() {
        *c *= factor;
    }
}

pub fn translate(vertices: &mut [f32], amount: f32, axis: Axis) {
    for c in vertices.iter_mut().skip(axis.offset()).step_by(3) {
        *c += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_axis_offsets() {
        let offsets: Vec<usize> = Axis::ALL.iter().map(|a| a.offset()).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn test_quarter_turns() {
        let half_pi = std::f32::consts::FRAC_PI_2;

        let mut v: [f32; 3] = [0.0, 1.0, 0.0];
        rotate_x(&mut v, half_pi);
        assert_float_eq!(v, [0.0, 0.0, -1.0], abs_all <= 1e-6);

        let mut v: [f32; 3] = [1.0, 0.0, 0.0];
        rotate_y(&mut v, half_pi);
        assert_float_eq!(v, [0.0, 0.0, -1.0], abs_all <= 1e-6);

        let mut v: [f32; 3] = [1.0, 0.0, 0.0];
        rotate_z(&mut v, half_pi);
        assert_float_eq!(v, [0.0, 1.0, 0.0], abs_all <= 1e-6);
    }

    #[test]
    fn test_translate_touches_one_axis() {
        let mut v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        translate(&mut v, 10.0, Axis::Y);
        assert_eq!(v, [1.0, 12.0, 3.0, 4.0, 15.0, 6.0]);
        translate(&mut v, 1.0, Axis::Z);
        assert_eq!(v, [1.0, 12.0, 4.0, 4.0, 15.0, 7.0]);
    }

    #[test]
    fn test_scale_mirror_and_zero() {
        let mut v = [1.0, -2.0, 3.0];
        scale(&mut v, -1.0);
        assert_eq!(v, [-1.0, 2.0, -3.0]);
        scale(&mut v, 0.0);
        assert!(v.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut v: [f32; 0] = [];
        for t in [
            Transform::Rotate {
                axis: Axis::Z,
                angle: 1.0,
            },
            Transform::Scale(3.0),
            Transform::Translate {
                axis: Axis::X,
                amount: 2.0,
            },
        ] {
            t.apply(&mut v);
        }
        assert!(v.is_empty());
    }

    #[test]
    fn test_inverse() {
        let t = Transform::Scale(4.0);
        assert_eq!(t.inverse(), Transform::Scale(0.25));

        let t = Transform::Translate {
            axis: Axis::Z,
            amount: 1.5,
        };
        let mut v = [0.5, 0.25, -3.0];
        t.apply(&mut v);
        t.inverse().apply(&mut v);
        assert_eq!(v, [0.5, 0.25, -3.0]);
    }
}
