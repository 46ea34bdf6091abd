use std::path::{Path, PathBuf};

use float_eq::assert_float_eq;
use mv3d_core::{Axis, Session, Transform};

fn model_path<P: AsRef<Path>>(path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(path)
}

fn loaded(name: &str) -> Session {
    let mut session = Session::new();
    session
        .load(model_path(name))
        .expect("failed to read OBJ file");
    session
}

fn first_vertex(session: &Session) -> [f32; 3] {
    let v = session.vertices();
    [v[0], v[1], v[2]]
}

#[test]
fn translate_each_axis_and_back() {
    let mut session = loaded("transform.obj");
    assert_eq!(first_vertex(&session), [1.0, 2.0, 3.0]);

    session.translate(1.0, 0.0, 0.0);
    assert_eq!(first_vertex(&session), [2.0, 2.0, 3.0]);
    session.translate(-1.0, 0.0, 0.0);
    assert_eq!(first_vertex(&session), [1.0, 2.0, 3.0]);

    session.translate(0.0, 1.0, 0.0);
    assert_eq!(first_vertex(&session), [1.0, 3.0, 3.0]);
    session.translate(0.0, -1.0, 0.0);
    assert_eq!(first_vertex(&session), [1.0, 2.0, 3.0]);

    session.translate(0.0, 0.0, 1.0);
    assert_eq!(first_vertex(&session), [1.0, 2.0, 4.0]);
    session.translate(0.0, 0.0, -1.0);
    assert_eq!(first_vertex(&session), [1.0, 2.0, 3.0]);
}

#[test]
fn scale_and_back() {
    let mut session = loaded("transform.obj");
    session.scale(2.0);
    assert_eq!(first_vertex(&session), [2.0, 4.0, 6.0]);
    session.scale(0.5);
    assert_eq!(first_vertex(&session), [1.0, 2.0, 3.0]);
}

#[test]
fn rotate_twenty_radians() {
    let cases: [(Axis, [f32; 3]); 3] = [
        (Axis::X, [1.0, 3.555, -0.601644]),
        (Axis::Y, [3.14692, 2.0, 0.311301]),
        (Axis::Z, [-1.41781, 1.72911, 3.0]),
    ];
    for (axis, expected) in cases {
        let mut session = loaded("transform.obj");
        session.rotate(20.0, axis);
        assert_float_eq!(first_vertex(&session), expected, abs_all <= 1e-4);

        session.rotate(-20.0, axis);
        assert_float_eq!(first_vertex(&session), [1.0, 2.0, 3.0], abs_all <= 1e-5);
    }
}

#[test]
fn rotations_round_trip() {
    let angles = [0.0, 0.1, -0.7, 1.0, std::f32::consts::PI, 4.5, -12.0];
    for name in ["cube.obj", "pentagon_fan.obj"] {
        for axis in Axis::ALL {
            for angle in angles {
                let mut session = loaded(name);
                let original = session.vertices().to_vec();

                let rotate = Transform::Rotate { axis, angle };
                session.apply(rotate);
                session.apply(rotate.inverse());

                for (after, before) in session.vertices().iter().zip(&original) {
                    assert_float_eq!(*after, *before, abs <= 1e-5);
                }
            }
        }
    }
}

#[test]
fn exact_scale_round_trip() {
    for factor in [2.0, 0.5, 4.0, 0.25, -2.0, 8.0] {
        let mut session = loaded("cube.obj");
        let original = session.vertices().to_vec();
        session.apply(Transform::Scale(factor));
        session.apply(Transform::Scale(factor).inverse());
        assert_eq!(session.vertices(), &original[..]);
    }
}

#[test]
fn approximate_scale_round_trip() {
    for factor in [3.0, 0.1, -7.5, 1e3] {
        let mut session = loaded("pentagon_fan.obj");
        let original = session.vertices().to_vec();
        session.scale(factor);
        session.scale(1.0 / factor);
        for (after, before) in session.vertices().iter().zip(&original) {
            assert_float_eq!(*after, *before, r2nd <= 1e-6);
        }
    }
}

#[test]
fn translate_round_trip() {
    for axis in Axis::ALL {
        for amount in [1.0, -0.25, 16.0] {
            let mut session = loaded("cube.obj");
            let original = session.vertices().to_vec();
            let shift = Transform::Translate { axis, amount };
            session.apply(shift);
            session.apply(shift.inverse());
            assert_eq!(session.vertices(), &original[..]);
        }
    }
}

#[test]
fn transforms_leave_edges_alone() {
    let mut session = loaded("cube.obj");
    let edges = session.edges().to_vec();
    let edge_count = session.edge_count();

    session.rotate(0.5, Axis::Y);
    session.scale(3.0);
    session.translate(1.0, -2.0, 0.5);

    assert_eq!(session.edges(), &edges[..]);
    assert_eq!(session.edge_count(), edge_count);
    assert_eq!(session.vertex_count(), 8);
}

#[test]
fn transforms_on_empty_session_are_noops() {
    let mut session = Session::new();
    session.rotate(1.0, Axis::X);
    session.scale(0.0);
    session.translate(1.0, 1.0, 1.0);
    assert!(session.vertices().is_empty());
}
