//! Camera and projection utilities
use mv3d_core::Bounds;
use nalgebra::{Matrix4, Point3, Vector3};

/// Terminal cells are about twice as tall as they are wide
const CELL_ASPECT: f32 = 0.5;

/// Smallest half-size the camera will frame, so a single point still projects
const MIN_EXTENT: f32 = 1e-3;

/// Breathing room around the mesh in the parallel view
const FRAME_MARGIN: f32 = 1.1;

/// Camera distance in multiples of the mesh radius
const DISTANCE_FACTOR: f32 = 4.0;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Projection {
    /// Orthographic box fitted to the mesh
    Parallel,
    /// Perspective frustum
    Central,
}

impl Projection {
    pub fn toggled(self) -> Self {
        match self {
            Projection::Parallel => Projection::Central,
            Projection::Central => Projection::Parallel,
        }
    }
}

/// Camera configuration for 3D rendering
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Half-height of the parallel view volume
    pub extent: f32,
    pub projection: Projection,
}

impl Camera {
    pub fn new(width: u32, height: u32, projection: Projection) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 5.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            aspect: cell_aspect(width, height),
            near: 0.1,
            far: 100.0,
            extent: 1.0,
            projection,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = cell_aspect(width, height);
    }

    /// Frame a mesh: the parallel box spans its largest |x| or |y|, and the
    /// camera backs off far enough for the perspective view to hold it.
    pub fn fit(&mut self, bounds: Option<Bounds>) {
        let Some(bounds) = bounds else {
            return;
        };
        let radius = bounds.radius().max(MIN_EXTENT);
        let distance = radius * DISTANCE_FACTOR;

        self.extent = bounds.planar_extent().max(MIN_EXTENT) * FRAME_MARGIN;
        self.position = Point3::new(0.0, 0.0, distance);
        self.near = radius * 0.1;
        self.far = distance + radius * 10.0;
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.projection {
            Projection::Central => {
                Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
            }
            Projection::Parallel => {
                let half_width = self.extent * self.aspect;
                Matrix4::new_orthographic(
                    -half_width,
                    half_width,
                    -self.extent,
                    self.extent,
                    self.near,
                    self.far,
                )
            }
        }
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a 3D point to screen space as `(column, row, depth)`.
    ///
    /// Returns `None` for points behind the camera or outside the view volume.
    pub fn project_to_screen(
        view_projection: &Matrix4<f32>,
        point: &Point3<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let clip = view_projection * point.to_homogeneous();
        if clip.w <= f32::EPSILON {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        if !(-1.0..=1.0).contains(&ndc_x)
            || !(-1.0..=1.0).contains(&ndc_y)
            || !(-1.0..=1.0).contains(&depth)
        {
            return None;
        }

        // Convert to screen space
        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}

fn cell_aspect(width: u32, height: u32) -> f32 {
    width as f32 * CELL_ASPECT / height.max(1) as f32
}
