//! ASCII wireframe rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use mv3d_core::GeometryBuffer;
use std::io::Write;

use crate::projection::Camera;
use crate::style::{LineStyle, RenderStyle};

/// Cells drawn, then skipped, along a dashed edge
const DASH_LENGTH: usize = 2;

/// Pulls vertex markers in front of the edges that end on them
const VERTEX_DEPTH_BIAS: f32 = 1e-3;

/// Draws the edge-list of a mesh as depth-tested terminal characters
pub struct WireframeRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl WireframeRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
    }

    pub fn render(&mut self, geometry: &GeometryBuffer, camera: &Camera, style: RenderStyle) {
        let view_projection = camera.view_projection();
        let projected: Vec<Option<(f32, f32, f32)>> = geometry
            .positions()
            .map(|p| {
                Camera::project_to_screen(
                    &view_projection,
                    &p,
                    self.width as u32,
                    self.height as u32,
                )
            })
            .collect();

        if style.lines != LineStyle::None {
            let dashed = style.lines == LineStyle::Dashed;
            for segment in geometry.edges().chunks_exact(2) {
                let a = projected[segment[0] as usize];
                let b = projected[segment[1] as usize];
                // Edges with a clipped end are dropped whole
                if let (Some(a), Some(b)) = (a, b) {
                    self.draw_line(a, b, dashed);
                }
            }
        }

        if let Some(marker) = style.vertices.marker() {
            for &(x, y, depth) in projected.iter().flatten() {
                self.plot(x, y, depth - VERTEX_DEPTH_BIAS, marker);
            }
        }
    }

    fn draw_line(&mut self, a: (f32, f32, f32), b: (f32, f32, f32), dashed: bool) {
        let dx = b.0 - a.0;
        let dy = b.1 - a.1;
        let dz = b.2 - a.2;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        let glyph = line_glyph(dx, dy);

        for step in 0..=steps {
            if dashed && (step / DASH_LENGTH) % 2 == 1 {
                continue;
            }
            // multiply before dividing so integer endpoints land on exact cells
            let (t, n) = (step as f32, steps as f32);
            self.plot(a.0 + dx * t / n, a.1 + dy * t / n, a.2 + dz * t / n, glyph);
        }
    }

    fn plot(&mut self, x: f32, y: f32, depth: f32, c: char) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (col, row) = (x as usize, y as usize);
        if col >= self.width || row >= self.height {
            return;
        }
        let idx = row * self.width + col;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = c;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];

                let color = match c {
                    'o' | '#' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Pick the character that best follows a screen-space direction (rows grow downward)
fn line_glyph(dx: f32, dy: f32) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ay < ax * 0.5 {
        '-'
    } else if ax < ay * 0.5 {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Projection;
    use crate::style::VertexStyle;

    fn row(renderer: &WireframeRenderer, y: usize) -> String {
        renderer.char_buffer[y * renderer.width..(y + 1) * renderer.width]
            .iter()
            .collect()
    }

    fn framed_camera(geometry: &GeometryBuffer, width: u32, height: u32) -> Camera {
        let mut camera = Camera::new(width, height, Projection::Parallel);
        camera.fit(geometry.bounds());
        camera
    }

    #[test]
    fn test_line_glyphs() {
        assert_eq!(line_glyph(10.0, 1.0), '-');
        assert_eq!(line_glyph(0.0, 5.0), '|');
        assert_eq!(line_glyph(3.0, 3.0), '\\');
        assert_eq!(line_glyph(-3.0, 3.0), '/');
    }

    #[test]
    fn test_horizontal_line() {
        let mut renderer = WireframeRenderer::new(10, 3);
        renderer.draw_line((1.0, 1.0, 0.0), (8.0, 1.0, 0.0), false);
        assert_eq!(row(&renderer, 1), " -------- ");
        assert_eq!(row(&renderer, 0), " ".repeat(10));
    }

    #[test]
    fn test_dashed_line() {
        let mut renderer = WireframeRenderer::new(10, 1);
        renderer.draw_line((0.0, 0.0, 0.0), (9.0, 0.0, 0.0), true);
        assert_eq!(row(&renderer, 0), "--  --  --");
    }

    #[test]
    fn test_depth_test_keeps_nearest() {
        let mut renderer = WireframeRenderer::new(4, 1);
        renderer.plot(1.0, 0.0, 0.5, 'a');
        renderer.plot(1.0, 0.0, 0.9, 'b');
        renderer.plot(1.0, 0.0, 0.1, 'c');
        renderer.plot(-1.0, 0.0, 0.0, 'x');
        renderer.plot(4.0, 0.0, 0.0, 'x');
        assert_eq!(row(&renderer, 0), " c  ");
    }

    #[test]
    fn test_render_cube() {
        let cube = GeometryBuffer::cube(2.0);
        let camera = framed_camera(&cube, 40, 20);
        let mut renderer = WireframeRenderer::new(40, 20);

        renderer.render(
            &cube,
            &camera,
            RenderStyle {
                vertices: VertexStyle::Square,
                lines: LineStyle::Solid,
            },
        );
        let drawn: String = renderer.char_buffer.iter().collect();
        assert!(drawn.contains('#'));
        assert!(drawn.contains('-'));
        assert!(drawn.contains('|'));

        renderer.clear();
        renderer.render(
            &cube,
            &camera,
            RenderStyle {
                vertices: VertexStyle::None,
                lines: LineStyle::None,
            },
        );
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_draw_emits_every_cell() {
        let mut renderer = WireframeRenderer::new(3, 2);
        renderer.plot(0.0, 0.0, 0.0, 'o');
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('o'));
        assert!(text.contains("\r\n"));
    }
}
