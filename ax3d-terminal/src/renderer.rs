/// ASCII rasterizer for terminal wireframes
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

use ax3d_core::Figure;

/// Terminal cells are roughly twice as tall as they are wide; stretching the
/// horizontal axis by this factor keeps projected squares square on screen.
const CELL_ASPECT: f64 = 2.0;

/// ASCII renderer that plots projected wireframe edges into a character grid.
///
/// Points carry their own axonometric basis, so the renderer never projects
/// anything itself: it maps the `(hor, ver)` plane onto character cells,
/// clips each edge to the grid and walks it with Bresenham.
pub struct WireframeRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
    /// World units to character cells.
    pub scale: f64,
}

impl WireframeRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
            scale: 1.0,
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.char_buffer.len() {
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Reset;
        }
    }

    /// Choose a scale that keeps the whole figure on screen, with slack for
    /// the rotations and drift it will go through afterwards.
    pub fn fit_to(&mut self, figure: &Figure) {
        let mut extent = 1.0_f64;
        for point in &figure.points {
            let (hor, ver) = point.project();
            extent = extent.max(hor.abs()).max(ver.abs());
        }
        let slack = extent * 1.8;
        let fit_x = self.width as f64 / 2.0 / (slack * CELL_ASPECT);
        let fit_y = self.height as f64 / 2.0 / slack;
        self.scale = fit_x.min(fit_y);
    }

    /// Plot every edge of the figure with the given glyph and color.
    pub fn render_figure(&mut self, figure: &Figure, glyph: char, color: Color) {
        for edge in &figure.edges {
            if let (Some(a), Some(b)) = (figure.points.get(edge.a), figure.points.get(edge.b)) {
                self.draw_segment(a.project(), b.project(), glyph, color);
            }
        }
    }

    /// Map a projected `(hor, ver)` pair onto fractional cell coordinates,
    /// with the origin at the grid center and `ver` growing upwards.
    fn to_cell(&self, hor: f64, ver: f64) -> (f64, f64) {
        let cx = self.width as f64 / 2.0;
        let cy = self.height as f64 / 2.0;
        (cx + hor * self.scale * CELL_ASPECT, cy - ver * self.scale)
    }

    fn draw_segment(&mut self, from: (f64, f64), to: (f64, f64), glyph: char, color: Color) {
        let (x0, y0) = self.to_cell(from.0, from.1);
        let (x1, y1) = self.to_cell(to.0, to.1);
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return;
        }
        let max_x = self.width as f64 - 1.0;
        let max_y = self.height as f64 - 1.0;
        if let Some(((x0, y0), (x1, y1))) = clip_segment((x0, y0), (x1, y1), max_x, max_y) {
            self.draw_line(
                x0.round() as i32,
                y0.round() as i32,
                x1.round() as i32,
                y1.round() as i32,
                glyph,
                color,
            );
        }
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, glyph: char, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.plot(x, y, glyph, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn plot(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = glyph;
        self.color_buffer[idx] = color;
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.char_buffer[idx];
                if c == ' ' {
                    writer.queue(Print(' '))?;
                } else {
                    writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                    writer.queue(Print(c))?;
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Clip a segment to the rectangle `[0, max_x] x [0, max_y]`.
///
/// Returns the clipped endpoints, or `None` when the segment lies entirely
/// outside. Running this ahead of the Bresenham walk bounds the walk by the
/// grid size no matter how far away a projected point lands.
fn clip_segment(
    (x0, y0): (f64, f64),
    (x1, y1): (f64, f64),
    max_x: f64,
    max_y: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }
    Some(((x0 + t0 * dx, y0 + t0 * dy), (x0 + t1 * dx, y0 + t1 * dy)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ax3d_core::{AxonPoint, Axonometry};

    #[test]
    fn origin_maps_to_center() {
        let renderer = WireframeRenderer::new(40, 20);
        assert_eq!(renderer.to_cell(0.0, 0.0), (20.0, 10.0));
    }

    #[test]
    fn cell_aspect_stretches_horizontally() {
        let renderer = WireframeRenderer::new(40, 20);
        assert_eq!(renderer.to_cell(3.0, 0.0), (26.0, 10.0));
        assert_eq!(renderer.to_cell(0.0, 3.0), (20.0, 7.0));
    }

    #[test]
    fn draws_edge_endpoints_and_interior() {
        let mut renderer = WireframeRenderer::new(40, 20);
        let mut figure = Figure::new();
        let a = figure.add_point(AxonPoint::isometric(0.0, 0.0, 0.0));
        let b = figure.add_point(AxonPoint::isometric(0.0, 0.0, 5.0));
        figure.add_edge(a, b);
        renderer.render_figure(&figure, '*', Color::White);
        // The z axis is vertical under the isometric basis.
        assert_eq!(renderer.char_buffer[10 * 40 + 20], '*');
        assert_eq!(renderer.char_buffer[5 * 40 + 20], '*');
        assert_eq!(renderer.char_buffer[7 * 40 + 20], '*');
        assert_eq!(renderer.color_buffer[10 * 40 + 20], Color::White);
    }

    #[test]
    fn clear_blanks_the_grid() {
        let mut renderer = WireframeRenderer::new(40, 20);
        let mut figure = Figure::new();
        let a = figure.add_point(AxonPoint::isometric(0.0, 0.0, 0.0));
        let b = figure.add_point(AxonPoint::isometric(0.0, 0.0, 5.0));
        figure.add_edge(a, b);
        renderer.render_figure(&figure, '*', Color::White);
        renderer.clear();
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
    }

    #[test]
    fn far_off_screen_edges_are_dropped() {
        let mut renderer = WireframeRenderer::new(40, 20);
        let mut figure = Figure::new();
        let a = figure.add_point(AxonPoint::isometric(1e9, 0.0, 0.0));
        let b = figure.add_point(AxonPoint::isometric(1e9, 0.0, 5.0));
        figure.add_edge(a, b);
        renderer.render_figure(&figure, '*', Color::White);
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
    }

    #[test]
    fn non_finite_points_are_tolerated() {
        let mut renderer = WireframeRenderer::new(40, 20);
        let mut figure = Figure::new();
        let a = figure.add_point(AxonPoint::isometric(f64::NAN, 0.0, 0.0));
        let b = figure.add_point(AxonPoint::isometric(0.0, 0.0, 5.0));
        figure.add_edge(a, b);
        renderer.render_figure(&figure, '*', Color::White);
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
    }

    #[test]
    fn clip_segment_trims_to_the_grid() {
        let clipped = clip_segment((-5.0, 5.0), (45.0, 5.0), 39.0, 19.0).unwrap();
        assert_eq!(clipped.0, (0.0, 5.0));
        assert_eq!(clipped.1, (39.0, 5.0));
    }

    #[test]
    fn clip_segment_rejects_outside_spans() {
        assert!(clip_segment((-5.0, -5.0), (-1.0, 25.0), 39.0, 19.0).is_none());
        assert!(clip_segment((50.0, 5.0), (60.0, 5.0), 39.0, 19.0).is_none());
    }

    #[test]
    fn fit_to_keeps_the_figure_inside() {
        let mut renderer = WireframeRenderer::new(40, 20);
        let figure = Figure::cube(20.0, Axonometry::isometric());
        renderer.fit_to(&figure);
        assert!(renderer.scale > 0.0);
        for point in &figure.points {
            let (hor, ver) = point.project();
            let (col, row) = renderer.to_cell(hor, ver);
            assert!(col >= 0.0 && col < 40.0);
            assert!(row >= 0.0 && row < 20.0);
        }
    }
}
