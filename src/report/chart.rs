//! Character-cell radar chart.
//!
//! Renders the five dimension means as a closed polygon on a polar grid:
//! one axis per dimension at 72 degree steps starting from 12 o'clock,
//! radial range fixed to the response scale. Cells are twice as tall as
//! they are wide, so horizontal distances are doubled to keep the plot
//! round.

use crate::catalog::{SCALE_MAX, SCALE_MIN};
use crate::models::{Dimension, Profile};

const AXIS_COUNT: usize = Dimension::ALL.len();
const ASPECT: f64 = 2.0;

const SPOKE_CHAR: char = '·';
const EDGE_CHAR: char = '*';
const VERTEX_CHAR: char = 'o';
const CENTER_CHAR: char = '+';

/// A fixed-size character canvas addressed by (column, row).
struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    /// Set a cell; coordinates outside the canvas are ignored.
    fn set(&mut self, x: i64, y: i64, ch: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = ch;
        }
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Unit direction of axis `index`: 12 o'clock, then clockwise.
fn axis_direction(index: usize) -> (f64, f64) {
    let theta = index as f64 * std::f64::consts::TAU / AXIS_COUNT as f64;
    (theta.sin(), -theta.cos())
}

/// Map a mean onto the radial axis: SCALE_MIN at the center, SCALE_MAX at
/// the rim. The 0.0 empty-group fallback lands on the center.
fn scaled_radius(mean: f64, radius: usize) -> f64 {
    let span = f64::from(SCALE_MAX - SCALE_MIN);
    let t = (mean - f64::from(SCALE_MIN)) / span;
    t.clamp(0.0, 1.0) * radius as f64
}

/// Cell coordinates of the point at distance `t` along axis `index`.
fn project(center: (i64, i64), index: usize, t: f64) -> (i64, i64) {
    let (dx, dy) = axis_direction(index);
    let x = center.0 + (t * dx * ASPECT).round() as i64;
    let y = center.1 + (t * dy).round() as i64;
    (x, y)
}

/// Bresenham line between two cells.
fn draw_line(canvas: &mut Canvas, from: (i64, i64), to: (i64, i64), ch: char) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        canvas.set(x, y, ch);
        if (x, y) == to {
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

/// Render the profile as a radar chart string.
///
/// `radius` is the rim distance in rows; columns stretch by the cell aspect
/// ratio. The output is plain text; color is applied by the caller if at
/// all.
pub fn render_radar(profile: &Profile, radius: usize) -> String {
    let radius = radius.max(3);
    let width = 4 * radius + 7;
    let height = 2 * radius + 5;
    let center = (2 * radius as i64 + 3, radius as i64 + 2);

    let mut canvas = Canvas::new(width, height);

    // Spokes, dotted from center to rim.
    for index in 0..AXIS_COUNT {
        for step in 1..=radius {
            let (x, y) = project(center, index, step as f64);
            canvas.set(x, y, SPOKE_CHAR);
        }
    }

    // The closed profile polygon.
    let vertices: Vec<(i64, i64)> = Dimension::ALL
        .iter()
        .enumerate()
        .map(|(index, &dimension)| {
            let t = scaled_radius(profile.mean_of(dimension), radius);
            project(center, index, t)
        })
        .collect();

    for (index, &from) in vertices.iter().enumerate() {
        let to = vertices[(index + 1) % vertices.len()];
        draw_line(&mut canvas, from, to, EDGE_CHAR);
    }
    for &(x, y) in &vertices {
        canvas.set(x, y, VERTEX_CHAR);
    }

    canvas.set(center.0, center.1, CENTER_CHAR);

    // Axis labels just past the rim.
    for (index, dimension) in Dimension::ALL.iter().enumerate() {
        let (x, y) = project(center, index, radius as f64 + 1.5);
        canvas.set(x, y, dimension.code());
    }

    canvas.render()
}
