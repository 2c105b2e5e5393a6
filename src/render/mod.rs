// src/render/mod.rs

//! Rendering capability for Bloch vectors.
//!
//! The mathematical core has zero dependency on any particular rendering
//! toolkit: anything that can turn a labeled [`BlochVector`] into a
//! displayable artifact implements [`Render`]. The crate ships one text
//! implementation, [`AsciiSphere`], which projects the unit sphere and the
//! state vector onto the XZ and XY planes.

use crate::core::BlochVector;

/// Turns a Bloch vector plus a label into a displayable artifact.
pub trait Render {
    /// The displayable artifact this renderer produces.
    type Artifact;

    /// Renders `bloch` under `label`.
    fn render(&self, bloch: &BlochVector, label: &str) -> Self::Artifact;
}

/// Text renderer drawing two unit-circle projections of the Bloch sphere,
/// with the origin-to-tip line and a marker at the vector tip.
#[derive(Debug, Clone)]
pub struct AsciiSphere {
    /// Circle radius in character cells.
    pub radius: usize,
    /// Character used for the vector tip.
    pub tip_char: char,
    /// Whether to print the axis pole labels around each projection.
    pub show_labels: bool,
}

impl Default for AsciiSphere {
    fn default() -> Self {
        Self {
            radius: 10,
            tip_char: '●',
            show_labels: true,
        }
    }
}

impl AsciiSphere {
    /// Creates a renderer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one circle projection with the vector's (h, v) components,
    /// where `h` runs rightward and `v` upward.
    fn render_plane(&self, h: f64, v: f64, pole_up: &str, pole_down: &str) -> String {
        let r = self.radius as i32;
        // Terminal cells are roughly twice as tall as wide; halve the row count.
        let rows = (r + 1) as usize;
        let cols = (2 * r + 1) as usize;
        let mut grid = vec![vec![' '; cols]; rows];

        let to_cell = |x: f64, y: f64| -> (usize, usize) {
            let col = (r + (x * r as f64).round() as i32).clamp(0, cols as i32 - 1);
            let row = (r / 2 - ((y * r as f64).round() as i32) / 2).clamp(0, rows as i32 - 1);
            (row as usize, col as usize)
        };

        // Unit circle outline.
        for degree in 0..360 {
            let rad = (degree as f64).to_radians();
            let (row, col) = to_cell(rad.cos(), rad.sin());
            grid[row][col] = '·';
        }

        // Axes through the origin.
        for row in grid.iter_mut() {
            row[r as usize] = '│';
        }
        let mid_row = (r / 2) as usize;
        for cell in grid[mid_row].iter_mut() {
            *cell = '─';
        }
        grid[mid_row][r as usize] = '┼';

        // Origin-to-tip line, sampled along its length, tip marked last.
        let steps = 2 * self.radius;
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            let (row, col) = to_cell(h * t, v * t);
            grid[row][col] = '*';
        }
        let (tip_row, tip_col) = to_cell(h, v);
        grid[tip_row][tip_col] = self.tip_char;

        let mut out = String::new();
        if self.show_labels {
            out.push_str(&format!("{:>width$}{}\n", "", pole_up, width = self.radius));
        }
        for row in &grid {
            out.push_str(&row.iter().collect::<String>());
            out.push('\n');
        }
        if self.show_labels {
            out.push_str(&format!("{:>width$}{}\n", "", pole_down, width = self.radius));
        }
        out
    }
}

impl Render for AsciiSphere {
    type Artifact = String;

    fn render(&self, bloch: &BlochVector, label: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", label));
        out.push_str(&format!(
            "bloch = ({:.3}, {:.3}, {:.3})  |r| = {:.3}\n\n",
            bloch.x,
            bloch.y,
            bloch.z,
            bloch.magnitude()
        ));

        out.push_str("Side view (XZ plane):\n");
        out.push_str(&self.render_plane(bloch.x, bloch.z, "|0⟩", "|1⟩"));
        out.push('\n');

        out.push_str("Top view (XY plane):\n");
        out.push_str(&self.render_plane(bloch.x, bloch.y, "|+i⟩", "|−i⟩"));
        out
    }
}
