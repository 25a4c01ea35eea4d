//! ASCII charts for terminal output.
//!
//! These stand in for the plotting layer: they only consume sampled data
//! and never feed anything back into the model.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use std::fmt::Write;

use antigrav::FieldSurface;

/// Default chart width in columns.
pub const CHART_WIDTH: usize = 60;
/// Default chart height in rows.
pub const CHART_HEIGHT: usize = 15;

const LABEL_WIDTH: usize = 10;
const POINT: char = '*';
const ZERO_LINE: char = '·';
const SHADES: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Renders `(x, y)` points as a scatter-style line chart.
///
/// The y axis is labelled with its extremes and the x axis with its range.
/// A dotted zero line is drawn when zero falls inside the y range. Points
/// that are not finite are skipped.
///
/// ```text
///      0.500 ┤      **
///            │    *    *
///            │··*········*······
///     -0.500 ┤*            *
///            └──────────────────
///             0.000        5.000
/// ```
pub fn line_chart(points: &[(f64, f64)], width: usize, height: usize) -> String {
    let finite: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if finite.is_empty() || width == 0 || height == 0 {
        return "(no data)\n".to_string();
    }

    let (x_min, x_max) = bounds(finite.iter().map(|p| p.0));
    let (mut y_min, mut y_max) = bounds(finite.iter().map(|p| p.1));
    if y_max - y_min < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }

    let mut grid = vec![vec![' '; width]; height];

    if y_min < 0.0 && y_max > 0.0 {
        let row = scale(0.0, y_max, y_min, height);
        grid[row].fill(ZERO_LINE);
    }

    for &(x, y) in &finite {
        let col = if x_max > x_min {
            scale(x, x_min, x_max, width)
        } else {
            0
        };
        let row = scale(y, y_max, y_min, height);
        grid[row][col] = POINT;
    }

    let mut out = String::new();
    for (i, row) in grid.iter().enumerate() {
        let line: String = row.iter().collect();
        if i == 0 {
            let _ = writeln!(out, "{y_max:>LABEL_WIDTH$.3} ┤{line}");
        } else if i == height - 1 {
            let _ = writeln!(out, "{y_min:>LABEL_WIDTH$.3} ┤{line}");
        } else {
            let _ = writeln!(out, "{:>LABEL_WIDTH$} │{line}", "");
        }
    }

    let _ = writeln!(out, "{:>LABEL_WIDTH$} └{}", "", "─".repeat(width));
    let left = format!("{x_min:.3}");
    let right = format!("{x_max:.3}");
    let gap = (width + 1).saturating_sub(left.len() + right.len());
    let _ = writeln!(out, "{:>LABEL_WIDTH$}  {left}{}{right}", "", " ".repeat(gap));
    out
}

/// Renders a field surface as a character heat map.
///
/// Values are shaded from the most negative (`' '`) to the most positive
/// (`'@'`) relative to the surface peak. Each sample takes two columns so
/// the map keeps a roughly square aspect in a terminal.
pub fn heat_map(surface: &FieldSurface) -> String {
    if surface.resolution() == 0 {
        return "(no data)\n".to_string();
    }

    let peak = surface.peak();
    let top = SHADES.len() - 1;
    let mut out = String::new();

    for row in surface.rows() {
        for &value in row {
            let level = if peak > 0.0 {
                ((value / peak + 1.0) / 2.0 * top as f64).round() as usize
            } else {
                top / 2
            };
            let shade = SHADES[level.min(top)];
            out.push(shade);
            out.push(shade);
        }
        out.push('\n');
    }
    out
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Maps `value` from `[from, to]` onto a cell index in `0..cells`.
fn scale(value: f64, from: f64, to: f64, cells: usize) -> usize {
    let t = (value - from) / (to - from);
    let index = (t * (cells - 1) as f64).round();
    (index.max(0.0) as usize).min(cells - 1)
}
