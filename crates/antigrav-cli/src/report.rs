//! Command results and their text, JSON and CSV renderings.

use std::fmt::Write;

use antigrav::{FieldConfig, FieldSurface, ForceSeries, Trajectory};
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::plot::{CHART_HEIGHT, CHART_WIDTH, heat_map, line_chart};

/// A single force reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceReading {
    pub time: f64,
    pub force: f64,
}

/// Result of the `force` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceReport {
    pub mass: f64,
    pub field: FieldConfig,
    pub readings: Vec<ForceReading>,
}

/// Result of the `trajectory` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryReport {
    pub mass: f64,
    pub field: FieldConfig,
    pub duration: f64,
    pub steps: usize,
    pub final_height: Option<f64>,
    pub max_height: Option<f64>,
    pub trajectory: Trajectory,
    #[serde(skip)]
    pub plot: bool,
}

/// Result of the `profile` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub mass: f64,
    pub field: FieldConfig,
    pub peak: f64,
    pub series: ForceSeries,
    #[serde(skip)]
    pub plot: bool,
}

/// Before/after comparison produced by `optimize --apply`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub duration: f64,
    pub steps: usize,
    pub final_height_before: Option<f64>,
    pub final_height_after: Option<f64>,
    pub max_height_before: Option<f64>,
    pub max_height_after: Option<f64>,
}

/// Result of the `optimize` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizeReport {
    pub target_height: f64,
    pub original: FieldConfig,
    pub optimized: FieldConfig,
    pub comparison: Option<Comparison>,
}

/// Result of the `surface` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceReport {
    pub field: FieldConfig,
    pub peak: f64,
    pub surface: FieldSurface,
}

/// Result of the `demo` walk-through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub mass: f64,
    pub force: ForceReading,
    pub duration: f64,
    pub final_height: Option<f64>,
    pub max_height: Option<f64>,
    pub target_height: f64,
    pub optimized: FieldConfig,
    pub trajectory: Trajectory,
}

/// Any command result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Force(ForceReport),
    Trajectory(TrajectoryReport),
    Profile(ProfileReport),
    Optimize(OptimizeReport),
    Surface(SurfaceReport),
    Demo(DemoReport),
}

impl Report {
    /// Renders the report in the requested format.
    ///
    /// # Errors
    ///
    /// Only JSON rendering can fail, and only if a value cannot be
    /// serialized.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self).map(|mut s| {
                s.push('\n');
                s
            }),
            OutputFormat::Csv => Ok(self.to_csv()),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    fn to_csv(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Force(r) => {
                out.push_str("time,force\n");
                for reading in &r.readings {
                    let _ = writeln!(out, "{},{}", reading.time, reading.force);
                }
            }
            Self::Trajectory(TrajectoryReport { trajectory, .. })
            | Self::Demo(DemoReport { trajectory, .. }) => {
                out.push_str("time,height\n");
                for (t, h) in trajectory.points() {
                    let _ = writeln!(out, "{t},{h}");
                }
            }
            Self::Profile(r) => {
                out.push_str("time,force\n");
                for (t, f) in r.series.points() {
                    let _ = writeln!(out, "{t},{f}");
                }
            }
            Self::Optimize(r) => {
                out.push_str("parameter,original,optimized\n");
                for (name, before, after) in field_rows(&r.original, &r.optimized) {
                    let _ = writeln!(out, "{name},{before},{after}");
                }
            }
            Self::Surface(r) => {
                out.push_str("x,y,value\n");
                let xs = r.surface.xs();
                for (row, &y) in r.surface.rows().zip(r.surface.ys()) {
                    for (&x, value) in xs.iter().zip(row) {
                        let _ = writeln!(out, "{x},{y},{value}");
                    }
                }
            }
        }
        out
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Force(r) => {
                heading(&mut out, "Field force");
                field_summary(&mut out, r.mass, &r.field);
                for reading in &r.readings {
                    let _ = writeln!(
                        out,
                        "  t = {:>8.3} s   F = {:>8.4} N",
                        reading.time, reading.force
                    );
                }
            }
            Self::Trajectory(r) => {
                heading(&mut out, "Trajectory");
                field_summary(&mut out, r.mass, &r.field);
                let _ = writeln!(out, "  duration:      {} s over {} steps", r.duration, r.steps);
                height_line(&mut out, "final height:  ", r.final_height);
                height_line(&mut out, "max height:    ", r.max_height);
                if r.plot {
                    out.push('\n');
                    let points: Vec<_> = r.trajectory.points().collect();
                    out.push_str(&line_chart(&points, CHART_WIDTH, CHART_HEIGHT));
                }
            }
            Self::Profile(r) => {
                heading(&mut out, "Field oscillation");
                field_summary(&mut out, r.mass, &r.field);
                let _ = writeln!(out, "  samples:       {}", r.series.len());
                let _ = writeln!(out, "  peak force:    {:.4} N", r.peak);
                if r.plot {
                    out.push('\n');
                    let points: Vec<_> = r.series.points().collect();
                    out.push_str(&line_chart(&points, CHART_WIDTH, CHART_HEIGHT));
                }
            }
            Self::Optimize(r) => {
                heading(&mut out, "Field optimization");
                let _ = writeln!(out, "  target height: {} m", r.target_height);
                let _ = writeln!(out, "  {:<12} {:>10} {:>10}", "parameter", "original", "optimized");
                for (name, before, after) in field_rows(&r.original, &r.optimized) {
                    let _ = writeln!(out, "  {name:<12} {before:>10.3} {after:>10.3}");
                }
                if let Some(c) = &r.comparison {
                    out.push('\n');
                    heading(&mut out, "Comparison");
                    let _ = writeln!(out, "  duration:      {} s over {} steps", c.duration, c.steps);
                    height_line(&mut out, "final before:  ", c.final_height_before);
                    height_line(&mut out, "final after:   ", c.final_height_after);
                    height_line(&mut out, "max before:    ", c.max_height_before);
                    height_line(&mut out, "max after:     ", c.max_height_after);
                }
            }
            Self::Surface(r) => {
                heading(&mut out, "Field surface");
                let _ = writeln!(
                    out,
                    "  radius:        {} m   resolution: {}   peak: {:.4}",
                    r.field.radius(),
                    r.surface.resolution(),
                    r.peak
                );
                out.push('\n');
                out.push_str(&heat_map(&r.surface));
            }
            Self::Demo(r) => {
                heading(&mut out, "Anti-gravity simulator demonstration");
                let _ = writeln!(out, "\n1. Simulator initialized with a {} kg object", r.mass);
                let _ = writeln!(
                    out,
                    "2. Force at t = {:.1} s: {} N",
                    r.force.time, r.force.force
                );
                let _ = writeln!(out, "3. Simulated {} s trajectory", r.duration);
                if let Some(h) = r.final_height {
                    let _ = writeln!(out, "   Final height: {h:.2} m");
                }
                if let Some(h) = r.max_height {
                    let _ = writeln!(out, "   Maximum height reached: {h:.2} m");
                }
                let _ = writeln!(out, "4. Optimized field for {} m levitation", r.target_height);
                let _ = writeln!(out, "   Optimized field strength: {:.3}", r.optimized.strength());
                let _ = writeln!(out, "   Field stability: {:.3}", r.optimized.stability());
                out.push('\n');
                let points: Vec<_> = r.trajectory.points().collect();
                out.push_str(&line_chart(&points, CHART_WIDTH, CHART_HEIGHT));
            }
        }
        out
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title.bold().cyan());
}

fn field_summary(out: &mut String, mass: f64, field: &FieldConfig) {
    let _ = writeln!(out, "  mass:          {mass} kg");
    let _ = writeln!(
        out,
        "  field:         strength {} · frequency {} Hz · radius {} m · stability {}",
        field.strength(),
        field.frequency(),
        field.radius(),
        field.stability()
    );
}

fn height_line(out: &mut String, label: &str, height: Option<f64>) {
    match height {
        Some(h) => {
            let _ = writeln!(out, "  {label}{h:.4} m");
        }
        None => {
            let _ = writeln!(out, "  {label}-");
        }
    }
}

fn field_rows(before: &FieldConfig, after: &FieldConfig) -> [(&'static str, f64, f64); 4] {
    [
        ("strength", before.strength(), after.strength()),
        ("frequency", before.frequency(), after.frequency()),
        ("radius", before.radius(), after.radius()),
        ("stability", before.stability(), after.stability()),
    ]
}
