//! Radar chart: polar layout of skill levels and its SVG rendering.
//!
//! Axis `i` of `n` sits at angle `i·2π/n − π/2`, so the first skill points
//! straight up and the rest follow clockwise (SVG y grows downward).
//! A skill's point lies at `level / 100` of the outer ring's radius.

use std::f64::consts::PI;
use std::fmt::Write;

use html_escape::encode_text;
use serde::Serialize;

use crate::skills::Skill;

// ────────────────────────────────────────────────────────────────────────────
// Chart geometry constants
// ────────────────────────────────────────────────────────────────────────────

pub const CHART_SIZE: u32 = 400;
pub const CENTER: Point = Point { x: 200.0, y: 200.0 };
pub const MAX_RADIUS: f64 = 150.0;
/// Labels sit this far outside the outer ring.
pub const LABEL_OFFSET: f64 = 30.0;
pub const POINT_RADIUS: f64 = 8.0;
pub const MAX_LEVEL: f64 = 100.0;
pub const RING_SCALES: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

const GRID_STROKE: &str = "rgba(255, 255, 255, 0.1)";
const EDGE_GRADIENT: [&str; 2] = ["#3B82F6", "#8B5CF6"];

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One spoke of the chart.
#[derive(Debug, Clone, Serialize)]
pub struct RadarAxis {
    pub name: &'static str,
    pub level: u8,
    pub angle: f64,
    /// Where the spoke meets the outer ring.
    pub rim: Point,
    /// The skill's plotted point.
    pub point: Point,
    pub label: Point,
    pub stops: [&'static str; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarChart {
    pub axes: Vec<RadarAxis>,
    pub ring_radii: Vec<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Geometry
// ────────────────────────────────────────────────────────────────────────────

pub fn axis_angle(index: usize, count: usize) -> f64 {
    (index as f64 * 2.0 * PI) / count as f64 - PI / 2.0
}

pub fn polar(radius: f64, angle: f64) -> Point {
    Point {
        x: CENTER.x + radius * angle.cos(),
        y: CENTER.y + radius * angle.sin(),
    }
}

pub fn layout(skills: &[Skill]) -> RadarChart {
    let count = skills.len();
    let axes = skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let angle = axis_angle(index, count);
            let radius = (skill.level as f64 / MAX_LEVEL) * MAX_RADIUS;
            RadarAxis {
                name: skill.name,
                level: skill.level,
                angle,
                rim: polar(MAX_RADIUS, angle),
                point: polar(radius, angle),
                label: polar(MAX_RADIUS + LABEL_OFFSET, angle),
                stops: skill.stops,
            }
        })
        .collect();

    RadarChart {
        axes,
        ring_radii: RING_SCALES.iter().map(|s| s * MAX_RADIUS).collect(),
    }
}

impl RadarChart {
    /// Polygon edges: each point to the next, the last one back to the first.
    pub fn edges(&self) -> Vec<(Point, Point)> {
        let n = self.axes.len();
        (0..n)
            .map(|i| (self.axes[i].point, self.axes[(i + 1) % n].point))
            .collect()
    }

    /// Standalone SVG document for the chart.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut svg);
        svg
    }

    fn write_svg(&self, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CHART_SIZE}" height="{CHART_SIZE}" viewBox="0 0 {CHART_SIZE} {CHART_SIZE}" role="img" aria-label="Skill radar chart">"#
        )?;

        writeln!(out, "<defs>")?;
        write_gradient(out, "skillGradient", EDGE_GRADIENT)?;
        for (i, axis) in self.axes.iter().enumerate() {
            write_gradient(out, &format!("skill-{i}"), axis.stops)?;
        }
        writeln!(out, "</defs>")?;

        for r in &self.ring_radii {
            writeln!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{r:.2}" fill="none" stroke="{GRID_STROKE}" stroke-width="1"/>"#,
                CENTER.x, CENTER.y
            )?;
        }

        for axis in &self.axes {
            writeln!(
                out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{GRID_STROKE}" stroke-width="1"/>"#,
                CENTER.x, CENTER.y, axis.rim.x, axis.rim.y
            )?;
        }

        for (from, to) in self.edges() {
            writeln!(
                out,
                r#"<line class="radar-edge" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="url(#skillGradient)" stroke-width="2"/>"#,
                from.x, from.y, to.x, to.y
            )?;
        }

        for (i, axis) in self.axes.iter().enumerate() {
            writeln!(
                out,
                r#"<circle class="radar-point" cx="{:.2}" cy="{:.2}" r="{POINT_RADIUS}" fill="url(#skill-{i})"><title>{}: {}%</title></circle>"#,
                axis.point.x,
                axis.point.y,
                encode_text(axis.name),
                axis.level
            )?;
        }

        for axis in &self.axes {
            writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle" fill="white" font-size="14" font-weight="600">{}</text>"#,
                axis.label.x,
                axis.label.y,
                encode_text(axis.name)
            )?;
        }

        writeln!(out, "</svg>")
    }
}

fn write_gradient(out: &mut String, id: &str, stops: [&str; 2]) -> std::fmt::Result {
    writeln!(
        out,
        r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient>"#,
        stops[0], stops[1]
    )
}
