//! Chart geometry
//!
//! Pure layout computations for the severity bar chart and the component-type
//! donut chart. Both charts share a 360x180 logical canvas. Rendering to a
//! concrete vector format happens in the formatter adapters.

use crate::report_analysis::domain::{Severity, SeverityHistogram, TypeHistogram};
use std::f64::consts::PI;
use std::fmt;

pub const CANVAS_WIDTH: f64 = 360.0;
pub const CANVAS_HEIGHT: f64 = 180.0;

pub const BAR_WIDTH: f64 = 50.0;
pub const BAR_PITCH: f64 = 80.0;
pub const BAR_START_X: f64 = 30.0;
pub const BAR_MAX_HEIGHT: f64 = 140.0;
pub const BAR_BASELINE_Y: f64 = 160.0;
pub const BAR_LABEL_Y: f64 = 170.0;
/// Gap between the top of a bar and its count label
pub const BAR_COUNT_OFFSET: f64 = 6.0;

pub const DONUT_CENTER_X: f64 = 180.0;
pub const DONUT_CENTER_Y: f64 = 90.0;
pub const DONUT_INNER_RADIUS: f64 = 60.0;
pub const DONUT_OUTER_RADIUS: f64 = 80.0;
pub const DONUT_LABEL_RADIUS: f64 = 110.0;

/// Fill used for anything that is not a canonical severity
pub const NEUTRAL_COLOR: &str = "#64748b";

/// Fixed severity palette
pub fn severity_color(label: &str) -> &'static str {
    match Severity::from_label(label) {
        Some(Severity::Critical) => "#b91c1c",
        Some(Severity::High) => "#ef4444",
        Some(Severity::Medium) => "#f59e0b",
        Some(Severity::Low) => "#10b981",
        None => NEUTRAL_COLOR,
    }
}

/// An RGB color derived from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Deterministic color for a component type name
///
/// `h = 31 * h + unit` over the UTF-16 code units with 32-bit wrapping; the
/// low three bytes of `h` become red, green and blue. Distinct names usually
/// get distinct colors but collisions are possible.
pub fn hash_color(name: &str) -> Rgb {
    let h = name
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    Rgb(
        ((h >> 16) & 255) as u8,
        ((h >> 8) & 255) as u8,
        (h & 255) as u8,
    )
}

/// One bar of the severity chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub severity: Severity,
    pub count: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl BarGeometry {
    /// Horizontal center, used for both labels
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn count_label_y(&self) -> f64 {
        self.y - BAR_COUNT_OFFSET
    }
}

/// Lays out one bar per canonical severity, left to right
///
/// Heights are `count / total * 140` where a zero total is treated as 1, so
/// an empty histogram yields zero-height bars.
pub fn bar_layout(histogram: &SeverityHistogram) -> Vec<BarGeometry> {
    let total = histogram.total().max(1) as f64;
    histogram
        .iter()
        .enumerate()
        .map(|(i, (severity, count))| {
            let height = count as f64 / total * BAR_MAX_HEIGHT;
            BarGeometry {
                severity,
                count,
                x: BAR_START_X + i as f64 * BAR_PITCH,
                y: BAR_BASELINE_Y - height,
                width: BAR_WIDTH,
                height,
                color: severity_color(severity.as_str()),
            }
        })
        .collect()
}

/// One annular slice of the type chart
#[derive(Debug, Clone, PartialEq)]
pub struct SliceGeometry {
    pub component_type: String,
    pub count: usize,
    /// Start angle in radians, measured from the positive x axis
    pub start_angle: f64,
    pub end_angle: f64,
    /// Whether the arcs must be drawn as major arcs
    pub large_arc: bool,
    pub color: Rgb,
}

impl SliceGeometry {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.component_type, self.count)
    }

    /// Label anchor on the angular midpoint at the label radius
    pub fn label_position(&self) -> (f64, f64) {
        point(DONUT_LABEL_RADIUS, (self.start_angle + self.end_angle) / 2.0)
    }

    /// SVG path data for the slice
    ///
    /// Outer arc clockwise from start to end, line inward, inner arc back.
    /// A slice covering the whole ring is split at its midpoint because an
    /// arc whose endpoints coincide draws nothing.
    pub fn path_data(&self) -> String {
        let (a0, a1) = (self.start_angle, self.end_angle);
        let (r1, r2) = (DONUT_INNER_RADIUS, DONUT_OUTER_RADIUS);
        let large = u8::from(self.large_arc);
        let [x0, y0] = point_array(r2, a0);
        let [x1, y1] = point_array(r2, a1);
        let [x2, y2] = point_array(r1, a1);
        let [x3, y3] = point_array(r1, a0);

        if self.sweep() >= 2.0 * PI - 1e-9 {
            let mid = (a0 + a1) / 2.0;
            let [xm, ym] = point_array(r2, mid);
            let [xn, yn] = point_array(r1, mid);
            return format!(
                "M {} {} A {r2} {r2} 0 0 1 {} {} A {r2} {r2} 0 0 1 {} {} L {} {} A {r1} {r1} 0 0 0 {} {} A {r1} {r1} 0 0 0 {} {} Z",
                num(x0), num(y0), num(xm), num(ym), num(x1), num(y1),
                num(x2), num(y2), num(xn), num(yn), num(x3), num(y3),
            );
        }

        format!(
            "M {} {} A {r2} {r2} 0 {large} 1 {} {} L {} {} A {r1} {r1} 0 {large} 0 {} {} Z",
            num(x0),
            num(y0),
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            num(x3),
            num(y3),
        )
    }
}

/// Lays out consecutive slices from angle 0 in histogram key order
///
/// Each slice spans `count / total * 2π` with the same zero-total guard as the
/// bar chart. The large-arc flag is decided per slice.
pub fn donut_layout(histogram: &TypeHistogram) -> Vec<SliceGeometry> {
    let total = histogram.total().max(1) as f64;
    let mut start = 0.0;
    histogram
        .iter()
        .map(|(component_type, count)| {
            let end = start + count as f64 / total * 2.0 * PI;
            let slice = SliceGeometry {
                component_type: component_type.to_string(),
                count,
                start_angle: start,
                end_angle: end,
                large_arc: end - start > PI,
                color: hash_color(component_type),
            };
            start = end;
            slice
        })
        .collect()
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (
        DONUT_CENTER_X + angle.cos() * radius,
        DONUT_CENTER_Y + angle.sin() * radius,
    )
}

fn point_array(radius: f64, angle: f64) -> [f64; 2] {
    let (x, y) = point(radius, angle);
    [x, y]
}

/// Formats a coordinate with at most three decimals and no trailing zeros
pub fn num(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
