//! Category score ring model.
//!
//! A ring shows a percentage as a filled arc that starts at the visual
//! bottom and sweeps clockwise. In improvement mode the ring adds a share of
//! `extra_max` points scaled by the intensity dial. Every input is clamped
//! rather than rejected, and NaN is treated as 0.

use serde::Serialize;

use crate::category::CategoryScore;
use crate::gradient::{clamp_percent, color_at_percent, Hsl};

/// Extra points reachable at full intensity.
pub const DEFAULT_EXTRA_MAX: f64 = 20.0;

/// Arc start angle in degrees (screen coordinates, y pointing down).
const START_ANGLE_DEGREES: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Single,
    Improvement,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Pixel layout of a ring. The tip dot has the same diameter as the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingGeometry {
    pub size: f64,
    pub thickness: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        RingGeometry {
            size: 160.0,
            thickness: 14.0,
        }
    }
}

impl RingGeometry {
    /// Geometry with a non-negative size and a stroke no wider than the ring.
    /// Non-finite values collapse to 0.
    pub fn clamped(size: f64, thickness: f64) -> Self {
        let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
        let thickness = if thickness.is_finite() {
            thickness.clamp(0.0, size)
        } else {
            0.0
        };
        RingGeometry { size, thickness }
    }

    /// Radius of the stroke centre line, never negative.
    pub fn radius(&self) -> f64 {
        (self.size / 2.0 - self.thickness / 2.0).max(0.0)
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.size / 2.0,
            y: self.size / 2.0,
        }
    }
}

pub fn compute_display_value(
    base_value: f64,
    mode: Mode,
    intensity: Option<f64>,
    extra_max: f64,
) -> f64 {
    let clamped_base = clamp_percent(base_value);
    match mode {
        Mode::Single => clamped_base,
        Mode::Improvement => {
            let t = clamp_percent(intensity.unwrap_or(0.0));
            // 0 * inf is NaN, so zero intensity short-circuits
            let extra = if t == 0.0 || extra_max.is_nan() {
                0.0
            } else {
                (t / 100.0) * extra_max.max(0.0)
            };
            (clamped_base + extra).min(100.0)
        }
    }
}

/// Whole points the display value sits above the clamped base. Never negative.
pub fn compute_delta(display_value: f64, base_value: f64) -> u32 {
    let delta = (clamp_percent(display_value) - clamp_percent(base_value)).round();
    if delta > 0.0 {
        delta as u32
    } else {
        0
    }
}

pub fn format_delta(delta: u32) -> String {
    format!("+{delta}")
}

pub fn sweep_angle_degrees(display_value: f64) -> f64 {
    clamp_percent(display_value) / 100.0 * 360.0
}

/// Gradient colour for the tip dot.
///
/// The dot is as wide as the stroke, so it is sampled one tip-width behind
/// the leading edge of the arc.
pub fn tip_color(display_value: f64, ring_thickness: f64, ring_radius: f64) -> Hsl {
    // a ring without a positive radius has no arc to sample along
    if ring_radius.is_nan() || ring_radius <= 0.0 {
        return color_at_percent(0.0);
    }
    let tip_radians = ring_thickness.max(0.0) / ring_radius;
    let tip_degrees = tip_radians.to_degrees();
    let percent_offset = tip_degrees / 360.0 * 100.0;

    color_at_percent(clamp_percent(display_value) - percent_offset)
}

/// Centre of the tip dot, or `None` for an empty ring. A negative radius is
/// treated as 0.
pub fn tip_position(
    display_value: f64,
    center_x: f64,
    center_y: f64,
    radius: f64,
) -> Option<Point> {
    let value = clamp_percent(display_value);
    if value == 0.0 {
        return None;
    }
    let radius = radius.max(0.0);
    let theta = (START_ANGLE_DEGREES + sweep_angle_degrees(value)).to_radians();
    Some(Point {
        x: center_x + radius * theta.cos(),
        y: center_y + radius * theta.sin(),
    })
}

/// Everything a renderer needs to draw one ring. Recomputed per render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingRenderState {
    pub key: String,
    pub label: String,
    pub mode: Mode,
    pub base_value: f64,
    pub display_value: f64,
    pub delta: u32,
    pub sweep_angle_degrees: f64,
    pub tip_color: Hsl,
    pub tip_position: Option<Point>,
}

impl RingRenderState {
    pub fn compute(score: &CategoryScore, geometry: &RingGeometry) -> Self {
        let mode = score.mode();
        let display_value =
            compute_display_value(score.base_value, mode, score.intensity, score.extra_max);
        let radius = geometry.radius();
        let center = geometry.center();

        RingRenderState {
            key: score.key.clone(),
            label: score.label.clone(),
            mode,
            base_value: clamp_percent(score.base_value),
            display_value,
            delta: compute_delta(display_value, score.base_value),
            sweep_angle_degrees: sweep_angle_degrees(display_value),
            tip_color: tip_color(display_value, geometry.thickness, radius),
            tip_position: tip_position(display_value, center.x, center.y, radius),
        }
    }

    /// `+N` annotation; only improvement rings carry one.
    pub fn delta_text(&self) -> Option<String> {
        match self.mode {
            Mode::Single => None,
            Mode::Improvement => Some(format_delta(self.delta)),
        }
    }

    /// Rounded value printed in the middle of the ring.
    pub fn rounded_value(&self) -> u32 {
        self.display_value.round() as u32
    }
}
