//! SVG rendering of the improved-scenario rings.
//!
//! The filled arc is approximated by short arc segments, each stroked with
//! the gradient colour at its position, so the ring reads like the conic
//! gradient of the dashboard. The tip dot and the centre figure come
//! straight from the ring model.

use crate::engine::PatientReport;
use crate::gradient::{clamp_percent, color_at_percent};
use crate::ring::{Point, RingGeometry, RingRenderState};

use super::Reporter;

pub struct SvgReporter;

const TRACK_COLOR: &str = "#E5E7EB";
const TEXT_COLOR: &str = "#1F2937";
const MUTED_COLOR: &str = "#6B7280";
const FONT: &str = "system-ui, -apple-system, sans-serif";

/// Percent points covered by one stroked segment.
const SEGMENT_PERCENT: f64 = 2.0;

const GAP: f64 = 40.0;
const TITLE_HEIGHT: f64 = 32.0;
const DELTA_HEIGHT: f64 = 22.0;
const LABEL_HEIGHT: f64 = 56.0;

fn point_at(geometry: &RingGeometry, percent: f64) -> Point {
    let center = geometry.center();
    let radius = geometry.radius();
    let theta = (90.0 + clamp_percent(percent) / 100.0 * 360.0).to_radians();
    Point {
        x: center.x + radius * theta.cos(),
        y: center.y + radius * theta.sin(),
    }
}

fn write_arc(out: &mut String, ring: &RingRenderState, geometry: &RingGeometry) {
    let radius = geometry.radius();
    let center = geometry.center();
    out.push_str(&format!(
        r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{TRACK_COLOR}" stroke-width="{:.2}"/>"#,
        center.x, center.y, radius, geometry.thickness
    ));
    out.push('\n');

    let mut start = 0.0;
    while start < ring.display_value {
        let end = (start + SEGMENT_PERCENT).min(ring.display_value);
        let from = point_at(geometry, start);
        let to = point_at(geometry, end);
        let color = color_at_percent((start + end) / 2.0).to_rgb();
        out.push_str(&format!(
            r#"    <path d="M {:.2} {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
            from.x, from.y, radius, radius, to.x, to.y, color, geometry.thickness
        ));
        out.push('\n');
        start = end;
    }

    if let Some(tip) = ring.tip_position {
        out.push_str(&format!(
            r#"    <circle class="tip" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            tip.x,
            tip.y,
            geometry.thickness / 2.0,
            ring.tip_color.to_rgb()
        ));
        out.push('\n');
    }
}

fn write_ring(out: &mut String, ring: &RingRenderState, geometry: &RingGeometry, x: f64, y: f64) {
    let geometry = &RingGeometry::clamped(geometry.size, geometry.thickness);
    out.push_str(&format!(
        r#"  <g class="ring" data-key="{}" transform="translate({x:.2} {y:.2})">"#,
        html_escape::encode_double_quoted_attribute(&ring.key)
    ));
    out.push('\n');
    let mid = geometry.size / 2.0;

    if let Some(delta) = ring.delta_text() {
        out.push_str(&format!(
            r#"    <text class="delta" x="{mid:.2}" y="-8" text-anchor="middle" font-size="11" fill="{MUTED_COLOR}">{delta}%</text>"#
        ));
        out.push('\n');
    }

    write_arc(out, ring, geometry);

    out.push_str(&format!(
        r#"    <text class="value" x="{mid:.2}" y="{mid:.2}" text-anchor="middle" dominant-baseline="central" font-size="24" font-weight="600" fill="{TEXT_COLOR}">{}%</text>"#,
        ring.rounded_value()
    ));
    out.push('\n');

    out.push_str(&format!(
        r#"    <text class="label" x="{mid:.2}" y="{:.2}" text-anchor="middle" font-size="13" fill="{TEXT_COLOR}">"#,
        geometry.size + 20.0
    ));
    out.push('\n');
    for (i, line) in ring.label.lines().enumerate() {
        let dy = if i == 0 { 0.0 } else { 16.0 };
        out.push_str(&format!(
            r#"      <tspan x="{mid:.2}" dy="{dy}">{}</tspan>"#,
            html_escape::encode_text(line.trim())
        ));
        out.push('\n');
    }
    out.push_str("    </text>\n  </g>\n");
}

fn render(reports: &[&PatientReport]) -> String {
    let geometry = reports
        .first()
        .map(|r| RingGeometry::clamped(r.geometry.size, r.geometry.thickness))
        .unwrap_or_default();
    let size = geometry.size;
    let columns = reports
        .iter()
        .map(|r| r.improvement.len())
        .max()
        .unwrap_or(0)
        .max(1);
    let row_height = TITLE_HEIGHT + DELTA_HEIGHT + size + LABEL_HEIGHT;
    let width = GAP + columns as f64 * (size + GAP);
    let height = row_height * reports.len().max(1) as f64;

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}" font-family="{FONT}">"#
    ));
    out.push('\n');
    for (row, report) in reports.iter().enumerate() {
        let top = row as f64 * row_height;
        out.push_str(&format!(
            r#"  <text class="title" x="{GAP:.2}" y="{:.2}" font-size="16" font-weight="600" fill="{TEXT_COLOR}">{} (intensity {})</text>"#,
            top + 20.0,
            html_escape::encode_text(&report.patient.name),
            report.intensity
        ));
        out.push('\n');
        for (col, ring) in report.improvement.iter().enumerate() {
            let x = GAP + col as f64 * (size + GAP);
            let y = top + TITLE_HEIGHT + DELTA_HEIGHT;
            write_ring(&mut out, ring, &report.geometry, x, y);
        }
    }
    out.push_str("</svg>\n");
    out
}

impl Reporter for SvgReporter {
    fn format(&self, report: &PatientReport, _verbose: bool) -> String {
        render(&[report])
    }

    fn format_all(&self, reports: &[PatientReport], _verbose: bool) -> String {
        render(&reports.iter().collect::<Vec<_>>())
    }
}
