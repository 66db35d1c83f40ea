use std::cmp::Ordering;

use owo_colors::OwoColorize;

use crate::engine::PatientReport;
use crate::ring::RingRenderState;

use super::{single_line_label, Reporter};

pub struct CliReporter;

const LABEL_WIDTH: usize = 40;

fn section(out: &mut String, title: &str) {
    out.push_str(&format!(
        "\n  {} {} {}\n",
        "──".dimmed(),
        title,
        "─".repeat(50 - title.chars().count().min(49)).dimmed()
    ));
}

fn ring_line(ring: &RingRenderState, verbose: bool) -> String {
    let rgb = ring.tip_color.to_rgb();
    let value = format!("{:>3}%", ring.rounded_value());
    let value_colored = match ring.rounded_value() {
        67..=100 => value.green().to_string(),
        34..=66 => value.yellow().to_string(),
        _ => value.red().to_string(),
    };
    let delta = ring
        .delta_text()
        .map(|d| format!("  {}", format!("{d}%").cyan()))
        .unwrap_or_default();

    let mut line = format!(
        "  {:<width$} {}  {}{}\n",
        single_line_label(&ring.label),
        value_colored,
        "●".truecolor(rgb.r, rgb.g, rgb.b),
        delta,
        width = LABEL_WIDTH
    );
    if verbose {
        let tip = ring
            .tip_position
            .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
            .unwrap_or_else(|| "none".to_string());
        line.push_str(&format!(
            "  {:<width$} {}\n",
            "",
            format!(
                "sweep {:.1}°  tip {} {}  at {}",
                ring.sweep_angle_degrees,
                ring.tip_color.to_css(),
                rgb,
                tip
            )
            .dimmed(),
            width = LABEL_WIDTH
        ));
    }
    line
}

impl Reporter for CliReporter {
    fn format(&self, report: &PatientReport, verbose: bool) -> String {
        let patient = &report.patient;
        let mut out = String::new();
        out.push_str(&format!(
            "\n  {} v{}\n\n",
            "humanage".bold(),
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str(&format!(
            "  Patient: {} {}\n",
            patient.name.bold(),
            format!("[{}]", patient.initials()).dimmed()
        ));
        out.push_str(&format!(
            "  Gender: {}  BMI: {}\n",
            patient.gender,
            patient.bmi_display()
        ));

        let bio = patient.biological_age.to_string();
        let bio_colored = match patient.age_gap().cmp(&0) {
            Ordering::Greater => bio.green().to_string(),
            Ordering::Equal => bio.yellow().to_string(),
            Ordering::Less => bio.red().to_string(),
        };
        out.push_str(&format!(
            "\n  Biological age: {}  Chronological age: {}  Pace of aging: {}\n",
            bio_colored,
            patient.chronological_age,
            patient.pace_of_aging_display()
        ));

        section(&mut out, "Current scores");
        for ring in &report.scoring {
            out.push_str(&ring_line(ring, verbose));
        }

        section(
            &mut out,
            &format!("Improved scenario (intensity {})", report.intensity),
        );
        for ring in &report.improvement {
            out.push_str(&ring_line(ring, verbose));
        }

        section(&mut out, "LifePath");
        if let Some((age, no_change, with_plan)) = report.lifepath.horizon() {
            out.push_str(&format!(
                "  At {age}: {} without changes, {} with plan\n",
                format!("{no_change:.0}").red(),
                format!("{with_plan:.0}").green()
            ));
        }
        if verbose {
            out.push_str(&format!(
                "  {:>5}  {:>13}  {:>9}  {:>9}\n",
                "age", "past range", "no change", "with plan"
            ));
            for point in &report.lifepath.points {
                let band = point
                    .past_band
                    .map(|b| format!("{:.0}–{:.0}", b.low, b.high))
                    .unwrap_or_default();
                let no_change = point.no_change.map(|v| format!("{v:.0}")).unwrap_or_default();
                let with_plan = point.with_plan.map(|v| format!("{v:.0}")).unwrap_or_default();
                out.push_str(&format!(
                    "  {:>5}  {:>13}  {:>9}  {:>9}\n",
                    point.age, band, no_change, with_plan
                ));
            }
        }

        section(&mut out, "Habit Builder");
        let slots = report
            .habits
            .selected()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "  {} tools selected{}\n",
            report.habits.counter_text(),
            if slots.is_empty() {
                String::new()
            } else {
                format!(": {slots}")
            }
        ));
        out.push('\n');
        out
    }
}
