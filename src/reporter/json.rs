use serde::Serialize;

use crate::engine::PatientReport;
use crate::habits::MAX_SELECTED;
use crate::lifepath::LifePath;
use crate::patient::Patient;
use crate::ring::{Mode, Point, RingRenderState};

use super::Reporter;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    #[serde(flatten)]
    report: ReportJson<'a>,
}

#[derive(Serialize)]
struct CohortOutput<'a> {
    version: &'static str,
    patients: Vec<ReportJson<'a>>,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    patient: &'a Patient,
    pace_of_aging: Option<f64>,
    intensity: u8,
    scoring: Vec<RingJson<'a>>,
    improvement: Vec<RingJson<'a>>,
    lifepath: &'a LifePath,
    habits: HabitsJson<'a>,
}

#[derive(Serialize)]
struct RingJson<'a> {
    key: &'a str,
    label: &'a str,
    mode: Mode,
    base_value: f64,
    display_value: f64,
    value: u32,
    delta: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    delta_text: Option<String>,
    sweep_angle_degrees: f64,
    tip_color: String,
    tip_hex: String,
    tip_position: Option<Point>,
}

#[derive(Serialize)]
struct HabitsJson<'a> {
    selected: &'a [usize],
    max_selected: usize,
    can_save: bool,
}

impl<'a> From<&'a RingRenderState> for RingJson<'a> {
    fn from(ring: &'a RingRenderState) -> Self {
        RingJson {
            key: &ring.key,
            label: &ring.label,
            mode: ring.mode,
            base_value: ring.base_value,
            display_value: ring.display_value,
            value: ring.rounded_value(),
            delta: ring.delta,
            delta_text: ring.delta_text(),
            sweep_angle_degrees: ring.sweep_angle_degrees,
            tip_color: ring.tip_color.to_css(),
            tip_hex: ring.tip_color.to_rgb().to_string(),
            tip_position: ring.tip_position,
        }
    }
}

impl<'a> From<&'a PatientReport> for ReportJson<'a> {
    fn from(report: &'a PatientReport) -> Self {
        ReportJson {
            patient: &report.patient,
            pace_of_aging: report.pace_of_aging,
            intensity: report.intensity,
            scoring: report.scoring.iter().map(RingJson::from).collect(),
            improvement: report.improvement.iter().map(RingJson::from).collect(),
            lifepath: &report.lifepath,
            habits: HabitsJson {
                selected: report.habits.selected(),
                max_selected: MAX_SELECTED,
                can_save: report.habits.can_save(),
            },
        }
    }
}

impl Reporter for JsonReporter {
    fn format(&self, report: &PatientReport, _verbose: bool) -> String {
        let output = JsonOutput {
            version: env!("CARGO_PKG_VERSION"),
            report: ReportJson::from(report),
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_all(&self, reports: &[PatientReport], _verbose: bool) -> String {
        let output = CohortOutput {
            version: env!("CARGO_PKG_VERSION"),
            patients: reports.iter().map(ReportJson::from).collect(),
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
