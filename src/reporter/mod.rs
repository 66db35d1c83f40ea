pub mod cli;
pub mod json;
pub mod svg;

use owo_colors::OwoColorize;

use crate::engine::PatientReport;
use crate::patient::Patient;

pub trait Reporter {
    fn format(&self, report: &PatientReport, verbose: bool) -> String;

    fn format_all(&self, reports: &[PatientReport], verbose: bool) -> String {
        reports
            .iter()
            .map(|report| self.format(report, verbose))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Captions may carry `\n`; single-line outputs join the lines with a space.
pub fn single_line_label(label: &str) -> String {
    label.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}

/// Patient picker listing. `query` is the search text, if any.
pub fn patient_list(patients: &[&Patient], query: Option<&str>) -> String {
    let mut out = String::new();
    if patients.is_empty() {
        if query.is_some_and(|q| !q.trim().is_empty()) {
            out.push_str(&format!("  {}\n", "No patients found".dimmed()));
        }
        return out;
    }
    for patient in patients {
        out.push_str(&format!(
            "  {}  {}  {}\n",
            format!("[{}]", patient.initials()).cyan(),
            patient.name.bold(),
            format!("{} years", patient.biological_age).dimmed()
        ));
        out.push_str(&format!(
            "        gender: {}  biological age: {}  BMI: {}\n",
            patient.gender,
            patient.biological_age,
            patient.bmi_display()
        ));
    }
    out
}
