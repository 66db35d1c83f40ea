use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::dataset::PatientRepository;
use crate::error::{Error, Result};
use crate::habits::HabitBoard;
use crate::lifepath::LifePath;
use crate::patient::Patient;
use crate::ring::{RingGeometry, RingRenderState};

#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub patient: String,
    /// Slider position 0-100; falls back to the configured default
    pub intensity: Option<u8>,
    pub habits: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientReport {
    pub patient: Patient,
    pub pace_of_aging: Option<f64>,
    pub geometry: RingGeometry,
    pub intensity: u8,
    pub scoring: Vec<RingRenderState>,
    pub improvement: Vec<RingRenderState>,
    pub lifepath: LifePath,
    pub habits: HabitBoard,
}

pub fn run(
    repo: &dyn PatientRepository,
    config: &Config,
    request: &ReportRequest,
) -> Result<PatientReport> {
    let patient = repo
        .find_by_name(&request.patient)
        .ok_or_else(|| Error::PatientNotFound(request.patient.clone()))?;
    let intensity = resolve_intensity(config, request.intensity);
    let habits = HabitBoard::from_slots(&request.habits)?;

    debug!(patient = %patient.name, intensity, "building report");
    Ok(build_report(patient, config, intensity, habits))
}

/// One report per patient, all sharing the same intensity and habit selection.
pub fn run_all(
    repo: &dyn PatientRepository,
    config: &Config,
    intensity: Option<u8>,
    habits: &[usize],
) -> Result<Vec<PatientReport>> {
    let intensity = resolve_intensity(config, intensity);
    let habits = HabitBoard::from_slots(habits)?;
    let reports: Vec<PatientReport> = repo
        .patients()
        .par_iter()
        .map(|patient| build_report(patient, config, intensity, habits.clone()))
        .collect();
    info!(patients = reports.len(), intensity, "built cohort reports");
    Ok(reports)
}

fn resolve_intensity(config: &Config, requested: Option<u8>) -> u8 {
    requested
        .unwrap_or(config.scoring.default_intensity)
        .min(100)
}

fn build_report(
    patient: &Patient,
    config: &Config,
    intensity: u8,
    habits: HabitBoard,
) -> PatientReport {
    let geometry = config.geometry();

    let scoring = config
        .categories
        .iter()
        .map(|category| RingRenderState::compute(&category.current(), &geometry))
        .collect();
    let improvement = config
        .categories
        .iter()
        .map(|category| {
            RingRenderState::compute(&category.with_intensity(intensity as f64), &geometry)
        })
        .collect();

    PatientReport {
        patient: patient.clone(),
        pace_of_aging: patient.pace_of_aging(),
        geometry,
        intensity,
        scoring,
        improvement,
        lifepath: LifePath::project(patient),
        habits,
    }
}
