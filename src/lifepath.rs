//! Synthetic life-path chart data.
//!
//! The past is drawn as a plausible corridor that ends at today's
//! biological age; the future as two straight projections, one without
//! changes and one following the plan.

use serde::Serialize;

use crate::patient::Patient;

pub const MIN_DISPLAY_AGE: i64 = 15;
pub const MAX_DISPLAY_AGE: i64 = 100;
pub const AGE_STEP: i64 = 5;

const SLOPE_PAST: f64 = -0.35;
const PAST_SPREAD: f64 = 4.0;
const SLOPE_NO_CHANGE: f64 = 0.7;
const SLOPE_WITH_PLAN: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifePathPoint {
    pub age: i64,
    pub past_band: Option<Band>,
    pub no_change: Option<f64>,
    pub with_plan: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifePath {
    pub chronological_age: i64,
    pub biological_age: f64,
    pub points: Vec<LifePathPoint>,
}

/// Ages on the x-axis: five-year steps around the chronological age,
/// bounded by the display range. The chronological age itself is always
/// included.
pub fn axis_ages(chronological_age: i64) -> Vec<i64> {
    let mut ages: Vec<i64> = (1..)
        .map(|k| chronological_age - k * AGE_STEP)
        .take_while(|&a| a >= MIN_DISPLAY_AGE)
        .collect();
    ages.reverse();
    ages.push(chronological_age);
    ages.extend(
        (1..)
            .map(|k| chronological_age + k * AGE_STEP)
            .take_while(|&a| a <= MAX_DISPLAY_AGE),
    );
    ages
}

impl LifePath {
    pub fn project(patient: &Patient) -> Self {
        let chrono = patient.chronological_age as i64;
        let bio = patient.biological_age as f64;

        let points = axis_ages(chrono)
            .into_iter()
            .map(|age| {
                let dx = (age - chrono) as f64;
                let past_band = (age <= chrono).then(|| {
                    let center = bio + SLOPE_PAST * dx;
                    Band {
                        low: center - PAST_SPREAD,
                        high: center + PAST_SPREAD,
                    }
                });
                LifePathPoint {
                    age,
                    past_band,
                    no_change: (age >= chrono).then(|| bio + SLOPE_NO_CHANGE * dx),
                    with_plan: (age >= chrono).then(|| bio + SLOPE_WITH_PLAN * dx),
                }
            })
            .collect();

        LifePath {
            chronological_age: chrono,
            biological_age: bio,
            points,
        }
    }

    /// Projected biological age at the last future point, without and with the plan.
    pub fn horizon(&self) -> Option<(i64, f64, f64)> {
        let last = self.points.last()?;
        Some((last.age, last.no_change?, last.with_plan?))
    }
}
