//! Hypertension rule (AHA blood pressure categories)

use cardiorisk_core::{RiskAssessment, RiskLevel};

pub const STAGE_2: RiskAssessment = RiskAssessment::new(92, RiskLevel::High);
pub const STAGE_1: RiskAssessment = RiskAssessment::new(75, RiskLevel::Moderate);
pub const ELEVATED: RiskAssessment = RiskAssessment::new(45, RiskLevel::Moderate);
pub const NORMAL: RiskAssessment = RiskAssessment::new(10, RiskLevel::Low);

/// Assess hypertension risk from blood pressure in mmHg.
///
/// Bands are checked from most to least severe; the first match wins.
pub fn assess(systolic: f64, diastolic: f64) -> RiskAssessment {
    if systolic >= 140.0 || diastolic >= 90.0 {
        STAGE_2
    } else if systolic >= 130.0 || diastolic >= 80.0 {
        STAGE_1
    } else if systolic >= 120.0 && diastolic < 80.0 {
        ELEVATED
    } else {
        NORMAL
    }
}
