//! Dyslipidemia rule (AHA/CDC cholesterol guidance)
//!
//! Three independent sub-checks each contribute at most one candidate. The
//! worst candidate, by probability, is the result.

use cardiorisk_core::{RiskAssessment, RiskLevel};

pub const NO_FINDING: RiskAssessment = RiskAssessment::new(10, RiskLevel::Low);

/// LDL ("bad") cholesterol
pub fn ldl_check(ldl: f64) -> Option<RiskAssessment> {
    if ldl >= 160.0 {
        Some(RiskAssessment::new(85, RiskLevel::High))
    } else if ldl >= 130.0 {
        Some(RiskAssessment::new(60, RiskLevel::Moderate))
    } else {
        None
    }
}

/// HDL ("good") cholesterol
pub fn hdl_check(hdl: f64) -> Option<RiskAssessment> {
    (hdl < 40.0).then_some(RiskAssessment::new(90, RiskLevel::High))
}

/// Total cholesterol
pub fn total_check(total: f64) -> Option<RiskAssessment> {
    if total >= 240.0 {
        Some(RiskAssessment::new(80, RiskLevel::High))
    } else if total >= 200.0 {
        Some(RiskAssessment::new(50, RiskLevel::Moderate))
    } else {
        None
    }
}

/// Highest-probability candidate; the earliest one wins a tie
pub fn worst_case<I>(candidates: I) -> Option<RiskAssessment>
where
    I: IntoIterator<Item = RiskAssessment>,
{
    candidates.into_iter().fold(None, |worst, candidate| match worst {
        Some(w) if w.probability >= candidate.probability => Some(w),
        _ => Some(candidate),
    })
}

/// Assess dyslipidemia risk from LDL, HDL and total cholesterol in mg/dL
pub fn assess(ldl: f64, hdl: f64, total: f64) -> RiskAssessment {
    let candidates = [ldl_check(ldl), hdl_check(hdl), total_check(total)];
    worst_case(candidates.into_iter().flatten()).unwrap_or(NO_FINDING)
}
