//! Lifestyle rule: one point per risk habit, mapped through a fixed table

use cardiorisk_core::{AlcoholConsumption, PhysicalActivity, RiskAssessment, RiskLevel};

/// Count risk habits (0-3)
pub fn risk_points(
    smoker: bool,
    activity: PhysicalActivity,
    alcohol: AlcoholConsumption,
) -> u8 {
    let mut points = 0;
    if smoker {
        points += 1;
    }
    if activity == PhysicalActivity::Sedentary {
        points += 1;
    }
    if matches!(alcohol, AlcoholConsumption::Moderate | AlcoholConsumption::High) {
        points += 1;
    }
    points
}

/// Map a point total to its assessment.
///
/// A single point is 30% but still `Low`. Other rules would call 30%
/// moderate territory; the table is kept as published.
pub fn from_points(points: u8) -> RiskAssessment {
    match points {
        0 => RiskAssessment::new(10, RiskLevel::Low),
        1 => RiskAssessment::new(30, RiskLevel::Low),
        2 => RiskAssessment::new(60, RiskLevel::Moderate),
        _ => RiskAssessment::new(90, RiskLevel::High),
    }
}

/// Assess lifestyle risk
pub fn assess(
    smoker: bool,
    activity: PhysicalActivity,
    alcohol: AlcoholConsumption,
) -> RiskAssessment {
    from_points(risk_points(smoker, activity, alcohol))
}
