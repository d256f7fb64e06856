//! Type 2 diabetes rule (ADA fasting glucose criteria)

use cardiorisk_core::{RiskAssessment, RiskLevel};

pub const DIABETIC: RiskAssessment = RiskAssessment::new(95, RiskLevel::High);
pub const PREDIABETIC: RiskAssessment = RiskAssessment::new(45, RiskLevel::Moderate);
pub const NORMAL: RiskAssessment = RiskAssessment::new(10, RiskLevel::Low);

/// Assess diabetes risk from fasting glucose in mg/dL
pub fn assess(glucose: f64) -> RiskAssessment {
    if glucose >= 126.0 {
        DIABETIC
    } else if glucose >= 100.0 {
        PREDIABETIC
    } else {
        NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(assess(130.0), DIABETIC);
        assert_eq!(assess(126.0), DIABETIC);
        assert_eq!(assess(125.9), PREDIABETIC);
        assert_eq!(assess(100.0), PREDIABETIC);
        assert_eq!(assess(99.9), NORMAL);
        assert_eq!(assess(0.0), NORMAL);
    }
}
