//! Rule set: runs every guideline rule over one input

use cardiorisk_core::{ClinicalInput, Condition, RiskAssessment};
use tracing::debug;

use crate::{diabetes, dyslipidemia, hypertension, lifestyle};

/// Outcomes of the four rule-based scores for one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcomes {
    pub hypertension: RiskAssessment,
    pub diabetes: RiskAssessment,
    pub dyslipidemia: RiskAssessment,
    pub lifestyle: RiskAssessment,
}

impl RuleOutcomes {
    /// Outcomes paired with their condition, in report order
    pub fn by_condition(&self) -> [(Condition, RiskAssessment); 4] {
        [
            (Condition::Hypertension, self.hypertension),
            (Condition::Type2Diabetes, self.diabetes),
            (Condition::Dyslipidemia, self.dyslipidemia),
            (Condition::LifestyleRisk, self.lifestyle),
        ]
    }
}

/// Evaluate all rules. Each rule reads only its own fields and has no state,
/// so evaluation order does not matter.
pub fn evaluate_rules(input: &ClinicalInput) -> RuleOutcomes {
    let outcomes = RuleOutcomes {
        hypertension: hypertension::assess(input.systolic_bp, input.diastolic_bp),
        diabetes: diabetes::assess(input.glucose),
        dyslipidemia: dyslipidemia::assess(
            input.ldl_cholesterol,
            input.hdl_cholesterol,
            input.total_cholesterol,
        ),
        lifestyle: lifestyle::assess(
            input.smoker,
            input.physical_activity,
            input.alcohol_consumption,
        ),
    };

    debug!(?outcomes, "Rule evaluation complete");
    outcomes
}
