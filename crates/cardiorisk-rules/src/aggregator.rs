//! Aggregation of the coronary model output and rule outcomes into a report

use cardiorisk_core::{Condition, ConditionRisk, EvaluationReport, RiskAssessment, MODEL_VERSION};

use crate::rule::RuleOutcomes;

/// Build the unified report. `overall_risk` is the highest probability
/// across all five assessments.
pub fn aggregate(coronary: RiskAssessment, rules: &RuleOutcomes) -> EvaluationReport {
    let conditions: Vec<ConditionRisk> =
        std::iter::once((Condition::CoronaryArteryDisease, coronary))
            .chain(rules.by_condition())
            .map(|(name, assessment)| ConditionRisk { name, assessment })
            .collect();

    let overall_risk = conditions
        .iter()
        .map(|c| c.assessment.probability)
        .max()
        .unwrap_or(0);

    EvaluationReport {
        overall_risk,
        model_version: MODEL_VERSION.to_string(),
        conditions,
    }
}
