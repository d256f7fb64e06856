//! Property tests for the guideline rules and aggregation

use cardiorisk_core::{
    AlcoholConsumption, ClinicalInput, Condition, PhysicalActivity, RiskAssessment, RiskLevel,
    Sex,
};
use cardiorisk_rules::{aggregate, dyslipidemia, evaluate_rules, hypertension};
use proptest::prelude::*;

fn reference_input() -> ClinicalInput {
    ClinicalInput {
        age: 50.0,
        sex: Sex::Male,
        height_cm: 170.0,
        weight_kg: 70.0,
        systolic_bp: 145.0,
        diastolic_bp: 95.0,
        total_cholesterol: 250.0,
        ldl_cholesterol: 170.0,
        hdl_cholesterol: 35.0,
        glucose: 130.0,
        smoker: true,
        physical_activity: PhysicalActivity::Sedentary,
        alcohol_consumption: AlcoholConsumption::Moderate,
    }
}

#[test]
fn test_reference_patient() {
    let outcomes = evaluate_rules(&reference_input());

    assert_eq!(outcomes.hypertension, RiskAssessment::new(92, RiskLevel::High));
    assert_eq!(outcomes.diabetes, RiskAssessment::new(95, RiskLevel::High));
    assert_eq!(outcomes.dyslipidemia, RiskAssessment::new(90, RiskLevel::High));
    assert_eq!(outcomes.lifestyle, RiskAssessment::new(90, RiskLevel::High));

    let report = aggregate(RiskAssessment::new(40, RiskLevel::Moderate), &outcomes);
    assert_eq!(report.overall_risk, 95);
    assert_eq!(
        report.assessment(Condition::CoronaryArteryDisease),
        Some(&RiskAssessment::new(40, RiskLevel::Moderate))
    );
}

#[test]
fn test_rules_are_idempotent() {
    let input = reference_input();
    assert_eq!(evaluate_rules(&input), evaluate_rules(&input));
}

fn level() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Moderate),
        Just(RiskLevel::High)
    ]
}

proptest! {
    #[test]
    fn hypertension_is_monotonic_in_systolic(
        systolic in 60.0f64..220.0,
        diastolic in 40.0f64..130.0,
        delta in 0.0f64..60.0,
    ) {
        let before = hypertension::assess(systolic, diastolic);
        let after = hypertension::assess(systolic + delta, diastolic);
        prop_assert!(after.probability >= before.probability);
    }

    #[test]
    fn hypertension_is_monotonic_in_diastolic(
        systolic in 60.0f64..220.0,
        diastolic in 40.0f64..130.0,
        delta in 0.0f64..60.0,
    ) {
        let before = hypertension::assess(systolic, diastolic);
        let after = hypertension::assess(systolic, diastolic + delta);
        prop_assert!(after.probability >= before.probability);
    }

    #[test]
    fn dyslipidemia_returns_max_of_triggered_checks(
        ldl in 50.0f64..250.0,
        hdl in 20.0f64..90.0,
        total in 120.0f64..320.0,
    ) {
        let result = dyslipidemia::assess(ldl, hdl, total);
        prop_assert!([10u8, 50, 60, 80, 85, 90].contains(&result.probability));

        let triggered: Vec<u8> = [
            dyslipidemia::ldl_check(ldl),
            dyslipidemia::hdl_check(hdl),
            dyslipidemia::total_check(total),
        ]
        .into_iter()
        .flatten()
        .map(|a| a.probability)
        .collect();

        match triggered.iter().max() {
            Some(max) => prop_assert_eq!(result.probability, *max),
            None => prop_assert_eq!(result, dyslipidemia::NO_FINDING),
        }
    }

    #[test]
    fn overall_risk_is_max_of_all_conditions(
        coronary in 0u8..=100,
        coronary_level in level(),
        systolic in 80.0f64..200.0,
        diastolic in 50.0f64..120.0,
        glucose in 60.0f64..200.0,
        hdl in 20.0f64..90.0,
        smoker in any::<bool>(),
    ) {
        let mut input = reference_input();
        input.systolic_bp = systolic;
        input.diastolic_bp = diastolic;
        input.glucose = glucose;
        input.hdl_cholesterol = hdl;
        input.smoker = smoker;

        let report = aggregate(
            RiskAssessment::new(coronary, coronary_level),
            &evaluate_rules(&input),
        );

        let max = report.conditions.iter().map(|c| c.assessment.probability).max().unwrap();
        prop_assert_eq!(report.overall_risk, max);
        prop_assert_eq!(report.conditions.len(), 5);
    }
}
