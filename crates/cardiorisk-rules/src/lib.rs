//! CardioRisk Rules
//!
//! Deterministic, guideline-derived risk scores and the aggregation step
//! that merges them with the coronary model output.
//!
//! Rules:
//! - Hypertension (blood pressure bands)
//! - Type 2 diabetes (fasting glucose bands)
//! - Dyslipidemia (worst of LDL, HDL and total cholesterol sub-checks)
//! - Lifestyle (point score over smoking, activity and alcohol)
//!
//! Every rule is a pure function of its inputs.

pub mod aggregator;
pub mod diabetes;
pub mod dyslipidemia;
pub mod hypertension;
pub mod lifestyle;
pub mod rule;

pub use aggregator::aggregate;
pub use rule::{evaluate_rules, RuleOutcomes};
