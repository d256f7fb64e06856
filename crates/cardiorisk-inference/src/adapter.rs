//! Inference adapter: clinical input to coronary artery disease assessment
//!
//! The adapter builds the fixed 8-feature vector, applies the training-time
//! scaler, runs the model, and maps the raw probability to a percentage and
//! a level.

use cardiorisk_core::{ClinicalInput, Error, Result, RiskAssessment, RiskLevel};
use std::sync::Arc;
use tracing::debug;

use crate::resources::InferenceResources;

/// Number of features the model expects
pub const FEATURE_COUNT: usize = 8;

/// Feature names in model input order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "male",
    "sysBP",
    "diaBP",
    "totChol",
    "glucose",
    "BMI",
    "currentSmoker",
];

/// Raw probability at or above which the level is `High`
pub const HIGH_THRESHOLD: f64 = 0.70;

/// Raw probability at or above which the level is `Moderate`
pub const MODERATE_THRESHOLD: f64 = 0.30;

/// Build the unscaled feature vector in model order
pub fn feature_vector(input: &ClinicalInput) -> Result<[f64; FEATURE_COUNT]> {
    let features = [
        input.age,
        if input.sex.is_male() { 1.0 } else { 0.0 },
        input.systolic_bp,
        input.diastolic_bp,
        input.total_cholesterol,
        input.glucose,
        input.bmi()?,
        if input.smoker { 1.0 } else { 0.0 },
    ];

    if let Some(i) = features.iter().position(|f| !f.is_finite()) {
        return Err(Error::computation(format!(
            "feature `{}` is not finite",
            FEATURE_NAMES[i]
        )));
    }
    Ok(features)
}

/// Level from the untruncated probability
pub fn level_for(raw: f64) -> RiskLevel {
    if raw >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if raw >= MODERATE_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Convert a raw model probability into an assessment.
///
/// The percentage truncates `raw * 100`; the level is decided on `raw`
/// itself so 0.6999 reads as 69% Moderate, not High.
pub fn assess_probability(raw: f64) -> Result<RiskAssessment> {
    if !(0.0..=1.0).contains(&raw) {
        return Err(Error::computation(format!(
            "model returned probability outside [0, 1]: {}",
            raw
        )));
    }
    let percentage = (raw * 100.0).trunc() as u8;
    Ok(RiskAssessment::new(percentage, level_for(raw)))
}

/// Runs the coronary model against clinical input
#[derive(Clone)]
pub struct InferenceAdapter {
    resources: Arc<InferenceResources>,
}

impl InferenceAdapter {
    pub fn new(resources: Arc<InferenceResources>) -> Self {
        Self { resources }
    }

    /// Raw model probability for `input`
    pub fn predict_raw(&self, input: &ClinicalInput) -> Result<f64> {
        let raw_features = feature_vector(input)?;
        let scaled = self.resources.scaler().transform(&raw_features);
        let features = scaled.map(|f| f as f32);
        if features.iter().any(|f| !f.is_finite()) {
            return Err(Error::computation("scaled features are not finite"));
        }

        let raw = self.resources.model().predict(&features)?;
        debug!(
            model = self.resources.model().name(),
            raw_probability = raw,
            "Coronary inference complete"
        );
        Ok(raw)
    }

    /// Coronary artery disease assessment for `input`
    pub fn assess(&self, input: &ClinicalInput) -> Result<RiskAssessment> {
        assess_probability(self.predict_raw(input)?)
    }
}
