//! Inference provider trait

use cardiorisk_core::Result;

use crate::adapter::FEATURE_COUNT;

/// Trait for models that estimate coronary artery disease probability
pub trait InferenceProvider: Send + Sync {
    /// Predict a probability in [0, 1] from an already scaled feature vector
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> Result<f64>;

    /// Get the provider name
    fn name(&self) -> &str;

    /// Model version, if the artifact declares one
    fn version(&self) -> &str {
        "unknown"
    }
}
