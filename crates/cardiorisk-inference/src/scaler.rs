//! Feature normalization fitted at training time

use cardiorisk_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::adapter::FEATURE_COUNT;

/// Scaler applied to the raw feature vector before inference.
///
/// Mirrors the two scikit-learn scalers the model may have been trained with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureScaler {
    /// `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },

    /// `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl FeatureScaler {
    /// A standard scaler that leaves features unchanged
    pub fn identity() -> Self {
        Self::Standard {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        }
    }

    /// Load a scaler from a JSON artifact
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::resource_unavailable(format!("Failed to read scaler {}: {}", path.display(), e))
        })?;
        Self::from_json(&content).map_err(|e| {
            Error::resource_unavailable(format!("Invalid scaler {}: {}", path.display(), e))
        })
    }

    /// Parse and validate a scaler from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let scaler: Self = serde_json::from_str(json)?;
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<()> {
        let (offset, scale) = match self {
            Self::Standard { mean, scale } => (mean, scale),
            Self::MinMax { min, scale } => (min, scale),
        };
        if offset.len() != FEATURE_COUNT || scale.len() != FEATURE_COUNT {
            return Err(Error::config(format!(
                "scaler must have {} entries per vector, got {} and {}",
                FEATURE_COUNT,
                offset.len(),
                scale.len()
            )));
        }
        if offset.iter().chain(scale.iter()).any(|v| !v.is_finite()) {
            return Err(Error::config("scaler contains non-finite values"));
        }
        Ok(())
    }

    /// Scale a raw feature vector
    pub fn transform(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        match self {
            Self::Standard { mean, scale } => {
                for (i, x) in features.iter().enumerate() {
                    // zero variance features are left centred, not divided
                    let s = if scale[i] == 0.0 { 1.0 } else { scale[i] };
                    out[i] = (x - mean[i]) / s;
                }
            }
            Self::MinMax { min, scale } => {
                for (i, x) in features.iter().enumerate() {
                    out[i] = x * scale[i] + min[i];
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_transform() {
        let scaler = FeatureScaler::from_json(
            r#"{"kind": "standard",
                "mean": [50, 0.5, 130, 80, 200, 90, 25, 0.5],
                "scale": [10, 0.5, 20, 10, 40, 20, 5, 0]}"#,
        )
        .unwrap();

        let out = scaler.transform(&[60.0, 1.0, 150.0, 90.0, 240.0, 110.0, 30.0, 1.0]);
        assert_eq!(out, [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_min_max_transform() {
        let scaler = FeatureScaler::MinMax {
            min: vec![-1.0; FEATURE_COUNT],
            scale: vec![0.5; FEATURE_COUNT],
        };
        let out = scaler.transform(&[2.0; FEATURE_COUNT]);
        assert_eq!(out, [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_identity() {
        let features = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(FeatureScaler::identity().transform(&features), features);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = FeatureScaler::from_json(r#"{"kind": "standard", "mean": [1, 2], "scale": [1, 2]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(FeatureScaler::from_json(r#"{"kind": "robust", "center": []}"#).is_err());
    }
}
