//! CardioRisk Inference
//!
//! Coronary artery disease probability from a small feed-forward network.
//!
//! The model and the scaler it was trained with are external artifacts:
//! - `model.safetensors`: dense layer weights (`dense_0`, `dense_1`, ...)
//! - `model.json`: layer widths and hidden activation
//! - `scaler.json`: standard or min-max scaling parameters
//!
//! Artifacts load once at startup from a local directory or the Hugging Face
//! Hub and stay read-only afterwards.

pub mod adapter;
pub mod config;
pub mod model_loader;
pub mod provider;
pub mod resources;
pub mod scaler;

pub use adapter::{
    assess_probability, feature_vector, level_for, InferenceAdapter, FEATURE_COUNT,
    FEATURE_NAMES,
};
pub use config::{ArtifactSource, DeviceType, ModelConfig};
pub use model_loader::{Activation, LoadedModel, ModelArchitecture};
pub use provider::InferenceProvider;
pub use resources::{InferenceResources, SharedResources};
pub use scaler::FeatureScaler;
