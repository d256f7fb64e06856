//! Configuration for locating and loading the coronary model artifacts

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how to load the model, its architecture, and its scaler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Artifact source specification
    #[serde(flatten)]
    pub source: ArtifactSource,

    /// Weights file name (SafeTensors)
    #[serde(default = "default_weights_file")]
    pub weights_file: String,

    /// Architecture description file name
    #[serde(default = "default_architecture_file")]
    pub architecture_file: String,

    /// Scaler file name
    #[serde(default = "default_scaler_file")]
    pub scaler_file: String,

    /// Device to run inference on
    #[serde(default)]
    pub device: DeviceType,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            source: ArtifactSource::Local {
                path: PathBuf::from("./artifacts"),
            },
            weights_file: default_weights_file(),
            architecture_file: default_architecture_file(),
            scaler_file: default_scaler_file(),
            device: DeviceType::default(),
        }
    }
}

impl ModelConfig {
    /// Create a new model configuration from a local directory
    pub fn from_local(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ArtifactSource::Local { path: path.into() },
            ..Default::default()
        }
    }

    /// Create a new model configuration from a Hugging Face repo
    pub fn from_hf(repo_id: impl Into<String>) -> Self {
        Self {
            source: ArtifactSource::HuggingFace {
                repo_id: repo_id.into(),
                revision: None,
            },
            ..Default::default()
        }
    }

    /// Set device
    pub fn with_device(mut self, device: DeviceType) -> Self {
        self.device = device;
        self
    }

    /// Set Hugging Face revision
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        if let ArtifactSource::HuggingFace { repo_id, .. } = self.source {
            self.source = ArtifactSource::HuggingFace {
                repo_id,
                revision: Some(revision.into()),
            };
        }
        self
    }
}

/// Source location for model artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtifactSource {
    /// Local directory holding all artifact files
    Local { path: PathBuf },

    /// Hugging Face Hub repository
    HuggingFace {
        repo_id: String,
        revision: Option<String>,
    },
}

/// Device type for inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// CPU inference (always available)
    #[default]
    Cpu,
    /// CUDA GPU 0
    Cuda,
    /// Metal (Apple Silicon)
    Metal,
}

fn default_weights_file() -> String {
    "model.safetensors".to_string()
}

fn default_architecture_file() -> String {
    "model.json".to_string()
}

fn default_scaler_file() -> String {
    "scaler.json".to_string()
}
