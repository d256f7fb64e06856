//! Server configuration

use cardiorisk_inference::{ArtifactSource, ModelConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Coronary model artifacts
    #[serde(default)]
    pub model: ModelSection,

    /// HTTP settings
    #[serde(default)]
    pub server: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from file, or use defaults when it does not exist
    pub fn load(config_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Point the model at a local artifact directory
    pub fn with_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model.artifacts.source = ArtifactSource::Local { path: dir.into() };
        self
    }

    /// Refuse to start without a loaded model
    pub fn with_model_required(mut self, required: bool) -> Self {
        self.model.required = required;
        self
    }
}

/// Model artifacts plus the startup policy for load failures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSection {
    /// Where the artifacts live
    #[serde(flatten)]
    pub artifacts: ModelConfig,

    /// Exit at startup instead of serving 500s when loading fails
    #[serde(default)]
    pub required: bool,
}

/// HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Maximum accepted request body size
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            body_limit_bytes: default_body_limit(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_body_limit() -> usize {
    64 * 1024
}
