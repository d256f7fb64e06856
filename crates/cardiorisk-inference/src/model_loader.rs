//! Model loading for the Candle-based coronary risk network

use candle_core::{DType, Device, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use cardiorisk_core::{Error, Result};
use hf_hub::{api::sync::Api, Repo, RepoType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::adapter::FEATURE_COUNT;
use crate::config::{ArtifactSource, DeviceType, ModelConfig};
use crate::provider::InferenceProvider;

/// Hidden layer activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Relu,
    Tanh,
}

/// Feed-forward architecture stored next to the weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArchitecture {
    /// Model name/identifier
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Model version
    #[serde(default = "default_model_version")]
    pub version: String,

    /// Layer widths, input first; `[8, 16, 8, 1]` has three dense layers
    pub layers: Vec<usize>,

    /// Activation between hidden layers
    #[serde(default)]
    pub activation: Activation,
}

impl ModelArchitecture {
    /// Load an architecture description from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::resource_unavailable(format!(
                "Failed to read architecture {}: {}",
                path.display(),
                e
            ))
        })?;
        let arch: Self = serde_json::from_str(&content).map_err(|e| {
            Error::resource_unavailable(format!(
                "Invalid architecture {}: {}",
                path.display(),
                e
            ))
        })?;
        arch.validate()?;
        Ok(arch)
    }

    fn validate(&self) -> Result<()> {
        match (self.layers.first(), self.layers.last()) {
            (Some(&FEATURE_COUNT), Some(&1)) if self.layers.len() >= 2 => {}
            _ => {
                return Err(Error::resource_unavailable(format!(
                    "architecture must map {} inputs to 1 output, got layers {:?}",
                    FEATURE_COUNT, self.layers
                )))
            }
        }
        if self.layers.contains(&0) {
            return Err(Error::resource_unavailable("architecture has a zero-width layer"));
        }
        Ok(())
    }
}

/// Loaded Candle network producing a single sigmoid probability
pub struct LoadedModel {
    /// Dense layers, input first
    layers: Vec<Linear>,

    /// Device the model is on
    device: Device,

    /// Architecture metadata
    architecture: ModelArchitecture,

    /// Weights path (for reference)
    weights_path: PathBuf,
}

impl LoadedModel {
    /// Load the network described by `config`
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let weights_path = resolve_artifact(&config.source, &config.weights_file)?;
        let arch_path = resolve_artifact(&config.source, &config.architecture_file)?;
        Self::from_files(&weights_path, &arch_path, config.device)
    }

    /// Load the network from explicit weights and architecture paths
    pub fn from_files(weights_path: &Path, arch_path: &Path, device: DeviceType) -> Result<Self> {
        let architecture = ModelArchitecture::from_file(arch_path)?;
        let device = create_device(device)?;

        let weights = std::fs::read(weights_path).map_err(|e| {
            Error::resource_unavailable(format!(
                "Failed to read weights {}: {}",
                weights_path.display(),
                e
            ))
        })?;
        let vb = VarBuilder::from_buffered_safetensors(weights, DType::F32, &device)
            .map_err(|e| Error::resource_unavailable(format!("Failed to load SafeTensors: {}", e)))?;

        let layers = architecture
            .layers
            .windows(2)
            .enumerate()
            .map(|(i, dims)| {
                candle_nn::linear(dims[0], dims[1], vb.pp(format!("dense_{}", i))).map_err(|e| {
                    Error::resource_unavailable(format!(
                        "Failed to load layer dense_{} ({}x{}): {}",
                        i, dims[0], dims[1], e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Loaded model '{}' v{} ({} dense layers) from {}",
            architecture.name,
            architecture.version,
            layers.len(),
            weights_path.display()
        );

        Ok(Self {
            layers,
            device,
            architecture,
            weights_path: weights_path.to_path_buf(),
        })
    }

    fn forward(&self, features: &[f32; FEATURE_COUNT]) -> candle_core::Result<f32> {
        let mut xs = Tensor::new(&features[..], &self.device)?.unsqueeze(0)?;
        let last = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            xs = layer.forward(&xs)?;
            if i < last {
                xs = match self.architecture.activation {
                    Activation::Relu => xs.relu()?,
                    Activation::Tanh => xs.tanh()?,
                };
            }
        }
        let probs = candle_nn::ops::sigmoid(&xs)?.flatten_all()?.to_vec1::<f32>()?;
        Ok(probs[0])
    }

    /// Get architecture metadata
    pub fn architecture(&self) -> &ModelArchitecture {
        &self.architecture
    }

    /// Get weights path
    pub fn weights_path(&self) -> &Path {
        &self.weights_path
    }
}

impl InferenceProvider for LoadedModel {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> Result<f64> {
        let prob = self
            .forward(features)
            .map_err(|e| Error::computation(format!("Model inference failed: {}", e)))?;
        debug!(probability = prob, "Model forward pass complete");
        Ok(f64::from(prob))
    }

    fn name(&self) -> &str {
        &self.architecture.name
    }

    fn version(&self) -> &str {
        &self.architecture.version
    }
}

/// Resolve an artifact file from its source
pub fn resolve_artifact(source: &ArtifactSource, filename: &str) -> Result<PathBuf> {
    match source {
        ArtifactSource::Local { path } => {
            let file = path.join(filename);
            if !file.exists() {
                return Err(Error::resource_unavailable(format!(
                    "Artifact not found: {}",
                    file.display()
                )));
            }
            Ok(file)
        }
        ArtifactSource::HuggingFace { repo_id, revision } => {
            let api = Api::new().map_err(|e| {
                Error::resource_unavailable(format!("Failed to initialize HF API: {}", e))
            })?;

            let repo = api.repo(Repo::with_revision(
                repo_id.clone(),
                RepoType::Model,
                revision.clone().unwrap_or_else(|| "main".to_string()),
            ));

            repo.get(filename).map_err(|e| {
                Error::resource_unavailable(format!(
                    "Failed to download {} from {}: {}",
                    filename, repo_id, e
                ))
            })
        }
    }
}

/// Create Candle device from device type
fn create_device(device_type: DeviceType) -> Result<Device> {
    match device_type {
        DeviceType::Cpu => Ok(Device::Cpu),
        DeviceType::Cuda => Device::new_cuda(0).map_err(|e| {
            Error::resource_unavailable(format!("Failed to create CUDA device: {}", e))
        }),
        DeviceType::Metal => Device::new_metal(0).map_err(|e| {
            Error::resource_unavailable(format!("Failed to create Metal device: {}", e))
        }),
    }
}

fn default_model_name() -> String {
    "coronary-mlp".to_string()
}

fn default_model_version() -> String {
    "1.0".to_string()
}
