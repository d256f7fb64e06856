//! Process-wide inference resources, loaded once and then read-only

use cardiorisk_core::Result;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::config::ModelConfig;
use crate::model_loader::{resolve_artifact, LoadedModel};
use crate::provider::InferenceProvider;
use crate::scaler::FeatureScaler;

/// The trained model together with the scaler it was fitted with
pub struct InferenceResources {
    scaler: FeatureScaler,
    model: Arc<dyn InferenceProvider>,
}

impl InferenceResources {
    /// Assemble resources from already-built parts
    pub fn new(scaler: FeatureScaler, model: Arc<dyn InferenceProvider>) -> Self {
        Self { scaler, model }
    }

    /// Load the scaler and model artifacts described by `config`
    pub fn load(config: &ModelConfig) -> Result<Self> {
        info!("Loading feature scaler: {}", config.scaler_file);
        let scaler_path = resolve_artifact(&config.source, &config.scaler_file)?;
        let scaler = FeatureScaler::from_file(&scaler_path)?;

        info!("Loading coronary model: {}", config.weights_file);
        let model = LoadedModel::load(config)?;

        Ok(Self::new(scaler, Arc::new(model)))
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn model(&self) -> &dyn InferenceProvider {
        self.model.as_ref()
    }
}

/// Slot holding the resources once loaded.
///
/// The first successful load is kept; later calls return it without touching
/// the artifacts again. A failed load leaves the slot empty.
#[derive(Default)]
pub struct SharedResources {
    cell: OnceLock<Arc<InferenceResources>>,
}

impl SharedResources {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Create a slot that is already filled
    pub fn loaded(resources: InferenceResources) -> Self {
        let slot = Self::new();
        let _ = slot.cell.set(Arc::new(resources));
        slot
    }

    /// The loaded resources, if any
    pub fn get(&self) -> Option<Arc<InferenceResources>> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the loaded resources, running `load` only if the slot is empty
    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<InferenceResources>>
    where
        F: FnOnce() -> Result<InferenceResources>,
    {
        if let Some(existing) = self.cell.get() {
            debug!("Inference resources already loaded, skipping");
            return Ok(existing.clone());
        }

        let loaded = Arc::new(load()?);
        // a concurrent loader may have won; whichever value landed is kept
        Ok(self.cell.get_or_init(|| loaded).clone())
    }
}
