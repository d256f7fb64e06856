//! Application state shared across requests

use anyhow::Result;
use cardiorisk_inference::{InferenceResources, SharedResources};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::ServerConfig;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Inference resources; read-only once startup finishes
    pub resources: Arc<SharedResources>,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Initialize application state, loading the model artifacts.
    ///
    /// A load failure is fatal only when `model.required` is set; otherwise
    /// the server starts and every evaluation reports the model unavailable.
    pub fn new(config: ServerConfig, metrics_handle: Option<PrometheusHandle>) -> Result<Self> {
        info!("Initializing application state");

        let resources = SharedResources::new();
        match resources.get_or_load(|| InferenceResources::load(&config.model.artifacts)) {
            Ok(loaded) => info!(
                "Coronary model ready: {} v{}",
                loaded.model().name(),
                loaded.model().version()
            ),
            Err(e) if config.model.required => {
                return Err(anyhow::anyhow!("Failed to load coronary model: {}", e));
            }
            Err(e) => error!("Coronary model unavailable, evaluations will fail: {}", e),
        }

        Ok(Self::with_resources(config, resources, metrics_handle))
    }

    /// Build state around resources that were prepared elsewhere
    pub fn with_resources(
        config: ServerConfig,
        resources: SharedResources,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            resources: Arc::new(resources),
            metrics_handle,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.resources.is_loaded()
    }
}
