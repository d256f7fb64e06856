//! Request handling core: payload in, unified report out

use cardiorisk_core::{ClinicalInput, Error, EvaluationReport, Result};
use cardiorisk_inference::{InferenceAdapter, InferenceResources, SharedResources};
use cardiorisk_rules::{aggregate, evaluate_rules};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Loaded inference resources, or `ResourceUnavailable`.
///
/// Callers check this before reading the request body at all.
pub fn ready_resources(shared: &SharedResources) -> Result<Arc<InferenceResources>> {
    shared
        .get()
        .ok_or_else(|| Error::resource_unavailable("coronary model is not loaded"))
}

/// Evaluate one request payload.
///
/// Either a complete report or a single error comes back; never both.
pub fn evaluate(resources: Arc<InferenceResources>, payload: &Value) -> Result<EvaluationReport> {
    let input = ClinicalInput::from_json(payload)?;
    debug!(?input, "Validated clinical input");

    let coronary = InferenceAdapter::new(resources).assess(&input)?;
    let rules = evaluate_rules(&input);

    Ok(aggregate(coronary, &rules))
}
