//! Loading real artifacts from disk and running them end to end

use candle_core::{DType, Device, Tensor};
use cardiorisk_core::{
    AlcoholConsumption, ClinicalInput, Error, PhysicalActivity, RiskLevel, Sex,
};
use cardiorisk_inference::{
    InferenceAdapter, InferenceProvider, InferenceResources, LoadedModel, ModelConfig,
    FEATURE_COUNT,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const STANDARD_SCALER: &str = r#"{
    "kind": "standard",
    "mean": [50, 0.5, 130, 80, 200, 90, 25, 0.5],
    "scale": [10, 0.5, 20, 10, 40, 20, 5, 0.5]
}"#;

fn write_model(dir: &Path, layers: &[usize], output_bias: f32) {
    let arch = serde_json::json!({
        "name": "test-mlp",
        "version": "0.0.1",
        "layers": layers,
        "activation": "relu",
    });
    std::fs::write(dir.join("model.json"), arch.to_string()).unwrap();

    let device = Device::Cpu;
    let mut tensors = HashMap::new();
    let last = layers.len() - 2;
    for (i, dims) in layers.windows(2).enumerate() {
        let weight = Tensor::zeros((dims[1], dims[0]), DType::F32, &device).unwrap();
        let bias = if i == last {
            Tensor::new(&[output_bias], &device).unwrap()
        } else {
            Tensor::zeros(dims[1], DType::F32, &device).unwrap()
        };
        tensors.insert(format!("dense_{}.weight", i), weight);
        tensors.insert(format!("dense_{}.bias", i), bias);
    }
    candle_core::safetensors::save(&tensors, dir.join("model.safetensors")).unwrap();
}

fn patient() -> ClinicalInput {
    ClinicalInput {
        age: 61.0,
        sex: Sex::Female,
        height_cm: 158.0,
        weight_kg: 66.0,
        systolic_bp: 138.0,
        diastolic_bp: 86.0,
        total_cholesterol: 228.0,
        ldl_cholesterol: 142.0,
        hdl_cholesterol: 48.0,
        glucose: 108.0,
        smoker: false,
        physical_activity: PhysicalActivity::Active,
        alcohol_consumption: AlcoholConsumption::None,
    }
}

#[test]
fn test_zero_network_predicts_one_half() {
    let dir = tempfile::tempdir().unwrap();
    write_model(dir.path(), &[8, 1], 0.0);

    let model = LoadedModel::load(&ModelConfig::from_local(dir.path())).unwrap();
    assert_eq!(model.name(), "test-mlp");
    assert_eq!(model.version(), "0.0.1");

    let p = model.predict(&[0.3; FEATURE_COUNT]).unwrap();
    assert!((p - 0.5).abs() < 1e-6);
}

#[test]
fn test_hidden_layers_and_output_bias() {
    let dir = tempfile::tempdir().unwrap();
    write_model(dir.path(), &[8, 4, 2, 1], 2.0);

    let model = LoadedModel::load(&ModelConfig::from_local(dir.path())).unwrap();
    assert_eq!(model.architecture().layers, vec![8, 4, 2, 1]);

    // sigmoid(2.0)
    let p = model.predict(&[1.0; FEATURE_COUNT]).unwrap();
    assert!((p - 0.880_797).abs() < 1e-5);
}

#[test]
fn test_resources_load_and_assess() {
    let dir = tempfile::tempdir().unwrap();
    write_model(dir.path(), &[8, 16, 1], 2.0);
    std::fs::write(dir.path().join("scaler.json"), STANDARD_SCALER).unwrap();

    let resources = InferenceResources::load(&ModelConfig::from_local(dir.path())).unwrap();
    let adapter = InferenceAdapter::new(Arc::new(resources));

    let assessment = adapter.assess(&patient()).unwrap();
    assert_eq!(assessment.probability, 88);
    assert_eq!(assessment.level, RiskLevel::High);

    // identical input, identical output
    assert_eq!(adapter.assess(&patient()).unwrap(), assessment);
}

#[test]
fn test_missing_scaler_is_resource_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    write_model(dir.path(), &[8, 1], 0.0);

    let err = InferenceResources::load(&ModelConfig::from_local(dir.path()))
        .err()
        .unwrap();
    assert!(matches!(err, Error::ResourceUnavailable(_)));
}

#[test]
fn test_shape_mismatch_is_resource_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    write_model(dir.path(), &[8, 4, 1], 0.0);
    // declared architecture no longer matches the stored weights
    std::fs::write(dir.path().join("model.json"), r#"{"layers": [8, 6, 1]}"#).unwrap();

    let err = LoadedModel::load(&ModelConfig::from_local(dir.path()))
        .err()
        .unwrap();
    assert!(matches!(err, Error::ResourceUnavailable(_)));
}
