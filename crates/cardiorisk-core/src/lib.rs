//! CardioRisk Core
//!
//! Core types, boundary validation, and error handling shared across
//! CardioRisk components.
//!
//! This crate provides:
//! - Domain types for clinical input, risk assessments, and reports
//! - Validation of raw request payloads into typed input
//! - Error types and result handling

pub mod error;
pub mod input;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    AlcoholConsumption, ClinicalInput, Condition, ConditionRisk, EvaluationReport,
    PhysicalActivity, RiskAssessment, RiskLevel, Sex, MODEL_VERSION,
};
