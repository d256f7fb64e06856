//! Core types for CardioRisk

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version tag reported with every evaluation
pub const MODEL_VERSION: &str = "1.2-hybrid-advanced";

/// Categorical risk label attached to every assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// A single risk estimate: integer percentage plus its level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Probability as a whole percentage (0-100)
    pub probability: u8,

    /// Risk level
    pub level: RiskLevel,
}

impl RiskAssessment {
    /// Create a new assessment
    pub const fn new(probability: u8, level: RiskLevel) -> Self {
        Self { probability, level }
    }
}

/// Conditions reported in an evaluation, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Coronary Artery Disease")]
    CoronaryArteryDisease,
    #[serde(rename = "Hypertension")]
    Hypertension,
    #[serde(rename = "Type 2 Diabetes")]
    Type2Diabetes,
    #[serde(rename = "Dyslipidemia")]
    Dyslipidemia,
    #[serde(rename = "Lifestyle Risk")]
    LifestyleRisk,
}

impl Condition {
    /// Every condition, in the order it appears in a report
    pub const ALL: [Condition; 5] = [
        Condition::CoronaryArteryDisease,
        Condition::Hypertension,
        Condition::Type2Diabetes,
        Condition::Dyslipidemia,
        Condition::LifestyleRisk,
    ];

    /// Human-readable name, identical to the serialized form
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CoronaryArteryDisease => "Coronary Artery Disease",
            Self::Hypertension => "Hypertension",
            Self::Type2Diabetes => "Type 2 Diabetes",
            Self::Dyslipidemia => "Dyslipidemia",
            Self::LifestyleRisk => "Lifestyle Risk",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One entry of the per-condition section of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRisk {
    /// Which condition this entry describes
    pub name: Condition,

    /// The assessment for that condition
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

/// Unified result of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Highest probability across all conditions
    pub overall_risk: u8,

    /// Version tag of the evaluator
    pub model_version: String,

    /// Per-condition assessments in fixed order
    pub conditions: Vec<ConditionRisk>,
}

impl EvaluationReport {
    /// Look up the assessment for a condition
    pub fn assessment(&self, condition: Condition) -> Option<&RiskAssessment> {
        self.conditions
            .iter()
            .find(|c| c.name == condition)
            .map(|c| &c.assessment)
    }
}

/// Biological sex as used by the coronary model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a request label; anything other than a male label is `Female`
    pub fn from_label(label: &str) -> Self {
        if label_in(label, &["male", "masculino"]) {
            Self::Male
        } else {
            Self::Female
        }
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }
}

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalActivity {
    Sedentary,
    Active,
}

impl PhysicalActivity {
    /// Parse a request label; anything other than a sedentary label is `Active`
    pub fn from_label(label: &str) -> Self {
        if label_in(label, &["sedentary", "sedentario"]) {
            Self::Sedentary
        } else {
            Self::Active
        }
    }
}

/// Alcohol consumption level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlcoholConsumption {
    None,
    Moderate,
    High,
}

impl AlcoholConsumption {
    /// Parse a request label; unrecognized labels map to `None`
    pub fn from_label(label: &str) -> Self {
        if label_in(label, &["moderate", "moderado"]) {
            Self::Moderate
        } else if label_in(label, &["high", "alto"]) {
            Self::High
        } else {
            Self::None
        }
    }
}

fn label_in(label: &str, accepted: &[&str]) -> bool {
    let label = label.trim();
    accepted.iter().any(|a| label.eq_ignore_ascii_case(a))
}

/// Validated clinical measurements for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClinicalInput {
    /// Age in years
    pub age: f64,
    pub sex: Sex,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Systolic blood pressure (mmHg)
    pub systolic_bp: f64,
    /// Diastolic blood pressure (mmHg)
    pub diastolic_bp: f64,
    /// Total cholesterol (mg/dL)
    pub total_cholesterol: f64,
    /// LDL cholesterol (mg/dL)
    pub ldl_cholesterol: f64,
    /// HDL cholesterol (mg/dL)
    pub hdl_cholesterol: f64,
    /// Fasting glucose (mg/dL)
    pub glucose: f64,
    pub smoker: bool,
    pub physical_activity: PhysicalActivity,
    pub alcohol_consumption: AlcoholConsumption,
}

impl ClinicalInput {
    /// Body Mass Index, weight_kg / height_m²
    pub fn bmi(&self) -> Result<f64> {
        let height_m = self.height_cm / 100.0;
        if height_m == 0.0 || !height_m.is_finite() {
            return Err(Error::computation(format!(
                "cannot derive BMI from height_cm = {}",
                self.height_cm
            )));
        }

        let bmi = self.weight_kg / (height_m * height_m);
        if !bmi.is_finite() {
            return Err(Error::computation(format!(
                "BMI is not finite (weight_kg = {}, height_cm = {})",
                self.weight_kg, self.height_cm
            )));
        }
        Ok(bmi)
    }
}
