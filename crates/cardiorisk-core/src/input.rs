//! Boundary validation: raw JSON payload into a typed [`ClinicalInput`]

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::{AlcoholConsumption, ClinicalInput, PhysicalActivity, Sex};

/// A required request field with its legacy alias
#[derive(Debug, Clone, Copy)]
pub struct RequiredField {
    /// Canonical name, reported in errors
    pub name: &'static str,
    /// Name sent by older upstream backends
    pub alias: &'static str,
}

const fn field(name: &'static str, alias: &'static str) -> RequiredField {
    RequiredField { name, alias }
}

pub const AGE: RequiredField = field("age", "edad");
pub const SEX: RequiredField = field("sex", "sexo");
pub const HEIGHT_CM: RequiredField = field("height_cm", "altura_cm");
pub const WEIGHT_KG: RequiredField = field("weight_kg", "peso_kg");
pub const SYSTOLIC_BP: RequiredField = field("systolic_bp", "presion_sistolica");
pub const DIASTOLIC_BP: RequiredField = field("diastolic_bp", "presion_diastolica");
pub const TOTAL_CHOLESTEROL: RequiredField = field("total_cholesterol", "colesterol_total");
pub const LDL_CHOLESTEROL: RequiredField = field("ldl_cholesterol", "colesterol_ldl");
pub const HDL_CHOLESTEROL: RequiredField = field("hdl_cholesterol", "colesterol_hdl");
pub const GLUCOSE: RequiredField = field("glucose", "glucosa");
pub const SMOKER: RequiredField = field("smoker", "fumador");
pub const PHYSICAL_ACTIVITY: RequiredField = field("physical_activity", "actividad_fisica");
pub const ALCOHOL_CONSUMPTION: RequiredField = field("alcohol_consumption", "consumo_alcohol");

/// All required fields, in the order they are checked
pub const REQUIRED_FIELDS: [RequiredField; 13] = [
    AGE,
    SEX,
    HEIGHT_CM,
    WEIGHT_KG,
    SYSTOLIC_BP,
    DIASTOLIC_BP,
    TOTAL_CHOLESTEROL,
    LDL_CHOLESTEROL,
    HDL_CHOLESTEROL,
    GLUCOSE,
    SMOKER,
    PHYSICAL_ACTIVITY,
    ALCOHOL_CONSUMPTION,
];

impl ClinicalInput {
    /// Validate a request payload and extract a typed input.
    ///
    /// Presence of every field is checked first, so a payload missing a field
    /// always yields [`Error::MissingField`] regardless of other bad values.
    /// A `null` value counts as missing.
    pub fn from_json(payload: &Value) -> Result<Self> {
        let obj = payload
            .as_object()
            .ok_or_else(|| Error::invalid_request("request body must be a JSON object"))?;

        for required in &REQUIRED_FIELDS {
            if lookup(obj, required).is_none() {
                return Err(Error::missing_field(required.name));
            }
        }

        Ok(Self {
            age: number(obj, &AGE)?,
            sex: Sex::from_label(label(obj, &SEX)?),
            height_cm: number(obj, &HEIGHT_CM)?,
            weight_kg: number(obj, &WEIGHT_KG)?,
            systolic_bp: number(obj, &SYSTOLIC_BP)?,
            diastolic_bp: number(obj, &DIASTOLIC_BP)?,
            total_cholesterol: number(obj, &TOTAL_CHOLESTEROL)?,
            ldl_cholesterol: number(obj, &LDL_CHOLESTEROL)?,
            hdl_cholesterol: number(obj, &HDL_CHOLESTEROL)?,
            glucose: number(obj, &GLUCOSE)?,
            smoker: flag(obj, &SMOKER)?,
            physical_activity: PhysicalActivity::from_label(label(obj, &PHYSICAL_ACTIVITY)?),
            alcohol_consumption: AlcoholConsumption::from_label(label(obj, &ALCOHOL_CONSUMPTION)?),
        })
    }
}

fn lookup<'a>(obj: &'a Map<String, Value>, field: &RequiredField) -> Option<&'a Value> {
    obj.get(field.name)
        .filter(|v| !v.is_null())
        .or_else(|| obj.get(field.alias).filter(|v| !v.is_null()))
}

fn require<'a>(obj: &'a Map<String, Value>, field: &RequiredField) -> Result<&'a Value> {
    lookup(obj, field).ok_or_else(|| Error::missing_field(field.name))
}

/// Finite numbers and numeric strings are accepted
fn number(obj: &Map<String, Value>, field: &RequiredField) -> Result<f64> {
    let value = match require(obj, field)? {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            Error::computation(format!("field `{}` is not representable as f64", field.name))
        })?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            Error::computation(format!("field `{}` is not numeric: {:?}", field.name, s))
        })?,
        other => {
            return Err(Error::computation(format!(
                "field `{}` is not numeric: {}",
                field.name, other
            )))
        }
    };

    if !value.is_finite() {
        return Err(Error::computation(format!(
            "field `{}` is not a finite number: {}",
            field.name, value
        )));
    }
    Ok(value)
}

/// Booleans, or numbers where nonzero means true
fn flag(obj: &Map<String, Value>, field: &RequiredField) -> Result<bool> {
    match require(obj, field)? {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().map_or(false, |v| v != 0.0)),
        other => Err(Error::computation(format!(
            "field `{}` is not a boolean: {}",
            field.name, other
        ))),
    }
}

fn label<'a>(obj: &'a Map<String, Value>, field: &RequiredField) -> Result<&'a str> {
    match require(obj, field)? {
        Value::String(s) => Ok(s.as_str()),
        other => Err(Error::computation(format!(
            "field `{}` is not a string: {}",
            field.name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "age": 50,
            "sex": "Masculino",
            "height_cm": 170,
            "weight_kg": 70,
            "systolic_bp": 145,
            "diastolic_bp": 95,
            "total_cholesterol": 250,
            "ldl_cholesterol": 170,
            "hdl_cholesterol": 35,
            "glucose": 130,
            "smoker": true,
            "physical_activity": "Sedentario",
            "alcohol_consumption": "Moderado"
        })
    }

    #[test]
    fn test_full_payload() {
        let input = ClinicalInput::from_json(&payload()).unwrap();
        assert_eq!(input.age, 50.0);
        assert_eq!(input.sex, Sex::Male);
        assert_eq!(input.systolic_bp, 145.0);
        assert!(input.smoker);
        assert_eq!(input.physical_activity, PhysicalActivity::Sedentary);
        assert_eq!(input.alcohol_consumption, AlcoholConsumption::Moderate);
    }

    #[test]
    fn test_each_missing_field_is_named() {
        for required in &REQUIRED_FIELDS {
            let mut body = payload();
            body.as_object_mut().unwrap().remove(required.name);

            match ClinicalInput::from_json(&body) {
                Err(Error::MissingField { field }) => assert_eq!(field, required.name),
                other => panic!("expected missing {}, got {:?}", required.name, other),
            }
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let mut body = payload();
        let obj = body.as_object_mut().unwrap();
        obj.remove("glucose");
        obj.remove("sex");

        let err = ClinicalInput::from_json(&body).unwrap_err();
        assert!(matches!(err, Error::MissingField { field } if field == "sex"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut body = payload();
        body["weight_kg"] = Value::Null;

        let err = ClinicalInput::from_json(&body).unwrap_err();
        assert!(matches!(err, Error::MissingField { field } if field == "weight_kg"));
    }

    #[test]
    fn test_missing_beats_bad_type() {
        let mut body = payload();
        body["age"] = json!("fifty");
        body.as_object_mut().unwrap().remove("smoker");

        let err = ClinicalInput::from_json(&body).unwrap_err();
        assert!(matches!(err, Error::MissingField { field } if field == "smoker"));
    }

    #[test]
    fn test_legacy_aliases() {
        let body = json!({
            "edad": "62",
            "sexo": "Femenino",
            "altura_cm": 160,
            "peso_kg": 80.5,
            "presion_sistolica": 118,
            "presion_diastolica": 76,
            "colesterol_total": 190,
            "colesterol_ldl": 110,
            "colesterol_hdl": 55,
            "glucosa": 92,
            "fumador": false,
            "actividad_fisica": "Activo",
            "consumo_alcohol": "Ninguno"
        });

        let input = ClinicalInput::from_json(&body).unwrap();
        assert_eq!(input.age, 62.0);
        assert_eq!(input.sex, Sex::Female);
        assert_eq!(input.weight_kg, 80.5);
        assert!(!input.smoker);
        assert_eq!(input.alcohol_consumption, AlcoholConsumption::None);
    }

    #[test]
    fn test_non_numeric_value_is_computation_error() {
        let mut body = payload();
        body["glucose"] = json!("high");

        let err = ClinicalInput::from_json(&body).unwrap_err();
        assert!(matches!(err, Error::Computation(msg) if msg.contains("glucose")));
    }

    #[test]
    fn test_non_finite_string_is_computation_error() {
        let cases = [
            ("ldl_cholesterol", "NaN"),
            ("hdl_cholesterol", "inf"),
            ("age", "-infinity"),
        ];
        for (field, text) in cases {
            let mut body = payload();
            body[field] = json!(text);

            let err = ClinicalInput::from_json(&body).unwrap_err();
            assert!(
                matches!(&err, Error::Computation(msg) if msg.contains(field)),
                "{} = {:?} gave {:?}",
                field,
                text,
                err
            );
        }
    }

    #[test]
    fn test_non_object_body() {
        let err = ClinicalInput::from_json(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
}
