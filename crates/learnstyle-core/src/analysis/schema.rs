//! JSON Schema validation for analysis results.
//!
//! The external classifier is asked for a result conforming to
//! spec/analysis.schema.json, and every response is checked against that
//! same schema before it is accepted. There is no partial acceptance: a
//! result missing any required field, or with a malformed `axisData`, is
//! rejected whole.

use std::sync::OnceLock;
use thiserror::Error;

/// Embedded analysis result schema (loaded at compile time).
const ANALYSIS_SCHEMA_JSON: &str = include_str!("../../../../spec/analysis.schema.json");

/// Compiled JSON Schema validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

/// Errors from schema validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to load schema: {0}")]
    LoadError(String),
}

/// Get or initialize the compiled schema validator.
fn get_validator() -> Result<&'static jsonschema::Validator, SchemaError> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = match serde_json::from_str(ANALYSIS_SCHEMA_JSON) {
            Ok(v) => v,
            Err(e) => return Err(format!("Invalid schema JSON: {}", e)),
        };

        match jsonschema::options().build(&schema_value) {
            Ok(v) => Ok(v),
            Err(e) => Err(format!("Failed to compile schema: {}", e)),
        }
    });

    match result {
        Ok(v) => Ok(v),
        Err(e) => Err(SchemaError::LoadError(e.clone())),
    }
}

/// The embedded schema as a JSON value, for callers that forward it to
/// the classifier with the request.
pub fn analysis_schema() -> Result<serde_json::Value, SchemaError> {
    serde_json::from_str(ANALYSIS_SCHEMA_JSON)
        .map_err(|e| SchemaError::LoadError(format!("Invalid schema JSON: {}", e)))
}

/// Validate a candidate analysis result against the schema.
///
/// # Returns
///
/// * `Ok(())` - Result conforms to the contract
/// * `Err(Vec<String>)` - List of validation errors
pub fn validate_analysis_schema(candidate: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e.to_string()])?;

    let errors: Vec<String> = validator
        .iter_errors(candidate)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check if a candidate is valid against the schema.
///
/// Use `validate_analysis_schema` for detailed error messages.
pub fn is_valid_analysis(candidate: &serde_json::Value) -> bool {
    get_validator()
        .map(|v| v.is_valid(candidate))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::LearningStyle;

    fn valid_candidate() -> serde_json::Value {
        serde_json::json!({
            "style": "Convergent",
            "description": "Prefers working through problems to a single practical answer.",
            "strengths": ["Problem solving", "Decision making", "Applying ideas"],
            "recommendations": [
                "Hands-on labs",
                "Simulations",
                "Technical projects",
                "Practice exams"
            ],
            "axisData": { "ce": 20, "ro": 25, "ac": 80, "ae": 75 }
        })
    }

    #[test]
    fn test_conforming_result_passes() {
        assert!(validate_analysis_schema(&valid_candidate()).is_ok());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut candidate = valid_candidate();
        candidate.as_object_mut().unwrap().remove("recommendations");

        let errors = validate_analysis_schema(&candidate).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_unknown_style_fails() {
        let mut candidate = valid_candidate();
        candidate["style"] = serde_json::json!("Visionary");
        assert!(validate_analysis_schema(&candidate).is_err());
    }

    #[test]
    fn test_malformed_axis_data_fails() {
        let mut candidate = valid_candidate();
        candidate["axisData"] = serde_json::json!({ "ce": 20, "ro": 25 });
        assert!(validate_analysis_schema(&candidate).is_err());

        candidate["axisData"] = serde_json::json!({ "ce": "high", "ro": 25, "ac": 1, "ae": 2 });
        assert!(validate_analysis_schema(&candidate).is_err());
    }

    #[test]
    fn test_out_of_range_axis_score_fails() {
        let mut candidate = valid_candidate();
        candidate["axisData"]["ae"] = serde_json::json!(140);
        assert!(validate_analysis_schema(&candidate).is_err());
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        // Required-fields-only validation: the classifier may decorate.
        let mut candidate = valid_candidate();
        candidate["confidence"] = serde_json::json!(0.9);
        assert!(validate_analysis_schema(&candidate).is_ok());
    }

    #[test]
    fn test_is_valid_helper() {
        assert!(is_valid_analysis(&valid_candidate()));
        assert!(!is_valid_analysis(&serde_json::json!({ "style": "Divergent" })));
    }

    #[test]
    fn test_schema_style_enum_matches_style_table() {
        // Drift guard: the schema file and the style table must agree.
        let schema = analysis_schema().unwrap();
        let schema_styles: Vec<String> = schema["properties"]["style"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();

        let table_styles: Vec<String> =
            LearningStyle::ALL.iter().map(|s| s.to_string()).collect();

        assert_eq!(schema_styles, table_styles);
    }
}
