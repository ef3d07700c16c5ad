use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Rules a voter record must satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rules {
    /// Minimum age. Zero means no limit.
    pub min_age: Option<u32>,
    /// Keys that must be present on the record, checked in order.
    pub required_fields: Option<Vec<String>>,
}

/// Outcome of validating a voter record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    /// Why the record failed, or empty if it passed.
    pub reason: String,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: String::new(),
        }
    }

    pub fn rejected(err: ValidationError) -> Self {
        Self {
            valid: false,
            reason: err.to_string(),
        }
    }
}

impl From<Result<(), ValidationError>> for Validation {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(err) => Self::rejected(err),
        }
    }
}

impl Rules {
    /// Check a record against these rules, stopping at the first failure.
    pub fn check(&self, record: &Value) -> Result<(), ValidationError> {
        let fields = record.as_object().ok_or(ValidationError::InvalidVoter)?;

        if let Some(required) = &self.required_fields {
            if let Some(missing) = required.iter().find(|f| !fields.contains_key(f.as_str())) {
                return Err(ValidationError::MissingField(missing.clone()));
            }
        }

        if let Some(min_age) = self.min_age.filter(|&age| age != 0) {
            if let Some(age) = fields.get("age").and_then(numeric_age) {
                if age < f64::from(min_age) {
                    return Err(ValidationError::Underage(min_age));
                }
            }
        }

        Ok(())
    }
}

/// Read an age the way a loose numeric comparison would: null and false are
/// 0, true is 1, and strings are parsed after trimming (blank is 0).
/// Anything else has no numeric value and can never be too low.
fn numeric_age(age: &Value) -> Option<f64> {
    match age {
        Value::Null => Some(0.0),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse().ok(),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Build a validator closure for the given rules.
pub fn create_vote_validator(rules: Rules) -> impl Fn(&Value) -> Validation {
    move |record| rules.check(record).into()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rules() -> Rules {
        Rules {
            min_age: Some(21),
            required_fields: Some(vec!["id".to_string(), "name".to_string(), "age".to_string()]),
        }
    }

    #[test]
    fn valid_voter() {
        let validate = create_vote_validator(rules());
        assert_eq!(
            validate(&json!({"id": "V1", "name": "Ada", "age": 30})),
            Validation::ok()
        );
        assert_eq!(validate(&json!({"id": "V1", "name": "Ada", "age": 21})).reason, "");
    }

    #[test]
    fn not_an_object() {
        let validate = create_vote_validator(Rules::default());
        for record in [Value::Null, json!(3), json!("V1"), json!(["id"])] {
            let validation = validate(&record);
            assert!(!validation.valid);
            assert_eq!(validation.reason, "Invalid voter object");
        }
        assert!(validate(&json!({})).valid);
    }

    #[test]
    fn missing_fields_in_order() {
        let validate = create_vote_validator(rules());
        let validation = validate(&json!({"age": 30}));
        assert!(!validation.valid);
        assert_eq!(validation.reason, "Missing field: id");
        assert_eq!(
            validate(&json!({"id": "V1", "age": 30})).reason,
            "Missing field: name"
        );
        // A present but null field counts as present.
        assert!(validate(&json!({"id": null, "name": "Ada", "age": 30})).valid);
    }

    #[test]
    fn too_young() {
        let validate = create_vote_validator(rules());
        assert_eq!(
            validate(&json!({"id": "V1", "name": "Ada", "age": 20})),
            Validation {
                valid: false,
                reason: "Age must be at least 21".to_string()
            }
        );
        assert!(!validate(&json!({"id": "V1", "name": "Ada", "age": 20.5})).valid);
    }

    #[test]
    fn fields_checked_before_age() {
        let validate = create_vote_validator(rules());
        assert_eq!(
            validate(&json!({"id": "V1", "age": 3})).reason,
            "Missing field: name"
        );
    }

    #[test]
    fn non_numeric_age_passes_age_check() {
        let validate = create_vote_validator(Rules {
            min_age: Some(18),
            required_fields: None,
        });
        assert!(validate(&json!({})).valid);
        assert!(validate(&json!({"age": "young"})).valid);
        assert!(validate(&json!({"age": {"years": 10}})).valid);
        assert!(validate(&json!({"age": " 30 "})).valid);
    }

    #[test]
    fn coerced_age_can_be_too_low() {
        let validate = create_vote_validator(Rules {
            min_age: Some(21),
            required_fields: None,
        });
        for age in [json!(null), json!("17"), json!(""), json!(false), json!(true)] {
            assert_eq!(
                validate(&json!({ "age": age })).reason,
                "Age must be at least 21"
            );
        }
        assert!(validate(&json!({"age": "21"})).valid);
    }

    #[test]
    fn zero_min_age_disables_check() {
        let validate = create_vote_validator(Rules {
            min_age: Some(0),
            required_fields: None,
        });
        assert!(validate(&json!({"age": 0})).valid);
    }

    #[test]
    fn rules_from_json() {
        let rules: Rules =
            serde_json::from_value(json!({"minAge": 21, "requiredFields": ["id", "name", "age"]}))
                .unwrap();
        assert_eq!(rules, self::rules());
        let rules: Rules = serde_json::from_value(json!({})).unwrap();
        assert_eq!(rules, Rules::default());
    }
}
