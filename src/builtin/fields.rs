use serde_json::Value;

use crate::component::{ComponentConfig, ValidationError};

/// Expected shape of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Bool,
    /// Integer greater than zero
    PositiveInt,
    /// String restricted to a fixed set of values
    OneOf(&'static [&'static str]),
}

/// One accepted configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub const fn optional(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            required: false,
        }
    }

    pub const fn required(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            required: true,
        }
    }

    fn check(&self, value: &Value) -> Result<(), ValidationError> {
        let ok = match self.kind {
            FieldKind::String => value.is_string(),
            FieldKind::Bool => value.is_boolean(),
            FieldKind::PositiveInt => value.as_u64().is_some_and(|n| n > 0),
            FieldKind::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        };
        if ok {
            return Ok(());
        }

        let expected = match self.kind {
            FieldKind::String => "a string".to_string(),
            FieldKind::Bool => "a boolean".to_string(),
            FieldKind::PositiveInt => "a positive integer".to_string(),
            FieldKind::OneOf(allowed) => format!("one of {}", allowed.join(", ")),
        };
        Err(ValidationError::new(format!(
            "'{}' must be {expected}, got {value}",
            self.key
        )))
    }
}

/// Check `config` against a field table: unknown keys, missing required keys
/// and mistyped values are rejected
pub fn validate_fields(fields: &[Field], config: &ComponentConfig) -> Result<(), ValidationError> {
    if let Some(key) = config
        .keys()
        .find(|key| !fields.iter().any(|f| f.key == key.as_str()))
    {
        return Err(ValidationError::new(format!("unknown key '{key}'")));
    }

    for field in fields {
        match config.get(field.key) {
            Some(value) => field.check(value)?,
            None if field.required => {
                return Err(ValidationError::new(format!(
                    "missing required key '{}'",
                    field.key
                )));
            }
            None => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const FIELDS: &[Field] = &[
        Field::required("endpoint", FieldKind::String),
        Field::optional("size", FieldKind::PositiveInt),
        Field::optional("enabled", FieldKind::Bool),
        Field::optional("mode", FieldKind::OneOf(&["fast", "safe"])),
    ];

    fn config(value: serde_json::Value) -> ComponentConfig {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn accepts_valid_config() {
        let cfg = config(json!({"endpoint": "localhost:4317", "size": 10, "enabled": true, "mode": "safe"}));

        assert!(validate_fields(FIELDS, &cfg).is_ok());
    }

    #[test]
    fn rejects_unknown_key() {
        let cfg = config(json!({"endpoint": "x", "colour": "blue"}));

        let err = validate_fields(FIELDS, &cfg).unwrap_err();

        assert_eq!(err.reason(), "unknown key 'colour'");
    }

    #[test]
    fn rejects_missing_required_key() {
        let err = validate_fields(FIELDS, &ComponentConfig::new()).unwrap_err();

        assert_eq!(err.reason(), "missing required key 'endpoint'");
    }

    #[test]
    fn rejects_non_positive_integer() {
        let cfg = config(json!({"endpoint": "x", "size": 0}));

        let err = validate_fields(FIELDS, &cfg).unwrap_err();

        assert_eq!(err.reason(), "'size' must be a positive integer, got 0");
    }

    #[test]
    fn rejects_value_outside_enumeration() {
        let cfg = config(json!({"endpoint": "x", "mode": "reckless"}));

        let err = validate_fields(FIELDS, &cfg).unwrap_err();

        assert_eq!(err.reason(), "'mode' must be one of fast, safe, got \"reckless\"");
    }

    #[test]
    fn rejects_wrong_type() {
        let cfg = config(json!({"endpoint": 4317}));

        let err = validate_fields(FIELDS, &cfg).unwrap_err();

        assert!(err.reason().starts_with("'endpoint' must be a string"));
    }
}
