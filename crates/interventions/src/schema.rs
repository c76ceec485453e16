//! Typed, bounded parameter schemas and their resolution against overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use laborsim_core::{SimError, SimResult};

/// Shape, bounds and default of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    Number {
        default: f64,
        min: f64,
        max: f64,
    },
    Select {
        options: &'static [&'static str],
        default: &'static str,
    },
    MultiSelect {
        options: &'static [&'static str],
        default: &'static [&'static str],
    },
    Boolean {
        default: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: ParamKind,
}

impl ParamSpec {
    pub fn default_value(&self) -> ParamValue {
        match self.kind {
            ParamKind::Number { default, .. } => ParamValue::Number(default),
            ParamKind::Select { default, .. } => ParamValue::Text(default.to_string()),
            ParamKind::MultiSelect { default, .. } => {
                ParamValue::List(default.iter().map(|s| s.to_string()).collect())
            }
            ParamKind::Boolean { default } => ParamValue::Bool(default),
        }
    }

    /// Check an override against this spec.
    pub fn validate(&self, value: &ParamValue) -> SimResult<()> {
        match (self.kind, value) {
            (ParamKind::Number { min, max, .. }, ParamValue::Number(n)) => {
                if !n.is_finite() {
                    return Err(SimError::invalid_parameter(self.key, "must be a finite number"));
                }
                if *n < min || *n > max {
                    return Err(SimError::invalid_parameter(
                        self.key,
                        format!("{n} is outside [{min}, {max}]"),
                    ));
                }
                Ok(())
            }
            (ParamKind::Select { options, .. }, ParamValue::Text(choice)) => {
                if options.contains(&choice.as_str()) {
                    Ok(())
                } else {
                    Err(SimError::invalid_parameter(
                        self.key,
                        format!("`{choice}` is not one of {options:?}"),
                    ))
                }
            }
            (ParamKind::MultiSelect { options, .. }, ParamValue::List(items)) => {
                match items.iter().find(|item| !options.contains(&item.as_str())) {
                    Some(bad) => Err(SimError::invalid_parameter(
                        self.key,
                        format!("`{bad}` is not one of {options:?}"),
                    )),
                    None => Ok(()),
                }
            }
            (ParamKind::Boolean { .. }, ParamValue::Bool(_)) => Ok(()),
            (kind, other) => Err(SimError::invalid_parameter(
                self.key,
                format!("expected {}, got {}", kind_name(&kind), other.type_name()),
            )),
        }
    }
}

fn kind_name(kind: &ParamKind) -> &'static str {
    match kind {
        ParamKind::Number { .. } => "number",
        ParamKind::Select { .. } => "select",
        ParamKind::MultiSelect { .. } => "multiselect",
        ParamKind::Boolean { .. } => "boolean",
    }
}

/// A parameter value as supplied by callers (JSON-shaped).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl ParamValue {
    fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "boolean",
            ParamValue::Number(_) => "number",
            ParamValue::Text(_) => "string",
            ParamValue::List(_) => "list",
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

/// Fully resolved parameters: every schema key is present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedParams(BTreeMap<String, ParamValue>);

impl ResolvedParams {
    /// Merge `overrides` onto the schema defaults.
    ///
    /// Keys outside the schema and values failing their spec are rejected.
    pub fn resolve(schema: &[ParamSpec], overrides: &BTreeMap<String, ParamValue>) -> SimResult<Self> {
        if let Some(unknown) = overrides.keys().find(|k| !schema.iter().any(|s| s.key == k.as_str())) {
            return Err(SimError::invalid_parameter(unknown.as_str(), "not a parameter of this intervention"));
        }

        let mut resolved = BTreeMap::new();
        for spec in schema {
            let value = match overrides.get(spec.key) {
                Some(value) => {
                    spec.validate(value)?;
                    value.clone()
                }
                None => spec.default_value(),
            };
            resolved.insert(spec.key.to_string(), value);
        }
        Ok(Self(resolved))
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Numeric value, 0.0 when absent or not a number.
    pub fn number(&self, key: &str) -> f64 {
        match self.0.get(key) {
            Some(ParamValue::Number(n)) => *n,
            _ => 0.0,
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(ParamValue::Bool(true)))
    }

    pub fn choice(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(ParamValue::Text(s)) => s.as_str(),
            _ => "",
        }
    }

    pub fn list(&self, key: &str) -> &[String] {
        match self.0.get(key) {
            Some(ParamValue::List(items)) => items.as_slice(),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &[ParamSpec] = &[
        ParamSpec {
            key: "amount",
            label: "Amount",
            kind: ParamKind::Number {
                default: 100.0,
                min: 0.0,
                max: 500.0,
            },
        },
        ParamSpec {
            key: "mode",
            label: "Mode",
            kind: ParamKind::Select {
                options: &["a", "b"],
                default: "a",
            },
        },
        ParamSpec {
            key: "sectors",
            label: "Sectors",
            kind: ParamKind::MultiSelect {
                options: &["retail", "finance"],
                default: &[],
            },
        },
        ParamSpec {
            key: "enabled",
            label: "Enabled",
            kind: ParamKind::Boolean { default: true },
        },
    ];

    fn overrides(pairs: &[(&str, ParamValue)]) -> BTreeMap<String, ParamValue> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn defaults_fill_missing_keys() {
        let p = ResolvedParams::resolve(SCHEMA, &overrides(&[("amount", ParamValue::Number(250.0))])).unwrap();
        assert_eq!(p.number("amount"), 250.0);
        assert_eq!(p.choice("mode"), "a");
        assert!(p.list("sectors").is_empty());
        assert!(p.flag("enabled"));
        assert_eq!(p.iter().count(), SCHEMA.len());
    }

    #[test]
    fn out_of_range_and_wrong_types_are_rejected() {
        let err = ResolvedParams::resolve(SCHEMA, &overrides(&[("amount", ParamValue::Number(900.0))])).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { ref key, .. } if key == "amount"));

        let err = ResolvedParams::resolve(SCHEMA, &overrides(&[("mode", ParamValue::Number(1.0))])).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { ref reason, .. } if reason.contains("expected select")));

        let err = ResolvedParams::resolve(SCHEMA, &overrides(&[("mode", "c".into())])).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { .. }));

        let bad_list = ParamValue::List(vec!["retail".to_string(), "mining".to_string()]);
        let err = ResolvedParams::resolve(SCHEMA, &overrides(&[("sectors", bad_list)])).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { ref reason, .. } if reason.contains("mining")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ResolvedParams::resolve(SCHEMA, &overrides(&[("bogus", true.into())])).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { ref key, .. } if key == "bogus"));
    }

    #[test]
    fn values_deserialize_from_plain_json() {
        let parsed: BTreeMap<String, ParamValue> =
            serde_json::from_str(r#"{ "amount": 10, "mode": "b", "sectors": ["finance"], "enabled": false }"#)
                .unwrap();
        let p = ResolvedParams::resolve(SCHEMA, &parsed).unwrap();
        assert_eq!(p.number("amount"), 10.0);
        assert_eq!(p.choice("mode"), "b");
        assert_eq!(p.list("sectors").to_vec(), vec!["finance".to_string()]);
        assert!(!p.flag("enabled"));
    }
}
