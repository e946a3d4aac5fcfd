//! Summary options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dataset::json_type_name;
use crate::error::{Result, SummaryError};

/// Options controlling how columns are summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Give integer columns numeric statistics instead of value counts.
    pub treat_integer_as_numeric: bool,
    /// Categories counted fewer times than this are pooled into
    /// `other_count *` when at least two of them fall below it.
    pub value_count_threshold: i64,
    /// Print the summary to stdout as well as returning it.
    pub pretty_print: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            treat_integer_as_numeric: false,
            value_count_threshold: 1,
            pretty_print: false,
        }
    }
}

impl SummaryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_treat_integer_as_numeric(mut self, enabled: bool) -> Self {
        self.treat_integer_as_numeric = enabled;
        self
    }

    pub fn with_value_count_threshold(mut self, threshold: i64) -> Self {
        self.value_count_threshold = threshold;
        self
    }

    pub fn with_pretty_print(mut self, enabled: bool) -> Self {
        self.pretty_print = enabled;
        self
    }

    /// Read options from a loosely typed JSON object, checking each type.
    ///
    /// Keys may be snake_case or camelCase. Missing keys keep their
    /// defaults and unknown keys are ignored. `null` means "no options".
    pub fn from_json(value: &Value) -> Result<Self> {
        let options = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(SummaryError::type_error(
                    "options",
                    "object",
                    json_type_name(other),
                ));
            }
        };

        let mut config = Self::default();

        if let Some(v) = lookup(options, "treat_integer_as_numeric", "treatIntegerAsNumeric") {
            config.treat_integer_as_numeric = expect_bool("treat_integer_as_numeric", v)?;
        }

        if let Some(v) = lookup(options, "value_count_threshold", "valueCountThreshold") {
            config.value_count_threshold = match v.as_i64() {
                Some(n) => n,
                None => {
                    return Err(SummaryError::type_error(
                        "value_count_threshold",
                        "integer",
                        json_type_name(v),
                    ));
                }
            };
        }

        if let Some(v) = lookup(options, "pretty_print", "prettyPrint") {
            config.pretty_print = expect_bool("pretty_print", v)?;
        }

        Ok(config)
    }
}

fn lookup<'a>(options: &'a Map<String, Value>, key: &str, alias: &str) -> Option<&'a Value> {
    options.get(key).or_else(|| options.get(alias))
}

fn expect_bool(argument: &'static str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| SummaryError::type_error(argument, "boolean value", json_type_name(value)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummaryConfig::default();
        assert!(!config.treat_integer_as_numeric);
        assert_eq!(config.value_count_threshold, 1);
        assert!(!config.pretty_print);
        assert_eq!(SummaryConfig::from_json(&json!({})).unwrap(), config);
        assert_eq!(SummaryConfig::from_json(&Value::Null).unwrap(), config);
    }

    #[test]
    fn test_reads_both_key_styles() {
        let a = SummaryConfig::from_json(&json!({
            "treat_integer_as_numeric": true,
            "value_count_threshold": 6,
            "pretty_print": true,
        }))
        .unwrap();
        let b = SummaryConfig::from_json(&json!({
            "treatIntegerAsNumeric": true,
            "valueCountThreshold": 6,
            "prettyPrint": true,
        }))
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value_count_threshold, 6);
    }

    #[test]
    fn test_negative_threshold_is_accepted() {
        let config = SummaryConfig::from_json(&json!({"value_count_threshold": -3})).unwrap();
        assert_eq!(config.value_count_threshold, -3);
    }

    #[test]
    fn test_type_errors_name_actual_type() {
        let err = SummaryConfig::from_json(&json!({"treat_integer_as_numeric": "yes"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "treat_integer_as_numeric: boolean value expected, got 'string'"
        );

        let err = SummaryConfig::from_json(&json!({"value_count_threshold": 2.0})).unwrap_err();
        assert_eq!(err.to_string(), "value_count_threshold: integer expected, got 'float'");

        let err = SummaryConfig::from_json(&json!({"prettyPrint": 5})).unwrap_err();
        assert_eq!(err.to_string(), "pretty_print: boolean value expected, got 'integer'");

        let err = SummaryConfig::from_json(&json!([true])).unwrap_err();
        assert_eq!(err.to_string(), "options: object expected, got 'array'");
    }

    #[test]
    fn test_threshold_checked_before_pretty_print() {
        let err = SummaryConfig::from_json(&json!({
            "value_count_threshold": "6",
            "pretty_print": 1,
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("value_count_threshold"));
    }
}
