//! Output formatting and control utilities.
//!
//! CHANGELOG:
//! - 10/18/2026 - Field allowlist filters in place
//! - 10/18/2026 - Trimmed to json/compact/fields controls
//! - 10/18/2026 - Initial implementation

use serde::Serialize;
use serde_json::{json, Value};

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    pub fields: Option<String>,
}

impl OutputControls {
    /// Serialize data, keeping only the `--fields` keys when set.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let mut value = serde_json::to_value(data).unwrap_or(Value::Null);

        if let Some(fields) = self.fields.as_deref() {
            let keep: Vec<&str> = fields
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .collect();
            retain_fields(&mut value, &keep);
        }

        let rendered = if self.compact {
            serde_json::to_string(&value)
        } else {
            serde_json::to_string_pretty(&value)
        };
        rendered.unwrap_or_else(|_| "null".to_string())
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

/// Drop object keys outside `keep`, on a single view or on each view of a list.
fn retain_fields(value: &mut Value, keep: &[&str]) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(|item| retain_fields(item, keep)),
        Value::Object(map) => map.retain(|key, _| keep.contains(&key.as_str())),
        _ => {}
    }
}

/// JSON error envelope printed in `--json` mode.
pub fn format_error(error: &str) -> String {
    json!({ "error": error, "success": false }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_filter_array_of_objects() {
        let output = OutputControls {
            json: true,
            compact: true,
            fields: Some("methodName, isUnary".to_string()),
        };
        let data = json!([
            {"methodName": "GetInfo", "isUnary": true, "grpcPort": 10009},
            {"methodName": "Monitor", "isUnary": false}
        ]);
        assert_eq!(
            output.emit(&data),
            r#"[{"isUnary":true,"methodName":"GetInfo"},{"isUnary":false,"methodName":"Monitor"}]"#
        );
    }

    #[test]
    fn test_fields_filter_single_view_pretty() {
        let output = OutputControls {
            json: true,
            compact: false,
            fields: Some("loaderFiles,,".to_string()),
        };
        let data = json!({"loaderFiles": "'loop.proto'", "grpcPort": 11010});
        assert_eq!(output.emit(&data), "{\n  \"loaderFiles\": \"'loop.proto'\"\n}");
    }

    #[test]
    fn test_format_error() {
        let value: Value = serde_json::from_str(&format_error("Method not found: x")).unwrap();
        assert_eq!(value["error"], "Method not found: x");
        assert_eq!(value["success"], false);
    }
}
