//! Opaque argument values carried on log records
//!
//! Arguments render through an ad hoc, human-oriented stringification: it is
//! deterministic but not a machine-parseable encoding.

use serde::Serialize;
use std::fmt;

/// Value type for log call arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Rendered diagnostic trace of an error value
    Error(String),
    List(Vec<ArgValue>),
    /// Insertion-ordered key/value pairs
    Map(Vec<(String, ArgValue)>),
}

impl ArgValue {
    /// Capture an error's diagnostic trace: its message followed by the
    /// messages of its source chain.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut trace = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push_str(": ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }
        ArgValue::Error(trace)
    }

    /// Render to the display form used in formatted log lines.
    ///
    /// Strings pass through unchanged; null, booleans, and numbers use their
    /// canonical form; maps render with double-quoted keys in insertion order
    /// and comma separation; nested structured values are quoted as strings at
    /// each level of recursion.
    pub fn render(&self) -> String {
        match self {
            ArgValue::Null => "null".to_string(),
            ArgValue::Bool(b) => b.to_string(),
            ArgValue::Int(i) => i.to_string(),
            ArgValue::Float(f) => f.to_string(),
            ArgValue::Str(s) => s.clone(),
            ArgValue::Error(trace) => trace.clone(),
            ArgValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(ArgValue::render_nested).collect();
                format!("[{}]", rendered.join(", "))
            }
            ArgValue::Map(pairs) => {
                let rendered: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("\"{}\": {}", k, v.render_nested()))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
        }
    }

    /// Render as a value position inside a list or map: strings and nested
    /// structured values are double-quoted, scalars stay bare.
    fn render_nested(&self) -> String {
        match self {
            ArgValue::Str(s) => format!("\"{}\"", s),
            ArgValue::List(_) | ArgValue::Map(_) => format!("\"{}\"", self.render()),
            other => other.render(),
        }
    }

    /// Convert to `serde_json::Value` for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            ArgValue::Null => serde_json::Value::Null,
            ArgValue::Bool(b) => serde_json::Value::Bool(*b),
            ArgValue::Int(i) => serde_json::Value::Number((*i).into()),
            ArgValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ArgValue::Str(s) => serde_json::Value::String(s.clone()),
            ArgValue::Error(trace) => serde_json::Value::String(trace.clone()),
            ArgValue::List(items) => {
                serde_json::Value::Array(items.iter().map(ArgValue::to_json_value).collect())
            }
            ArgValue::Map(pairs) => serde_json::Value::Object(
                pairs
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Str(s)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Str(s.to_string())
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        ArgValue::Int(i)
    }
}

impl From<i32> for ArgValue {
    fn from(i: i32) -> Self {
        ArgValue::Int(i as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(f: f64) -> Self {
        ArgValue::Float(f)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(ArgValue::Null.render(), "null");
        assert_eq!(ArgValue::Bool(true).render(), "true");
        assert_eq!(ArgValue::Int(-7).render(), "-7");
        assert_eq!(ArgValue::Float(2.5).render(), "2.5");
        assert_eq!(ArgValue::Str("plain text".into()).render(), "plain text");
    }

    #[test]
    fn test_map_rendering_insertion_order() {
        let value = ArgValue::Map(vec![
            ("b".to_string(), ArgValue::Int(2)),
            ("a".to_string(), ArgValue::Str("x".into())),
        ]);
        assert_eq!(value.render(), r#"{"b": 2, "a": "x"}"#);
    }

    #[test]
    fn test_nested_structured_values_quoted() {
        let inner = ArgValue::Map(vec![("k".to_string(), ArgValue::Int(1))]);
        let outer = ArgValue::Map(vec![("nested".to_string(), inner)]);
        assert_eq!(outer.render(), r#"{"nested": "{"k": 1}"}"#);

        let list = ArgValue::List(vec![
            ArgValue::Int(1),
            ArgValue::Str("two".into()),
            ArgValue::List(vec![ArgValue::Int(3)]),
        ]);
        assert_eq!(list.render(), r#"[1, "two", "[3]"]"#);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let value = ArgValue::Map(vec![
            ("z".to_string(), ArgValue::Null),
            ("y".to_string(), ArgValue::Bool(false)),
        ]);
        assert_eq!(value.render(), value.render());
    }

    #[test]
    fn test_error_trace() {
        let root = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let value = ArgValue::from_error(&root);
        match &value {
            ArgValue::Error(trace) => assert!(trace.contains("no such file")),
            other => panic!("expected Error variant, got {:?}", other),
        }
        assert_eq!(value.render(), "no such file");
    }

    #[test]
    fn test_to_json_value() {
        let value = ArgValue::Map(vec![
            ("count".to_string(), ArgValue::Int(3)),
            ("ok".to_string(), ArgValue::Bool(true)),
        ]);
        let json = value.to_json_value();
        assert_eq!(json["count"], 3);
        assert_eq!(json["ok"], true);

        assert_eq!(ArgValue::Null.to_json_value(), serde_json::Value::Null);
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(ArgValue::from("s"), ArgValue::Str("s".to_string()));
        assert_eq!(ArgValue::from(5i32), ArgValue::Int(5));
        assert_eq!(ArgValue::from(5i64), ArgValue::Int(5));
        assert_eq!(ArgValue::from(1.5f64), ArgValue::Float(1.5));
        assert_eq!(ArgValue::from(true), ArgValue::Bool(true));
    }
}
