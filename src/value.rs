//! Typed manifest values and the string-token parser.
//!
//! Values arrive from the command line as plain string tokens. Each token is
//! tried as an integer, then as a float, then as one of the boolean spellings
//! (`true`/`yes`, `false`/`no`, any case), and is kept as a string otherwise.
//! A multi-token value becomes a list, except that a single token is never
//! wrapped: `parse_list(["x"]) == parse("x")`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single manifest value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Parse a single string token into a typed value.
    pub fn parse(token: &str) -> Value {
        let trimmed = token.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Some(f) = parse_float(trimmed) {
            return Value::Float(f);
        }
        match token.to_lowercase().as_str() {
            "true" | "yes" => Value::Bool(true),
            "false" | "no" => Value::Bool(false),
            _ => Value::Str(token.to_string()),
        }
    }

    /// Parse a sequence of tokens element-wise, collapsing a one-element
    /// result to the bare element.
    pub fn parse_list<S: AsRef<str>>(tokens: &[S]) -> Value {
        Value::collapse(tokens.iter().map(|t| Value::parse(t.as_ref())).collect())
    }

    /// Build a value from already-typed items, applying the collapse rule.
    pub fn collapse(mut items: Vec<Value>) -> Value {
        if items.len() == 1 {
            items.remove(0)
        } else {
            Value::List(items)
        }
    }

    /// Convert a YAML node read from a manifest file.
    ///
    /// Nested one-element sequences are collapsed. Nodes outside the typed
    /// union (null, mappings, tagged values) are rejected.
    pub fn from_yaml(node: &serde_yaml::Value) -> Result<Value> {
        let value: Value = serde_yaml::from_value(node.clone()).map_err(|_| {
            Error::parse(format!(
                "unsupported value (expected integer, float, boolean, string or list): {}",
                describe_yaml(node)
            ))
        })?;
        Ok(value.normalized())
    }

    /// Convert into a YAML node for storage.
    pub fn to_yaml(&self) -> Result<serde_yaml::Value> {
        Ok(serde_yaml::to_value(self)?)
    }

    fn normalized(self) -> Value {
        match self {
            Value::List(items) => {
                Value::collapse(items.into_iter().map(Value::normalized).collect())
            }
            other => other,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Render list elements joined by `sep`; scalars render on their own.
    pub fn join(&self, sep: &str) -> String {
        match self {
            Value::List(items) => items
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(sep),
            other => other.to_string(),
        }
    }
}

// `f64::from_str` also accepts "inf", "infinity" and "nan"; those stay strings.
fn parse_float(token: &str) -> Option<f64> {
    let f = token.parse::<f64>().ok()?;
    let has_digit = token.bytes().any(|b| b.is_ascii_digit());
    has_digit.then_some(f)
}

fn describe_yaml(node: &serde_yaml::Value) -> &'static str {
    match node {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
        serde_yaml::Value::Sequence(_) => "sequence with unsupported elements",
        _ => "scalar",
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Conversion of caller input into a stored value.
///
/// String input goes through the token parser; typed input passes through
/// unchanged apart from the collapse rule.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::parse(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::parse(&self)
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::parse(self)
    }
}

impl IntoValue for &[&str] {
    fn into_value(self) -> Value {
        Value::parse_list(self)
    }
}

impl IntoValue for &[String] {
    fn into_value(self) -> Value {
        Value::parse_list(self)
    }
}

impl<const N: usize> IntoValue for [&str; N] {
    fn into_value(self) -> Value {
        Value::parse_list(&self)
    }
}

impl IntoValue for Vec<String> {
    fn into_value(self) -> Value {
        Value::parse_list(&self)
    }
}

impl IntoValue for Vec<Value> {
    fn into_value(self) -> Value {
        Value::collapse(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}
