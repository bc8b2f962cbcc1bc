use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Object member naming the runtime type of a structured argument
pub const TYPE_KEY: &str = "@type";

/// Object member marking an argument of unrecognized kind
pub const UNKNOWN_KEY: &str = "@unknown";

/// Type name used for structured arguments that carry no `@type` member
pub const DEFAULT_OBJECT_TYPE: &str = "Object";

/// One entry of a captured call stack, as supplied by the host runtime
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StackFrame {
    /// Source file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Source line (1-indexed); `Some(0)` counts as missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Enclosing type name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Static vs. instance invocation
    #[serde(rename = "type")]
    pub call_type: CallType,

    /// Callable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Argument values, in call order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ArgValue>,
}

impl StackFrame {
    /// Frame for a free function call
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            function: Some(name.into()),
            ..Default::default()
        }
    }

    /// Frame for a method call on `class`
    pub fn method(class: impl Into<String>, call_type: CallType, name: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            call_type,
            function: Some(name.into()),
            ..Default::default()
        }
    }

    /// Builder: set file and line
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Builder: set file only
    #[must_use]
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Builder: append an argument
    #[must_use]
    pub fn arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Builder: replace all arguments
    #[must_use]
    pub fn with_args(mut self, args: Vec<ArgValue>) -> Self {
        self.args = args;
        self
    }

    /// Line number if present and non-zero
    #[must_use]
    pub fn line_number(&self) -> Option<u32> {
        self.line.filter(|&line| line > 0)
    }

    /// `class + type + function`, with missing parts rendered empty
    #[must_use]
    pub fn call_site(&self) -> String {
        format!(
            "{}{}{}",
            self.class.as_deref().unwrap_or_default(),
            self.call_type.as_str(),
            self.function.as_deref().unwrap_or_default()
        )
    }
}

/// How a method was invoked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallType {
    /// No enclosing type
    #[default]
    #[serde(rename = "")]
    None,
    /// `Class::method`
    #[serde(rename = "::")]
    Static,
    /// `Class->method`
    #[serde(rename = "->")]
    Instance,
}

impl CallType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Static => "::",
            Self::Instance => "->",
        }
    }
}

/// Summarizable argument value
///
/// Deserializes from plain JSON: arrays become [`ArgValue::Collection`],
/// objects become [`ArgValue::Structured`] named by their `@type` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ArgValue {
    Boolean(bool),
    Text(String),
    Number(Number),
    /// Array or other collection; contents are never rendered
    Collection,
    /// Object, named by its runtime type
    Structured(String),
    Null,
    /// Anything the capture provider could not classify
    Unknown,
}

impl ArgValue {
    pub fn structured(type_name: impl Into<String>) -> Self {
        Self::Structured(type_name.into())
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => Self::Number(Number::from(&n)),
            Value::String(s) => Self::Text(s),
            Value::Array(_) => Self::Collection,
            Value::Object(map) => {
                if map.len() == 1 && map.get(UNKNOWN_KEY) == Some(&Value::Bool(true)) {
                    return Self::Unknown;
                }
                let name = map
                    .get(TYPE_KEY)
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_OBJECT_TYPE);
                Self::Structured(name.to_string())
            }
        }
    }
}

impl From<ArgValue> for Value {
    fn from(value: ArgValue) -> Self {
        match value {
            ArgValue::Boolean(b) => Value::Bool(b),
            ArgValue::Text(s) => Value::String(s),
            ArgValue::Number(Number::Int(v)) => Value::from(v),
            ArgValue::Number(Number::Float(v)) => {
                serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
            }
            ArgValue::Collection => Value::Array(Vec::new()),
            ArgValue::Structured(name) => {
                let mut map = Map::new();
                map.insert(TYPE_KEY.to_string(), Value::String(name));
                Value::Object(map)
            }
            ArgValue::Null => Value::Null,
            ArgValue::Unknown => {
                let mut map = Map::new();
                map.insert(UNKNOWN_KEY.to_string(), Value::Bool(true));
                Value::Object(map)
            }
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Number(Number::Int(i64::from(value)))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl<T: Into<ArgValue>> From<Option<T>> for ArgValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Numeric scalar argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        // u64 values above i64::MAX fall back to float
        n.as_i64()
            .map(Self::Int)
            .unwrap_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_nan() => f.write_str("NAN"),
            Self::Float(v) if v.is_infinite() => {
                f.write_str(if v.is_sign_positive() { "INF" } else { "-INF" })
            }
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
