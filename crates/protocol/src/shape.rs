//! Declared input shapes and the generic validator attached to them.
//!
//! A [`Shape`] is data: an ordered list of named fields, each with a [`FieldKind`]. The same
//! declaration drives both the JSON Schema published in `tools/list` and the validation run
//! before a call reaches its generator, so the two can never drift apart.

use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Enum { values: Vec<String> },
    Array { items: Box<FieldKind>, min_items: usize },
    Object { fields: Shape },
    /// Free-form object whose values all share one kind.
    Map { values: Box<FieldKind> },
}

impl FieldKind {
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn array_of(items: FieldKind) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: 0,
        }
    }

    pub fn non_empty_array_of(items: FieldKind) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: 1,
        }
    }

    pub fn map_of(values: FieldKind) -> Self {
        Self::Map {
            values: Box::new(values),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::String | Self::Enum { .. } => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array { .. } => "array",
            Self::Object { .. } | Self::Map { .. } => "object",
        }
    }

    fn to_json_schema(&self) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert("type".to_string(), json!(self.type_name()));
        match self {
            Self::String | Self::Number | Self::Boolean => {}
            Self::Enum { values } => {
                out.insert("enum".to_string(), json!(values));
            }
            Self::Array { items, min_items } => {
                out.insert("items".to_string(), Value::Object(items.to_json_schema()));
                if *min_items > 0 {
                    out.insert("minItems".to_string(), json!(min_items));
                }
            }
            Self::Object { fields } => {
                // Nested shapes reuse the top-level projection minus the outer "type".
                for (key, value) in fields.to_json_schema() {
                    out.insert(key, value);
                }
            }
            Self::Map { values } => {
                out.insert(
                    "additionalProperties".to_string(),
                    Value::Object(values.to_json_schema()),
                );
            }
        }
        out
    }

    fn validate(&self, path: &str, value: &Value) -> Result<(), ShapeError> {
        match (self, value) {
            (Self::String, Value::String(_)) => Ok(()),
            (Self::Number, Value::Number(_)) => Ok(()),
            (Self::Boolean, Value::Bool(_)) => Ok(()),
            (Self::Enum { values }, Value::String(s)) => {
                if values.iter().any(|allowed| allowed == s) {
                    Ok(())
                } else {
                    Err(ShapeError::NotInEnum {
                        path: path.to_string(),
                        value: s.clone(),
                        allowed: values.join(", "),
                    })
                }
            }
            (Self::Array { items, min_items }, Value::Array(elements)) => {
                if elements.len() < *min_items {
                    return Err(ShapeError::TooFewItems {
                        path: path.to_string(),
                        min: *min_items,
                        actual: elements.len(),
                    });
                }
                for (idx, element) in elements.iter().enumerate() {
                    items.validate(&format!("{path}[{idx}]"), element)?;
                }
                Ok(())
            }
            (Self::Object { fields }, Value::Object(object)) => fields.validate_at(path, object),
            (Self::Map { values }, Value::Object(object)) => {
                for (key, element) in object {
                    values.validate(&format!("{path}.{key}"), element)?;
                }
                Ok(())
            }
            (expected, actual) => Err(ShapeError::WrongType {
                path: path.to_string(),
                expected: expected.type_name(),
                actual: json_type_name(actual),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub required: bool,
    pub description: String,
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn new(kind: FieldKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            required: false,
            description: description.into(),
            default: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub spec: FieldSpec,
}

/// Ordered field declarations for one object level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    fields: Vec<Field>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Redeclaring a name replaces the earlier spec in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.spec = spec,
            None => self.fields.push(Field { name, spec }),
        }
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.spec)
    }

    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.spec.required)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// JSON Schema (draft-07 subset) describing this shape as an object.
    pub fn to_json_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut prop = field.spec.kind.to_json_schema();
            if !field.spec.description.is_empty() {
                prop.insert("description".to_string(), json!(field.spec.description));
            }
            if let Some(default) = field.spec.default.as_ref() {
                prop.insert("default".to_string(), default.clone());
            }
            properties.insert(field.name.clone(), Value::Object(prop));
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        let required = self.required_fields();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }
        schema
    }

    pub fn validate(&self, arguments: &Map<String, Value>) -> Result<(), ShapeError> {
        self.validate_at("", arguments)
    }

    fn validate_at(&self, prefix: &str, object: &Map<String, Value>) -> Result<(), ShapeError> {
        for field in &self.fields {
            let path = if prefix.is_empty() {
                field.name.clone()
            } else {
                format!("{prefix}.{}", field.name)
            };
            match object.get(&field.name) {
                None | Some(Value::Null) => {
                    if field.spec.required {
                        return Err(ShapeError::MissingField { path });
                    }
                }
                Some(value) => field.spec.kind.validate(&path, value)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{path}: missing required field")]
    MissingField { path: String },

    #[error("{path}: expected {expected}, got {actual}")]
    WrongType {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{path}: '{value}' is not one of [{allowed}]")]
    NotInEnum {
        path: String,
        value: String,
        allowed: String,
    },

    #[error("{path}: expected at least {min} item(s), got {actual}")]
    TooFewItems {
        path: String,
        min: usize,
        actual: usize,
    },
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
