use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::{Result, TemplateError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ModelField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: Option<bool>,
}

impl ModelField {
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    fn definition(&self) -> String {
        if self.is_required() {
            format!("{{ type: {}, required: true }}", self.ty)
        } else {
            self.ty.clone()
        }
    }
}

/// Mongoose schema + model export. Field order is preserved; the schema variable uses the
/// lower-cased model name while the registered model keeps the name verbatim.
pub fn render_model(model_name: &str, fields: &[ModelField]) -> Result<String> {
    let model_name = model_name.trim();
    if model_name.is_empty() {
        return Err(TemplateError::EmptyName("modelName"));
    }
    if let Some(field) = fields
        .iter()
        .find(|f| f.name.trim().is_empty() || f.ty.trim().is_empty())
    {
        return Err(if field.name.trim().is_empty() {
            TemplateError::EmptyName("fields[].name")
        } else {
            TemplateError::EmptyName("fields[].type")
        });
    }

    let schema_var = format!("{}Schema", model_name.to_lowercase());
    let body = fields
        .iter()
        .map(|field| format!("  {}: {}", field.name, field.definition()))
        .collect::<Vec<_>>()
        .join(",\n");

    Ok(format!(
        "const mongoose = require('mongoose');\n\
         \n\
         const {schema_var} = new mongoose.Schema({{\n\
         {body}\n\
         }}, {{\n  \
         timestamps: true\n\
         }});\n\
         \n\
         module.exports = mongoose.model('{model_name}', {schema_var});"
    ))
}
