use devhelper_templates::ModelField;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelRequest {
    #[schemars(description = "Name of the Mongoose model")]
    pub model_name: String,

    #[schemars(description = "Fields for the model")]
    pub fields: Vec<ModelField>,
}
