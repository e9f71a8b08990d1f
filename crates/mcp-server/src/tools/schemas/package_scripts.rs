use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackageScriptsRequest {
    #[schemars(description = "Path to the project")]
    pub project_path: String,

    /// Caller scripts win over existing and default scripts.
    #[schemars(description = "Custom scripts to add")]
    pub scripts: Option<Map<String, Value>>,
}
