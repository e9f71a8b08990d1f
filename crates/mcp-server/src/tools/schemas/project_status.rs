use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusRequest {
    #[schemars(description = "Path to the project")]
    pub project_path: String,
}
