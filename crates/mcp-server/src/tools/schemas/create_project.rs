use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Name of the project (also the new directory name)
    #[schemars(description = "Name of the project")]
    pub project_name: String,

    /// Parent directory that receives the project
    #[schemars(description = "Path where to create the project")]
    pub path: String,
}
