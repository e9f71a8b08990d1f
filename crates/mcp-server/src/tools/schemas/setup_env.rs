use devhelper_templates::EnvType;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetupEnvRequest {
    #[schemars(description = "Path to the project")]
    pub project_path: String,

    #[schemars(description = "Environment type")]
    pub env_type: EnvType,

    /// Installed with one synchronous install step when non-empty.
    #[schemars(description = "Additional dependencies to install")]
    pub dependencies: Option<Vec<String>>,
}
