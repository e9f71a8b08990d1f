use devhelper_templates::{ComposeService, DockerService};
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DockerInitRequest {
    #[schemars(description = "Path to the project")]
    pub project_path: String,

    /// Rendered in a fixed order (database, server, client, nginx) whatever the input order.
    #[schemars(description = "Services to include in Docker setup")]
    pub services: Vec<ComposeService>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDockerfileRequest {
    #[schemars(description = "Service type")]
    pub service: DockerService,

    #[schemars(description = "Path to the project")]
    pub project_path: String,

    /// Node.js image tag (default: 18-alpine)
    #[schemars(description = "Node.js version to use")]
    pub node_version: Option<String>,
}
