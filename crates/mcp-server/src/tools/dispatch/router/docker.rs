use super::super::error::Result;
use crate::fs_gateway;
use crate::tools::schemas::docker::{CreateDockerfileRequest, DockerInitRequest};
use devhelper_templates::{
    render_compose, render_dockerfile, render_dockerignore, DEFAULT_NODE_VERSION,
};
use std::path::Path;

const COMPOSE_FILE: &str = "docker-compose.yml";
const DOCKERIGNORE_FILE: &str = ".dockerignore";

/// Write `docker-compose.yml` and `.dockerignore` into the project root.
pub(in crate::tools::dispatch) fn docker_init(request: DockerInitRequest) -> Result<String> {
    let root = Path::new(&request.project_path);
    let compose = render_compose(&request.services);
    let ignore = render_dockerignore();

    fs_gateway::write_text(&root.join(COMPOSE_FILE), &compose)?;
    fs_gateway::write_text(&root.join(DOCKERIGNORE_FILE), &ignore)?;

    let services = request
        .services
        .iter()
        .map(|service| service.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Docker configuration initialized with services: {services}"))
}

pub(in crate::tools::dispatch) fn create_dockerfile(
    request: CreateDockerfileRequest,
) -> Result<String> {
    let node_version = request
        .node_version
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_NODE_VERSION);
    let dockerfile = render_dockerfile(request.service, node_version);

    let service_dir = Path::new(&request.project_path).join(request.service.dir_name());
    fs_gateway::make_directories(&service_dir, true)?;
    fs_gateway::write_text(&service_dir.join("Dockerfile"), &dockerfile)?;

    Ok(format!(
        "Created Dockerfile for {} service:\n\n{dockerfile}",
        request.service.dir_name()
    ))
}
