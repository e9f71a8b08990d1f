//! Request dispatch for Dev Helper
//!
//! Resolves a tool name in the catalog, checks the arguments against the declared shape, decodes
//! them into the typed request and runs exactly one generator. Every failure comes back as a
//! [`CallResult::Failure`]; nothing here panics or aborts the session.

mod error;
mod router;
mod service;

pub use error::DispatchError;
pub use service::DevHelperService;

use super::catalog::{self, ToolKind};
use crate::config::ServerConfig;
use crate::installer::Installer;
use devhelper_protocol::{CallRequest, CallResult};
use error::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    installer: Installer,
}

impl Dispatcher {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            installer: config.installer(),
        }
    }

    pub fn with_installer(installer: Installer) -> Self {
        Self { installer }
    }

    pub async fn dispatch(&self, request: CallRequest) -> CallResult {
        let name = request.capability.clone();
        match self.try_dispatch(request).await {
            Ok(text) => {
                log::debug!("{name}: ok ({} chars)", text.len());
                CallResult::text(text)
            }
            Err(err) => {
                log::warn!("{name}: {err}");
                CallResult::failure(err.to_string())
            }
        }
    }

    pub async fn try_dispatch(&self, request: CallRequest) -> Result<String> {
        let Some(tool) = ToolKind::from_name(&request.capability) else {
            return Err(DispatchError::UnknownTool(request.capability));
        };
        log::info!("call {}", tool.name());

        catalog::capability(tool)
            .input_shape
            .validate(&request.arguments)
            .map_err(|err| DispatchError::invalid(tool.name(), err))?;
        let arguments = request.arguments;

        match tool {
            ToolKind::CreateProject => {
                router::create_project::create_project(decode(tool, arguments)?)
            }
            ToolKind::GenerateComponent => {
                router::generate_component::generate_component(decode(tool, arguments)?)
            }
            ToolKind::CreateApiRoute => {
                router::create_api_route::create_api_route(decode(tool, arguments)?)
            }
            ToolKind::CreateModel => router::create_model::create_model(decode(tool, arguments)?),
            ToolKind::ProjectStatus => {
                router::project_status::project_status(decode(tool, arguments)?)
            }
            ToolKind::DockerInit => router::docker::docker_init(decode(tool, arguments)?),
            ToolKind::CreateDockerfile => {
                router::docker::create_dockerfile(decode(tool, arguments)?)
            }
            ToolKind::SetupEnv => {
                router::setup_env::setup_env(&self.installer, decode(tool, arguments)?).await
            }
            ToolKind::PackageScripts => {
                router::package_scripts::package_scripts(decode(tool, arguments)?)
            }
        }
    }
}

/// Typed view of already-validated arguments. `null` fields are dropped first so they read as
/// absent, matching the shape validator.
fn decode<T: DeserializeOwned>(tool: ToolKind, mut arguments: Map<String, Value>) -> Result<T> {
    arguments.retain(|_, value| !value.is_null());
    serde_json::from_value(Value::Object(arguments))
        .map_err(|err| DispatchError::invalid(tool.name(), err))
}

#[cfg(test)]
mod tests {
    mod arguments;
    mod filesystem;
    mod generators;
}
