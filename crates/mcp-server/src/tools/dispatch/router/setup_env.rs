use super::super::error::Result;
use crate::fs_gateway;
use crate::installer::Installer;
use crate::tools::schemas::setup_env::SetupEnvRequest;
use devhelper_templates::{env_file_name, render_env_file, strip_env_values, ENV_EXAMPLE_FILE};
use std::path::Path;

/// Write `.env.<type>` and `.env.example`, then install the requested dependencies.
///
/// An install failure is not an error: both files stay on disk and the reply says so.
pub(in crate::tools::dispatch) async fn setup_env(
    installer: &Installer,
    request: SetupEnvRequest,
) -> Result<String> {
    let root = Path::new(&request.project_path);
    let env_name = env_file_name(request.env_type);
    let env = render_env_file(request.env_type);
    let example = strip_env_values(&env);

    fs_gateway::write_text(&root.join(&env_name), &env)?;
    fs_gateway::write_text(&root.join(ENV_EXAMPLE_FILE), &example)?;

    let deps = request.dependencies.unwrap_or_default();
    if !deps.is_empty() {
        if let Err(err) = installer.install(root, &deps).await {
            log::warn!("dependency install failed: {err}");
            return Ok(format!(
                "Environment setup completed but failed to install dependencies: {err}"
            ));
        }
    }

    Ok(format!(
        "Node.js {} environment configured with {env_name} and {ENV_EXAMPLE_FILE} files",
        request.env_type.as_str()
    ))
}
