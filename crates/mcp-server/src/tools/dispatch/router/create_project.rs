use super::super::error::Result;
use crate::fs_gateway;
use crate::tools::schemas::create_project::CreateProjectRequest;
use devhelper_templates::{project_manifest, to_pretty_json};
use std::path::Path;

/// Create `<path>/<projectName>` with `client/` and `server/` plus a root `package.json`.
///
/// Existing directories are reused; an existing manifest is overwritten.
pub(in crate::tools::dispatch) fn create_project(request: CreateProjectRequest) -> Result<String> {
    let project_dir = Path::new(&request.path).join(&request.project_name);
    let manifest = to_pretty_json(&project_manifest(&request.project_name)?)?;

    fs_gateway::make_directories(&project_dir, true)?;
    fs_gateway::make_directories(&project_dir.join("client"), true)?;
    fs_gateway::make_directories(&project_dir.join("server"), true)?;
    fs_gateway::write_text(&project_dir.join("package.json"), &manifest)?;

    Ok(format!(
        "Created MERN project \"{}\" at {}",
        request.project_name,
        project_dir.display()
    ))
}
