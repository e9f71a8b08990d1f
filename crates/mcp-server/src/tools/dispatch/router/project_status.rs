use super::super::error::{DispatchError, Result};
use crate::fs_gateway;
use crate::tools::schemas::project_status::ProjectStatusRequest;
use devhelper_templates::render_tree;
use std::path::PathBuf;

pub(in crate::tools::dispatch) fn project_status(request: ProjectStatusRequest) -> Result<String> {
    let root = PathBuf::from(&request.project_path);
    let entries = fs_gateway::walk(&root)
        .map_err(|source| DispatchError::UnreadableProject { path: root, source })?;
    Ok(format!(
        "Project structure for {}:\n\n{}",
        request.project_path,
        render_tree(&entries)
    ))
}
