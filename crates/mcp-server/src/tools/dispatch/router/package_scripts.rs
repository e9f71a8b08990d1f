use super::super::error::Result;
use crate::fs_gateway;
use crate::tools::schemas::package_scripts::PackageScriptsRequest;
use devhelper_templates::{merge_package_scripts, to_pretty_json};
use serde_json::{Map, Value};
use std::path::Path;

/// Merge scripts into `package.json`, creating a minimal manifest when none can be read.
pub(in crate::tools::dispatch) fn package_scripts(request: PackageScriptsRequest) -> Result<String> {
    let root = Path::new(&request.project_path);
    let manifest_path = root.join("package.json");

    let existing = match fs_gateway::read_text(&manifest_path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!(
                    "{} is not valid JSON ({err}); starting from a fresh manifest",
                    manifest_path.display()
                );
                None
            }
        },
        Err(err) => {
            log::debug!("{err}; starting from a fresh manifest");
            None
        }
    };

    let fallback_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let overrides = request.scripts.unwrap_or_else(Map::new);
    let manifest = merge_package_scripts(existing, &fallback_name, &overrides);

    fs_gateway::write_text(&manifest_path, &to_pretty_json(&manifest)?)?;

    let scripts = manifest
        .get("scripts")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    Ok(format!(
        "Package scripts updated in {}:\n\n{}",
        request.project_path,
        to_pretty_json(&scripts)?
    ))
}
