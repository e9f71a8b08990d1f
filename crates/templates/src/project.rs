use serde_json::{json, Map, Value};

use crate::error::{Result, TemplateError};

/// Root `package.json` for a freshly scaffolded client/server project.
pub fn project_manifest(project_name: &str) -> Result<Value> {
    if project_name.trim().is_empty() {
        return Err(TemplateError::EmptyName("projectName"));
    }
    Ok(json!({
        "name": project_name,
        "version": "1.0.0",
        "description": "MERN stack application",
        "scripts": {
            "dev": "concurrently \"npm run server\" \"npm run client\"",
            "server": "cd server && npm run dev",
            "client": "cd client && npm start",
            "build": "cd client && npm run build",
            "install-deps": "npm install && cd server && npm install && cd ../client && npm install"
        },
        "devDependencies": {
            "concurrently": "^8.2.0"
        }
    }))
}

/// Minimal manifest used when a project has no readable `package.json`.
pub fn default_manifest(name: &str) -> Value {
    json!({
        "name": name,
        "version": "1.0.0",
        "description": "",
        "main": "index.js",
        "scripts": {}
    })
}

pub fn default_scripts() -> Map<String, Value> {
    let mut scripts = Map::new();
    for (key, value) in [
        ("start", "node server.js"),
        ("dev", "nodemon server.js"),
        ("build", "echo 'No build script defined'"),
        ("test", "jest"),
        ("lint", "eslint ."),
        ("lint:fix", "eslint . --fix"),
        ("format", "prettier --write ."),
        ("prepare", "husky install"),
    ] {
        scripts.insert(key.to_string(), Value::String(value.to_string()));
    }
    scripts
}

/// Merge scripts into a manifest with increasing precedence: built-in defaults, then the
/// manifest's own scripts, then `overrides`.
///
/// A key keeps the position of its first appearance, so defaults lead the list and later layers
/// only change values or append new keys. A missing or non-object manifest is replaced by
/// [`default_manifest`] named `fallback_name`; every other manifest key is left untouched.
pub fn merge_package_scripts(
    existing: Option<Value>,
    fallback_name: &str,
    overrides: &Map<String, Value>,
) -> Value {
    let mut manifest = match existing {
        Some(Value::Object(object)) => Value::Object(object),
        _ => default_manifest(fallback_name),
    };

    let mut merged = default_scripts();
    if let Some(Value::Object(current)) = manifest.get("scripts") {
        for (key, value) in current {
            merged.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }

    if let Value::Object(object) = &mut manifest {
        object.insert("scripts".to_string(), Value::Object(merged));
    }
    manifest
}

/// Two-space indented JSON, no trailing newline.
pub fn to_pretty_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
