#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RoleClient, RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;

pub const TIMEOUT: Duration = Duration::from_secs(10);

pub fn locate_devhelper_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_devhelper-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/devhelper-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("devhelper-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/devhelper-mcp", "target/release/devhelper-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!(
        "failed to locate devhelper-mcp binary; build with: cargo build -p devhelper-mcp --bin devhelper-mcp"
    )
}

pub fn server_command() -> Result<Command> {
    let mut cmd = Command::new(locate_devhelper_mcp_bin()?);
    cmd.env("RUST_LOG", "warn");
    cmd.env_remove("DEVHELPER_CONFIG");
    cmd.env_remove("DEVHELPER_INSTALL_TIMEOUT_SECS");
    cmd.env("DEVHELPER_INSTALL_PROGRAM", "devhelper-no-such-installer");
    Ok(cmd)
}

pub async fn start_server() -> Result<RunningService<RoleClient, ()>> {
    let transport = TokioChildProcess::new(server_command()?).context("spawn mcp server")?;
    let service = tokio::time::timeout(TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")??;
    Ok(service)
}

pub async fn call(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    arguments: serde_json::Value,
) -> Result<CallToolResult> {
    let result = tokio::time::timeout(
        TIMEOUT,
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: arguments.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))??;
    Ok(result)
}

pub fn first_text(result: &CallToolResult) -> Result<&str> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("tool result missing text output")
}
