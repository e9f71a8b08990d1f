//! Dev Helper MCP Server
//!
//! Scaffolding and configuration generators for MERN stack projects, served to MCP clients over
//! stdio.
//!
//! ## Tools
//!
//! - `create_mern_project` - project skeleton with `client/`, `server/` and a root manifest
//! - `generate_component` / `create_api_route` / `create_mongoose_model` - source text only
//! - `project_status` - iconified directory tree
//! - `docker_init` / `create_dockerfile` - compose file, ignore file, per-service Dockerfiles
//! - `setup_nodejs_env` - `.env.<type>` + `.env.example`, optional dependency install
//! - `create_package_scripts` - merge npm scripts into `package.json`
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "devhelper": {
//!       "command": "devhelper-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod config;
pub mod fs_gateway;
pub mod installer;
mod tools;

pub use config::ServerConfig;
pub use tools::{DevHelperService, DispatchError, Dispatcher};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn main_entry() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("devhelper-mcp {VERSION}");
        return Ok(());
    }
    if args.iter().any(|arg| arg == "--print-tools") {
        let inventory = tools::tool_inventory_json(VERSION);
        let rendered =
            serde_json::to_string_pretty(&inventory).context("serialize tool inventory")?;
        println!("{rendered}");
        return Ok(());
    }

    // Logging goes to stderr only: stdout is the MCP channel.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ServerConfig::from_env();
    log::info!(
        "Starting Dev Helper MCP server {VERSION} (installer: {})",
        config.install.program
    );

    let service = DevHelperService::new(&config);
    let server = service
        .serve(stdio())
        .await
        .context("start MCP stdio transport")?;
    server.waiting().await.context("MCP session")?;

    log::info!("Dev Helper MCP server stopped");
    Ok(())
}
