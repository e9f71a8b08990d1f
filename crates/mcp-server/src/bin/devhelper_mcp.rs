use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    devhelper_mcp::main_entry().await
}
