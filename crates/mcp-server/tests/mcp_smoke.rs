use anyhow::{Context, Result};
use serde_json::json;
use std::collections::HashSet;

mod support;

#[tokio::test]
async fn mcp_lists_every_tool_with_schemas() -> Result<()> {
    let service = support::start_server().await?;

    let tools = tokio::time::timeout(support::TIMEOUT, service.list_tools(Default::default()))
        .await
        .context("timeout listing tools")??;
    let names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "create_mern_project",
        "generate_component",
        "create_api_route",
        "create_mongoose_model",
        "project_status",
        "docker_init",
        "create_dockerfile",
        "setup_nodejs_env",
        "create_package_scripts",
    ] {
        assert!(
            names.contains(expected),
            "missing tool '{expected}' (available: {names:?})"
        );
    }
    assert_eq!(names.len(), 9, "unexpected tools: {names:?}");

    let route = tools
        .tools
        .iter()
        .find(|t| t.name == "create_api_route")
        .context("create_api_route missing")?;
    assert_eq!(
        route.input_schema.get("required"),
        Some(&json!(["routeName", "methods"]))
    );

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn generators_answer_over_stdio() -> Result<()> {
    let service = support::start_server().await?;

    let result = support::call(
        &service,
        "create_api_route",
        json!({ "routeName": "orders", "methods": ["DELETE", "GET"] }),
    )
    .await?;
    assert_ne!(result.is_error, Some(true));
    let text = support::first_text(&result)?;
    assert!(text.starts_with("Generated API route for orders:\n\n"), "{text}");
    assert!(text.find("router.delete(") < text.find("router.get("));

    let tmp = tempfile::tempdir().context("tempdir")?;
    let result = support::call(
        &service,
        "create_mern_project",
        json!({ "projectName": "demo", "path": tmp.path().to_string_lossy() }),
    )
    .await?;
    let text = support::first_text(&result)?;
    assert!(text.starts_with("Created MERN project \"demo\""), "{text}");
    assert!(tmp.path().join("demo").join("package.json").is_file());

    let result = support::call(
        &service,
        "project_status",
        json!({ "projectPath": tmp.path().join("demo").to_string_lossy() }),
    )
    .await?;
    let text = support::first_text(&result)?;
    assert!(text.contains("📁 client/\n"), "{text}");
    assert!(text.contains("📄 package.json\n"), "{text}");

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn bad_calls_fail_in_band_and_session_survives() -> Result<()> {
    let service = support::start_server().await?;

    let result = support::call(&service, "deploy_to_prod", json!({})).await?;
    assert_eq!(support::first_text(&result)?, "Error: Unknown tool: deploy_to_prod");

    let result = support::call(&service, "create_dockerfile", json!({ "service": "db" })).await?;
    let text = support::first_text(&result)?;
    assert!(
        text.starts_with("Error: Invalid arguments for create_dockerfile: service: 'db'"),
        "{text}"
    );

    let tmp = tempfile::tempdir().context("tempdir")?;
    let result = support::call(
        &service,
        "setup_nodejs_env",
        json!({
            "projectPath": tmp.path().to_string_lossy(),
            "envType": "development",
            "dependencies": ["express"]
        }),
    )
    .await?;
    let text = support::first_text(&result)?;
    assert!(
        text.starts_with("Environment setup completed but failed to install dependencies: "),
        "{text}"
    );
    assert!(tmp.path().join(".env.development").is_file());

    let result = support::call(
        &service,
        "generate_component",
        json!({ "componentName": "StillAlive" }),
    )
    .await?;
    assert!(support::first_text(&result)?.starts_with("Generated StillAlive component:"));

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}
