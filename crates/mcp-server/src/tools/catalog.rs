use devhelper_protocol::{Capability, FieldKind, FieldSpec, Shape};
use devhelper_templates::DEFAULT_NODE_VERSION;
use once_cell::sync::Lazy;
use serde_json::json;

/// Every tool the server exposes, in `tools/list` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToolKind {
    CreateProject,
    GenerateComponent,
    CreateApiRoute,
    CreateModel,
    ProjectStatus,
    DockerInit,
    CreateDockerfile,
    SetupEnv,
    PackageScripts,
}

impl ToolKind {
    pub(crate) const ALL: [ToolKind; 9] = [
        ToolKind::CreateProject,
        ToolKind::GenerateComponent,
        ToolKind::CreateApiRoute,
        ToolKind::CreateModel,
        ToolKind::ProjectStatus,
        ToolKind::DockerInit,
        ToolKind::CreateDockerfile,
        ToolKind::SetupEnv,
        ToolKind::PackageScripts,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::CreateProject => "create_mern_project",
            Self::GenerateComponent => "generate_component",
            Self::CreateApiRoute => "create_api_route",
            Self::CreateModel => "create_mongoose_model",
            Self::ProjectStatus => "project_status",
            Self::DockerInit => "docker_init",
            Self::CreateDockerfile => "create_dockerfile",
            Self::SetupEnv => "setup_nodejs_env",
            Self::PackageScripts => "create_package_scripts",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            Self::CreateProject => "Create a new MERN stack project structure",
            Self::GenerateComponent => "Generate a React component with boilerplate",
            Self::CreateApiRoute => "Create an Express API route with boilerplate",
            Self::CreateModel => "Create a Mongoose model with schema",
            Self::ProjectStatus => "Get current project structure and status",
            Self::DockerInit => "Initialize Docker configuration for the project",
            Self::CreateDockerfile => "Create Dockerfile for a specific service",
            Self::SetupEnv => "Set up Node.js environment configuration",
            Self::PackageScripts => "Create npm scripts for development workflow",
        }
    }

    fn input_shape(self) -> Shape {
        match self {
            Self::CreateProject => Shape::new()
                .field("projectName", string("Name of the project").required())
                .field("path", string("Path where to create the project").required()),
            Self::GenerateComponent => Shape::new()
                .field(
                    "componentName",
                    string("Name of the React component").required(),
                )
                .field(
                    "componentType",
                    FieldSpec::new(
                        FieldKind::enumeration(["functional", "class"]),
                        "Type of component to generate",
                    ),
                )
                .field(
                    "withStyles",
                    FieldSpec::new(FieldKind::Boolean, "Include CSS module file"),
                ),
            Self::CreateApiRoute => Shape::new()
                .field("routeName", string("Name of the API route").required())
                .field(
                    "methods",
                    FieldSpec::new(
                        FieldKind::non_empty_array_of(FieldKind::enumeration([
                            "GET", "POST", "PUT", "DELETE",
                        ])),
                        "HTTP methods to include",
                    )
                    .required(),
                )
                .field(
                    "withAuth",
                    FieldSpec::new(FieldKind::Boolean, "Include authentication middleware"),
                ),
            Self::CreateModel => {
                let model_field = Shape::new()
                    .field("name", string("").required())
                    .field("type", string("").required())
                    .field("required", FieldSpec::new(FieldKind::Boolean, ""));
                Shape::new()
                    .field("modelName", string("Name of the Mongoose model").required())
                    .field(
                        "fields",
                        FieldSpec::new(
                            FieldKind::array_of(FieldKind::Object {
                                fields: model_field,
                            }),
                            "Fields for the model",
                        )
                        .required(),
                    )
            }
            Self::ProjectStatus => {
                Shape::new().field("projectPath", string("Path to the project").required())
            }
            Self::DockerInit => Shape::new()
                .field("projectPath", string("Path to the project").required())
                .field(
                    "services",
                    FieldSpec::new(
                        FieldKind::array_of(FieldKind::enumeration([
                            "client", "server", "database", "nginx",
                        ])),
                        "Services to include in Docker setup",
                    )
                    .required(),
                ),
            Self::CreateDockerfile => Shape::new()
                .field(
                    "service",
                    FieldSpec::new(
                        FieldKind::enumeration(["client", "server"]),
                        "Service type",
                    )
                    .required(),
                )
                .field("projectPath", string("Path to the project").required())
                .field(
                    "nodeVersion",
                    string("Node.js version to use").with_default(json!(DEFAULT_NODE_VERSION)),
                ),
            Self::SetupEnv => Shape::new()
                .field("projectPath", string("Path to the project").required())
                .field(
                    "envType",
                    FieldSpec::new(
                        FieldKind::enumeration(["development", "production", "testing"]),
                        "Environment type",
                    )
                    .required(),
                )
                .field(
                    "dependencies",
                    FieldSpec::new(
                        FieldKind::array_of(FieldKind::String),
                        "Additional dependencies to install",
                    ),
                ),
            Self::PackageScripts => Shape::new()
                .field("projectPath", string("Path to the project").required())
                .field(
                    "scripts",
                    FieldSpec::new(FieldKind::map_of(FieldKind::String), "Custom scripts to add"),
                ),
        }
    }

    fn capability(self) -> Capability {
        Capability::new(self.name(), self.description(), self.input_shape())
    }
}

fn string(description: &str) -> FieldSpec {
    FieldSpec::new(FieldKind::String, description)
}

static CAPABILITIES: Lazy<Vec<Capability>> =
    Lazy::new(|| ToolKind::ALL.into_iter().map(ToolKind::capability).collect());

/// The fixed catalog, built once per process.
pub(crate) fn capabilities() -> &'static [Capability] {
    &CAPABILITIES
}

pub(crate) fn capability(tool: ToolKind) -> &'static Capability {
    // Variants are declared in ALL order.
    &CAPABILITIES[tool as usize]
}

pub(crate) fn tool_inventory_json(version: &str) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = capabilities().iter().map(Capability::to_json).collect();

    json!({
        "binary": "devhelper-mcp",
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Dev Helper scaffolds MERN stack projects: skeletons, components, routes, models, Docker and environment files.".to_string(),
        "Code generators (generate_component, create_api_route, create_mongoose_model) return source text without writing files.".to_string(),
        "Tools:".to_string(),
    ];
    for cap in capabilities() {
        lines.push(format!("- {}: {}", cap.name, cap.description));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_and_are_unique() {
        for tool in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(tool.name()), Some(tool));
            assert_eq!(capability(tool).name, tool.name());
        }
        let mut names: Vec<&str> = ToolKind::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ToolKind::ALL.len());
        assert_eq!(ToolKind::from_name("create_project"), None);
    }

    #[test]
    fn inventory_lists_every_tool_in_order() {
        let inventory = tool_inventory_json("0.0.0");
        assert_eq!(inventory["count"], ToolKind::ALL.len());
        assert_eq!(inventory["tools"][0]["name"], "create_mern_project");
        assert_eq!(inventory["tools"][8]["name"], "create_package_scripts");
        assert_eq!(
            inventory["tools"][6]["inputSchema"]["properties"]["nodeVersion"]["default"],
            "18-alpine"
        );
    }

    #[test]
    fn model_fields_declare_nested_requirements() {
        let schema = capability(ToolKind::CreateModel).input_shape.to_json_schema();
        let items = &schema["properties"]["fields"]["items"];
        assert_eq!(items["type"], "object");
        assert_eq!(items["required"], json!(["name", "type"]));
    }

    #[test]
    fn instructions_mention_every_tool() {
        let text = tool_instructions();
        for tool in ToolKind::ALL {
            assert!(text.contains(tool.name()), "{}", tool.name());
        }
    }
}
