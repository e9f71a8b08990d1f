use schemars::JsonSchema;
use serde::Deserialize;

pub const DEFAULT_NODE_VERSION: &str = "18-alpine";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DockerService {
    Client,
    Server,
}

impl DockerService {
    /// Directory (relative to the project root) that receives the Dockerfile.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

/// Server: single runtime stage, production deps, non-root user.
/// Client: build stage producing a static bundle, served by nginx.
pub fn render_dockerfile(service: DockerService, node_version: &str) -> String {
    let node_version = match node_version.trim() {
        "" => DEFAULT_NODE_VERSION,
        v => v,
    };
    let instructions: Vec<String> = match service {
        DockerService::Server => vec![
            format!("FROM node:{node_version}"),
            String::new(),
            "WORKDIR /app".into(),
            String::new(),
            "COPY package*.json ./".into(),
            "RUN npm ci --only=production".into(),
            String::new(),
            "COPY . .".into(),
            String::new(),
            "EXPOSE 5000".into(),
            String::new(),
            "USER node".into(),
            String::new(),
            r#"CMD ["npm", "start"]"#.into(),
        ],
        DockerService::Client => vec![
            format!("FROM node:{node_version} AS build"),
            String::new(),
            "WORKDIR /app".into(),
            String::new(),
            "COPY package*.json ./".into(),
            "RUN npm ci".into(),
            String::new(),
            "COPY . .".into(),
            "RUN npm run build".into(),
            String::new(),
            "FROM nginx:alpine".into(),
            "COPY --from=build /app/build /usr/share/nginx/html".into(),
            "COPY nginx.conf /etc/nginx/nginx.conf".into(),
            String::new(),
            "EXPOSE 80".into(),
            String::new(),
            r#"CMD ["nginx", "-g", "daemon off;"]"#.into(),
        ],
    };
    instructions.join("\n")
}
