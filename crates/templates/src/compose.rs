use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComposeService {
    Client,
    Server,
    Database,
    Nginx,
}

impl ComposeService {
    /// Block order in the rendered file, independent of request order.
    pub const CANONICAL_ORDER: [ComposeService; 4] = [
        ComposeService::Database,
        ComposeService::Server,
        ComposeService::Client,
        ComposeService::Nginx,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Database => "database",
            Self::Nginx => "nginx",
        }
    }

    /// Key used under `services:`.
    fn service_key(self) -> &'static str {
        match self {
            Self::Database => "mongodb",
            other => other.as_str(),
        }
    }

    fn depends_on(self) -> &'static [ComposeService] {
        match self {
            Self::Database => &[],
            Self::Server => &[Self::Database],
            Self::Client => &[Self::Server],
            Self::Nginx => &[Self::Client, Self::Server],
        }
    }
}

const DB_USER: &str = "root";
const DB_PASSWORD: &str = "password";
const DB_PORT: u16 = 27017;
const DB_NAME: &str = "myapp";
const DB_VOLUME: &str = "mongodb_data";
const NETWORK: &str = "app-network";

pub const DOCKERIGNORE_PATTERNS: &[&str] = &[
    "node_modules",
    "npm-debug.log",
    ".git",
    ".gitignore",
    "README.md",
    ".env",
    ".nyc_output",
    "coverage",
    ".coverage",
    "*.log",
];

struct Block {
    image: Option<&'static str>,
    build_context: Option<&'static str>,
    ports: String,
    environment: Vec<String>,
    volumes: Vec<String>,
}

fn block_for(service: ComposeService) -> Block {
    match service {
        ComposeService::Database => Block {
            image: Some("mongo:latest"),
            build_context: None,
            ports: format!("{DB_PORT}:{DB_PORT}"),
            environment: vec![
                format!("MONGO_INITDB_ROOT_USERNAME={DB_USER}"),
                format!("MONGO_INITDB_ROOT_PASSWORD={DB_PASSWORD}"),
            ],
            volumes: vec![format!("{DB_VOLUME}:/data/db")],
        },
        ComposeService::Server => Block {
            image: None,
            build_context: Some("./server"),
            ports: "5000:5000".to_string(),
            environment: vec![
                "NODE_ENV=production".to_string(),
                format!(
                    "MONGODB_URI=mongodb://{DB_USER}:{DB_PASSWORD}@{}:{DB_PORT}/{DB_NAME}?authSource=admin",
                    ComposeService::Database.service_key()
                ),
            ],
            volumes: Vec::new(),
        },
        ComposeService::Client => Block {
            image: None,
            build_context: Some("./client"),
            ports: "3000:3000".to_string(),
            environment: vec!["REACT_APP_API_URL=http://localhost:5000".to_string()],
            volumes: Vec::new(),
        },
        ComposeService::Nginx => Block {
            image: Some("nginx:alpine"),
            build_context: None,
            ports: "80:80".to_string(),
            environment: Vec::new(),
            volumes: vec!["./nginx.conf:/etc/nginx/nginx.conf".to_string()],
        },
    }
}

/// `docker-compose.yml` for the requested services.
///
/// Blocks follow [`ComposeService::CANONICAL_ORDER`]; `depends_on` lists only services present
/// in the file; the named database volume is declared only when the database is requested.
pub fn render_compose(requested: &[ComposeService]) -> String {
    let included: Vec<ComposeService> = ComposeService::CANONICAL_ORDER
        .into_iter()
        .filter(|service| requested.contains(service))
        .collect();

    let mut out = String::from("version: '3.8'\n\nservices:\n");
    for service in &included {
        let key = service.service_key();
        let block = block_for(*service);

        out.push_str(&format!("  {key}:\n"));
        if let Some(image) = block.image {
            out.push_str(&format!("    image: {image}\n"));
        }
        if let Some(context) = block.build_context {
            out.push_str(&format!(
                "    build:\n      context: {context}\n      dockerfile: Dockerfile\n"
            ));
        }
        out.push_str(&format!("    container_name: {key}\n"));
        out.push_str("    restart: unless-stopped\n");
        out.push_str(&format!("    ports:\n      - \"{}\"\n", block.ports));
        push_list(&mut out, "environment", &block.environment);
        push_list(&mut out, "volumes", &block.volumes);
        let deps: Vec<String> = service
            .depends_on()
            .iter()
            .filter(|dep| included.contains(*dep))
            .map(|dep| dep.service_key().to_string())
            .collect();
        push_list(&mut out, "depends_on", &deps);
        out.push_str(&format!("    networks:\n      - {NETWORK}\n\n"));
    }

    out.push_str(&format!("networks:\n  {NETWORK}:\n    driver: bridge\n"));
    if included.contains(&ComposeService::Database) {
        out.push_str(&format!("\nvolumes:\n  {DB_VOLUME}:\n"));
    }
    out
}

fn push_list(out: &mut String, key: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("    {key}:\n"));
    for item in items {
        out.push_str(&format!("      - {item}\n"));
    }
}

pub fn render_dockerignore() -> String {
    DOCKERIGNORE_PATTERNS.join("\n")
}
