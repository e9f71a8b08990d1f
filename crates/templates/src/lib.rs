//! # Dev Helper Templates
//!
//! Pure renderers that turn typed parameters into artifact text. Nothing in this crate touches
//! the filesystem; callers decide where (and whether) the output is written.
//!
//! ## Artifacts
//!
//! ```text
//! project   ──> package.json skeleton, script merging
//! component ──> React component (functional | class) + optional CSS module
//! route     ──> Express router with one handler per HTTP method
//! model     ──> Mongoose schema/model
//! tree      ──> iconified project listing
//! compose   ──> docker-compose.yml + .dockerignore
//! dockerfile──> per-service Dockerfile
//! env       ──> .env.<type> + .env.example
//! ```

mod component;
mod compose;
mod dockerfile;
mod env;
mod error;
mod model;
mod project;
mod route;
mod tree;

pub use component::{render_component, ComponentKind, ComponentSpec, RenderedComponent};
pub use compose::{render_compose, render_dockerignore, ComposeService, DOCKERIGNORE_PATTERNS};
pub use dockerfile::{render_dockerfile, DockerService, DEFAULT_NODE_VERSION};
pub use env::{env_file_name, render_env_file, strip_env_values, EnvType, ENV_EXAMPLE_FILE};
pub use error::{Result, TemplateError};
pub use model::{render_model, ModelField};
pub use project::{
    default_manifest, default_scripts, merge_package_scripts, project_manifest, to_pretty_json,
};
pub use route::{render_route, HttpMethod};
pub use tree::render_tree;
