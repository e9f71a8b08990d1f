// Per-tool generators called by the dispatcher once arguments are validated and typed.

pub(super) mod create_api_route;
pub(super) mod create_model;
pub(super) mod create_project;
pub(super) mod docker;
pub(super) mod generate_component;
pub(super) mod package_scripts;
pub(super) mod project_status;
pub(super) mod setup_env;
