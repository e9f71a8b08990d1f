//! Typed tool requests. Field names follow the wire (camelCase); optional fields stay `Option`
//! so defaults are applied in one place by each generator.

pub(crate) mod create_api_route;
pub(crate) mod create_model;
pub(crate) mod create_project;
pub(crate) mod docker;
pub(crate) mod generate_component;
pub(crate) mod package_scripts;
pub(crate) mod project_status;
pub(crate) mod setup_env;
