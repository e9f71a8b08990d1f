//! Dev Helper MCP tool surface: catalog, typed request schemas, and dispatch.

pub(crate) mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::{DevHelperService, DispatchError, Dispatcher};

pub(crate) use catalog::tool_inventory_json;
