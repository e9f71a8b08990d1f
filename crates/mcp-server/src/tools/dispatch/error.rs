use crate::fs_gateway::GatewayError;
use devhelper_templates::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {detail}")]
    InvalidArguments { tool: &'static str, detail: String },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Cannot read project at {}: {}", .path.display(), .source.source)]
    UnreadableProject {
        path: PathBuf,
        #[source]
        source: GatewayError,
    },
}

impl DispatchError {
    pub(crate) fn invalid(tool: &'static str, detail: impl ToString) -> Self {
        Self::InvalidArguments {
            tool,
            detail: detail.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
