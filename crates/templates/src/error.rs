use thiserror::Error;

pub type Result<T> = std::result::Result<T, TemplateError>;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("{0} must not be empty")]
    EmptyName(&'static str),

    #[error("At least one HTTP method is required")]
    NoMethods,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
