use devhelper_templates::ComponentKind;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateComponentRequest {
    #[schemars(description = "Name of the React component")]
    pub component_name: String,

    /// "functional" (default) or "class"
    #[schemars(description = "Type of component to generate")]
    pub component_type: Option<ComponentKind>,

    #[schemars(description = "Include CSS module file")]
    pub with_styles: Option<bool>,
}
