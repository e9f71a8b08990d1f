use devhelper_templates::HttpMethod;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiRouteRequest {
    #[schemars(description = "Name of the API route")]
    pub route_name: String,

    /// Handlers are generated in this order.
    #[schemars(description = "HTTP methods to include")]
    pub methods: Vec<HttpMethod>,

    #[schemars(description = "Include authentication middleware")]
    pub with_auth: Option<bool>,
}
