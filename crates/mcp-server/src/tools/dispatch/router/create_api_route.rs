use super::super::error::Result;
use crate::tools::schemas::create_api_route::CreateApiRouteRequest;
use devhelper_templates::render_route;

pub(in crate::tools::dispatch) fn create_api_route(request: CreateApiRouteRequest) -> Result<String> {
    let code = render_route(
        &request.route_name,
        &request.methods,
        request.with_auth.unwrap_or(false),
    )?;
    Ok(format!(
        "Generated API route for {}:\n\n{code}",
        request.route_name.trim()
    ))
}
