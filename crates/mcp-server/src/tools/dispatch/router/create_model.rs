use super::super::error::Result;
use crate::tools::schemas::create_model::CreateModelRequest;
use devhelper_templates::render_model;

pub(in crate::tools::dispatch) fn create_model(request: CreateModelRequest) -> Result<String> {
    let code = render_model(&request.model_name, &request.fields)?;
    Ok(format!(
        "Generated Mongoose model for {}:\n\n{code}",
        request.model_name.trim()
    ))
}
