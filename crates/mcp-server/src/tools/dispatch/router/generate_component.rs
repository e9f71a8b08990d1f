use super::super::error::Result;
use crate::tools::schemas::generate_component::GenerateComponentRequest;
use devhelper_templates::{render_component, ComponentSpec};

pub(in crate::tools::dispatch) fn generate_component(
    request: GenerateComponentRequest,
) -> Result<String> {
    let spec = ComponentSpec {
        name: request.component_name,
        kind: request.component_type.unwrap_or_default(),
        with_styles: request.with_styles.unwrap_or(false),
    };
    let rendered = render_component(&spec)?;
    Ok(rendered.describe(spec.name.trim()))
}
