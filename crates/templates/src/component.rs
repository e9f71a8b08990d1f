use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::{Result, TemplateError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Functional,
    Class,
}

#[derive(Debug, Clone)]
pub struct ComponentSpec {
    pub name: String,
    pub kind: ComponentKind,
    pub with_styles: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent {
    pub file_name: String,
    pub source: String,
    /// `(file name, contents)` of the CSS module, when styles were requested.
    pub stylesheet: Option<(String, String)>,
}

impl RenderedComponent {
    /// Human-readable summary returned to the caller instead of writing files.
    pub fn describe(&self, name: &str) -> String {
        let mut out = format!("Generated {name} component:\n\n{}", self.source);
        if let Some((file, css)) = self.stylesheet.as_ref() {
            out.push_str(&format!("\n\nCSS Module ({file}):\n\n{css}"));
        }
        out
    }
}

const STYLESHEET: &str = ".container {\n  padding: 20px;\n  text-align: center;\n}";

pub fn render_component(spec: &ComponentSpec) -> Result<RenderedComponent> {
    let name = spec.name.trim();
    if name.is_empty() {
        return Err(TemplateError::EmptyName("componentName"));
    }

    let css_file = format!("{name}.module.css");
    let class_attr = if spec.with_styles {
        " className={styles.container}"
    } else {
        ""
    };

    let mut lines: Vec<String> = Vec::new();
    match spec.kind {
        ComponentKind::Functional => lines.push("import React from 'react';".to_string()),
        ComponentKind::Class => lines.push("import React, { Component } from 'react';".to_string()),
    }
    if spec.with_styles {
        lines.push(format!("import styles from './{css_file}';"));
    }
    lines.push(String::new());

    match spec.kind {
        ComponentKind::Functional => {
            lines.push(format!("const {name} = () => {{"));
            lines.push("  return (".to_string());
            lines.push(format!("    <div{class_attr}>"));
            lines.push(format!("      <h1>{name} Component</h1>"));
            lines.push("    </div>".to_string());
            lines.push("  );".to_string());
            lines.push("};".to_string());
        }
        ComponentKind::Class => {
            lines.push(format!("class {name} extends Component {{"));
            lines.push("  render() {".to_string());
            lines.push("    return (".to_string());
            lines.push(format!("      <div{class_attr}>"));
            lines.push(format!("        <h1>{name} Component</h1>"));
            lines.push("      </div>".to_string());
            lines.push("    );".to_string());
            lines.push("  }".to_string());
            lines.push("}".to_string());
        }
    }
    lines.push(String::new());
    lines.push(format!("export default {name};"));

    Ok(RenderedComponent {
        file_name: format!("{name}.js"),
        source: lines.join("\n"),
        stylesheet: spec
            .with_styles
            .then(|| (css_file, STYLESHEET.to_string())),
    })
}
