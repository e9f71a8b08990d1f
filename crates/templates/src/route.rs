use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::{Result, TemplateError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Express router method name.
    pub fn router_fn(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

/// Express router source with one placeholder handler per method, in the order given.
///
/// Repeated methods are emitted once, at their first position.
pub fn render_route(route_name: &str, methods: &[HttpMethod], with_auth: bool) -> Result<String> {
    let route_name = route_name.trim();
    if route_name.is_empty() {
        return Err(TemplateError::EmptyName("routeName"));
    }

    let mut seen: Vec<HttpMethod> = Vec::with_capacity(methods.len());
    for method in methods {
        if !seen.contains(method) {
            seen.push(*method);
        }
    }
    if seen.is_empty() {
        return Err(TemplateError::NoMethods);
    }

    let guard = if with_auth { ", auth" } else { "" };
    let handlers: Vec<String> = seen
        .iter()
        .map(|method| {
            let verb = method.as_str();
            format!(
                "// {verb} {route_name}\n\
                 router.{fn_name}('/'{guard}, async (req, res) => {{\n  \
                 try {{\n    \
                 // TODO: Implement {verb} logic for {route_name}\n    \
                 res.json({{ message: '{verb} {route_name}' }});\n  \
                 }} catch (error) {{\n    \
                 res.status(500).json({{ error: error.message }});\n  \
                 }}\n\
                 }});",
                fn_name = method.router_fn(),
            )
        })
        .collect();

    let mut out = String::new();
    out.push_str("const express = require('express');\n");
    out.push_str("const router = express.Router();\n");
    if with_auth {
        out.push_str("const auth = require('../middleware/auth');\n");
    }
    out.push('\n');
    out.push_str(&handlers.join("\n\n"));
    out.push_str("\n\nmodule.exports = router;");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn handlers_follow_input_order() {
        let code = render_route("users", &[HttpMethod::Put, HttpMethod::Get], false).unwrap();
        let put = code.find("router.put(").unwrap();
        let get = code.find("router.get(").unwrap();
        assert!(put < get, "PUT block must precede GET block:\n{code}");
        assert!(!code.contains("require('../middleware/auth')"));
    }

    #[test]
    fn single_handler_layout() {
        let code = render_route("items", &[HttpMethod::Delete], false).unwrap();
        assert_eq!(
            code,
            "const express = require('express');\n\
             const router = express.Router();\n\
             \n\
             // DELETE items\n\
             router.delete('/', async (req, res) => {\n  \
             try {\n    \
             // TODO: Implement DELETE logic for items\n    \
             res.json({ message: 'DELETE items' });\n  \
             } catch (error) {\n    \
             res.status(500).json({ error: error.message });\n  \
             }\n\
             });\n\
             \n\
             module.exports = router;"
        );
    }

    #[test]
    fn auth_adds_import_and_guard() {
        let code = render_route("orders", &[HttpMethod::Post], true).unwrap();
        assert!(code.contains("const auth = require('../middleware/auth');\n"));
        assert!(code.contains("router.post('/', auth, async (req, res) => {"));
    }

    #[test]
    fn duplicate_methods_collapse() {
        let code = render_route(
            "x",
            &[HttpMethod::Get, HttpMethod::Post, HttpMethod::Get],
            false,
        )
        .unwrap();
        assert_eq!(code.matches("router.get(").count(), 1);
        assert!(code.find("router.get(").unwrap() < code.find("router.post(").unwrap());
    }

    #[test]
    fn empty_methods_is_an_error() {
        assert!(matches!(
            render_route("x", &[], false),
            Err(TemplateError::NoMethods)
        ));
    }
}
