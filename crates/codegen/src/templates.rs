use api_cli_core::{CoreError, HttpMethod, Route};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("valid placeholder regex"));

/// Substitutes `{{key}}` placeholders in one pass, so substituted values are
/// never rescanned. Unknown keys are an error.
pub fn render_template(template: &str, context: &HashMap<&str, String>) -> Result<String, CoreError> {
    let mut missing = None;
    let rendered = PLACEHOLDER_RE.replace_all(template, |caps: &Captures| {
        let key = &caps[1];
        match context.get(key) {
            Some(value) => value.clone(),
            None => {
                missing.get_or_insert_with(|| key.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(key) => Err(CoreError::validation(format!(
            "Template placeholder '{}' has no value",
            key
        ))),
        None => Ok(rendered.into_owned()),
    }
}

pub const SCHEMA_STUB: &str = "export default {}";

pub const MISSING_RESPONSE_IMPORT: &str = "// Please link to corresponding response schema (ex: import responseSchema from './response.schema.js';)";

pub static ENDPOINT_TEMPLATE: &str = r#"{{response_import}}

/**  @type {import('fastify').FastifyPluginAsync} */
export default async function (fastify) {
  fastify.{{method}}('{{route}}', {
    schema: {
      params: {
        {{params}}
      },
      response: {
        {{response}}
      }
    },
    config: {
      permissions: [@]
    },
    handler: @Handler
  })
}


/** @type {import('fastify').RouteHandlerMethod} */
async function @Handler(request, reply) {
  throw {status: 501, message: 'Not implemented'}
}"#;

/// Inputs for one endpoint handler file
#[derive(Debug, Clone)]
pub struct EndpointTemplate<'a> {
    pub method: HttpMethod,
    pub route: &'a Route,
    /// File name of the response schema next to the handler, if any
    pub response_schema: Option<String>,
}

impl<'a> EndpointTemplate<'a> {
    pub fn new(method: HttpMethod, route: &'a Route) -> Self {
        Self {
            method,
            route,
            response_schema: None,
        }
    }

    pub fn with_response_schema(mut self, file_name: impl Into<String>) -> Self {
        self.response_schema = Some(file_name.into());
        self
    }

    pub fn render(&self) -> Result<String, CoreError> {
        let (response_import, response) = match &self.response_schema {
            Some(file_name) => (
                format!("import responseSchema from './{}';", file_name),
                "200: responseSchema".to_string(),
            ),
            None => (MISSING_RESPONSE_IMPORT.to_string(), "200: {}".to_string()),
        };

        let mut context = HashMap::new();
        context.insert("response_import", response_import);
        context.insert("method", self.method.as_str().to_string());
        context.insert("route", self.route.to_string());
        context.insert("params", params_schema(self.route));
        context.insert("response", response);

        render_template(ENDPOINT_TEMPLATE, &context)
    }
}

/// Fastify `params` entries for each `:param` in the route.
/// Names ending in `Id` get the `id` format.
pub fn params_schema(route: &Route) -> String {
    route
        .params()
        .into_iter()
        .map(|param| {
            if param.ends_with("Id") {
                format!(
                    "{}: {{\n          type: 'string',\n          format: 'id'\n        }}",
                    param
                )
            } else {
                format!("{}:  {{\n          type: 'string'\n        }}", param)
            }
        })
        .collect::<Vec<_>>()
        .join(",\n")
}
