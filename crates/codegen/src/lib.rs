pub mod json_input;
pub mod scaffold;
pub mod schema;
pub mod templates;
pub mod writer;

pub use json_input::{parse_sample, render_schema, schema_from_sample};
pub use scaffold::*;
pub use schema::{infer, FormatTag, SchemaDescriptor, TypeTag};
pub use templates::EndpointTemplate;
pub use writer::*;

use api_cli_core::{CliConfig, CoreError};

/// Entry point used by the CLI: scaffolds endpoints under the configured
/// routes directory.
pub struct CodeGenerator {
    scaffolder: EndpointScaffolder,
}

impl CodeGenerator {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            scaffolder: EndpointScaffolder::new(config.routes_path()),
        }
    }

    pub fn create_endpoint(
        &self,
        request: &EndpointRequest,
        interaction: &mut dyn ScaffoldInteraction,
    ) -> Result<ScaffoldOutcome, CoreError> {
        tracing::info!(
            route = %request.route,
            method = %request.method,
            dir = %self.scaffolder.endpoint_dir(&request.route).display(),
            "scaffolding endpoint"
        );
        self.scaffolder.scaffold(request, interaction)
    }
}
